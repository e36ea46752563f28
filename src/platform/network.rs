//! Network-information hints, as exposed by the connection API when present

/// Effective connection type reported by the network-information API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveType {
    Slow2g,
    TwoG,
    ThreeG,
    FourG,
}

impl EffectiveType {
    /// Parse the wire strings the connection API uses ("slow-2g", "2g", ...)
    ///
    /// Unknown strings read as `FourG`: an unrecognized faster-than-4g label
    /// must not degrade quality.
    pub fn parse(s: &str) -> EffectiveType {
        match s {
            "slow-2g" => EffectiveType::Slow2g,
            "2g" => EffectiveType::TwoG,
            "3g" => EffectiveType::ThreeG,
            _ => EffectiveType::FourG,
        }
    }
}

/// Connection hints; the whole struct is optional at the probe level since
/// many browsers expose no connection API at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkHints {
    /// User has requested reduced data usage
    pub save_data: bool,
    pub effective_type: EffectiveType,
}

impl NetworkHints {
    pub fn fast() -> Self {
        NetworkHints {
            save_data: false,
            effective_type: EffectiveType::FourG,
        }
    }
}
