//! Platform probe surface: device profile, network hints, quality tiers
//!
//! The browser build of the site probes `window`/`navigator` at call time.
//! Here that probing sits behind [`RuntimeProbe`] so the classification
//! logic stays pure and a fixed fake can stand in during tests or when no
//! browser environment exists at all.

pub mod device;
pub mod network;

pub use device::{classify_quality, is_low_powered, is_older_browser, DeviceProfile, QualityTier};
pub use network::{EffectiveType, NetworkHints};

/// Provider of runtime capability signals.
///
/// Both accessors return `None` when the signal is unavailable, which is the
/// normal case outside a browser. Classification treats `None` profiles
/// conservatively rather than failing.
pub trait RuntimeProbe: Send + Sync {
    fn profile(&self) -> Option<DeviceProfile>;
    fn network_hints(&self) -> Option<NetworkHints>;

    /// Quality tier derived from whatever this probe can report
    fn quality(&self) -> QualityTier {
        classify_quality(self.profile().as_ref(), self.network_hints().as_ref())
    }

    /// Whether the runtime looks like an older browser (false when unknown)
    fn is_older_browser(&self) -> bool {
        self.profile().as_ref().map(is_older_browser).unwrap_or(false)
    }
}

/// Probe for contexts with no browser at all (server-side rendering, tests,
/// the CLI). Reports nothing and therefore classifies conservatively.
#[derive(Debug, Default)]
pub struct HeadlessProbe;

impl HeadlessProbe {
    pub fn new() -> Self {
        HeadlessProbe
    }
}

impl RuntimeProbe for HeadlessProbe {
    fn profile(&self) -> Option<DeviceProfile> {
        None
    }

    fn network_hints(&self) -> Option<NetworkHints> {
        None
    }
}

/// Probe with fixed, settable signals, for deterministic tests
pub struct FixedProbe {
    profile: std::sync::Mutex<Option<DeviceProfile>>,
    hints: std::sync::Mutex<Option<NetworkHints>>,
}

impl FixedProbe {
    pub fn new(profile: DeviceProfile) -> Self {
        FixedProbe {
            profile: std::sync::Mutex::new(Some(profile)),
            hints: std::sync::Mutex::new(None),
        }
    }

    pub fn with_hints(profile: DeviceProfile, hints: NetworkHints) -> Self {
        FixedProbe {
            profile: std::sync::Mutex::new(Some(profile)),
            hints: std::sync::Mutex::new(Some(hints)),
        }
    }

    pub fn set_profile(&self, profile: Option<DeviceProfile>) {
        let mut g = self.profile.lock().unwrap();
        *g = profile;
    }

    pub fn set_hints(&self, hints: Option<NetworkHints>) {
        let mut g = self.hints.lock().unwrap();
        *g = hints;
    }
}

impl RuntimeProbe for FixedProbe {
    fn profile(&self) -> Option<DeviceProfile> {
        self.profile.lock().unwrap().clone()
    }

    fn network_hints(&self) -> Option<NetworkHints> {
        self.hints.lock().unwrap().clone()
    }
}
