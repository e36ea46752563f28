//! Device classification: older-browser and low-power detection, quality tiers

use std::sync::OnceLock;

use regex::Regex;

use super::network::{EffectiveType, NetworkHints};

/// Capability snapshot of the runtime browser/device.
///
/// Field values mirror what the live site probes: the user-agent string,
/// the optional `navigator.deviceMemory` signal, and presence checks for
/// the baseline features the site depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    pub user_agent: String,
    /// Reported device memory in GB; the signal is optional and often absent
    pub device_memory_gb: Option<f64>,
    pub has_intersection_observer: bool,
    pub has_promise: bool,
    pub has_local_storage: bool,
}

impl DeviceProfile {
    /// Profile of a fully capable modern browser with the given user agent
    pub fn modern(user_agent: &str) -> Self {
        DeviceProfile {
            user_agent: user_agent.to_string(),
            device_memory_gb: None,
            has_intersection_observer: true,
            has_promise: true,
            has_local_storage: true,
        }
    }
}

/// Coarse image-quality bucket used to pick variants for constrained
/// devices and networks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityTier::Low => write!(f, "low"),
            QualityTier::Medium => write!(f, "medium"),
            QualityTier::High => write!(f, "high"),
        }
    }
}

// Android 6 and below
fn legacy_android_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Android\s*[0-6]\.").expect("static pattern"))
}

/// Whether the profile looks like an older browser.
///
/// Old Android (6 and below) counts, as does the absence of any one of the
/// baseline features the site assumes everywhere else.
pub fn is_older_browser(profile: &DeviceProfile) -> bool {
    let is_old_android = legacy_android_re().is_match(&profile.user_agent);

    is_old_android
        || !profile.has_intersection_observer
        || !profile.has_promise
        || !profile.has_local_storage
}

/// Whether the device is likely low-powered.
///
/// The memory signal is optional; when absent only the user agent decides.
pub fn is_low_powered(profile: &DeviceProfile) -> bool {
    let is_old_android = legacy_android_re().is_match(&profile.user_agent);
    let has_low_memory = matches!(profile.device_memory_gb, Some(mem) if mem < 2.0);

    is_old_android || has_low_memory
}

/// Derive the image quality tier from the available signals.
///
/// Pure function: identical inputs always give the identical tier.
/// With no profile at all (no browser environment) the answer is the
/// conservative `Medium`. Older or low-powered devices get `Low` before the
/// network is even consulted. Network hints can then degrade the tier;
/// absent hints mean `High`.
pub fn classify_quality(
    profile: Option<&DeviceProfile>,
    hints: Option<&NetworkHints>,
) -> QualityTier {
    let Some(profile) = profile else {
        return QualityTier::Medium;
    };

    if is_older_browser(profile) || is_low_powered(profile) {
        return QualityTier::Low;
    }

    if let Some(hints) = hints {
        if hints.save_data || matches!(hints.effective_type, EffectiveType::Slow2g | EffectiveType::TwoG) {
            return QualityTier::Low;
        }
        if hints.effective_type == EffectiveType::ThreeG {
            return QualityTier::Medium;
        }
    }

    QualityTier::High
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODERN_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/115.0";
    const OLD_ANDROID_UA: &str =
        "Mozilla/5.0 (Linux; Android 5.1; Nexus 5 Build/LMY48B) AppleWebKit/537.36";

    #[test]
    fn old_android_is_older_and_low_powered() {
        let p = DeviceProfile::modern(OLD_ANDROID_UA);
        assert!(is_older_browser(&p));
        assert!(is_low_powered(&p));
    }

    #[test]
    fn modern_android_is_not_flagged() {
        let p = DeviceProfile::modern("Mozilla/5.0 (Linux; Android 13; Pixel 7)");
        assert!(!is_older_browser(&p));
        assert!(!is_low_powered(&p));
    }

    #[test]
    fn missing_any_baseline_feature_flags_older() {
        for missing in 0..3 {
            let mut p = DeviceProfile::modern(MODERN_UA);
            match missing {
                0 => p.has_intersection_observer = false,
                1 => p.has_promise = false,
                _ => p.has_local_storage = false,
            }
            assert!(is_older_browser(&p), "feature {} should flag older", missing);
        }
    }

    #[test]
    fn low_memory_flags_low_powered() {
        let mut p = DeviceProfile::modern(MODERN_UA);
        p.device_memory_gb = Some(1.0);
        assert!(is_low_powered(&p));
        assert!(!is_older_browser(&p));

        p.device_memory_gb = Some(4.0);
        assert!(!is_low_powered(&p));
    }

    #[test]
    fn classification_without_profile_is_medium() {
        assert_eq!(classify_quality(None, None), QualityTier::Medium);
    }

    #[test]
    fn older_browser_classifies_low_regardless_of_network() {
        let p = DeviceProfile::modern(OLD_ANDROID_UA);
        let fast = NetworkHints {
            save_data: false,
            effective_type: EffectiveType::FourG,
        };
        assert_eq!(classify_quality(Some(&p), Some(&fast)), QualityTier::Low);
    }

    #[test]
    fn network_hints_degrade_tier() {
        let p = DeviceProfile::modern(MODERN_UA);

        let save_data = NetworkHints {
            save_data: true,
            effective_type: EffectiveType::FourG,
        };
        assert_eq!(classify_quality(Some(&p), Some(&save_data)), QualityTier::Low);

        let two_g = NetworkHints {
            save_data: false,
            effective_type: EffectiveType::TwoG,
        };
        assert_eq!(classify_quality(Some(&p), Some(&two_g)), QualityTier::Low);

        let three_g = NetworkHints {
            save_data: false,
            effective_type: EffectiveType::ThreeG,
        };
        assert_eq!(classify_quality(Some(&p), Some(&three_g)), QualityTier::Medium);
    }

    #[test]
    fn absent_hints_default_high() {
        let p = DeviceProfile::modern(MODERN_UA);
        assert_eq!(classify_quality(Some(&p), None), QualityTier::High);
    }

    #[test]
    fn classification_is_deterministic() {
        let p = DeviceProfile::modern(MODERN_UA);
        let hints = NetworkHints {
            save_data: false,
            effective_type: EffectiveType::ThreeG,
        };
        let first = classify_quality(Some(&p), Some(&hints));
        for _ in 0..10 {
            assert_eq!(classify_quality(Some(&p), Some(&hints)), first);
        }
    }
}
