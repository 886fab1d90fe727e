//! Host device facts.
//!
//! The engine receives a [`DeviceInfo`] once per process and never re-derives
//! it. [`DeviceInfo::from_user_agent`] is a convenience for hosts that only
//! have a user-agent string at hand.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tags::Platform;

static ANDROID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)android").expect("valid regex"));
static IOS: Lazy<Regex> = Lazy::new(|| Regex::new(r"iPad|iPhone|iPod").expect("valid regex"));
static MOBI: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Mobi").expect("valid regex"));

/// Read-only platform facts supplied by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub platform: Platform,
    #[serde(rename = "isIOS")]
    pub is_ios: bool,
    pub is_android: bool,
}

impl DeviceInfo {
    /// A desktop browser with no mobile OS.
    pub fn web() -> Self {
        Self {
            platform: Platform::Web,
            is_ios: false,
            is_android: false,
        }
    }

    /// A mobile device; `is_ios` selects App Store links where available.
    pub fn mobile(is_ios: bool) -> Self {
        Self {
            platform: Platform::Mobile,
            is_ios,
            is_android: !is_ios,
        }
    }

    pub fn from_user_agent(user_agent: &str) -> Self {
        let is_android = ANDROID.is_match(user_agent);
        let is_ios = IOS.is_match(user_agent);
        let is_mobile = is_android || is_ios || MOBI.is_match(user_agent);

        Self {
            platform: if is_mobile {
                Platform::Mobile
            } else {
                Platform::Web
            },
            is_ios,
            is_android,
        }
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self::web()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iphone_user_agent() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        let info = DeviceInfo::from_user_agent(ua);
        assert_eq!(info.platform, Platform::Mobile);
        assert!(info.is_ios);
        assert!(!info.is_android);
    }

    #[test]
    fn test_android_user_agent() {
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36";
        let info = DeviceInfo::from_user_agent(ua);
        assert_eq!(info.platform, Platform::Mobile);
        assert!(info.is_android);
        assert!(!info.is_ios);
    }

    #[test]
    fn test_desktop_user_agent() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
        assert_eq!(DeviceInfo::from_user_agent(ua), DeviceInfo::web());
    }

    #[test]
    fn test_generic_mobi_marker() {
        let info = DeviceInfo::from_user_agent("SomeBrowser/1.0 Mobile");
        assert_eq!(info.platform, Platform::Mobile);
        assert!(!info.is_ios && !info.is_android);
    }
}
