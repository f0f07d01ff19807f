//! Storefront-wide settings
use serde::{Deserialize, Serialize};

const DEFAULT_STOREFRONT_DATA: &str = include_str!("../data/storefront.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_store_name")]
    pub store_name: String,
    /// Mock cart size shown on the header badge.
    #[serde(default = "default_cart_item_count")]
    pub cart_item_count: u32,
    /// Scroll offset past which the header switches to its scrolled style.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f64,
    /// Viewport width at which navigation is always shown.
    #[serde(default = "default_wide_breakpoint")]
    pub wide_breakpoint_px: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            cart_item_count: default_cart_item_count(),
            scroll_threshold_px: default_scroll_threshold(),
            wide_breakpoint_px: default_wide_breakpoint(),
        }
    }
}

impl StorefrontConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_STOREFRONT_DATA).unwrap_or_else(|err| {
            log::error!("Failed to parse storefront config: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    /// Parse settings, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_store_name() -> String {
    "TechStore".to_string()
}

const fn default_cart_item_count() -> u32 {
    3
}

const fn default_scroll_threshold() -> f64 {
    10.0
}

const fn default_wide_breakpoint() -> f64 {
    768.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_config_matches_defaults() {
        assert_eq!(StorefrontConfig::default_config(), StorefrontConfig::default());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let cfg = StorefrontConfig::from_json(r#"{"cart_item_count": 0}"#).unwrap();
        assert_eq!(cfg.cart_item_count, 0);
        assert_eq!(cfg.store_name, "TechStore");
        assert!((cfg.scroll_threshold_px - 10.0).abs() < f64::EPSILON);
    }
}
