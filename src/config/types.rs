// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

const DEFAULT_API_KEY_ENV: &str = "PLACEPICK_GOOGLE_MAPS_API_KEY";
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
const DEFAULT_TIMEOUT_MS: u64 = 5000;
const DEFAULT_MAX_VISIBLE: usize = 5;
const DEFAULT_TITLE: &str = " Address ";

/// Places provider configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlacesConfig {
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub base_url: String,
    /// Language code for results (e.g. "en", "de")
    pub language: Option<String>,
    /// Restrict results to a country (ISO 3166-1 alpha-2)
    pub region: Option<String>,
    pub timeout_ms: u64,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        PlacesConfig {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: None,
            region: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl PlacesConfig {
    /// Read the API key from the configured environment variable
    ///
    /// Blank values count as missing.
    pub fn read_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }
}

/// Dropdown and input field configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Maximum number of suggestion rows shown at once
    pub max_visible: usize,
    /// Title drawn on the input field border
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            max_visible: DEFAULT_MAX_VISIBLE,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub places: PlacesConfig,
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.places.api_key_env, "PLACEPICK_GOOGLE_MAPS_API_KEY");
        assert_eq!(config.places.timeout_ms, 5000);
        assert_eq!(config.ui.max_visible, 5);
    }

    #[test]
    fn test_full_places_section() {
        let config: Config = toml::from_str(
            r#"
[places]
api_key_env = "MY_KEY"
base_url = "http://localhost:9999/api"
language = "de"
region = "ch"
timeout_ms = 750
"#,
        )
        .unwrap();

        assert_eq!(config.places.api_key_env, "MY_KEY");
        assert_eq!(config.places.base_url, "http://localhost:9999/api");
        assert_eq!(config.places.language.as_deref(), Some("de"));
        assert_eq!(config.places.region.as_deref(), Some("ch"));
        assert_eq!(config.places.timeout(), Duration::from_millis(750));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let config = PlacesConfig {
            timeout_ms: 0,
            ..PlacesConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_millis(1));
    }

    #[test]
    fn test_unset_api_key_env_reads_none() {
        let config = PlacesConfig {
            api_key_env: "PLACEPICK_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..PlacesConfig::default()
        };
        assert_eq!(config.read_api_key(), None);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[ui]\nmax_visible = \"many\"\n");
        assert!(config.is_err());
    }

    // For any subset of fields present in the [ui] section, parsing succeeds and
    // absent fields fall back to their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_ui_fields_use_defaults(
            include_max_visible in prop::bool::ANY,
            include_title in prop::bool::ANY,
            max_visible in 1usize..20,
        ) {
            let mut toml_content = String::from("[ui]\n");
            if include_max_visible {
                toml_content.push_str(&format!("max_visible = {}\n", max_visible));
            }
            if include_title {
                toml_content.push_str("title = \" Where to? \"\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let config = config.unwrap();

            let expected_max = if include_max_visible { max_visible } else { 5 };
            prop_assert_eq!(config.ui.max_visible, expected_max);

            let expected_title = if include_title { " Where to? " } else { " Address " };
            prop_assert_eq!(config.ui.title.as_str(), expected_title);
            prop_assert_eq!(config.places, PlacesConfig::default());
        }
    }
}
