use serde::Deserialize;
use std::env;
use crate::error::{Result, ServiceError};
use crate::registry::REGISTRY;

pub const DEFAULT_COUNTRY_ENV: &str = "PHONE_INPUT_DEFAULT_COUNTRY";
pub const FALLBACK_ISO_CODE: &str = "US";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Country used when neither the stored value nor the hint resolves one.
    pub default_iso_code: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            default_iso_code: FALLBACK_ISO_CODE.to_string(),
        }
    }
}

impl FormatterConfig {
    pub fn with_default_country(iso_code: impl Into<String>) -> Self {
        Self {
            default_iso_code: iso_code.into().trim().to_ascii_uppercase(),
        }
    }

    /// Reads `PHONE_INPUT_DEFAULT_COUNTRY`, falling back to `US` when unset or blank.
    pub fn from_env() -> Self {
        match env::var(DEFAULT_COUNTRY_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::with_default_country(value),
            _ => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if REGISTRY.lookup_by_iso_code(&self.default_iso_code).is_none() {
            return Err(ServiceError::Config(format!(
                "default country '{}' is not in the dialing table",
                self.default_iso_code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.default_iso_code, "US");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_normalizes_country() {
        let config = FormatterConfig::with_default_country(" gb ");
        assert_eq!(config.default_iso_code, "GB");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_country() {
        let config = FormatterConfig::with_default_country("ZZ");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ZZ"), "Unexpected message: {}", err);
    }

    // only test touching this variable, so no other test races on it
    #[test]
    fn test_from_env() {
        env::set_var(DEFAULT_COUNTRY_ENV, "hk");
        assert_eq!(FormatterConfig::from_env().default_iso_code, "HK");

        env::set_var(DEFAULT_COUNTRY_ENV, "   ");
        assert_eq!(FormatterConfig::from_env(), FormatterConfig::default());

        env::remove_var(DEFAULT_COUNTRY_ENV);
        assert_eq!(FormatterConfig::from_env(), FormatterConfig::default());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let config: FormatterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FormatterConfig::default());

        let config: FormatterConfig = serde_json::from_str(r#"{"default_iso_code": "HK"}"#).unwrap();
        assert_eq!(config.default_iso_code, "HK");
    }
}
