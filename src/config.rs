use anyhow::{bail, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Keep the internal cause in rendered response bodies
    pub expose_internal: bool,
    /// Log 4xx responses in the middleware (5xx are always logged)
    pub log_client_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expose_internal: false,
            log_client_errors: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Config {
            expose_internal: parse_flag(
                "HTTPE_EXPOSE_INTERNAL",
                lookup("HTTPE_EXPOSE_INTERNAL"),
                defaults.expose_internal,
            )?,
            log_client_errors: parse_flag(
                "HTTPE_LOG_CLIENT_ERRORS",
                lookup("HTTPE_LOG_CLIENT_ERRORS"),
                defaults.log_client_errors,
            )?,
        })
    }
}

/// Accepts true/false, 1/0, yes/no and on/off, case-insensitively
fn parse_flag(name: &str, value: Option<String>, default: bool) -> Result<bool> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("{name} must be a boolean (true/false, 1/0, yes/no, on/off), got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_hides_internal() {
        let config = Config::default();
        assert!(!config.expose_internal);
        assert!(config.log_client_errors);
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("HTTPE_EXPOSE_INTERNAL", "true"),
            ("HTTPE_LOG_CLIENT_ERRORS", "false"),
        ]))
        .unwrap();
        assert!(config.expose_internal);
        assert!(!config.log_client_errors);
    }

    #[test]
    fn test_numeric_and_word_flags() {
        let config = Config::from_lookup(lookup_from(&[
            ("HTTPE_EXPOSE_INTERNAL", "1"),
            ("HTTPE_LOG_CLIENT_ERRORS", "0"),
        ]))
        .unwrap();
        assert!(config.expose_internal);
        assert!(!config.log_client_errors);

        let config = Config::from_lookup(lookup_from(&[
            ("HTTPE_EXPOSE_INTERNAL", " Yes "),
            ("HTTPE_LOG_CLIENT_ERRORS", "OFF"),
        ]))
        .unwrap();
        assert!(config.expose_internal);
        assert!(!config.log_client_errors);
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("HTTPE_LOG_CLIENT_ERRORS", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("HTTPE_LOG_CLIENT_ERRORS"));
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // The only test touching these variables
        env::set_var("HTTPE_EXPOSE_INTERNAL", "true");
        env::set_var("HTTPE_LOG_CLIENT_ERRORS", "1");
        let config = Config::from_env().unwrap();
        assert!(config.expose_internal);
        assert!(config.log_client_errors);

        env::remove_var("HTTPE_EXPOSE_INTERNAL");
        env::remove_var("HTTPE_LOG_CLIENT_ERRORS");
        assert_eq!(Config::from_env().unwrap(), Config::default());
    }
}
