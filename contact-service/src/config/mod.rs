use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    /// Upper bound on a single record write. A write that has not settled by
    /// then is answered as a persistence failure.
    pub write_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    /// Used only when `uri` does not name a database itself.
    pub database: String,
}

impl ContactConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let write_timeout =
            parse_write_timeout(&get_env(&["WRITE_TIMEOUT_SECS"], Some("10"), is_prod)?)?;

        Ok(ContactConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: get_env(&["MONGO_URI", "MONGODB_URI"], None, is_prod)?,
                database: get_env(&["MONGO_DATABASE"], Some("contact_db"), is_prod)?,
            },
            write_timeout,
        })
    }
}

/// Whole seconds, at least one. Zero would fail every write and the startup ping.
fn parse_write_timeout(raw: &str) -> Result<Duration, AppError> {
    let secs: u64 = raw.parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("WRITE_TIMEOUT_SECS is not a number: {}", e))
    })?;
    if secs == 0 {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "WRITE_TIMEOUT_SECS must be at least 1"
        )));
    }
    Ok(Duration::from_secs(secs))
}

/// Read the first of `keys` that is set. Defaults are ignored in production.
fn get_env(keys: &[&str], default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    if let Some(val) = keys.iter().find_map(|key| env::var(key).ok()) {
        return Ok(val);
    }

    let key = keys.first().copied().unwrap_or_default();
    if is_prod {
        Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        )))
    } else if let Some(def) = default {
        Ok(def.to_string())
    } else {
        Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required but not set",
            key
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_timeout_is_parsed_in_seconds() {
        assert_eq!(parse_write_timeout("10").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn zero_or_garbage_write_timeout_is_refused() {
        for raw in ["0", "-1", "ten", ""] {
            let err = parse_write_timeout(raw).unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)), "raw: {:?}", raw);
        }
        assert!(parse_write_timeout("0")
            .unwrap_err()
            .to_string()
            .contains("at least 1"));
    }

    #[test]
    fn default_is_used_outside_production() {
        let value = get_env(&["CONTACT_TEST_UNSET_VAR"], Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn production_refuses_defaults() {
        let err = get_env(&["CONTACT_TEST_UNSET_VAR"], Some("fallback"), true).unwrap_err();
        assert!(err.to_string().contains("required in production"));
    }

    #[test]
    fn missing_required_value_is_a_config_error() {
        let err = get_env(&["CONTACT_TEST_UNSET_A", "CONTACT_TEST_UNSET_B"], None, false)
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("CONTACT_TEST_UNSET_A"));
    }

    #[test]
    fn later_keys_act_as_fallbacks() {
        std::env::set_var("CONTACT_TEST_FALLBACK_B", "mongodb://db:27017");
        let value = get_env(&["CONTACT_TEST_FALLBACK_A", "CONTACT_TEST_FALLBACK_B"], None, true)
            .unwrap();
        assert_eq!(value, "mongodb://db:27017");
    }
}
