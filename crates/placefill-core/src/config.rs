use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// `api_key_env` names the variable holding the Places credential.
///
/// # Errors
///
/// Returns `ConfigError` if the credential is missing or a value is invalid.
pub fn load_app_config(api_key_env: &str) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env(api_key_env)
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if the credential is missing or a value is invalid.
pub fn load_app_config_from_env(api_key_env: &str) -> Result<AppConfig, ConfigError> {
    build_app_config(api_key_env, |key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The lookup is injected so the parsing rules can be tested against a plain
/// `HashMap` instead of the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] when the credential variable is unset
/// or blank, and [`ConfigError::InvalidEnvVar`] when an optional value does not
/// parse.
pub fn build_app_config<F>(api_key_env: &str, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let places_api_key = require(api_key_env)?;

    let language = or_default("PLACEFILL_LANGUAGE", "en").trim().to_string();
    if language.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACEFILL_LANGUAGE".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let places_base_url = or_default("PLACEFILL_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let log_level = or_default("PLACEFILL_LOG_LEVEL", "info");
    let request_delay_ms = parse_u64("PLACEFILL_REQUEST_DELAY_MS", "100")?;
    let request_timeout_secs = parse_u64("PLACEFILL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACEFILL_USER_AGENT", "placefill/0.1 (place-enrichment)");

    Ok(AppConfig {
        places_api_key,
        places_base_url,
        language,
        log_level,
        request_delay_ms,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
