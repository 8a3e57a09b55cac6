use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_DISCOVERY_URL: &str = "https://app.ticketmaster.com/discovery/v2/events.json";

/// Search radius sent with every query, in the API's default distance unit.
pub const DEFAULT_SEARCH_RADIUS: u32 = 50;

pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVEL_VAR: &str = "EVENTSCOUT_LOG_LEVEL";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Read `EVENTSCOUT_LOG_LEVEL` alone, falling back to [`DEFAULT_LOG_LEVEL`].
///
/// For commands that log but need no API key. Does not load `.env` files.
#[must_use]
pub fn load_log_level() -> String {
    log_level_from(|key| std::env::var(key))
}

fn log_level_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup(LOG_LEVEL_VAR).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here, decoupled from the process environment,
/// so tests can drive it from a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
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

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_key = require("TICKETMASTER_API_KEY")?;
    let discovery_url = or_default("EVENTSCOUT_DISCOVERY_URL", DEFAULT_DISCOVERY_URL);
    let search_radius = parse_u32("EVENTSCOUT_SEARCH_RADIUS", &DEFAULT_SEARCH_RADIUS.to_string())?;
    let request_timeout_secs = parse_u64("EVENTSCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("EVENTSCOUT_USER_AGENT", "eventscout/0.1 (event-discovery)");
    let log_level = log_level_from(&lookup);

    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "EVENTSCOUT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        api_key,
        discovery_url,
        search_radius,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}
