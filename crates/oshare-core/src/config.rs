use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_WORKSHEET_TITLE: &str = "landing_pages";
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

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

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let google_client_email = require("GOOGLE_CLIENT_EMAIL")?;
    let google_private_key = unescape_private_key(&require("GOOGLE_PRIVATE_KEY")?);
    let google_sheet_id = require("GOOGLE_SHEET_ID")?;

    let env = parse_environment(&or_default("OSHARE_ENV", "development"))?;
    let bind_addr = parse_addr("OSHARE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("OSHARE_LOG_LEVEL", "info");
    let worksheet_title = or_default("OSHARE_WORKSHEET_TITLE", DEFAULT_WORKSHEET_TITLE);
    let revalidate_secs = parse_u64("OSHARE_REVALIDATE_SECS", "60")?;
    let request_timeout_secs = parse_u64("OSHARE_REQUEST_TIMEOUT_SECS", "30")?;
    let sheets_base_url = or_default("OSHARE_SHEETS_BASE_URL", DEFAULT_SHEETS_BASE_URL);
    let token_uri = or_default("OSHARE_TOKEN_URI", DEFAULT_TOKEN_URI);

    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "OSHARE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        google_client_email,
        google_private_key,
        google_sheet_id,
        worksheet_title,
        revalidate_secs,
        request_timeout_secs,
        sheets_base_url,
        token_uri,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "OSHARE_ENV".to_string(),
            reason: format!("expected development, test, or production; got {other:?}"),
        }),
    }
}

/// Service-account keys pasted into a single-line env var carry `\n` as two
/// literal characters.
fn unescape_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
