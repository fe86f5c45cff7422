use crate::app_config::UploaderConfig;
use crate::catalog::Channel;
use crate::ConfigError;

/// Content API custombatch requests accept at most this many entries.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Load uploader configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_uploader_config() -> Result<UploaderConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_uploader_config_from_env()
}

/// Load uploader configuration from environment variables already in the process.
///
/// Unlike [`load_uploader_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_uploader_config_from_env() -> Result<UploaderConfig, ConfigError> {
    build_uploader_config(|key| std::env::var(key))
}

/// Build uploader configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_uploader_config<F>(lookup: F) -> Result<UploaderConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let merchant_id = require("FEEDLOADER_MERCHANT_ID")?;
    if !merchant_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            "FEEDLOADER_MERCHANT_ID",
            format!("\"{merchant_id}\" is not a numeric account id"),
        ));
    }

    let target_country = parse_code(&require("FEEDLOADER_TARGET_COUNTRY")?, 2)
        .ok_or_else(|| invalid("FEEDLOADER_TARGET_COUNTRY", "expected two letters".into()))?;

    let content_language = require("FEEDLOADER_CONTENT_LANGUAGE")?.to_lowercase();

    let target_currency = parse_code(&require("FEEDLOADER_TARGET_CURRENCY")?, 3)
        .ok_or_else(|| invalid("FEEDLOADER_TARGET_CURRENCY", "expected three letters".into()))?;

    let channel = or_default("FEEDLOADER_CHANNEL", "online")
        .trim()
        .parse::<Channel>()
        .map_err(|reason| invalid("FEEDLOADER_CHANNEL", reason))?;

    let is_mca = parse_bool(&or_default("FEEDLOADER_IS_MCA", "false"))
        .ok_or_else(|| invalid("FEEDLOADER_IS_MCA", "expected true or false".into()))?;

    let batch_size = or_default("FEEDLOADER_BATCH_SIZE", "1000")
        .trim()
        .parse::<usize>()
        .map_err(|e| invalid("FEEDLOADER_BATCH_SIZE", e.to_string()))?;
    if batch_size == 0 {
        return Err(invalid("FEEDLOADER_BATCH_SIZE", "must be at least 1".into()));
    }

    let log_level = or_default("FEEDLOADER_LOG_LEVEL", "info");

    Ok(UploaderConfig {
        merchant_id,
        target_country,
        content_language,
        target_currency,
        channel,
        is_mca,
        batch_size,
        log_level,
    })
}

/// Uppercases an alphabetic code of exactly `len` ASCII letters.
fn parse_code(raw: &str, len: usize) -> Option<String> {
    (raw.len() == len && raw.bytes().all(|b| b.is_ascii_alphabetic()))
        .then(|| raw.to_ascii_uppercase())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
