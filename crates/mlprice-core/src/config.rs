use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("MLPRICE_LOG_LEVEL", "info");
    let base_url = parse_base_url(&or_default(
        "MLPRICE_BASE_URL",
        "https://lista.mercadolivre.com.br",
    ))?;
    let request_timeout_secs = parse_u64("MLPRICE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("MLPRICE_USER_AGENT", DEFAULT_USER_AGENT);

    let max_pages = parse_usize("MLPRICE_MAX_PAGES", "50")?;
    if max_pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MLPRICE_MAX_PAGES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let inter_page_delay_ms = parse_u64("MLPRICE_INTER_PAGE_DELAY_MS", "500")?;
    let output_path = PathBuf::from(or_default("MLPRICE_OUTPUT_PATH", "produtos.txt"));

    Ok(AppConfig {
        log_level,
        base_url,
        request_timeout_secs,
        user_agent,
        max_pages,
        inter_page_delay_ms,
        output_path,
    })
}

/// Validates the listing site origin and strips trailing slashes.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "MLPRICE_BASE_URL".to_string(),
            reason: format!("\"{raw}\" must start with http:// or https://"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
