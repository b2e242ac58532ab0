use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Missing or blank leaves the generation endpoints unavailable; the server still starts.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub log_json: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:8000"),
            database_url: get_env("DATABASE_URL")?,
            db_max_connections: get_env_parse_or("DB_MAX_CONNECTIONS", 10)?,
            google_api_key: get_env_opt("GOOGLE_API_KEY"),
            gemini_model: get_env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: get_env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            log_json: get_env_opt("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    get_env_opt(name).ok_or_else(|| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn get_env_or(name: &str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

pub fn init_config() -> Result<&'static Config> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    get_config()
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_missing() {
        env::set_var("CONCURSEIRO_TEST_BLANK", "   ");
        assert_eq!(get_env_opt("CONCURSEIRO_TEST_BLANK"), None);
        assert!(matches!(get_env("CONCURSEIRO_TEST_BLANK"), Err(Error::Config(_))));
    }

    #[test]
    fn parse_falls_back_to_default_and_rejects_garbage() {
        env::remove_var("CONCURSEIRO_TEST_UNSET");
        assert_eq!(get_env_parse_or("CONCURSEIRO_TEST_UNSET", 7u32).unwrap(), 7);

        env::set_var("CONCURSEIRO_TEST_NUM", "not-a-number");
        assert!(matches!(
            get_env_parse_or::<u32>("CONCURSEIRO_TEST_NUM", 1),
            Err(Error::Config(_))
        ));
    }
}
