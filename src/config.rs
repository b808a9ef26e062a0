//! Server configuration parsed from environment variables.

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7860;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("failed to load .env: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Load `.env` from the working directory or its parents into the process
/// environment. A missing file is fine; a malformed one is an error.
///
/// # Errors
///
/// Returns an error if a `.env` file exists but cannot be read or parsed.
pub fn load_env_file() -> Result<(), ConfigError> {
    ignore_missing_env_file(dotenvy::dotenv().map(|_| ()))
}

pub(crate) fn ignore_missing_env_file(result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::EnvFile(e)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Public share link requested. Only logged; the server always binds locally.
    pub share: bool,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            share: false,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 7860
    /// - `SHARE`: default false
    /// - `MAX_UPLOAD_BYTES`: default 50 MiB
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `MAX_UPLOAD_BYTES` is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var("PORT", lookup("PORT"), defaults.port)?;
        let share = lookup("SHARE").as_deref().and_then(parse_bool).unwrap_or(defaults.share);
        let max_upload_bytes = parse_var("MAX_UPLOAD_BYTES", lookup("MAX_UPLOAD_BYTES"), defaults.max_upload_bytes)?;

        Ok(Self { host, port, share, max_upload_bytes })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_var<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
