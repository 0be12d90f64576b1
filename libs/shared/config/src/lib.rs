use std::env;
use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DOCTORS_FILE: &str = "data/doctors.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub doctors_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            doctors_file: PathBuf::from(DEFAULT_DOCTORS_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or unparsable
    /// values fall back to the defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| {
                warn!("HOST not set, using {}", DEFAULT_HOST);
                DEFAULT_HOST.to_string()
            });

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => {
                warn!("PORT not set, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let doctors_file = lookup("DOCTORS_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                warn!("DOCTORS_FILE not set, using {}", DEFAULT_DOCTORS_FILE);
                PathBuf::from(DEFAULT_DOCTORS_FILE)
            });

        Self { host, port, doctors_file }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
