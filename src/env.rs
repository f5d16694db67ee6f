use crate::emitter::{EmitterConfig, DEFAULT_ENDPOINT};

/// Environment variable names used by this crate for convenient
/// configuration from host applications.
///
/// These are purely helpers; the core emitter types remain decoupled
/// from environment access.

/// Full URL of the dev logging endpoint, e.g. `http://localhost:5000/logger`.
pub const DEVLOGGER_ENDPOINT_ENV: &str = "DEVLOGGER_ENDPOINT";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl EmitterConfig {
    /// Build a configuration from the environment, falling back to the
    /// fixed default endpoint when the variable is unset.
    pub fn from_env() -> Self {
        EmitterConfig {
            endpoint: env_or(DEVLOGGER_ENDPOINT_ENV, DEFAULT_ENDPOINT),
        }
    }
}
