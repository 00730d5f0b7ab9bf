//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GOMARKETPLACE_DATA_DIR` - Directory holding the persisted cart blob
//!   (default: `data`)
//! - `RUST_LOG` - Standard tracing filter directives

use std::path::PathBuf;

/// CLI application configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory where the cart blob lives.
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a default, so loading cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            data_dir: get_env_or_default("GOMARKETPLACE_DATA_DIR", "data").into(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_or_default_falls_back() {
        let value = get_env_or_default("GOMARKETPLACE_TEST_UNSET_VAR", "fallback");
        assert_eq!(value, "fallback");
    }
}
