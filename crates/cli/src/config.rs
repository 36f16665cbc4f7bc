//! Configuration file support for the NEP-2 tool.
//!
//! ```toml
//! variant = "legacy"
//!
//! [logger]
//! level = "info"
//! json = false
//!
//! [scrypt]
//! n = 16384
//! r = 8
//! p = 8
//! ```

use anyhow::{Context, Result};
use neo_wallets::{Nep2Variant, ScryptParameters};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::args::LogLevel;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Variant used when a command does not pass `--variant`
    pub variant: Nep2Variant,
    /// Logger configuration
    pub logger: LoggerConfig,
    /// Scrypt parameters; anything but the NEP-2 defaults breaks compatibility
    pub scrypt: ScryptParameters,
}

/// Logger configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Log level
    pub level: LogLevel,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.scrypt.validate()?;
        Ok(config)
    }
}
