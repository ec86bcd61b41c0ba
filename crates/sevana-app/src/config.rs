//! Application settings loaded from a TOML file
//!
//! Settings live at `~/.config/sevana/config.toml` (platform config dir)
//! unless an explicit path is given. A missing default file means
//! defaults; a missing explicit file or an unparsable file is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use sevana_core::error::{Error, Result};

/// Behavior of the stub gateway backing the demo shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    /// Artificial latency per operation, in milliseconds.
    pub latency_ms: u64,
    /// Fixed OTP issued on every dispatch. Unset means a random 4-digit
    /// code per send (printed to the log).
    pub fixed_otp: Option<String>,
    /// Seed the demo credential directory at startup.
    pub seed_demo_users: bool,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            latency_ms: 400,
            fixed_otp: Some("1234".to_string()),
            seed_demo_users: true,
        }
    }
}

/// Shell/run-loop behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    /// Terminal event poll interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self { tick_ms: 50 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub gateway: GatewaySettings,
    pub shell: ShellSettings,
}

impl Settings {
    /// Load settings.
    ///
    /// With an explicit `path` the file must exist and parse. With
    /// `None`, the default location is tried and a missing file falls
    /// back to [`Settings::default`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::read(path)
            }
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::read(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::config_invalid(format!("{}: {e}", path.display())))
    }
}

/// Default config file location under the platform config dir.
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("sevana").join("config.toml")
}
