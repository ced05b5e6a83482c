//! Preview configuration.
//!
//! A small, flat configuration struct deserialized from a `[preview]` TOML
//! table. Every field has a default, so an empty string is a valid config.
//!
//! | Field              | Purpose                                        |
//! |--------------------|------------------------------------------------|
//! | `channel_capacity` | Actor message channel buffer size              |
//! | `visible`          | Whether the preview starts visible             |
//! | `math_script_url`  | Math typesetting bundle embedded in the shell  |
//! | `verbose`          | Enable debug diagnostics logging               |

use serde::Deserialize;
use thiserror::Error;

/// Default actor channel buffer size.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Default math typesetting script embedded in the shell markup.
pub const DEFAULT_MATH_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js";

/// Configuration for a preview pipeline instance.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Capacity of the preview actor's message channel.
    pub channel_capacity: usize,

    /// Whether the preview starts visible. While hidden, update requests
    /// are deferred until the preview is shown.
    pub visible: bool,

    /// URL of the math typesetting script loaded by the shell markup.
    pub math_script_url: String,

    /// Enable verbose diagnostics output.
    pub verbose: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            visible: true,
            math_script_url: DEFAULT_MATH_SCRIPT_URL.to_string(),
            verbose: false,
        }
    }
}

impl PreviewConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid preview config: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Tests
// ============================================================================
