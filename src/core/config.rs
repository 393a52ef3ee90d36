//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.trmmtui/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TrmmConfig {
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub clients: Vec<ClientEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoginConfig {
    pub url_placeholder: Option<String>,
    pub key_placeholder: Option<String>,
    pub char_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PanelConfig {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientEntry {
    pub name: String,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CHAR_LIMIT: usize = 255;
pub const DEFAULT_URL_PLACEHOLDER: &str = "https://api.company.com";
pub const DEFAULT_KEY_PLACEHOLDER: &str = "XXXXXCFDA2WBCXH0XTELBR5KAI69XXXX";
pub const DEFAULT_PANEL_TEXT: &str = "Table here";
pub const DEFAULT_CLIENTS: &[&str] = &["Client1", "Client2"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub url_placeholder: String,
    pub key_placeholder: String,
    pub char_limit: usize,
    pub panel_text: String,
    pub clients: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.trmmtui/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".trmmtui").join("config.toml"))
}

/// Load config from `path`, or from `~/.trmmtui/config.toml` when `None`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TrmmConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<TrmmConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TrmmConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TrmmConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TrmmConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# trmmtui Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [login]
# url_placeholder = "https://api.company.com"
# key_placeholder = "XXXXXCFDA2WBCXH0XTELBR5KAI69XXXX"
# char_limit = 255

# [panel]
# text = "Table here"

# [[clients]]
# name = "Client1"

# [[clients]]
# name = "Client2"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_char_limit` comes from the `--char-limit` flag (None = not specified).
pub fn resolve(config: &TrmmConfig, cli_char_limit: Option<usize>) -> ResolvedConfig {
    // A zero limit would make the form unusable.
    let char_limit = cli_char_limit
        .or(config.login.char_limit)
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_CHAR_LIMIT);

    let clients = if config.clients.is_empty() {
        DEFAULT_CLIENTS.iter().map(|s| s.to_string()).collect()
    } else {
        config.clients.iter().map(|c| c.name.clone()).collect()
    };

    ResolvedConfig {
        url_placeholder: config
            .login
            .url_placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_URL_PLACEHOLDER.to_string()),
        key_placeholder: config
            .login
            .key_placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_KEY_PLACEHOLDER.to_string()),
        char_limit,
        panel_text: config
            .panel
            .text
            .clone()
            .unwrap_or_else(|| DEFAULT_PANEL_TEXT.to_string()),
        clients,
    }
}
