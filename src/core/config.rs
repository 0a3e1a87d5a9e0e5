//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quill/config.toml`. A missing file is fatal on
//! startup; a commented template is generated so the user can discover the
//! options and fill in their API key.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub model_name: String,
    pub api_key: String,
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    /// No config file exists. A template is generated before this is returned.
    Missing,
    /// A config file (or environment) was found, but no API key anywhere.
    KeyMissing,
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing => write!(
                f,
                "no config file found at ~/.quill/config.toml (a template was generated; add your Gemini API key)"
            ),
            ConfigError::KeyMissing => write!(
                f,
                "no Gemini API key configured (set gemini.api_key in ~/.quill/config.toml or the GEMINI_API_KEY env var)"
            ),
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quill/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quill").join("config.toml"))
}

/// Load config from `~/.quill/config.toml`.
///
/// If the file doesn't exist, generates a commented template and returns
/// `ConfigError::Missing`. An unreadable file is `ConfigError::Io`, a
/// malformed one `ConfigError::Parse`. All three are startup-fatal.
pub fn load_config() -> Result<QuillConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory");
            return Err(ConfigError::Missing);
        }
    };

    if !path.exists() {
        info!("No config file found, generating template at {}", path.display());
        generate_default_config(&path);
        return Err(ConfigError::Missing);
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: QuillConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented template config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Quill Configuration
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# model = "gemini-2.5-flash"

# [gemini]
# api_key = "..."                    # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write template config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Environment overrides, captured once so resolution stays testable
/// without mutating process-wide env state.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

impl EnvOverrides {
    pub fn from_process_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            base_url: std::env::var("GEMINI_BASE_URL").ok(),
            model: std::env::var("QUILL_MODEL").ok(),
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_model` is from the `--model` flag (None = not specified).
/// Returns `ConfigError::KeyMissing` if neither the file nor the environment
/// provides a non-empty API key.
pub fn resolve(
    config: &QuillConfig,
    cli_model: Option<&str>,
    env: &EnvOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    // API key: env → config. No default exists for credentials.
    let api_key = env
        .api_key
        .clone()
        .or_else(|| config.gemini.api_key.clone())
        .filter(|k| !k.trim().is_empty())
        .ok_or(ConfigError::KeyMissing)?;

    // Model: CLI → env → config → default
    let model_name = cli_model
        .map(|s| s.to_string())
        .or_else(|| env.model.clone())
        .or_else(|| config.general.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // Base URL: env → config → default
    let base_url = env
        .base_url
        .clone()
        .or_else(|| config.gemini.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    Ok(ResolvedConfig {
        model_name,
        api_key,
        base_url,
    })
}
