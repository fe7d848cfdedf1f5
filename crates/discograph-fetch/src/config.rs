use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for discograph.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (DISCO_* prefix)
/// 3. Config file (~/.config/discograph/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the artist-site proxy API serving the catalog,
    /// user-generated-content, and link-resolution endpoints.
    ///
    /// Can be set via:
    /// - CLI: --base-url https://...
    /// - ENV: DISCO_API_BASE_URL
    /// - Config: api_base_url = "https://..."
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Artist name used when building fallback search links.
    ///
    /// Can be set via:
    /// - ENV: DISCO_ARTIST_NAME
    /// - Config: artist_name = "..."
    #[serde(default = "default_artist_name")]
    pub artist_name: String,

    /// Tidal artist page used instead of a search link; Tidal's search
    /// sits behind a login wall.
    ///
    /// Can be set via:
    /// - ENV: DISCO_TIDAL_ARTIST_URL
    /// - Config: tidal_artist_url = "https://tidal.com/artist/..."
    #[serde(default = "default_tidal_artist_url")]
    pub tidal_artist_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            artist_name: default_artist_name(),
            tidal_artist_url: default_tidal_artist_url(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/discograph/config.toml
    /// Reads environment variables with DISCO_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("disco");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with a custom API base URL.
    ///
    /// This is used when the --base-url CLI flag is provided.
    pub fn load_with_base_url(base_url: String) -> Result<Self> {
        let mut config = Self::load()?;
        config.api_base_url = base_url;
        Ok(config)
    }
}

fn default_api_base_url() -> String {
    "https://not-the-singer-api.vercel.app".to_string()
}

fn default_artist_name() -> String {
    "Not the Singer".to_string()
}

fn default_tidal_artist_url() -> String {
    "https://tidal.com/artist/23342714".to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/discograph/config.toml
/// - macOS: ~/Library/Application Support/discograph/config.toml
/// - Windows: %APPDATA%\discograph\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("discograph")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Discograph Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (DISCO_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Base URL of the artist-site proxy API
#
# Serves /catalog, /catalog/refresh, /usergen, and /links
#
# Can also be set via:
# - CLI: discograph --base-url https://... catalog
# - Environment: DISCO_API_BASE_URL=https://...
#api_base_url = "https://not-the-singer-api.vercel.app"

# Artist name used when building fallback search links
#
# Can also be set via:
# - Environment: DISCO_ARTIST_NAME="Not the Singer"
#artist_name = "Not the Singer"

# Tidal artist page used instead of a search link
# (Tidal's search sits behind a login wall)
#
# Can also be set via:
# - Environment: DISCO_TIDAL_ARTIST_URL=https://tidal.com/artist/...
#tidal_artist_url = "https://tidal.com/artist/23342714"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
