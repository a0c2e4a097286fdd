//! Configuration settings for Palpiteiro.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// Query cache configuration.
    pub cache: CacheConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from the default location. On first run the
    /// defaults are written there before loading.
    pub fn load_or_default() -> crate::Result<Self> {
        let path = super::default_config_path();
        Self::write_default_if_missing(&path);
        Self::load(Some(path))
    }

    /// Returns whether a new file was written. Write failures are only logged.
    fn write_default_if_missing(path: &Path) -> bool {
        if path.exists() {
            return false;
        }
        match Self::default().save(Some(path.to_path_buf())) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "wrote default configuration");
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not write default configuration");
                false
            }
        }
    }

    /// Load configuration from file, layered under environment overrides.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(super::default_config_path);
        let env = config::Environment::with_prefix(super::ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);
        Self::load_layered(&config_path, env)
    }

    fn load_layered(path: &Path, env: config::Environment) -> crate::Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.to_path_buf())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(env)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(super::default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL; endpoints are resolved under `/api/`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl ApiConfig {
    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://palpiteiro-v2-backend.vercel.app".to_string(),
            timeout_secs: 15,
            user_agent: concat!("palpiteiro/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Freshness windows for cached queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long fetched results count as fresh, in seconds.
    pub results_stale_secs: u64,
}

impl CacheConfig {
    pub fn results_stale_after(&self) -> Duration {
        Duration::from_secs(self.results_stale_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            results_stale_secs: 300,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Rows moved by PageUp/PageDown.
    pub page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            mouse_support: true,
            page_size: 10,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Select/confirm.
    pub select: String,
    /// Cancel/back.
    pub back: String,
    /// Refetch results, bypassing the cache.
    pub refresh: String,
    /// Switch to dashboard view.
    pub dashboard: String,
    /// Switch to suggestions view.
    pub suggestions: String,
    /// Switch to history view.
    pub history: String,
    /// Switch to bet checker view.
    pub checker: String,
    /// Open history search.
    pub search: String,
    /// Generate new suggestions.
    pub generate: String,
    /// Copy the selected bet.
    pub copy: String,
    /// Ask the backend to ingest new draws.
    pub update: String,
    /// Edit the bet numbers in the checker.
    pub edit: String,
    /// Previous contest in the checker.
    pub previous_contest: String,
    /// Next contest in the checker.
    pub next_contest: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            refresh: "r".to_string(),
            dashboard: "1".to_string(),
            suggestions: "2".to_string(),
            history: "3".to_string(),
            checker: "4".to_string(),
            search: "/".to_string(),
            generate: "g".to_string(),
            copy: "c".to_string(),
            update: "u".to_string(),
            edit: "i".to_string(),
            previous_contest: "h".to_string(),
            next_contest: "l".to_string(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Regular drawn/suggested ball (hex).
    pub ball_primary: String,
    /// Ball matched in a checked bet (hex).
    pub ball_hit: String,
    /// Ball missed in a checked bet (hex).
    pub ball_miss: String,
    /// Hot number ball (hex).
    pub ball_hot: String,
    /// Cold number ball (hex).
    pub ball_cold: String,
    /// Text on balls (hex).
    pub ball_text: String,
    /// Accent color for headings and the active view (hex).
    pub accent: String,
    /// Border color (hex).
    pub border: String,
    /// Muted text color (hex).
    pub muted: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            ball_primary: "#7c3aed".to_string(),
            ball_hit: "#16a34a".to_string(),
            ball_miss: "#dc2626".to_string(),
            ball_hot: "#ef4444".to_string(),
            ball_cold: "#3b82f6".to_string(),
            ball_text: "#ffffff".to_string(),
            accent: "#a855f7".to_string(),
            border: "#45475a".to_string(),
            muted: "#9399b2".to_string(),
        }
    }
}
