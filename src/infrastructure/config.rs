use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::ConfigError;
use serde::{Deserialize, Deserializer};

use crate::domain::image::DEFAULT_IMAGE_BASE_URL;
use crate::domain::pagination::DEFAULT_PAGE_SIZE;
use crate::domain::transition::Timing;
use crate::presentation::config::{KeyBindings, Styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");
const ENV_PREFIX: &str = "MARQUEE";

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

/// TMDB API key. Clones share the same allocation; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Arc::from(key.into()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ApiKey::new)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TmdbConfig {
    #[serde(default, deserialize_with = "deserialize_api_key")]
    pub api_key: Option<ApiKey>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            language: default_language(),
            region: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

// An empty key counts as no key
fn deserialize_api_key<'de, D>(deserializer: D) -> Result<Option<ApiKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|key| !key.trim().is_empty())
        .map(ApiKey::new))
}

fn default_base_url() -> String {
    DEFAULT_TMDB_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_animations")]
    pub animations: bool,
    /// Playback rate for every transition; 2.0 is twice as fast
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            animations: default_animations(),
            animation_speed: default_animation_speed(),
        }
    }
}

impl UiConfig {
    pub fn timing(&self) -> Timing {
        Timing {
            enabled: self.animations,
            speed: self.animation_speed,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_animations() -> bool {
    true
}

fn default_animation_speed() -> f64 {
    1.0
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// The defaults shipped inside the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Layers optional user files from `config_dir` and `MARQUEE__*`
    /// environment variables over the embedded defaults.
    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // User entries win; defaults fill the gaps
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(style_key.clone()).or_insert(*style);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.page_size == 0 {
            return Err(ConfigError::Message(
                "ui.page_size must be at least 1".to_string(),
            ));
        }
        if !self.ui.animation_speed.is_finite() || self.ui.animation_speed <= 0.0 {
            return Err(ConfigError::Message(format!(
                "ui.animation_speed must be a positive number, got {}",
                self.ui.animation_speed
            )));
        }
        if self.tmdb.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "tmdb.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
