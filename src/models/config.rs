use crate::assets::AssetLoader;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Matrix used when neither `--matrix` nor a preset names one
    #[serde(default = "default_matrix")]
    pub default_matrix: String,

    /// Palette used when neither `--palette` nor a preset names one
    #[serde(default = "default_palette")]
    pub default_palette: String,

    /// Directory converted images land in when `--output` is omitted
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Named matrix+palette combinations, selectable with `--preset`
    #[serde(default)]
    pub presets: HashMap<String, PresetConfig>,
}

fn default_matrix() -> String {
    "bayer_4x4".to_string()
}

fn default_palette() -> String {
    "pico8".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dithered")
}

/// A named matrix+palette combination
#[derive(Debug, Deserialize, Clone)]
pub struct PresetConfig {
    /// Matrix name (resolved against the conf dir and embedded assets)
    pub matrix: String,

    /// Palette name (resolved against the conf dir and embedded assets)
    pub palette: String,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        default_matrix = %config.default_matrix,
                        default_palette = %config.default_palette,
                        presets = config.presets.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Look up a preset by name
    pub fn preset(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.get(name)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_matrix: default_matrix(),
            default_palette: default_palette(),
            output_dir: default_output_dir(),
            presets: HashMap::new(),
        }
    }
}
