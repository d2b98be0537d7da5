use crate::{ReflowConfig, ReflowError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_SUFFIX: &str = "_pp";

const CONFIG_HEADER: &str = r#"# =============================================================================
# Reflow Configuration
# Edit this file directly or regenerate it with: reflow config init --force
# =============================================================================

"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Appended to the input file stem when no output path is given.
    pub output_suffix: String,
    /// Cap on characters read from the input. Unset means no cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_input_chars: Option<usize>,
    pub reflow: ReflowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            max_input_chars: None,
            reflow: ReflowConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self, ReflowError> {
        Self::load_or_default(&Self::config_path()?)
    }

    pub fn load_or_default(path: &Path) -> Result<Self, ReflowError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }

        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ReflowError> {
        let config_content = std::fs::read_to_string(path).map_err(|e| {
            ReflowError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str::<AppConfig>(&config_content).map_err(|e| {
            ReflowError::Config(format!(
                "Failed to parse config: {}\n\nPlease check your config file at: {}",
                e,
                path.display()
            ))
        })
    }

    /// Command-line values win over whatever the file set.
    pub fn apply_overrides(
        &mut self,
        sentences_per_paragraph: Option<usize>,
        line_width: Option<usize>,
        max_input_chars: Option<usize>,
    ) {
        if let Some(n) = sentences_per_paragraph {
            self.reflow.sentences_per_paragraph = n;
        }
        if let Some(width) = line_width {
            self.reflow.line_width = width;
        }
        if max_input_chars.is_some() {
            self.max_input_chars = max_input_chars;
        }
    }

    /// Write a default config file, refusing to replace one unless `force`.
    pub fn init_at(path: &Path, force: bool) -> Result<(), ReflowError> {
        if path.exists() && !force {
            return Err(ReflowError::Config(format!(
                "Config file already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }
        AppConfig::default().save_to(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ReflowError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ReflowError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, format!("{}{}", CONFIG_HEADER, self.to_toml()?)).map_err(|e| {
            ReflowError::Config(format!("Failed to write configuration file: {}", e))
        })?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ReflowError> {
        toml::to_string_pretty(self)
            .map_err(|e| ReflowError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    pub fn config_path() -> Result<PathBuf, ReflowError> {
        let config_dir = directories::ProjectDirs::from("com", "reflow", "reflow")
            .ok_or_else(|| ReflowError::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.config_dir().join("config.toml"))
    }
}
