//! Bridge configuration, loaded from `config/ferry.json5`.

use std::{fs, io, path::Path};

use ferry_registry::entity_definitions::PLAYER;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Written on first run when no config file exists.
pub const DEFAULT_CONFIG: &str = r#"{
  // Default log filter. RUST_LOG takes precedence when set.
  log_filter: "info",
  // How the attack cooldown is shown to Bedrock players: "title", "actionbar" or "disabled".
  cooldown: "title",
  // Bedrock reports eye position; this is subtracted to get the Java feet position.
  player_eye_height: 1.62,
  // Show cracking particles while a block is being broken.
  emit_block_break_particles: true,
}
"#;

/// An error that can occur while loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read or created.
    #[error("Failed to access config file: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid JSON5.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
}

/// How the attack cooldown indicator is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooldownPreference {
    /// Under the crosshair.
    #[default]
    Title,
    /// Above the hotbar.
    Actionbar,
    /// Not shown.
    Disabled,
}

/// The bridge configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FerryConfig {
    /// Default log filter directive.
    pub log_filter: String,
    /// Attack cooldown display.
    pub cooldown: CooldownPreference,
    /// Distance from the Bedrock eye position down to the Java feet position.
    pub player_eye_height: f32,
    /// Whether block break particles are echoed to the client.
    pub emit_block_break_particles: bool,
}

impl Default for FerryConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            cooldown: CooldownPreference::Title,
            player_eye_height: PLAYER.offset,
            emit_block_break_particles: true,
        }
    }
}

impl FerryConfig {
    /// Parses a config from JSON5 text. Missing fields take their defaults.
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json5::from_str(text)?)
    }

    /// Loads the config at `path`, writing [`DEFAULT_CONFIG`] there first if
    /// the file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("Created default config at {}", path.display());
        }

        Self::from_json5(&fs::read_to_string(path)?)
    }
}
