//! Input configuration
//!
//! Bundles the tunable settings (buffer window, deadzone, gamepad slot) and
//! the action bindings into one TOML document. Missing fields fall back to
//! defaults so a partial file stays usable.
//!
//! ```toml
//! buffer_duration = 0.03
//! gamepad_index = 0
//!
//! [deadzone]
//! inner = 0.1
//! outer = 0.05
//!
//! [[actions]]
//! name = "jump"
//! keys = ["space"]
//! gamepad_buttons = ["a"]
//! mode = "press"
//! ```

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::action::{ActionBinding, ActionEngine, DEFAULT_BUFFER_DURATION};
use crate::error::InputError;
use crate::gamepad::{DeadzoneConfig, GamepadManager};

const CONFIG_DIR: &str = "padaction";
const CONFIG_FILE: &str = "input.toml";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// PRESS buffer window in seconds
    pub buffer_duration: f32,

    /// Gamepad slot to track, None for the first connected pad
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamepad_index: Option<usize>,

    pub deadzone: DeadzoneConfig,

    pub actions: Vec<ActionBinding>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            buffer_duration: DEFAULT_BUFFER_DURATION,
            gamepad_index: None,
            deadzone: DeadzoneConfig::default(),
            actions: Vec::new(),
        }
    }
}

impl InputConfig {
    /// `<config dir>/padaction/input.toml`
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| eyre!("No config directory available"))?;
        Ok(base.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).wrap_err("Failed to parse input config")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).wrap_err("Failed to serialize input config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading input config from {}", path.display());
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).wrap_err_with(|| format!("Invalid config in {}", path.display()))
    }

    /// Load from `path`, or use defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let config = Self::load(path)?;
            info!(
                "Loaded input config from {} ({} actions)",
                path.display(),
                config.actions.len()
            );
            Ok(config)
        } else {
            info!("No input config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        info!("Saved input config to {}", path.display());
        Ok(())
    }

    /// Build an engine with every binding registered and a gamepad attached
    pub fn build_engine(&self) -> Result<ActionEngine, InputError> {
        self.deadzone.validate()?;

        let mut engine = ActionEngine::new()
            .with_gamepad(GamepadManager::new(self.gamepad_index).with_deadzone(self.deadzone));
        engine.set_buffer_duration(self.buffer_duration)?;

        for binding in &self.actions {
            engine.add_action(binding.clone())?;
        }
        Ok(engine)
    }
}
