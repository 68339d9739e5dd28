use egui::Color32;
use serde::Deserialize;

use crate::command::Command;
use crate::error::{ConfigError, ConfigResult};
use crate::palette::{self, PALETTE};
use crate::state::{AppState, Mode};

/// Environment variable holding inline JSON overrides.
pub const CONFIG_ENV_VAR: &str = "SCRIBBLE_PALS_CONFIG";

/// Startup settings. Nothing is saved; these only pick the initial state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)] // any field left out keeps its default
pub struct AppConfig {
    pub start_mode: Mode,
    pub brush_width: f32,
    pub palette_index: usize,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_mode: Mode::default(),
            brush_width: palette::DEFAULT_BRUSH_WIDTH,
            palette_index: 0,
            window_size: [720.0, 960.0],
        }
    }
}

impl AppConfig {
    /// Read overrides from [`CONFIG_ENV_VAR`], falling back to defaults when
    /// it is unset.
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(json) => Self::from_json(&json),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(CONFIG_ENV_VAR)),
        }
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.palette_index >= PALETTE.len() {
            return Err(ConfigError::PaletteIndex {
                index: self.palette_index,
                len: PALETTE.len(),
            });
        }
        Ok(())
    }

    pub fn brush_color(&self) -> Color32 {
        PALETTE.get(self.palette_index).copied().unwrap_or(palette::DEFAULT_COLOR)
    }

    /// Initial application state, built through the regular transitions so
    /// the brush width is clamped like any slider input.
    pub fn initial_state(&self) -> AppState {
        AppState::new()
            .reduce(Command::SetMode(self.start_mode))
            .reduce(Command::SetBrushWidth(self.brush_width))
            .reduce(Command::SelectColor(self.brush_color()))
    }
}
