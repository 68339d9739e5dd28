#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod geometry;
pub mod ghost;
pub mod input;
pub mod palette;
pub mod panels;
pub mod prompt;
pub mod renderer;
pub mod state;
pub mod stroke;

pub use app::ScribbleApp;
pub use command::Command;
pub use config::AppConfig;
pub use document::Document;
pub use error::ConfigError;
pub use ghost::{GhostShape, Illustration};
pub use input::{Gesture, GestureTracker, InputEvent, PointerId};
pub use prompt::Prompt;
pub use renderer::Renderer;
pub use state::{AppState, Mode, ScribbleContext};
pub use stroke::Stroke;
