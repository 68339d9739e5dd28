mod app_state;
pub mod context;

pub use app_state::{AppState, Mode};
pub use context::ScribbleContext;
