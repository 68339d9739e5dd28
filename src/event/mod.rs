mod bus;
mod events;

pub use bus::EventBus;
pub use events::AppEvent;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &AppEvent);
}

/// Asks egui for a new frame whenever the canvas changes, so the renderer
/// re-reads state right after each transition.
#[derive(Debug)]
pub struct RepaintHandler {
    ctx: egui::Context,
}

impl RepaintHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, event: &AppEvent) {
        if event.affects_canvas() {
            self.ctx.request_repaint();
        }
    }
}

/// Writes every event to the `log` facade.
#[derive(Debug, Default)]
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn handle_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::ModeChanged { old, new } => {
                log::info!("Mode changed: {:?} -> {:?}", old, new);
            }
            AppEvent::PromptChanged { index } => {
                let prompt = crate::prompt::prompt(*index);
                log::info!(
                    "Prompt changed to #{}: {} ({} ghost)",
                    index,
                    prompt.title,
                    prompt.illustration.name()
                );
            }
            AppEvent::StrokeExtended { at, points } => {
                log::trace!("Stroke sample {:?} ({} points)", at, points);
            }
            AppEvent::StrokeCommitted { index, points } => {
                log::debug!("Committed stroke #{} with {} points", index, points);
            }
            AppEvent::StrokeDiscarded { points } => {
                log::debug!("Discarded gesture with {} point(s)", points);
            }
            other => log::debug!("{:?}", other),
        }
    }
}
