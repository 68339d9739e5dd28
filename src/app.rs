use crate::command::Command;
use crate::config::AppConfig;
use crate::event::{AppEvent, LoggingHandler, RepaintHandler};
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::{AppState, ScribbleContext};

/// The eframe application: one screen with a header, the drawing surface
/// and the brush controls.
#[derive(Debug)]
pub struct ScribbleApp {
    context: ScribbleContext,
    input: InputHandler,
    renderer: Renderer,
}

impl Default for ScribbleApp {
    fn default() -> Self {
        Self::with_state(AppState::default())
    }
}

impl ScribbleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut app = Self::with_state(config.initial_state());
        app.context
            .subscribe(Box::new(RepaintHandler::new(cc.egui_ctx.clone())));
        log::info!(
            "Starting in {:?} mode with brush width {}",
            app.state().mode(),
            app.state().brush_width()
        );
        app
    }

    /// Build the application around an existing state, without a window.
    pub fn with_state(state: AppState) -> Self {
        let mut context = ScribbleContext::new(state);
        context.subscribe(Box::new(LoggingHandler));
        Self {
            context,
            input: InputHandler::new(),
            renderer: Renderer::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.context.state()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn execute(&mut self, command: Command) -> Option<AppEvent> {
        log::debug!("UI command: {}", command.name());
        self.context.execute(command)
    }

    /// Feed this frame's pointer input for the drawing surface at `surface`.
    pub fn handle_input(&mut self, ctx: &egui::Context, surface: egui::Rect) {
        self.input.set_surface_rect(surface);
        for event in self.input.process_input(ctx) {
            self.context.handle_input(&event);
        }
    }
}

impl eframe::App for ScribbleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panels must be laid out before the central panel.
        panels::header_panel(self, ctx);
        panels::controls_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
