use egui::{Color32, Pos2, Rect};

use crate::canvas::Scene;
use crate::config::PaintConfig;
use crate::controller::{DrawingController, TextPrompt};
use crate::dialogs::{ColorDialog, Dialog, TextDialog};
use crate::input::{CanvasEvent, InputHandler};
use crate::panels;
use crate::tool::ToolMode;

/// Text prompt for an immediate-mode UI: it cannot block, so it records
/// where text was requested and the app opens a dialog for it.
#[derive(Debug, Default)]
struct DeferredTextPrompt {
    requested: Option<Pos2>,
}

impl TextPrompt for DeferredTextPrompt {
    fn ask_text(&mut self, at: Pos2) -> Option<String> {
        self.requested = Some(at);
        None
    }
}

enum ClosedDialog {
    Text { pos: Pos2, text: Option<String> },
    Color(Option<Color32>),
}

pub struct PaintApp {
    config: PaintConfig,
    controller: DrawingController,
    scene: Scene,
    input: InputHandler,
    dialog: Option<Dialog>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: PaintConfig) -> Self {
        Self {
            controller: DrawingController::from_config(&config),
            config,
            scene: Scene::new(),
            input: InputHandler::new(),
            dialog: None,
        }
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn controller(&self) -> &DrawingController {
        &self.controller
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn select_tool(&mut self, mode: ToolMode) {
        self.controller.select_tool(mode, &mut self.scene);
    }

    pub fn set_pen_size(&mut self, width: u32) {
        self.controller.set_pen_size(width, &mut self.scene);
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        self.controller.set_pen_color(color, &mut self.scene);
    }

    pub fn clear_canvas(&mut self) {
        self.controller.clear(&mut self.scene);
    }

    pub fn open_color_chooser(&mut self) {
        let current = self.controller.style().color;
        self.open_dialog(Dialog::Color(ColorDialog::new(current)));
    }

    /// Feed this frame's pointer input on the canvas to the controller
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect, over_canvas: bool) {
        self.input.set_canvas_rect(canvas_rect);
        if self.has_dialog() {
            return;
        }

        for event in self.input.process_input(ctx, over_canvas) {
            self.handle_canvas_event(event);
            if self.has_dialog() {
                // the rest of this frame's input belongs to the dialog
                break;
            }
        }
    }

    pub fn handle_canvas_event(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::PointerDown { pos } => {
                let mut prompt = DeferredTextPrompt::default();
                self.controller.pointer_down(pos, &mut self.scene, &mut prompt);
                if let Some(at) = prompt.requested {
                    self.open_dialog(Dialog::Text(TextDialog::new(at)));
                }
            }
            CanvasEvent::PointerMove { pos } => self.controller.pointer_move(pos, &mut self.scene),
            CanvasEvent::PointerUp { pos } => self.controller.pointer_up(pos),
        }
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        self.input.reset();
        self.dialog = Some(dialog);
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let closed = match &mut self.dialog {
            None => None,
            Some(Dialog::Text(dialog)) => dialog.show(ctx).map(|outcome| ClosedDialog::Text {
                pos: dialog.pos,
                text: outcome.confirmed(),
            }),
            Some(Dialog::Color(dialog)) => dialog
                .show(ctx)
                .map(|outcome| ClosedDialog::Color(outcome.confirmed())),
        };

        let Some(closed) = closed else {
            return;
        };
        self.dialog = None;

        match closed {
            ClosedDialog::Text { pos, text } => {
                self.controller.place_text(pos, text.as_deref(), &mut self.scene);
            }
            ClosedDialog::Color(choice) => self.controller.choose_color(choice, &mut self.scene),
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::status_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.show_dialog(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_click_opens_dialog() {
        let mut app = PaintApp::default();
        app.select_tool(ToolMode::Text);
        app.handle_canvas_event(CanvasEvent::PointerDown { pos: Pos2::new(12.0, 30.0) });

        assert!(matches!(&app.dialog, Some(Dialog::Text(d)) if d.pos == Pos2::new(12.0, 30.0)));
        assert_eq!(app.controller().mode(), ToolMode::Pen);
        assert!(app.scene().is_empty());
    }

    #[test]
    fn test_color_chooser_opens_with_current_color() {
        let mut app = PaintApp::default();
        app.set_pen_color(Color32::RED);
        app.open_color_chooser();
        assert!(matches!(&app.dialog, Some(Dialog::Color(d)) if d.color() == Color32::RED));
    }

    #[test]
    fn test_pen_drag_through_app() {
        let mut app = PaintApp::default();
        app.handle_canvas_event(CanvasEvent::PointerDown { pos: Pos2::new(0.0, 0.0) });
        app.handle_canvas_event(CanvasEvent::PointerMove { pos: Pos2::new(5.0, 0.0) });
        app.handle_canvas_event(CanvasEvent::PointerUp { pos: Pos2::new(5.0, 0.0) });
        assert_eq!(app.scene().len(), 1);
        assert!(!app.has_dialog());
    }
}
