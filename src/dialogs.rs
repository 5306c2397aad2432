use egui::{Color32, Pos2};

/// How a modal dialog was closed
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome<T> {
    Confirmed(T),
    Cancelled,
}

impl<T> DialogOutcome<T> {
    pub fn confirmed(self) -> Option<T> {
        match self {
            Self::Confirmed(value) => Some(value),
            Self::Cancelled => None,
        }
    }
}

/// "Enter your text" prompt for text placed at `pos`
#[derive(Debug, Clone)]
pub struct TextDialog {
    pub pos: Pos2,
    buffer: String,
    focus_requested: bool,
}

impl TextDialog {
    pub fn new(pos: Pos2) -> Self {
        Self {
            pos,
            buffer: String::new(),
            focus_requested: false,
        }
    }

    /// Show the dialog. Returns `Some` on the frame it is closed.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome<String>> {
        let mut outcome = None;
        modal_window("Text Input").show(ctx, |ui| {
            ui.label("Enter your text:");
            let response = ui.text_edit_singleline(&mut self.buffer);
            if !self.focus_requested {
                response.request_focus();
                self.focus_requested = true;
            }

            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || entered {
                    outcome = Some(DialogOutcome::Confirmed(self.buffer.clone()));
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(DialogOutcome::Cancelled);
                }
            });
        });

        if outcome.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = Some(DialogOutcome::Cancelled);
        }
        outcome
    }
}

/// "Choose Pen Color" dialog
#[derive(Debug, Clone)]
pub struct ColorDialog {
    color: Color32,
}

impl ColorDialog {
    pub fn new(initial: Color32) -> Self {
        Self { color: initial }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome<Color32>> {
        let mut outcome = None;
        modal_window("Choose Pen Color").show(ctx, |ui| {
            egui::color_picker::color_picker_color32(
                ui,
                &mut self.color,
                egui::color_picker::Alpha::Opaque,
            );
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = Some(DialogOutcome::Confirmed(self.color));
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(DialogOutcome::Cancelled);
                }
            });
        });

        if outcome.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = Some(DialogOutcome::Cancelled);
        }
        outcome
    }
}

/// The dialog currently blocking canvas input, if any
#[derive(Debug, Clone)]
pub enum Dialog {
    Text(TextDialog),
    Color(ColorDialog),
}

fn modal_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
}
