use egui::{Color32, Response, Sense, Stroke, Ui};

const BUTTON_WIDTH: f32 = 80.0;
const SWATCH_SIZE: f32 = 20.0;

/// Fixed-width toolbar button, highlighted while its tool is active
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self { label, selected }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let button_size = egui::vec2(BUTTON_WIDTH, ui.spacing().interact_size.y);
        let (rect, response) = ui.allocate_exact_size(button_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);
            ui.painter().rect(rect, 3.0, visuals.weak_bg_fill, visuals.bg_stroke);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::TextStyle::Button.resolve(ui.style()),
                visuals.text_color(),
            );
        }

        response
    }
}

/// Quick color button
pub struct ColorSwatch {
    pub color: Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 2.0, self.color);

            // Draw border, heavier when selected or hovered
            let border = if self.selected {
                Stroke::new(2.0, Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                Stroke::new(1.5, Color32::from_gray(40))
            } else {
                Stroke::new(1.0, Color32::from_gray(120))
            };
            ui.painter().rect_stroke(rect, 2.0, border);
        }

        response
    }
}
