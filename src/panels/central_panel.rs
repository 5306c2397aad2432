use egui::{Color32, Sense, Stroke};

use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = app.config().canvas_size();
        ui.vertical_centered(|ui| {
            let (response, painter) = ui.allocate_painter(canvas_size, Sense::click_and_drag());
            let canvas_rect = response.rect;

            // Handle input before painting so this frame shows its result
            app.handle_input(ctx, canvas_rect, response.contains_pointer());

            painter.rect_filled(canvas_rect, 0.0, app.controller().background());
            app.scene().paint(&painter, canvas_rect.min);
            // Sunken border
            painter.rect_stroke(canvas_rect, 0.0, Stroke::new(2.0, Color32::from_gray(128)));

            if response.hovered() && !app.has_dialog() {
                ctx.set_cursor_icon(app.controller().mode().cursor());
            }
        });
    });
}
