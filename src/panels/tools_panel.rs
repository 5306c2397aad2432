use crate::PaintApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::style::color_name;
use crate::tool::ToolMode;

const SWATCH_COLUMNS: usize = 3;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        let enabled = !app.has_dialog();
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal_top(|ui| {
                tool_group(ui, "Tools", |ui| {
                    mode_button(app, ui, ToolMode::Pen);
                    mode_button(app, ui, ToolMode::Eraser);
                    if ToolButton::new("Clear All", false).show(ui).clicked() {
                        app.clear_canvas();
                    }
                    mode_button(app, ui, ToolMode::Text);
                });

                tool_group(ui, "Shapes", |ui| {
                    mode_button(app, ui, ToolMode::Line);
                    mode_button(app, ui, ToolMode::Rectangle);
                    mode_button(app, ui, ToolMode::Circle);
                });

                tool_group(ui, "Size", |ui| {
                    let current = app.controller().style().width;
                    let presets = app.config().size_presets.clone();
                    for preset in presets {
                        if ToolButton::new(&preset.label, preset.width == current)
                            .show(ui)
                            .clicked()
                        {
                            log::info!("Size selected from UI: {}", preset.label);
                            app.set_pen_size(preset.width);
                        }
                    }
                });

                tool_group(ui, "Colors", |ui| {
                    if ui.button("More Colors...").clicked() {
                        app.open_color_chooser();
                    }

                    let current = app.controller().style().color;
                    let colors = app.config().palette_colors();
                    egui::Grid::new("quick_colors")
                        .spacing([2.0, 2.0])
                        .show(ui, |ui| {
                            for (i, color) in colors.into_iter().enumerate() {
                                if ColorSwatch::new(color, color == current).show(ui).clicked() {
                                    log::info!("Color selected from UI: {}", color_name(color));
                                    app.set_pen_color(color);
                                }
                                if (i + 1) % SWATCH_COLUMNS == 0 {
                                    ui.end_row();
                                }
                            }
                        });
                });
            });
        });
    });
}

pub fn status_panel(app: &PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        let controller = app.controller();
        let style = controller.style();
        ui.horizontal(|ui| {
            ui.label(format!("Mode: {}", controller.mode().hint()));
            ui.separator();
            ui.label(format!("Color: {}", color_name(style.color)));
            ui.separator();
            ui.label(format!("Size: {}", style.width));
            ui.separator();
            ui.label(format!("Items: {}", app.scene().len()));
        });
    });
}

fn tool_group(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.strong(title);
            add_contents(ui);
        });
    });
}

fn mode_button(app: &mut PaintApp, ui: &mut egui::Ui, mode: ToolMode) {
    let selected = app.controller().mode() == mode;
    if ToolButton::new(mode.label(), selected).show(ui).clicked() {
        log::info!("Tool selected from UI: {}", mode);
        app.select_tool(mode);
    }
}
