//! The drawing-mode state machine.
//!
//! [`DrawingController`] turns pointer events into draw calls on a
//! [`Canvas`]. It holds two kinds of in-progress state, and the active
//! [`ToolMode`] decides which one may be set:
//!
//! ```text
//!   Pen / Eraser            stroke anchor: last pointer position of a drag
//!   Line / Rectangle /      shape anchor: first click of a two-click shape,
//!   Circle                  plus the handle of the dashed preview
//!   Text                    neither
//! ```
//!
//! Selecting a tool resets both and deletes the preview, so the two are never
//! set together.

use egui::{Color32, Pos2, Rect, Vec2};

use crate::canvas::{Canvas, DashPattern, LineCap, Outline, PrimitiveId};
use crate::config::{MAX_STROKE_WIDTH, PaintConfig};
use crate::error::CanvasResult;
use crate::style::PenStyle;
use crate::tool::{ShapeKind, ToolMode};

/// Source of the string placed by the Text tool.
///
/// Returning `None` means the user cancelled the prompt.
pub trait TextPrompt {
    fn ask_text(&mut self, at: Pos2) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: FnMut(Pos2) -> Option<String>,
{
    fn ask_text(&mut self, at: Pos2) -> Option<String> {
        self(at)
    }
}

#[derive(Debug, Clone)]
pub struct DrawingController {
    mode: ToolMode,
    style: PenStyle,
    eraser_width: u32,
    background: Color32,
    preview_dash: DashPattern,
    /// Previous pointer position while dragging in Pen or Eraser mode
    stroke_anchor: Option<Pos2>,
    /// First click of a two-click shape
    shape_anchor: Option<Pos2>,
    preview: Option<PrimitiveId>,
}

impl Default for DrawingController {
    fn default() -> Self {
        Self::from_config(&PaintConfig::default())
    }
}

impl DrawingController {
    pub fn from_config(config: &PaintConfig) -> Self {
        Self {
            mode: ToolMode::Pen,
            style: config.pen_style(),
            eraser_width: config.eraser_size.max(1),
            background: config.background_color(),
            preview_dash: config.preview_dash,
            stroke_anchor: None,
            shape_anchor: None,
            preview: None,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn style(&self) -> PenStyle {
        self.style
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn eraser_width(&self) -> u32 {
        self.eraser_width
    }

    pub fn stroke_anchor(&self) -> Option<Pos2> {
        self.stroke_anchor
    }

    pub fn shape_anchor(&self) -> Option<Pos2> {
        self.shape_anchor
    }

    /// Handle of the dashed shape preview currently on the canvas
    pub fn preview(&self) -> Option<PrimitiveId> {
        self.preview
    }

    /// Switch tool, abandoning any stroke or shape in progress.
    pub fn select_tool(&mut self, mode: ToolMode, canvas: &mut impl Canvas) {
        self.stroke_anchor = None;
        self.shape_anchor = None;
        self.discard_preview(canvas);

        if self.mode != mode {
            log::info!("Mode: {}", mode.hint());
        }
        self.mode = mode;
    }

    /// Set the pen color. Returns to the Pen tool.
    pub fn set_pen_color(&mut self, color: Color32, canvas: &mut impl Canvas) {
        self.style.color = color;
        self.select_tool(ToolMode::Pen, canvas);
    }

    /// Result of the color chooser; `None` means it was cancelled and
    /// nothing changes.
    pub fn choose_color(&mut self, choice: Option<Color32>, canvas: &mut impl Canvas) {
        match choice {
            Some(color) => self.set_pen_color(color, canvas),
            None => log::debug!("Color selection cancelled"),
        }
    }

    /// Set the pen width, clamped to `1..=MAX_STROKE_WIDTH`. Returns to the Pen tool.
    pub fn set_pen_size(&mut self, width: u32, canvas: &mut impl Canvas) {
        self.style.width = width.clamp(1, MAX_STROKE_WIDTH);
        self.select_tool(ToolMode::Pen, canvas);
    }

    /// Remove everything from the canvas. Mode and pen style are kept.
    pub fn clear(&mut self, canvas: &mut impl Canvas) {
        canvas.clear_all();
        // the preview went with everything else
        self.preview = None;
        log::info!("Canvas cleared");
    }

    pub fn pointer_down(
        &mut self,
        pos: Pos2,
        canvas: &mut impl Canvas,
        prompt: &mut impl TextPrompt,
    ) {
        match self.mode {
            ToolMode::Pen | ToolMode::Eraser => {
                self.stroke_anchor = Some(pos);
            }
            ToolMode::Line | ToolMode::Rectangle | ToolMode::Circle => {
                match self.shape_anchor.take() {
                    None => self.shape_anchor = Some(pos),
                    Some(anchor) => self.commit_shape(anchor, pos, canvas),
                }
            }
            ToolMode::Text => {
                let text = prompt.ask_text(pos);
                self.place_text(pos, text.as_deref(), canvas);
                self.select_tool(ToolMode::Pen, canvas);
            }
        }
    }

    /// Pointer moved while the button is held.
    pub fn pointer_move(&mut self, pos: Pos2, canvas: &mut impl Canvas) {
        if self.mode.is_freehand() {
            self.extend_stroke(pos, canvas);
        } else if let Some(kind) = self.mode.shape() {
            self.update_preview(kind, pos, canvas);
        }
    }

    pub fn pointer_up(&mut self, _pos: Pos2) {
        // shapes commit on the second press, not on release
        if self.mode.is_freehand() {
            self.stroke_anchor = None;
        }
    }

    /// Draw `text` at `pos` with the current pen. Empty or missing text is
    /// ignored.
    pub fn place_text(
        &mut self,
        pos: Pos2,
        text: Option<&str>,
        canvas: &mut impl Canvas,
    ) -> Option<PrimitiveId> {
        let text = text.filter(|text| !text.is_empty())?;
        log::info!("Placing text at ({}, {})", pos.x, pos.y);
        Some(canvas.draw_text(pos, text, self.style.color, self.style.font_size()))
    }

    fn extend_stroke(&mut self, pos: Pos2, canvas: &mut impl Canvas) {
        let Some(from) = self.stroke_anchor else {
            return;
        };

        let outline = if self.mode == ToolMode::Eraser {
            Outline::solid(self.background, self.eraser_width as f32)
        } else {
            Outline::solid(self.style.color, self.style.stroke_width())
        };
        canvas.draw_line(from, pos, outline, LineCap::Round);
        log::trace!("Segment ({}, {}) -> ({}, {})", from.x, from.y, pos.x, pos.y);
        self.stroke_anchor = Some(pos);
    }

    fn update_preview(&mut self, kind: ShapeKind, pos: Pos2, canvas: &mut impl Canvas) {
        let Some(anchor) = self.shape_anchor else {
            return;
        };

        self.discard_preview(canvas);
        let outline = Outline::dashed(self.style.color, self.style.stroke_width(), self.preview_dash);
        let id = draw_shape(canvas, kind, anchor, pos, outline);
        log_canvas_error("raise shape preview", canvas.raise(id));
        self.preview = Some(id);
    }

    fn commit_shape(&mut self, anchor: Pos2, end: Pos2, canvas: &mut impl Canvas) {
        let Some(kind) = self.mode.shape() else {
            return;
        };

        self.discard_preview(canvas);
        let outline = Outline::solid(self.style.color, self.style.stroke_width());
        draw_shape(canvas, kind, anchor, end, outline);
        log::info!(
            "{:?} committed from ({}, {}) to ({}, {})",
            kind,
            anchor.x,
            anchor.y,
            end.x,
            end.y
        );
    }

    fn discard_preview(&mut self, canvas: &mut impl Canvas) {
        if let Some(id) = self.preview.take() {
            log_canvas_error("delete shape preview", canvas.delete(id));
        }
    }
}

/// Bounding box of the circle centered on `center` that passes through `edge`
pub fn circle_bounds(center: Pos2, edge: Pos2) -> Rect {
    let radius = center.distance(edge);
    Rect::from_center_size(center, Vec2::splat(radius * 2.0))
}

fn draw_shape(
    canvas: &mut impl Canvas,
    kind: ShapeKind,
    anchor: Pos2,
    end: Pos2,
    outline: Outline,
) -> PrimitiveId {
    match kind {
        ShapeKind::Line => {
            let cap = if outline.dash.is_some() {
                LineCap::Butt
            } else {
                LineCap::Round
            };
            canvas.draw_line(anchor, end, outline, cap)
        }
        ShapeKind::Rectangle => canvas.draw_rectangle(anchor, end, outline),
        ShapeKind::Circle => canvas.draw_oval(circle_bounds(anchor, end), outline),
    }
}

fn log_canvas_error(action: &str, result: CanvasResult<()>) {
    if let Err(err) = result {
        log::warn!("Failed to {action}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Primitive, Scene};

    fn no_text(_: Pos2) -> Option<String> {
        None
    }

    #[test]
    fn test_circle_bounds() {
        let bounds = circle_bounds(Pos2::new(0.0, 0.0), Pos2::new(3.0, 4.0));
        assert_eq!(bounds.min, Pos2::new(-5.0, -5.0));
        assert_eq!(bounds.max, Pos2::new(5.0, 5.0));
    }

    #[test]
    fn test_preview_is_raised_above_strokes() {
        let mut scene = Scene::new();
        let mut controller = DrawingController::default();
        controller.select_tool(ToolMode::Line, &mut scene);
        controller.pointer_down(Pos2::new(1.0, 1.0), &mut scene, &mut no_text);
        controller.pointer_move(Pos2::new(8.0, 2.0), &mut scene);

        let (top, primitive) = scene.top().unwrap();
        assert_eq!(Some(top), controller.preview());
        assert!(primitive.is_dashed());
        assert!(matches!(primitive, Primitive::Line { cap: LineCap::Butt, .. }));
    }

    #[test]
    fn test_stale_preview_handle_is_tolerated() {
        let mut scene = Scene::new();
        let mut controller = DrawingController::default();
        controller.select_tool(ToolMode::Rectangle, &mut scene);
        controller.pointer_down(Pos2::ZERO, &mut scene, &mut no_text);
        controller.pointer_move(Pos2::new(4.0, 4.0), &mut scene);

        // Someone else wiped the canvas behind the controller's back
        scene.clear_all();
        controller.pointer_move(Pos2::new(6.0, 6.0), &mut scene);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.top().map(|(id, _)| id), controller.preview());
    }

    #[test]
    fn test_move_without_press_draws_nothing() {
        let mut scene = Scene::new();
        let mut controller = DrawingController::default();
        controller.pointer_move(Pos2::new(3.0, 3.0), &mut scene);
        controller.select_tool(ToolMode::Circle, &mut scene);
        controller.pointer_move(Pos2::new(3.0, 3.0), &mut scene);
        assert!(scene.is_empty());
    }
}
