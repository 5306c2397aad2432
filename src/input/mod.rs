use egui::{Context, Pos2, Rect};

/// Pointer events delivered to the drawing controller.
///
/// Positions are in canvas coordinates: pixels from the canvas' top-left
/// corner, rounded to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved while the button pressed over the canvas is held.
    /// May lie outside the canvas.
    PointerMove { pos: Pos2 },
    /// Primary button released after a press over the canvas
    PointerUp { pos: Pos2 },
}

/// Primary-button state for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Latest known pointer position in screen coordinates
    pub pos: Option<Pos2>,
    /// The canvas widget is the topmost thing under the pointer
    pub over_canvas: bool,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSample {
    pub fn from_egui(ctx: &Context, over_canvas: bool) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.latest_pos(),
            over_canvas,
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Converts raw egui pointer input into [`CanvasEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    /// A press started on the canvas and has not been released yet
    dragging: bool,
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the screen rectangle occupied by the canvas
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Forget any press in progress, e.g. when a modal dialog takes over
    pub fn reset(&mut self) {
        self.dragging = false;
        self.last_pos = None;
    }

    /// Process this frame's egui input. `over_canvas` comes from the canvas
    /// response, so panels covering part of the canvas rect do not count.
    pub fn process_input(&mut self, ctx: &Context, over_canvas: bool) -> Vec<CanvasEvent> {
        self.process_sample(PointerSample::from_egui(ctx, over_canvas))
    }

    pub fn process_sample(&mut self, sample: PointerSample) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let (Some(rect), Some(screen_pos)) = (self.canvas_rect, sample.pos) else {
            if sample.released {
                self.reset();
            }
            return events;
        };
        let pos = to_canvas(rect, screen_pos);

        if sample.pressed && sample.over_canvas && rect.contains(screen_pos) {
            self.dragging = true;
            self.last_pos = Some(pos);
            events.push(CanvasEvent::PointerDown { pos });
        } else if self.dragging && self.last_pos != Some(pos) {
            self.last_pos = Some(pos);
            events.push(CanvasEvent::PointerMove { pos });
        }

        if sample.released && self.dragging {
            events.push(CanvasEvent::PointerUp { pos });
            self.reset();
        }

        events
    }
}

/// Map a screen position to whole-pixel canvas coordinates
fn to_canvas(rect: Rect, screen_pos: Pos2) -> Pos2 {
    (screen_pos - rect.min).to_pos2().round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        let mut handler = InputHandler::new();
        handler.set_canvas_rect(Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(700.0, 500.0)));
        handler
    }

    fn at(x: f32, y: f32) -> PointerSample {
        PointerSample {
            pos: Some(Pos2::new(x, y)),
            over_canvas: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_press_drag_release() {
        let mut handler = handler();

        let down = handler.process_sample(PointerSample { pressed: true, ..at(110.4, 60.6) });
        assert_eq!(down, [CanvasEvent::PointerDown { pos: Pos2::new(10.0, 11.0) }]);
        assert!(handler.is_dragging());

        let moved = handler.process_sample(at(120.0, 60.0));
        assert_eq!(moved, [CanvasEvent::PointerMove { pos: Pos2::new(20.0, 10.0) }]);

        // same pixel again: nothing new to report
        assert!(handler.process_sample(at(120.2, 60.1)).is_empty());

        let up = handler.process_sample(PointerSample { released: true, ..at(120.0, 60.0) });
        assert_eq!(up, [CanvasEvent::PointerUp { pos: Pos2::new(20.0, 10.0) }]);
        assert!(!handler.is_dragging());
    }

    #[test]
    fn test_hover_without_press_is_ignored() {
        let mut handler = handler();
        assert!(handler.process_sample(at(200.0, 200.0)).is_empty());
        assert!(handler.process_sample(PointerSample { released: true, ..at(200.0, 200.0) }).is_empty());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = handler();
        assert!(handler.process_sample(PointerSample { pressed: true, ..at(10.0, 10.0) }).is_empty());
        assert!(handler.process_sample(at(150.0, 150.0)).is_empty());
    }

    #[test]
    fn test_press_on_panel_covering_canvas_is_ignored() {
        let mut handler = handler();
        let covered = PointerSample {
            pressed: true,
            over_canvas: false,
            ..at(400.0, 540.0)
        };
        assert!(handler.process_sample(covered).is_empty());
        assert!(!handler.is_dragging());
        assert!(handler.process_sample(at(410.0, 530.0)).is_empty());
    }

    #[test]
    fn test_drag_may_leave_the_canvas() {
        let mut handler = handler();
        handler.process_sample(PointerSample { pressed: true, ..at(101.0, 51.0) });
        let moved = handler.process_sample(at(90.0, 40.0));
        assert_eq!(moved, [CanvasEvent::PointerMove { pos: Pos2::new(-10.0, -10.0) }]);
    }

    #[test]
    fn test_click_within_one_frame() {
        let mut handler = handler();
        let events = handler.process_sample(PointerSample {
            pressed: true,
            released: true,
            ..at(105.0, 55.0)
        });
        assert_eq!(
            events,
            [
                CanvasEvent::PointerDown { pos: Pos2::new(5.0, 5.0) },
                CanvasEvent::PointerUp { pos: Pos2::new(5.0, 5.0) },
            ]
        );
    }
}
