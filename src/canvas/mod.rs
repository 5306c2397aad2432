use egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::error::CanvasResult;

mod scene;
pub use scene::Scene;

/// Handle to a primitive placed on a [`Canvas`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(u64);

impl PrimitiveId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Dash pattern for outlines: `dash` pixels drawn, then `gap` pixels skipped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub dash: f32,
    pub gap: f32,
}

impl Default for DashPattern {
    fn default() -> Self {
        Self { dash: 4.0, gap: 2.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

/// How the outline of a primitive is stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color32,
    pub width: f32,
    pub dash: Option<DashPattern>,
}

impl Outline {
    pub fn solid(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Color32, width: f32, pattern: DashPattern) -> Self {
        Self {
            color,
            width,
            dash: Some(pattern),
        }
    }

    pub fn stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.width, self.color)
    }
}

/// A single rendered item on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Pos2,
        to: Pos2,
        outline: Outline,
        cap: LineCap,
    },
    /// Axis-aligned box with `from` and `to` as opposite corners
    Rectangle {
        from: Pos2,
        to: Pos2,
        outline: Outline,
    },
    /// Ellipse inscribed in `bounds`
    Oval { bounds: Rect, outline: Outline },
    /// Text anchored at its top-left corner
    Text {
        pos: Pos2,
        text: String,
        color: Color32,
        font_size: f32,
    },
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Rectangle { .. } => "rectangle",
            Self::Oval { .. } => "oval",
            Self::Text { .. } => "text",
        }
    }

    pub fn is_dashed(&self) -> bool {
        match self {
            Self::Line { outline, .. }
            | Self::Rectangle { outline, .. }
            | Self::Oval { outline, .. } => outline.dash.is_some(),
            Self::Text { .. } => false,
        }
    }
}

/// Drawing surface driven by the controller.
///
/// Every draw call appends a primitive above the existing ones and returns
/// a handle to it. Handles stay valid until the primitive is deleted or the
/// canvas is cleared.
pub trait Canvas {
    fn draw_line(&mut self, from: Pos2, to: Pos2, outline: Outline, cap: LineCap) -> PrimitiveId;

    fn draw_rectangle(&mut self, from: Pos2, to: Pos2, outline: Outline) -> PrimitiveId;

    fn draw_oval(&mut self, bounds: Rect, outline: Outline) -> PrimitiveId;

    fn draw_text(&mut self, pos: Pos2, text: &str, color: Color32, font_size: f32) -> PrimitiveId;

    /// Remove a primitive
    fn delete(&mut self, id: PrimitiveId) -> CanvasResult<()>;

    /// Move a primitive above every other primitive
    fn raise(&mut self, id: PrimitiveId) -> CanvasResult<()>;

    /// Remove every primitive
    fn clear_all(&mut self);
}
