use egui::CursorIcon;

/// The shapes drawn with the two-click protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    /// Centered on the first click, passing through the second
    Circle,
}

/// Drawing mode selected from the toolbar.
///
/// Exactly one mode is active at a time. Pen and Eraser draw while the
/// pointer is dragged, the shape modes commit on a second click, and Text
/// places a string where the canvas is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Pen,
    Eraser,
    Line,
    Rectangle,
    Circle,
    Text,
}

impl ToolMode {
    pub const ALL: [ToolMode; 6] = [
        ToolMode::Pen,
        ToolMode::Eraser,
        ToolMode::Line,
        ToolMode::Rectangle,
        ToolMode::Circle,
        ToolMode::Text,
    ];

    /// Return the name of the mode as shown on its toolbar button
    pub fn label(self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Text => "Text",
        }
    }

    /// Usage hint shown in the status line while the mode is active
    pub fn hint(self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
            Self::Line => "Line (Click twice: start and end points)",
            Self::Rectangle => "Rectangle (Click twice: opposite corners)",
            Self::Circle => "Circle (Click twice: center and a point on circumference)",
            Self::Text => "Text (Click to place, then type in dialog)",
        }
    }

    pub fn cursor(self) -> CursorIcon {
        match self {
            Self::Pen => CursorIcon::Default,
            Self::Eraser => CursorIcon::Cell,
            Self::Line | Self::Rectangle | Self::Circle => CursorIcon::Crosshair,
            Self::Text => CursorIcon::Text,
        }
    }

    /// True for the modes that draw connected segments while dragging
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }

    /// The shape committed by this mode, if it is a two-click shape mode
    pub fn shape(self) -> Option<ShapeKind> {
        match self {
            Self::Line => Some(ShapeKind::Line),
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Circle => Some(ShapeKind::Circle),
            _ => None,
        }
    }
}

impl std::fmt::Display for ToolMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
