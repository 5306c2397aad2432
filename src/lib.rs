#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod error;
pub mod input;
pub mod panels;
pub mod style;
pub mod tool;

pub use app::PaintApp;
pub use canvas::{Canvas, Primitive, PrimitiveId, Scene};
pub use config::PaintConfig;
pub use controller::{DrawingController, TextPrompt};
pub use input::{CanvasEvent, InputHandler};
pub use style::PenStyle;
pub use tool::{ShapeKind, ToolMode};
