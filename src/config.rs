//! Application settings.
//!
//! Every setting has a default matching the stock toolbar, so the settings
//! file only needs the values a user wants to change. The file is JSON and is
//! located through the `PAINT_CANVAS_CONFIG` environment variable.
//!
//! ```json
//! {
//!     "pen_color": "blue",
//!     "pen_size": 5,
//!     "size_presets": [{ "label": "Fine", "width": 1 }]
//! }
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::canvas::DashPattern;
use crate::error::ConfigError;
use crate::style::{NAMED_COLORS, PenStyle, parse_color};

/// Environment variable holding the path of the settings file
pub const CONFIG_ENV_VAR: &str = "PAINT_CANVAS_CONFIG";

/// Widest pen or eraser stroke accepted, in pixels
pub const MAX_STROKE_WIDTH: u32 = 100;
const CANVAS_SIDE_RANGE: std::ops::RangeInclusive<u32> = 100..=4000;

/// A toolbar button that sets the pen width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizePreset {
    pub label: String,
    pub width: u32,
}

impl SizePreset {
    fn new(label: &str, width: u32) -> Self {
        Self {
            label: label.to_owned(),
            width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields keep their default values
pub struct PaintConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Canvas color, also the color painted by the eraser
    pub background: String,
    pub pen_color: String,
    pub pen_size: u32,
    pub eraser_size: u32,
    pub size_presets: Vec<SizePreset>,
    /// Quick colors shown as swatches
    pub palette: Vec<String>,
    /// Dash pattern of shape previews
    pub preview_dash: DashPattern,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_width: 700,
            canvas_height: 500,
            background: "white".to_owned(),
            pen_color: "black".to_owned(),
            pen_size: 3,
            eraser_size: 15,
            size_presets: vec![
                SizePreset::new("Small", 3),
                SizePreset::new("Medium", 8),
                SizePreset::new("Large", 15),
            ],
            palette: NAMED_COLORS.iter().map(|(name, _)| (*name).to_owned()).collect(),
            preview_dash: DashPattern::default(),
        }
    }
}

impl PaintConfig {
    /// Load settings from the file named by [`CONFIG_ENV_VAR`].
    ///
    /// Falls back to the defaults when the variable is unset or the file
    /// cannot be used.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            log::debug!("{CONFIG_ENV_VAR} not set, using default settings");
            return Self::default();
        };

        match Self::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(contents)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Replace values that would make the canvas unusable, logging each fix.
    fn validate_and_clamp(&mut self) {
        let defaults = Self::default();

        for (name, side) in [
            ("canvas_width", &mut self.canvas_width),
            ("canvas_height", &mut self.canvas_height),
        ] {
            if !CANVAS_SIDE_RANGE.contains(&*side) {
                let clamped = (*side).clamp(*CANVAS_SIDE_RANGE.start(), *CANVAS_SIDE_RANGE.end());
                log::warn!("Invalid {name} {side}, clamping to {clamped}");
                *side = clamped;
            }
        }

        self.pen_size = clamp_width("pen_size", self.pen_size);
        self.eraser_size = clamp_width("eraser_size", self.eraser_size);
        for preset in &mut self.size_presets {
            preset.width = clamp_width(&preset.label, preset.width);
        }

        for (name, spec, fallback) in [
            ("background", &mut self.background, defaults.background),
            ("pen_color", &mut self.pen_color, defaults.pen_color),
        ] {
            if parse_color(spec).is_none() {
                log::warn!("Unknown color {spec:?} for {name}, using {fallback}");
                *spec = fallback;
            }
        }

        self.palette.retain(|spec| {
            let known = parse_color(spec).is_some();
            if !known {
                log::warn!("Dropping unknown palette color {spec:?}");
            }
            known
        });

        if !(self.preview_dash.dash > 0.0 && self.preview_dash.gap >= 0.0) {
            log::warn!("Invalid preview_dash {:?}, using the default", self.preview_dash);
            self.preview_dash = DashPattern::default();
        }
    }

    pub fn background_color(&self) -> Color32 {
        parse_color(&self.background).unwrap_or(Color32::WHITE)
    }

    pub fn pen_style(&self) -> PenStyle {
        PenStyle::new(
            parse_color(&self.pen_color).unwrap_or(Color32::BLACK),
            self.pen_size,
        )
    }

    pub fn palette_colors(&self) -> Vec<Color32> {
        self.palette.iter().filter_map(|spec| parse_color(spec)).collect()
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width as f32, self.canvas_height as f32)
    }
}

fn clamp_width(name: &str, width: u32) -> u32 {
    if (1..=MAX_STROKE_WIDTH).contains(&width) {
        width
    } else {
        let clamped = width.clamp(1, MAX_STROKE_WIDTH);
        log::warn!("Invalid width {width} for {name}, clamping to {clamped}");
        clamped
    }
}
