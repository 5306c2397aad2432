use egui::Color32;

/// Named colors understood by the toolbar and the settings file
pub const NAMED_COLORS: [(&str, Color32); 9] = [
    ("black", Color32::from_rgb(0, 0, 0)),
    ("gray", Color32::from_rgb(190, 190, 190)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("green", Color32::from_rgb(0, 255, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("purple", Color32::from_rgb(160, 32, 240)),
];

/// Pen color and stroke width shared by every drawing mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenStyle {
    pub color: Color32,
    /// Stroke width in pixels, always at least 1
    pub width: u32,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: 3,
        }
    }
}

impl PenStyle {
    pub fn new(color: Color32, width: u32) -> Self {
        Self {
            color,
            width: width.max(1),
        }
    }

    pub fn stroke_width(&self) -> f32 {
        self.width as f32
    }

    /// Font size used for text placed with this pen
    pub fn font_size(&self) -> f32 {
        self.width as f32 * 2.0
    }
}

/// Parse a color given either by name (`"red"`) or as `#rrggbb`.
pub fn parse_color(spec: &str) -> Option<Color32> {
    let spec = spec.trim();
    if let Some(hex) = spec.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(spec))
        .map(|(_, color)| *color)
}

/// Format a color the way the status line shows it
pub fn color_name(color: Color32) -> String {
    NAMED_COLORS
        .iter()
        .find(|(_, named)| *named == color)
        .map(|(name, _)| (*name).to_string())
        .unwrap_or_else(|| format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_is_twice_the_width() {
        let style = PenStyle::new(Color32::RED, 8);
        assert_eq!(style.font_size(), 16.0);
    }

    #[test]
    fn test_font_size_of_huge_width_does_not_overflow() {
        let style = PenStyle::new(Color32::BLACK, u32::MAX);
        assert_eq!(style.font_size(), u32::MAX as f32 * 2.0);
    }

    #[test]
    fn test_width_is_never_zero() {
        assert_eq!(PenStyle::new(Color32::BLACK, 0).width, 1);
    }

    #[test]
    fn test_parse_named_and_hex_colors() {
        assert_eq!(parse_color("Purple"), Some(Color32::from_rgb(160, 32, 240)));
        assert_eq!(parse_color("#ff8000"), Some(Color32::from_rgb(255, 128, 0)));
        assert_eq!(parse_color("#ff80"), None);
        assert_eq!(parse_color("#gg0000"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_color_name_falls_back_to_hex() {
        assert_eq!(color_name(Color32::from_rgb(0, 0, 255)), "blue");
        assert_eq!(color_name(Color32::from_rgb(1, 2, 3)), "#010203");
    }
}
