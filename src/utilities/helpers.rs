// Helper utilities for tabbed pane rendering
use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Convert an RGB tuple (as compiled from config.yaml) to ratatui Color
pub fn rgb_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Parse a color name or `#rrggbb` string
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        return u32::from_str_radix(hex, 16)
            .ok()
            .filter(|_| hex.len() == 6)
            .map(hex_color);
    }

    let parsed = match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return None,
    };
    Some(parsed)
}

/// Dimming context - tracks if a modal covers the pane
pub struct DimmingContext {
    pub modal_visible: bool,
}

impl DimmingContext {
    pub fn new(modal_visible: bool) -> Self {
        Self { modal_visible }
    }

    /// Apply dimming to a color based on modal state
    pub fn dim_color(&self, color: Color) -> Color {
        if self.modal_visible {
            hex_color(0x444444)
        } else {
            color
        }
    }

    /// Header text color for a tab
    pub fn header_color(&self, selected: bool, enabled: bool) -> Color {
        if self.modal_visible || !enabled {
            hex_color(0x444444)
        } else if selected {
            hex_color(0xFFFFFF)
        } else {
            hex_color(0x777777)
        }
    }
}

impl Default for DimmingContext {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_names_and_hex() {
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("#1a2a2a"), Some(Color::Rgb(0x1a, 0x2a, 0x2a)));
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_dimming_greys_out_headers() {
        let dimmed = DimmingContext::new(true);
        assert_eq!(dimmed.header_color(true, true), hex_color(0x444444));
        let normal = DimmingContext::default();
        assert_eq!(normal.header_color(true, true), hex_color(0xFFFFFF));
        assert_eq!(normal.header_color(false, false), hex_color(0x444444));
    }
}
