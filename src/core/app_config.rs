// Pane Defaults
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use ratatui::style::Color;

use crate::elements::tab_strip::StripStyle;
use crate::utilities::{parse_color, rgb_color};

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Tab strip height used when a pane has no explicit (positive) tab height
pub const DEFAULT_TAB_HEIGHT: u16 = compiled::DEFAULT_TAB_HEIGHT;

/// Library-level defaults for new tabbed panes
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct PaneDefaults {
    /// Height of the tab strip band (header rows, excluding the shared border row)
    pub tab_height: u16,

    /// Whether the tab strip is rendered
    pub show_tabs: bool,

    /// Whether a mouse-up over the pane is forwarded as a drop
    pub accept_drops: bool,

    /// Header rendering style
    pub style: StripStyle,

    /// Accent color for the strip
    pub color: Color,

    /// Colors used for header backgrounds and the content border
    pub palette: PanePalette,
}

/// Header and border colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanePalette {
    pub selected_bg: Color,
    pub unselected_bg: Color,
    pub border_light: Color,
    pub border_dark: Color,
}

impl Default for PanePalette {
    fn default() -> Self {
        Self {
            selected_bg: rgb_color(compiled::SELECTED_BG),
            unselected_bg: rgb_color(compiled::UNSELECTED_BG),
            border_light: rgb_color(compiled::BORDER_LIGHT),
            border_dark: rgb_color(compiled::BORDER_DARK),
        }
    }
}

impl Default for PaneDefaults {
    fn default() -> Self {
        Self {
            tab_height: compiled::DEFAULT_TAB_HEIGHT.max(1),
            show_tabs: compiled::SHOW_TABS,
            accept_drops: compiled::ACCEPT_DROPS,
            style: StripStyle::from_str(compiled::STRIP_STYLE),
            color: parse_color(compiled::STRIP_COLOR).unwrap_or(Color::Cyan),
            palette: PanePalette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_tab_height_is_positive() {
        assert!(PaneDefaults::default().tab_height >= 1);
        assert!(DEFAULT_TAB_HEIGHT >= 1);
    }
}
