// Build script - reads config.yaml at compile time and generates pane defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const DEFAULT_TAB_HEIGHT: u16 = {tab_height};
pub const SHOW_TABS: bool = {show_tabs};
pub const ACCEPT_DROPS: bool = {accept_drops};
pub const STRIP_STYLE: &str = "{style}";
pub const STRIP_COLOR: &str = "{color}";

// Header background colors (RGB tuples)
pub const SELECTED_BG: (u8, u8, u8) = {selected_bg};
pub const UNSELECTED_BG: (u8, u8, u8) = {unselected_bg};

// Content border colors (RGB tuples): light edge top/left, dark edge bottom/right
pub const BORDER_LIGHT: (u8, u8, u8) = {border_light};
pub const BORDER_DARK: (u8, u8, u8) = {border_dark};
"#,
        tab_height = config.tab_height,
        show_tabs = config.show_tabs,
        accept_drops = config.accept_drops,
        style = config.style,
        color = config.color,
        selected_bg = rgb_literal(config.selected_bg),
        unselected_bg = rgb_literal(config.unselected_bg),
        border_light = rgb_literal(config.border_light),
        border_dark = rgb_literal(config.border_dark),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    tab_height: u16,
    show_tabs: bool,
    accept_drops: bool,
    style: String,
    color: String,
    selected_bg: (u8, u8, u8),
    unselected_bg: (u8, u8, u8),
    border_light: (u8, u8, u8),
    border_dark: (u8, u8, u8),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            tab_height: 1,
            show_tabs: true,
            accept_drops: false,
            style: "tab".to_string(),
            color: "cyan".to_string(),
            selected_bg: (26, 42, 42),      // #1a2a2a
            unselected_bg: (21, 21, 21),    // #151515
            border_light: (246, 246, 255),  // #f6f6ff
            border_dark: (166, 166, 175),   // #a6a6af
        }
    }
}

fn rgb_literal(rgb: (u8, u8, u8)) -> String {
    format!("({}, {}, {})", rgb.0, rgb.1, rgb.2)
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_defaults = false;
    let mut in_colors = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Top-level keys (no indentation) open or close sections
        let top_level = !line.starts_with(' ') && !line.starts_with('\t');
        if top_level {
            in_defaults = trimmed.starts_with("defaults:");
            in_colors = false;
            continue;
        }
        if !in_defaults {
            continue;
        }
        if trimmed.starts_with("colors:") {
            in_colors = true;
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        if in_colors {
            match key {
                "selected_bg" => config.selected_bg = parse_hex_color(value, config.selected_bg),
                "unselected_bg" => config.unselected_bg = parse_hex_color(value, config.unselected_bg),
                "border_light" => config.border_light = parse_hex_color(value, config.border_light),
                "border_dark" => config.border_dark = parse_hex_color(value, config.border_dark),
                _ => {
                    // Unknown key in colors section - back to plain defaults
                    in_colors = false;
                }
            }
            if in_colors {
                continue;
            }
        }

        match key {
            "tab_height" => config.tab_height = value.parse().unwrap_or(config.tab_height).max(1),
            "show_tabs" => config.show_tabs = parse_bool(value),
            "accept_drops" => config.accept_drops = parse_bool(value),
            "style" => config.style = value.trim_matches('"').to_string(),
            "color" => config.color = value.trim_matches('"').to_string(),
            _ => {}
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments, but keep a leading # (hex color)
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.trim_matches('"').to_lowercase().as_str(), "true" | "yes" | "1")
}

fn parse_hex_color(s: &str, fallback: (u8, u8, u8)) -> (u8, u8, u8) {
    let s = s.trim().trim_matches('"').trim_matches('\'');
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return (r, g, b);
        }
    }

    fallback
}
