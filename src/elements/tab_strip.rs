// Tab Strip Component
// Renders the header row of a tabbed pane and maps clicks back to tab indices

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::PanePalette;
use crate::utilities::DimmingContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripStyle {
    /// Curved brackets around the selected header: ╯ TAB ╰ with ╭───╮ above
    Tab,
    /// Plain text with separators: ─ TAB ─
    Text,
    /// Square brackets around the selected header: [ TAB ]
    Boxed,
}

impl StripStyle {
    /// Parse a style from config ("tab", "text", "boxed"); unknown values fall back to Tab
    pub fn from_str(style: &str) -> Self {
        match style.to_lowercase().as_str() {
            "tabbed" | "tab" => StripStyle::Tab,
            "boxed" => StripStyle::Boxed,
            "text" => StripStyle::Text,
            _ => StripStyle::Tab,
        }
    }
}

/// One header in the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderItem {
    pub label: String,
    pub selected: bool,
    pub enabled: bool,
}

/// Bounding box for a header (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this header's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A run of spans that is laid out (or dropped) as a unit
struct Group {
    spans: Vec<Span<'static>>,
    header: Option<usize>,
    width: u16,
}

impl Group {
    fn new(spans: Vec<Span<'static>>, header: Option<usize>) -> Self {
        let width = spans.iter().map(|s| s.content.chars().count() as u16).sum();
        Self { spans, header, width }
    }
}

pub struct TabStrip {
    pub items: Vec<HeaderItem>,
    pub style: StripStyle,
    pub color: Color,
    pub palette: PanePalette,
}

impl TabStrip {
    pub fn new(items: Vec<HeaderItem>, style: StripStyle) -> Self {
        Self {
            items,
            style,
            color: Color::Cyan,
            palette: PanePalette::default(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_palette(mut self, palette: PanePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Full width of the strip when nothing is truncated
    pub fn estimate_width(&self) -> u16 {
        self.groups(&DimmingContext::default())
            .iter()
            .map(|g| g.width)
            .sum()
    }

    /// Bounds of every header that fits in `area` (headers are drawn on its first row)
    pub fn calculate_tab_bounds(&self, area: Rect) -> Vec<TabBounds> {
        if area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let mut bounds = Vec::new();
        let mut current_x = area.x;
        for group in self.fitted_groups(area.width, &DimmingContext::default()) {
            if group.header.is_some() {
                bounds.push(TabBounds {
                    x: current_x,
                    y: area.y,
                    width: group.width,
                    height: 1,
                });
            }
            current_x += group.width;
        }
        bounds
    }

    /// Get the index of the header at the given coordinates (for click handling)
    pub fn get_tab_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let mut current_x = area.x;
        if area.width == 0 || area.height == 0 || y != area.y {
            return None;
        }
        for group in self.fitted_groups(area.width, &DimmingContext::default()) {
            let hit = x >= current_x && x < current_x + group.width;
            if hit {
                return group.header;
            }
            current_x += group.width;
        }
        None
    }

    /// Build the header line, truncated to `max_width`
    pub fn build_tab_line(&self, max_width: u16, dimming: &DimmingContext) -> Line<'static> {
        let spans: Vec<Span<'static>> = self
            .fitted_groups(max_width, dimming)
            .into_iter()
            .flat_map(|g| g.spans)
            .collect();
        Line::from(spans)
    }

    /// Build the decorative ╭───╮ line drawn one row above the selected header (Tab style only)
    pub fn build_top_line(&self, max_width: u16, dimming: &DimmingContext) -> Option<Line<'static>> {
        if self.style != StripStyle::Tab {
            return None;
        }

        let mut offset = 0u16;
        for group in self.fitted_groups(max_width, dimming) {
            let selected = group
                .header
                .and_then(|idx| self.items.get(idx))
                .map(|item| item.selected)
                .unwrap_or(false);
            if selected {
                let inner_width = group.width.saturating_sub(2) as usize;
                let style = Style::default().fg(dimming.dim_color(Color::White));
                return Some(Line::from(vec![
                    Span::raw(" ".repeat(offset as usize)),
                    Span::styled(format!("╭{}╮", "─".repeat(inner_width)), style),
                ]));
            }
            offset += group.width;
        }
        None
    }

    /// Render the header line on the first row of `area` and, for Tab style, the
    /// decoration on the row above when `area` starts below `top_limit`
    pub fn render(&self, area: Rect, top_limit: u16, buf: &mut Buffer, dimming: &DimmingContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if area.y > top_limit {
            if let Some(top_line) = self.build_top_line(area.width, dimming) {
                let top_area = Rect {
                    y: area.y - 1,
                    height: 1,
                    ..area
                };
                Paragraph::new(top_line).render(top_area, buf);
            }
        }

        let line = self.build_tab_line(area.width, dimming);
        Paragraph::new(line).render(Rect { height: 1, ..area }, buf);
    }

    /// Groups that fit in `max_width`; the first header or separator that overflows ends the strip
    fn fitted_groups(&self, max_width: u16, dimming: &DimmingContext) -> Vec<Group> {
        let mut used = 0u16;
        let mut fitted = Vec::new();
        for group in self.groups(dimming) {
            if used + group.width > max_width {
                break;
            }
            used += group.width;
            fitted.push(group);
        }
        fitted
    }

    fn groups(&self, dimming: &DimmingContext) -> Vec<Group> {
        let line_style = Style::default().fg(dimming.dim_color(self.color));
        let bracket_style = Style::default().fg(dimming.dim_color(Color::White));
        let bracketed = matches!(self.style, StripStyle::Tab | StripStyle::Boxed);

        let mut groups = Vec::new();

        // Leading separator connects directly to ╯ when the first header is selected
        let first_selected = self.items.first().map(|i| i.selected).unwrap_or(false);
        let leading = if first_selected && self.style == StripStyle::Tab { "──" } else { "── " };
        groups.push(Group::new(vec![Span::styled(leading, line_style)], None));

        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                let prev_selected = self.items[idx - 1].selected;
                let separator = match (bracketed, prev_selected, item.selected) {
                    (true, true, _) => "─ ",
                    (true, false, true) => " ─",
                    _ => " ─ ",
                };
                groups.push(Group::new(vec![Span::styled(separator, line_style)], None));
            }

            let label_style = self.header_style(item, dimming);
            let spans = match (self.style, item.selected) {
                (StripStyle::Tab, true) => vec![
                    Span::styled("╯ ", bracket_style),
                    Span::styled(item.label.clone(), label_style),
                    Span::styled(" ╰", bracket_style),
                ],
                (StripStyle::Boxed, true) => vec![
                    Span::styled("[ ", bracket_style),
                    Span::styled(item.label.clone(), label_style),
                    Span::styled(" ]", bracket_style),
                ],
                _ => vec![Span::styled(item.label.clone(), label_style)],
            };
            groups.push(Group::new(spans, Some(idx)));
        }

        let last_selected = self.items.last().map(|i| i.selected).unwrap_or(false);
        let trailing = if last_selected && bracketed { "─" } else { " ──" };
        if !self.items.is_empty() {
            groups.push(Group::new(vec![Span::styled(trailing, line_style)], None));
        }

        groups
    }

    fn header_style(&self, item: &HeaderItem, dimming: &DimmingContext) -> Style {
        if item.selected {
            Style::default()
                .fg(dimming.dim_color(self.color))
                .bg(self.palette.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            let style = Style::default()
                .fg(dimming.header_color(false, item.enabled))
                .bg(self.palette.unselected_bg);
            if item.enabled {
                style
            } else {
                style.add_modifier(Modifier::DIM)
            }
        }
    }
}
