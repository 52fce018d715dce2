// Layout coordinator for tabbed panes
// Splits the allotted rectangle into a tab-strip band stacked above a content band

use ratatui::layout::Rect;

/// Geometry a parent allots to one of its children
///
/// Explicit `width`/`height` win; otherwise the parent's own size applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Allotment {
    /// Top-left X coordinate
    pub x: u16,
    /// Top-left Y coordinate
    pub y: u16,
    /// Explicit width, if the parent fixed one
    pub width: Option<u16>,
    /// Explicit height, if the parent fixed one
    pub height: Option<u16>,
    /// Width of the parent's client area
    pub parent_width: u16,
    /// Height of the parent's client area
    pub parent_height: u16,
}

impl Allotment {
    pub fn resolved_width(&self) -> u16 {
        self.width.unwrap_or(self.parent_width)
    }

    pub fn resolved_height(&self) -> u16 {
        self.height.unwrap_or(self.parent_height)
    }

    pub fn area(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.resolved_width(),
            height: self.resolved_height(),
        }
    }
}

impl From<Rect> for Allotment {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: Some(rect.width),
            height: Some(rect.height),
            parent_width: rect.width,
            parent_height: rect.height,
        }
    }
}

/// A container able to answer geometry requests from its children
pub trait LayoutParent {
    /// Geometry allotted to the named child
    fn allot(&self, child: &str) -> Allotment;
}

/// A plain rectangle acts as a parent that gives every child all of itself
impl LayoutParent for Rect {
    fn allot(&self, _child: &str) -> Allotment {
        Allotment::from(*self)
    }
}

/// Computed geometry of a tabbed pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneLayout {
    /// The whole pane
    pub container: Rect,
    /// Tab-strip band (zero height when the strip is hidden)
    pub strip: Rect,
    /// Row the tab headers are drawn on (last row of the strip, shared with the content border)
    pub headers: Rect,
    /// Content band, including its border when the strip is shown
    pub content: Rect,
    /// Area forwarded to the visible content pane
    pub content_inner: Rect,
    /// Whether the content band carries a border
    pub bordered: bool,
}

impl PaneLayout {
    /// Height the strip occupies above the content band
    pub fn strip_height(&self) -> u16 {
        self.content.y.saturating_sub(self.container.y)
    }
}

/// Layout coordinator for tab-strip / content splits
pub struct LayoutCoordinator {
    tab_size: u16,
    show_tabs: bool,
}

impl LayoutCoordinator {
    /// Create a coordinator for the given strip size and visibility
    pub const fn new(tab_size: u16, show_tabs: bool) -> Self {
        Self { tab_size, show_tabs }
    }

    /// Rows reserved above the content band
    pub fn strip_offset(&self) -> u16 {
        if self.show_tabs {
            self.tab_size
        } else {
            0
        }
    }

    /// Geometry handed to tab headers: full width, strip height plus the border row
    pub fn header_allotment(&self, allotment: &Allotment) -> Allotment {
        let height = if self.show_tabs { self.tab_size.saturating_add(1) } else { 0 };
        Allotment {
            x: allotment.x,
            y: allotment.y,
            width: None,
            height: None,
            parent_width: allotment.resolved_width(),
            parent_height: height,
        }
    }

    /// Geometry handed to the visible content pane
    pub fn content_allotment(&self, allotment: &Allotment) -> Allotment {
        let offset = self.strip_offset();
        let height = allotment.resolved_height().saturating_sub(offset);
        let width = allotment.resolved_width();
        Allotment {
            x: allotment.x,
            y: allotment.y.saturating_add(offset),
            width: Some(width),
            height: Some(height),
            parent_width: width,
            parent_height: height,
        }
    }

    /// Compute the full pane geometry for an allotment
    /// Note: saturating arithmetic keeps tiny terminals from underflowing
    pub fn compute(&self, allotment: &Allotment) -> PaneLayout {
        let container = allotment.area();

        // The strip is one row taller than the offset: its last row is the content's top border
        let strip_height = if self.show_tabs {
            self.tab_size.saturating_add(1).min(container.height)
        } else {
            0
        };
        let strip = Rect {
            x: container.x,
            y: container.y,
            width: container.width,
            height: strip_height,
        };

        // Content never starts below the container, even when the strip eats all of it
        let content = self.content_allotment(allotment).area();
        let content_y = content.y.min(container.bottom());
        let content = Rect {
            y: content_y,
            height: content.height.min(container.bottom() - content_y),
            ..content
        };

        let headers = if strip_height > 0 {
            Rect {
                x: strip.x,
                y: strip.y + strip_height - 1,
                width: strip.width,
                height: 1,
            }
        } else {
            Rect { height: 0, ..strip }
        };

        let bordered = self.show_tabs;
        let content_inner = if bordered { inner(content) } else { content };

        PaneLayout {
            container,
            strip,
            headers,
            content,
            content_inner,
            bordered,
        }
    }
}

/// Shrink a rectangle by a one-cell border on every side
fn inner(rect: Rect) -> Rect {
    if rect.width < 2 || rect.height < 2 {
        return Rect {
            x: rect.x,
            y: rect.y,
            width: 0,
            height: 0,
        };
    }
    Rect {
        x: rect.x + 1,
        y: rect.y + 1,
        width: rect.width - 2,
        height: rect.height - 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16, height: u16) -> Allotment {
        Allotment::from(Rect { x: 0, y: 0, width, height })
    }

    #[test]
    fn test_shown_strip_splits_area() {
        let layout = LayoutCoordinator::new(2, true).compute(&area(40, 20));
        assert_eq!(layout.strip, Rect { x: 0, y: 0, width: 40, height: 3 }); // tab size + border row
        assert_eq!(layout.content, Rect { x: 0, y: 2, width: 40, height: 18 });
        assert_eq!(layout.headers.y, 2); // shared border row
        assert_eq!(layout.content_inner, Rect { x: 1, y: 3, width: 38, height: 16 });
        assert!(layout.bordered);
        assert_eq!(layout.strip_height(), 2);
    }

    #[test]
    fn test_hidden_strip_gives_content_everything() {
        let layout = LayoutCoordinator::new(2, false).compute(&area(40, 20));
        assert_eq!(layout.strip.height, 0);
        assert_eq!(layout.content, Rect { x: 0, y: 0, width: 40, height: 20 });
        assert_eq!(layout.content_inner, layout.content);
        assert!(!layout.bordered);
    }

    #[test]
    fn test_parent_width_used_when_width_unset() {
        let allotment = Allotment {
            x: 3,
            y: 4,
            width: None,
            height: Some(10),
            parent_width: 30,
            parent_height: 99,
        };
        let layout = LayoutCoordinator::new(1, true).compute(&allotment);
        assert_eq!(layout.container, Rect { x: 3, y: 4, width: 30, height: 10 });
        assert_eq!(layout.content, Rect { x: 3, y: 5, width: 30, height: 9 });
    }

    #[test]
    fn test_tiny_area_saturates() {
        let layout = LayoutCoordinator::new(5, true).compute(&area(1, 2));
        assert_eq!(layout.strip.height, 2);
        assert_eq!(layout.content.height, 0);
        assert_eq!(layout.content_inner.width, 0);
    }

    #[test]
    fn test_oversized_strip_keeps_content_inside_container() {
        let allotment = Allotment::from(Rect { x: 2, y: 3, width: 10, height: 4 });
        let layout = LayoutCoordinator::new(6, true).compute(&allotment);
        assert_eq!(layout.content, Rect { x: 2, y: 7, width: 10, height: 0 });
        assert_eq!(layout.content.y, layout.container.bottom());
        assert_eq!(layout.strip.height, 4);
        assert_eq!(layout.content_inner.height, 0);
    }

    #[test]
    fn test_header_allotment() {
        let coordinator = LayoutCoordinator::new(1, true);
        let header = coordinator.header_allotment(&area(50, 10));
        assert_eq!(header.resolved_width(), 50);
        assert_eq!(header.resolved_height(), 2);

        let hidden = LayoutCoordinator::new(1, false).header_allotment(&area(50, 10));
        assert_eq!(hidden.resolved_height(), 0);
    }
}
