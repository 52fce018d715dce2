// Tab Component
// A tab child of a tabbed pane: header data plus an optional content pane

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Widget, Wrap},
};

/// Identifier of a tab within its pane
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can draw the body of a content pane
pub trait PaneBody {
    fn render(&self, area: Rect, buf: &mut Buffer);
}

impl PaneBody for String {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.as_str())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl PaneBody for Text<'static> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.clone())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Whether a content pane takes part in layout (`display: block` / `display: none`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

/// Whether a laid-out content pane is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Header styling applied by the pane on every transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStyle {
    Selected,
    Unselected,
}

/// The body rendered inside a tab
pub struct ContentPane {
    body: Box<dyn PaneBody>,
    display: Display,
    visibility: Visibility,
    /// Last geometry forwarded by the layout coordinator
    area: Option<Rect>,
}

impl ContentPane {
    pub fn new(body: impl PaneBody + 'static) -> Self {
        Self {
            body: Box::new(body),
            display: Display::None,
            visibility: Visibility::Hidden,
            area: None,
        }
    }

    pub fn display(&self) -> Display {
        self.display
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = display;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Shown means laid out and visible
    pub fn is_shown(&self) -> bool {
        self.display == Display::Block && self.visibility == Visibility::Visible
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Accept geometry from the layout coordinator
    pub fn set_area(&mut self, area: Rect) {
        self.area = Some(area);
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        self.body.render(area, buf);
    }
}

impl fmt::Debug for ContentPane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentPane")
            .field("display", &self.display)
            .field("visibility", &self.visibility)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

/// A tab child: header label, enabled flag and optional content
#[derive(Debug)]
pub struct Tab {
    id: TabId,
    label: String,
    enabled: bool,
    content: Option<ContentPane>,
    style: TabStyle,
    focused: bool,
}

impl Tab {
    pub fn new(id: impl Into<TabId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            enabled: true,
            content: None,
            style: TabStyle::Unselected,
            focused: false,
        }
    }

    pub fn with_content(mut self, body: impl PaneBody + 'static) -> Self {
        self.content = Some(ContentPane::new(body));
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn id(&self) -> &TabId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn content(&self) -> Option<&ContentPane> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut ContentPane> {
        self.content.as_mut()
    }

    pub fn style(&self) -> TabStyle {
        self.style
    }

    pub fn set_style(&mut self, style: TabStyle) {
        self.style = style;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Content display shortcut; tabs without content report `Display::None`
    pub fn content_display(&self) -> Display {
        self.content.as_ref().map_or(Display::None, ContentPane::display)
    }
}

/// A candidate child offered to a tabbed pane
#[derive(Debug)]
pub enum Child {
    Tab(Tab),
    /// A bare content pane not wrapped in a tab
    Pane(ContentPane),
}

impl From<Tab> for Child {
    fn from(tab: Tab) -> Self {
        Child::Tab(tab)
    }
}

impl From<ContentPane> for Child {
    fn from(pane: ContentPane) -> Self {
        Child::Pane(pane)
    }
}
