// Tabbed Pane Component
// A container owning tab children: shows one tab's content at a time, keeps the
// selection consistent under add/remove, and lays out a tab strip above the content

use crossterm::event::Event;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    symbols::line,
    widgets::{Block, Borders, Clear, Widget},
    Frame,
};
use tracing::{debug, trace, warn};

use crate::core::selection::{clamp_after_removal, repaired_index, step_enabled};
use crate::core::{
    Allotment, EventQueue, InputRouter, LayoutCoordinator, LayoutParent, PaneAction, PaneDefaults,
    PaneEvent, PaneLayout, PanePalette, SelectTarget, Selection, Transition,
};
use crate::elements::tab::{Child, Display, Tab, TabId, TabStyle, Visibility};
use crate::elements::tab_strip::{HeaderItem, StripStyle, TabStrip};
use crate::error::AttachError;
use crate::utilities::DimmingContext;

/// Upper bound on events delivered by one `dispatch_events` call
const MAX_DISPATCH: usize = 1024;

/// What the strip box holds when painted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripContent {
    /// Rendered tab headers
    Headers(Vec<HeaderItem>),
    /// Blank stand-in while the strip is hidden
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripBox {
    pub area: Rect,
    /// Row the header line (and the content's top edge) is drawn on
    pub header_row: Rect,
    pub content: StripContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBox {
    pub area: Rect,
    pub inner: Rect,
    pub bordered: bool,
    /// Index of the only child painted into this box
    pub visible: Option<usize>,
}

/// Box tree of one paint pass, in painting order: container, strip, content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintPlan {
    pub container: Rect,
    pub strip: StripBox,
    pub content: ContentBox,
}

/// Tabbed container widget
#[derive(Debug)]
pub struct TabbedPane {
    name: String,
    children: Vec<Tab>,
    selection: Selection,
    show_tabs: bool,
    tab_height: Option<u16>,
    default_tab_height: u16,
    accept_drops: bool,
    style: StripStyle,
    color: Color,
    palette: PanePalette,
    events: EventQueue,
    /// Geometry of the last layout pass (cleared when all children go away)
    layout: Option<PaneLayout>,
    layout_dirty: bool,
    /// Set by the first layout pass; survives `clear_children`
    painted: bool,
}

impl TabbedPane {
    /// Create an empty pane with the compiled defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_defaults(name, &PaneDefaults::default())
    }

    pub fn with_defaults(name: impl Into<String>, defaults: &PaneDefaults) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            selection: Selection::Unset,
            show_tabs: defaults.show_tabs,
            tab_height: None,
            default_tab_height: defaults.tab_height.max(1),
            accept_drops: defaults.accept_drops,
            style: defaults.style,
            color: defaults.color,
            palette: defaults.palette,
            events: EventQueue::new(),
            layout: None,
            layout_dirty: true,
            painted: false,
        }
    }

    pub fn with_style(mut self, style: StripStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_accept_drops(mut self, accept: bool) -> Self {
        self.accept_drops = accept;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Configuration                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn show_tabs(&self) -> bool {
        self.show_tabs
    }

    /// Show or hide the tab strip; the pane needs a new layout and repaint
    pub fn set_show_tabs(&mut self, show: bool) {
        self.show_tabs = show;
        self.invalidate();
    }

    /// Explicit tab height, if one was set
    pub fn tab_height(&self) -> Option<u16> {
        self.tab_height
    }

    /// Set the tab height; `None` or `0` falls back to the default
    pub fn set_tab_height(&mut self, height: Option<u16>) {
        self.tab_height = height;
        self.invalidate();
    }

    /// Effective strip height
    pub fn tab_size(&self) -> u16 {
        self.tab_height
            .filter(|&h| h > 0)
            .unwrap_or(self.default_tab_height)
    }

    pub fn accept_drops(&self) -> bool {
        self.accept_drops
    }

    pub fn set_accept_drops(&mut self, accept: bool) {
        self.accept_drops = accept;
    }

    pub fn strip_style(&self) -> StripStyle {
        self.style
    }

    /// Whether the next paint must run a layout pass first
    pub fn needs_layout(&self) -> bool {
        self.layout_dirty || self.layout.is_none()
    }

    fn invalidate(&mut self) {
        self.layout_dirty = true;
        self.events.push(PaneEvent::Repaint);
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                         Children                                           │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn children(&self) -> &[Tab] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Tab> {
        self.children.get(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Position of a tab within the pane
    pub fn child_index(&self, id: &TabId) -> Option<usize> {
        self.children.iter().position(|t| t.id() == id)
    }

    pub fn tab(&self, id: &TabId) -> Option<&Tab> {
        self.children.iter().find(|t| t.id() == id)
    }

    /// Attach a child. Only tabs are accepted; anything else comes back in the error.
    pub fn add_child(&mut self, child: impl Into<Child>) -> Result<usize, AttachError> {
        let mut tab = match child.into() {
            Child::Tab(tab) => tab,
            Child::Pane(pane) => {
                warn!(pane = %self.name, "rejected non-tab child");
                return Err(AttachError::NotATab(pane));
            }
        };
        if self.child_index(tab.id()).is_some() {
            warn!(pane = %self.name, tab = %tab.id(), "rejected duplicate tab id");
            return Err(AttachError::DuplicateId(tab));
        }

        if let Some(content) = tab.content_mut() {
            content.set_visibility(Visibility::Visible);
            content.set_display(Display::None);
        }
        tab.set_style(TabStyle::Unselected);

        // First child: the selection reads as 0 until something is stored
        if self.children.is_empty() {
            self.selection = Selection::Unset;
        }

        let index = self.children.len();
        debug!(pane = %self.name, tab = %tab.id(), index, "attached tab");
        self.children.push(tab);
        self.layout_dirty = true;

        if self.painted && index == 0 {
            // Sole child of a pane already on screen: announce it like any other selection
            self.select_with_transition(index, Transition::new().forced().suppressing_hide());
        } else if self.selected_index() == Some(index) {
            self.apply_visibility(index);
        }
        Ok(index)
    }

    /// Remove the child at `index` and reselect `min(len - 1, previously selected)`
    pub fn remove_child(&mut self, index: usize) -> Option<Tab> {
        if index >= self.children.len() {
            return None;
        }

        let previous = self.selected_index();
        let mut removed = self.children.remove(index);
        debug!(pane = %self.name, tab = %removed.id(), index, ?previous, "removed tab");

        if previous == Some(index) {
            self.events.push(PaneEvent::Hide { tab: removed.id().clone() });
        }
        detach(&mut removed);
        self.layout_dirty = true;

        match clamp_after_removal(self.children.len(), previous.unwrap_or(0)) {
            Some(next) => {
                // The removed tab already got its Hide; whatever now sits at `previous` must not
                self.select_with_transition(next, Transition::new().forced().suppressing_hide());
            }
            None => {
                self.selection = Selection::None;
                self.events.push(PaneEvent::Change);
            }
        }
        Some(removed)
    }

    pub fn remove_tab(&mut self, id: &TabId) -> Option<Tab> {
        let index = self.child_index(id)?;
        self.remove_child(index)
    }

    /// Remove every child at once
    pub fn clear_children(&mut self) -> Vec<Tab> {
        if self.children.is_empty() {
            return Vec::new();
        }

        if let Some(tab) = self.selected_tab() {
            let id = tab.id().clone();
            self.events.push(PaneEvent::Hide { tab: id });
        }
        self.events.push(PaneEvent::Change);
        self.selection = Selection::None;

        let mut removed: Vec<Tab> = self.children.drain(..).collect();
        removed.iter_mut().for_each(detach);
        debug!(pane = %self.name, count = removed.len(), "cleared tabs");

        self.layout = None;
        self.layout_dirty = true;
        self.events.push(PaneEvent::Repaint);
        removed
    }

    /// Enable or disable a tab; a disabled selection is repaired on the next paint
    pub fn set_tab_enabled(&mut self, id: &TabId, enabled: bool) -> bool {
        let Some(tab) = self.children.iter_mut().find(|t| t.id() == id) else {
            return false;
        };
        tab.set_enabled(enabled);
        self.events.push(PaneEvent::Repaint);
        true
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                    Selection State Machine                                 │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Current selection; an unset selection reads as the first child
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.resolve(self.children.len())
    }

    pub fn selected_tab(&self) -> Option<&Tab> {
        self.selected_index().and_then(|i| self.children.get(i))
    }

    /// Store a selection without side effects
    pub fn select_silently(&mut self, target: impl Into<SelectTarget>) {
        let target = target.into();
        self.selection = match &target {
            SelectTarget::Index(index) => Selection::Index(*index),
            SelectTarget::Clear => Selection::None,
            SelectTarget::Tab(id) => match self.child_index(id) {
                Some(index) => Selection::Index(index),
                None => {
                    warn!(pane = %self.name, tab = %id, "silent select of unknown tab ignored");
                    return;
                }
            },
        };
        trace!(pane = %self.name, ?target, "silent selection");
    }

    /// Select a tab and run the visibility/notification side effects
    ///
    /// Returns `false` when the target does not resolve to a child, or when it is
    /// already selected and the transition is not forced.
    pub fn select_with_transition(&mut self, target: impl Into<SelectTarget>, transition: Transition) -> bool {
        let target = target.into();
        let Some(index) = self.resolve_target(&target) else {
            debug!(pane = %self.name, ?target, "transition target not found");
            return false;
        };

        let previous = self.selected_index();
        let changed = transition.force || previous != Some(index);

        if changed {
            self.selection = Selection::Index(index);
            self.apply_visibility(index);

            // Re-layout the newly visible content with the last known geometry
            if let Some(layout) = self.layout {
                if let Some(content) = self.children[index].content_mut() {
                    content.set_area(layout.content_inner);
                }
            }
        }

        if let Some(origin) = transition.origin {
            self.events.push(PaneEvent::Execute { origin: Some(origin) });
        }
        if !changed {
            return false;
        }

        debug!(pane = %self.name, ?previous, to = index, force = transition.force, "selection transition");

        if !transition.suppress_hide {
            if let Some(tab) = previous.and_then(|i| self.children.get(i)) {
                self.events.push(PaneEvent::Hide { tab: tab.id().clone() });
            }
        }

        if transition.focus {
            for (i, tab) in self.children.iter_mut().enumerate() {
                tab.set_focused(i == index);
            }
            self.events.push(PaneEvent::Focus {
                tab: self.children[index].id().clone(),
            });
        }

        self.events.push(PaneEvent::Show {
            tab: self.children[index].id().clone(),
        });
        self.events.push(PaneEvent::Change);
        true
    }

    /// Render-time repair: clamp an out-of-range selection to 0 and move off a disabled tab
    ///
    /// Returns whether the stored selection changed. No notifications are raised.
    pub fn repair_selection(&mut self) -> bool {
        let current = self.selected_index();
        let enabled: Vec<bool> = self.children.iter().map(Tab::enabled).collect();
        let repaired = repaired_index(current, &enabled);
        if repaired == current {
            return false;
        }

        debug!(pane = %self.name, ?current, ?repaired, "repaired selection");
        self.select_silently(repaired);
        true
    }

    fn resolve_target(&self, target: &SelectTarget) -> Option<usize> {
        match target {
            SelectTarget::Index(index) => (*index < self.children.len()).then_some(*index),
            SelectTarget::Tab(id) => self.child_index(id),
            SelectTarget::Clear => None,
        }
    }

    /// Selected child shown and styled as selected, every other child hidden
    fn apply_visibility(&mut self, selected: usize) {
        for (i, tab) in self.children.iter_mut().enumerate() {
            let is_selected = i == selected;
            if let Some(content) = tab.content_mut() {
                content.set_display(if is_selected { Display::Block } else { Display::None });
            }
            tab.set_style(if is_selected { TabStyle::Selected } else { TabStyle::Unselected });
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                     Layout Coordinator                                     │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    fn coordinator(&self) -> LayoutCoordinator {
        LayoutCoordinator::new(self.tab_size(), self.show_tabs)
    }

    /// Geometry of the last layout pass
    pub fn layout(&self) -> Option<&PaneLayout> {
        self.layout.as_ref()
    }

    /// Geometry handed to tab headers for an allotment
    pub fn header_allotment(&self, allotment: &Allotment) -> Allotment {
        self.coordinator().header_allotment(allotment)
    }

    /// Ask the parent for geometry and lay out the strip and the selected child
    ///
    /// Without a parent there is nothing to lay out.
    pub fn update_layout(&mut self, parent: Option<&dyn LayoutParent>) -> Option<PaneLayout> {
        let allotment = parent?.allot(&self.name);
        Some(self.apply_layout(&allotment))
    }

    /// Lay out for an explicit allotment. Only the selected child is forwarded geometry.
    pub fn apply_layout(&mut self, allotment: &Allotment) -> PaneLayout {
        let layout = self.coordinator().compute(allotment);
        let selected = self.selected_index();

        for (i, tab) in self.children.iter_mut().enumerate() {
            if let Some(content) = tab.content_mut() {
                if selected == Some(i) {
                    content.set_display(Display::Block);
                    content.set_area(layout.content_inner);
                } else {
                    content.set_display(Display::None);
                }
            }
        }

        trace!(pane = %self.name, ?layout, "layout pass");
        self.layout = Some(layout);
        self.layout_dirty = false;
        self.painted = true;
        layout
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                         Painting                                           │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Header row data for the strip
    pub fn tab_strip(&self) -> TabStrip {
        let selected = self.selected_index();
        let items = self
            .children
            .iter()
            .enumerate()
            .map(|(i, tab)| HeaderItem {
                label: tab.label().to_string(),
                selected: selected == Some(i),
                enabled: tab.enabled(),
            })
            .collect();
        TabStrip::new(items, self.style)
            .with_color(self.color)
            .with_palette(self.palette)
    }

    /// Repair the selection, lay out for `area` and describe what will be painted
    pub fn paint_plan(&mut self, area: Rect) -> PaintPlan {
        self.repair_selection();
        if let Some(index) = self.selected_index() {
            self.apply_visibility(index);
        }
        let layout = self.apply_layout(&Allotment::from(area));

        let content = if self.show_tabs {
            StripContent::Headers(self.tab_strip().items)
        } else {
            StripContent::Placeholder
        };

        let visible = self
            .selected_index()
            .filter(|&i| self.children[i].content().is_some_and(|c| c.is_shown()));

        PaintPlan {
            container: layout.container,
            strip: StripBox {
                area: layout.strip,
                header_row: layout.headers,
                content,
            },
            content: ContentBox {
                area: layout.content,
                inner: layout.content_inner,
                bordered: layout.bordered,
                visible,
            },
        }
    }

    /// Paint into a buffer: container box, then strip box, then the visible content
    pub fn paint(&mut self, area: Rect, buf: &mut Buffer, dimming: &DimmingContext) -> PaintPlan {
        let plan = self.paint_plan(area);
        let bounds = buf.area;
        let clip = |rect: Rect| rect.intersection(bounds);

        // Container box
        let container = clip(plan.container);
        Clear.render(container, buf);

        // Strip box
        let header_row = clip(plan.strip.header_row);
        if let StripContent::Headers(_) = &plan.strip.content {
            if header_row.width > 0 && header_row.height > 0 {
                let border_style = Style::default().fg(dimming.dim_color(self.palette.border_light));
                draw_top_edge(header_row, buf, border_style);
                let strip = self.tab_strip();
                strip.render(header_line_area(header_row), plan.strip.area.y, buf, dimming);
            }
        }

        // Content box: its top edge is the strip's header row
        let content_area = clip(plan.content.area);
        if plan.content.bordered && content_area.height > 1 {
            let below_edge = Rect {
                y: content_area.y + 1,
                height: content_area.height - 1,
                ..content_area
            };
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(dimming.dim_color(self.palette.border_dark)))
                .render(below_edge, buf);
        }

        if let Some(index) = plan.content.visible {
            let inner = clip(plan.content.inner);
            if let Some(content) = self.children[index].content() {
                if inner.width > 0 && inner.height > 0 {
                    content.render(inner, buf);
                }
            }
        }

        self.layout_dirty = false;
        plan
    }

    /// Paint into a ratatui frame
    pub fn render(&mut self, f: &mut Frame, area: Rect, dimming: &DimmingContext) -> PaintPlan {
        self.paint(area, f.buffer_mut(), dimming)
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                       Events & Input                                       │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Pending notifications
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Take every pending notification
    pub fn take_events(&mut self) -> Vec<PaneEvent> {
        self.events.drain()
    }

    /// Deliver pending notifications one by one; handlers may call back into the pane
    ///
    /// Events raised by a handler are delivered in the same call, after the ones
    /// already queued. Returns the number of events delivered.
    pub fn dispatch_events<F>(&mut self, mut handler: F) -> usize
    where
        F: FnMut(&mut TabbedPane, PaneEvent),
    {
        let mut delivered = 0;
        while let Some(event) = self.events.pop() {
            handler(self, event);
            delivered += 1;
            if delivered >= MAX_DISPATCH {
                warn!(pane = %self.name, "event dispatch limit reached, dropping remaining events");
                self.events.drain();
                break;
            }
        }
        delivered
    }

    /// Forward a drop gesture on the container to the drop handler
    pub fn handle_drop(&mut self, origin: Event) {
        trace!(pane = %self.name, "drop on pane");
        self.events.push(PaneEvent::Drop { origin });
    }

    /// Route a terminal event; returns whether the pane consumed it
    pub fn handle_input(&mut self, event: &Event) -> bool {
        match InputRouter::route(event) {
            PaneAction::SelectPrevious => self.step(event, -1),
            PaneAction::SelectNext => self.step(event, 1),
            PaneAction::Activate { column, row } => {
                let Some(index) = self.header_at(column, row) else {
                    return false;
                };
                if !self.children[index].enabled() {
                    return false;
                }
                self.select_with_transition(index, Transition::activated_by(event.clone()).with_focus());
                true
            }
            PaneAction::Release { column, row } => {
                let inside = self
                    .layout
                    .map(|l| l.container.contains(Position { x: column, y: row }))
                    .unwrap_or(false);
                if self.accept_drops && inside {
                    self.handle_drop(event.clone());
                    true
                } else {
                    false
                }
            }
            PaneAction::None => false,
        }
    }

    fn step(&mut self, event: &Event, direction: i32) -> bool {
        let enabled: Vec<bool> = self.children.iter().map(Tab::enabled).collect();
        match step_enabled(self.selected_index(), &enabled, direction) {
            Some(index) => {
                self.select_with_transition(index, Transition::activated_by(event.clone()).with_focus());
                true
            }
            None => false,
        }
    }

    /// Header under a screen position, using the last layout
    pub fn header_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.show_tabs {
            return None;
        }
        let layout = self.layout?;
        self.tab_strip().get_tab_at(header_line_area(layout.headers), column, row)
    }
}

/// Reset a tab leaving the pane
fn detach(tab: &mut Tab) {
    if let Some(content) = tab.content_mut() {
        content.set_display(Display::None);
    }
    tab.set_style(TabStyle::Unselected);
    tab.set_focused(false);
}

/// Header line sits between the corners of the top edge
fn header_line_area(header_row: Rect) -> Rect {
    Rect {
        x: header_row.x.saturating_add(1),
        width: header_row.width.saturating_sub(2),
        ..header_row
    }
}

/// Draw ┌──…──┐ across the header row
fn draw_top_edge(row: Rect, buf: &mut Buffer, style: Style) {
    let right = row.x + row.width - 1;
    for x in row.x..=right {
        let symbol = if x == row.x {
            line::TOP_LEFT
        } else if x == right {
            line::TOP_RIGHT
        } else {
            line::HORIZONTAL
        };
        buf[(x, row.y)].set_symbol(symbol).set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PaneEventKind;
    use crate::elements::tab::ContentPane;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    fn pane_with(labels: &[&str]) -> TabbedPane {
        let mut pane = TabbedPane::new("test").with_style(StripStyle::Text);
        for label in labels {
            pane.add_child(Tab::new(*label, label.to_uppercase()).with_content(format!("{label} body")))
                .unwrap();
        }
        pane.take_events();
        pane
    }

    fn kinds(events: &[PaneEvent]) -> Vec<PaneEventKind> {
        events.iter().map(PaneEvent::kind).collect()
    }

    fn shown_count(pane: &TabbedPane) -> usize {
        pane.children()
            .iter()
            .filter(|t| t.content().is_some_and(|c| c.is_shown()))
            .count()
    }

    #[test]
    fn test_empty_pane_has_no_selection() {
        let pane = TabbedPane::new("empty");
        assert_eq!(pane.selected_index(), None);
        assert!(pane.selected_tab().is_none());
    }

    #[test]
    fn test_first_child_reads_as_selected() {
        let pane = pane_with(&["a", "b"]);
        assert_eq!(pane.selected_index(), Some(0));
        assert_eq!(shown_count(&pane), 1);
        assert_eq!(pane.child(0).unwrap().style(), TabStyle::Selected);
    }

    #[test]
    fn test_non_tab_child_is_handed_back() {
        let mut pane = pane_with(&["a"]);
        let err = pane.add_child(ContentPane::new(String::from("loose"))).unwrap_err();
        assert!(matches!(err, AttachError::NotATab(_)));
        assert!(matches!(err.into_child(), Child::Pane(_)));
        assert_eq!(pane.len(), 1);
    }

    #[test]
    fn test_duplicate_tab_id_is_rejected() {
        let mut pane = pane_with(&["a"]);
        let err = pane.add_child(Tab::new("a", "Again")).unwrap_err();
        assert!(matches!(err, AttachError::DuplicateId(_)));
        assert_eq!(pane.len(), 1);
    }

    #[test]
    fn test_transition_event_order() {
        let mut pane = pane_with(&["a", "b", "c"]);
        let click = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert!(pane.select_with_transition(2, Transition::activated_by(click.clone()).with_focus()));
        let events = pane.take_events();
        assert_eq!(
            kinds(&events),
            vec![
                PaneEventKind::Execute,
                PaneEventKind::Hide,
                PaneEventKind::Focus,
                PaneEventKind::Show,
                PaneEventKind::Change,
            ]
        );
        assert_eq!(events[0], PaneEvent::Execute { origin: Some(click) });
        assert_eq!(events[1], PaneEvent::Hide { tab: TabId::from("a") });
        assert_eq!(events[3], PaneEvent::Show { tab: TabId::from("c") });

        assert_eq!(pane.selected_index(), Some(2));
        assert!(pane.child(2).unwrap().is_focused());
        assert_eq!(pane.child(2).unwrap().content_display(), Display::Block);
        assert_eq!(pane.child(0).unwrap().content_display(), Display::None);
        assert_eq!(shown_count(&pane), 1);
    }

    #[test]
    fn test_reselecting_current_tab_is_idempotent() {
        let mut pane = pane_with(&["a", "b"]);
        pane.select_with_transition(1, Transition::new());
        pane.take_events();

        assert!(!pane.select_with_transition(1, Transition::new()));
        assert!(pane.take_events().is_empty());

        // Forced transitions run again
        assert!(pane.select_with_transition(1, Transition::new().forced()));
        assert_eq!(pane.events().count(PaneEventKind::Show), 1);
    }

    #[test]
    fn test_select_by_tab_id() {
        let mut pane = pane_with(&["a", "b", "c"]);
        assert!(pane.select_with_transition(TabId::from("b"), Transition::new()));
        assert_eq!(pane.selected_index(), Some(1));
        assert!(!pane.select_with_transition(TabId::from("zzz"), Transition::new()));
        assert!(!pane.select_with_transition(9, Transition::new()));
    }

    #[test]
    fn test_silent_select_has_no_side_effects() {
        let mut pane = pane_with(&["a", "b", "c"]);
        pane.select_silently(TabId::from("c"));
        assert_eq!(pane.selected_index(), Some(2));
        assert!(pane.events().is_empty());
        // Visibility is untouched until a transition or paint
        assert_eq!(pane.child(0).unwrap().content_display(), Display::Block);

        pane.select_silently(SelectTarget::Clear);
        assert_eq!(pane.selected_index(), None);
    }

    #[test]
    fn test_remove_selected_middle_tab() {
        let mut pane = pane_with(&["a", "b", "c"]);
        pane.select_with_transition(1, Transition::new());
        pane.take_events();

        let removed = pane.remove_child(1).unwrap();
        assert_eq!(removed.id().as_str(), "b");
        assert_eq!(pane.selected_index(), Some(1));
        assert_eq!(pane.selected_tab().unwrap().id().as_str(), "c");

        let events = pane.take_events();
        assert_eq!(
            events,
            vec![
                PaneEvent::Hide { tab: TabId::from("b") },
                PaneEvent::Show { tab: TabId::from("c") },
                PaneEvent::Change,
            ]
        );
        assert_eq!(shown_count(&pane), 1);
        assert_eq!(removed.content_display(), Display::None);
    }

    #[test]
    fn test_remove_selected_last_tab_selects_previous() {
        let mut pane = pane_with(&["a", "b", "c"]);
        pane.select_with_transition(2, Transition::new());
        pane.remove_child(2);
        assert_eq!(pane.selected_index(), Some(1));
        assert_eq!(shown_count(&pane), 1);
    }

    #[test]
    fn test_remove_unselected_tab_keeps_selected_tab() {
        let mut pane = pane_with(&["a", "b", "c"]);
        pane.select_with_transition(2, Transition::new());
        pane.take_events();

        pane.remove_child(0);
        // "c" slid to index 1 and stays selected; no Hide for it
        assert_eq!(pane.selected_tab().unwrap().id().as_str(), "c");
        assert_eq!(pane.events().count(PaneEventKind::Hide), 0);
        assert_eq!(shown_count(&pane), 1);
    }

    #[test]
    fn test_remove_last_child_clears_selection() {
        let mut pane = pane_with(&["a"]);
        pane.remove_child(0);
        assert_eq!(pane.selected_index(), None);
        assert_eq!(
            pane.take_events(),
            vec![PaneEvent::Hide { tab: TabId::from("a") }, PaneEvent::Change]
        );
        assert!(pane.remove_child(0).is_none());
    }

    #[test]
    fn test_clear_children() {
        let mut pane = pane_with(&["a", "b", "c"]);
        pane.select_with_transition(1, Transition::new());
        pane.apply_layout(&Allotment::from(Rect::new(0, 0, 20, 10)));
        pane.take_events();

        let removed = pane.clear_children();
        assert_eq!(removed.len(), 3);
        assert_eq!(pane.selected_index(), None);
        assert!(pane.layout().is_none());
        assert_eq!(pane.events().count(PaneEventKind::Change), 1);
        assert_eq!(pane.events().count(PaneEventKind::Repaint), 1);
        assert_eq!(pane.take_events()[0], PaneEvent::Hide { tab: TabId::from("b") });

        // Clearing an empty pane raises nothing
        assert!(pane.clear_children().is_empty());
        assert!(pane.events().is_empty());
    }

    #[test]
    fn test_add_after_clear_defaults_to_first() {
        let mut pane = pane_with(&["a", "b"]);
        pane.clear_children();
        pane.add_child(Tab::new("z", "Z")).unwrap();
        assert_eq!(pane.selected_index(), Some(0));
    }

    #[test]
    fn test_first_child_of_painted_pane_is_announced() {
        let mut pane = pane_with(&["a"]);
        pane.paint_plan(Rect::new(0, 0, 20, 6));
        pane.clear_children();
        pane.take_events();

        pane.add_child(Tab::new("b", "B").with_content(String::from("b body"))).unwrap();
        assert_eq!(
            pane.take_events(),
            vec![PaneEvent::Show { tab: TabId::from("b") }, PaneEvent::Change]
        );
        assert_eq!(pane.child(0).unwrap().content_display(), Display::Block);

        // Later children of the same pane stay quiet
        pane.add_child(Tab::new("c", "C")).unwrap();
        assert!(pane.events().is_empty());
    }

    #[test]
    fn test_repair_moves_off_disabled_tab() {
        let mut pane = pane_with(&["a", "b", "c", "d"]);
        pane.set_tab_enabled(&TabId::from("a"), false);
        pane.set_tab_enabled(&TabId::from("c"), false);
        pane.select_with_transition(2, Transition::new());
        pane.take_events();

        pane.paint_plan(Rect::new(0, 0, 30, 10));
        assert_eq!(pane.selected_index(), Some(1));
        assert_eq!(shown_count(&pane), 1);
        assert_eq!(pane.child(1).unwrap().content_display(), Display::Block);
        // Repair is silent
        assert!(pane.events().is_empty());
    }

    #[test]
    fn test_repair_clamps_out_of_range() {
        let mut pane = pane_with(&["a", "b"]);
        pane.select_silently(7);
        assert!(pane.repair_selection());
        assert_eq!(pane.selected_index(), Some(0));
        assert!(!pane.repair_selection());
    }

    #[test]
    fn test_layout_forwards_only_to_selected_content() {
        let mut pane = pane_with(&["a", "b"]);
        pane.set_tab_height(Some(2));
        let layout = pane.update_layout(Some(&Rect::new(0, 0, 40, 12))).unwrap();

        assert_eq!(layout.content.y, 2);
        assert_eq!(pane.child(0).unwrap().content().unwrap().area(), Some(layout.content_inner));
        assert_eq!(pane.child(1).unwrap().content().unwrap().area(), None);

        // Selection change forwards the cached geometry to the new content
        pane.select_with_transition(1, Transition::new());
        assert_eq!(pane.child(1).unwrap().content().unwrap().area(), Some(layout.content_inner));
    }

    #[test]
    fn test_no_parent_no_layout() {
        let mut pane = pane_with(&["a"]);
        assert!(pane.update_layout(None).is_none());
        assert!(pane.needs_layout());
    }

    #[test]
    fn test_hidden_strip_layout() {
        let mut pane = pane_with(&["a", "b"]);
        pane.set_show_tabs(false);
        assert_eq!(pane.events().count(PaneEventKind::Repaint), 1);
        assert!(pane.needs_layout());

        let plan = pane.paint_plan(Rect::new(0, 0, 40, 12));
        assert_eq!(plan.strip.area.height, 0);
        assert_eq!(plan.content.area.height, 12);
        assert_eq!(plan.strip.content, StripContent::Placeholder);
        assert!(!pane.needs_layout());
    }

    #[test]
    fn test_tab_height_zero_falls_back_to_default() {
        let mut pane = TabbedPane::new("p");
        pane.set_tab_height(Some(0));
        assert_eq!(pane.tab_size(), PaneDefaults::default().tab_height);
        pane.set_tab_height(Some(3));
        assert_eq!(pane.tab_size(), 3);
    }

    #[test]
    fn test_paint_draws_headers_and_visible_content_only() {
        let mut pane = pane_with(&["a", "b"]);
        pane.set_tab_height(Some(1));
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        let plan = pane.paint(area, &mut buf, &DimmingContext::default());
        assert_eq!(plan.content.visible, Some(0));

        let row = |y: u16| -> String { (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        // Header row is the shared top edge: corner, then the Text-style strip
        assert!(row(1).starts_with("┌── A ─ B ──"));
        assert!(row(1).ends_with("┐"));
        assert!(row(2).contains("a body"));
        assert!(!row(2).contains("b body"));
        assert!(row(5).starts_with("└"));
    }

    #[test]
    fn test_mouse_click_on_header_selects_tab() {
        let mut pane = pane_with(&["a", "b"]);
        pane.set_tab_height(Some(1));
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        pane.paint(area, &mut buf, &DimmingContext::default());
        pane.take_events();

        // "┌── A ─ B": B is at column 8 on row 1
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 8,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert!(pane.handle_input(&click));
        assert_eq!(pane.selected_index(), Some(1));
        assert_eq!(pane.take_events()[0], PaneEvent::Execute { origin: Some(click) });
    }

    #[test]
    fn test_keyboard_navigation_skips_disabled() {
        let mut pane = pane_with(&["a", "b", "c"]);
        pane.set_tab_enabled(&TabId::from("b"), false);
        let next = Event::Key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));

        assert!(pane.handle_input(&next));
        assert_eq!(pane.selected_index(), Some(2));
        assert!(pane.handle_input(&next));
        assert_eq!(pane.selected_index(), Some(0));
    }

    #[test]
    fn test_drop_passthrough() {
        let mut pane = pane_with(&["a"]).with_accept_drops(true);
        pane.apply_layout(&Allotment::from(Rect::new(0, 0, 10, 5)));
        let release = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert!(pane.handle_input(&release));
        assert_eq!(pane.take_events(), vec![PaneEvent::Drop { origin: release.clone() }]);

        pane.set_accept_drops(false);
        assert!(!pane.handle_input(&release));
    }

    #[test]
    fn test_dispatch_lets_handlers_reselect() {
        let mut pane = pane_with(&["a", "b", "c"]);
        pane.select_with_transition(1, Transition::new());

        let mut seen = Vec::new();
        let delivered = pane.dispatch_events(|pane, event| {
            if event == (PaneEvent::Show { tab: TabId::from("b") }) {
                pane.select_with_transition(2, Transition::new());
            }
            seen.push(event.kind());
        });

        assert_eq!(pane.selected_index(), Some(2));
        // Hide a, Show b, Change, then Hide b, Show c, Change
        assert_eq!(delivered, 6);
        assert_eq!(seen.iter().filter(|k| **k == PaneEventKind::Change).count(), 2);
    }
}
