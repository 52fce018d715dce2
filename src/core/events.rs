// Pane Events
// Notification types raised by the tabbed pane and routing of terminal input

use std::collections::VecDeque;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::elements::tab::TabId;

/// Notifications raised by a tabbed pane and its tabs
#[derive(Debug, Clone, PartialEq)]
pub enum PaneEvent {
    /// Selection changed or was cleared (container level)
    Change,

    /// A tab was activated, optionally carrying the originating input event
    Execute { origin: Option<Event> },

    /// A tab became the visible tab
    Show { tab: TabId },

    /// A tab stopped being the visible tab
    Hide { tab: TabId },

    /// Focus moved to a tab
    Focus { tab: TabId },

    /// A drop gesture landed on the container ("on-drop")
    Drop { origin: Event },

    /// The pane needs to be painted again
    Repaint,
}

/// Discriminant of a [`PaneEvent`], handy for counting and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneEventKind {
    Change,
    Execute,
    Show,
    Hide,
    Focus,
    Drop,
    Repaint,
}

impl PaneEvent {
    pub fn kind(&self) -> PaneEventKind {
        match self {
            PaneEvent::Change => PaneEventKind::Change,
            PaneEvent::Execute { .. } => PaneEventKind::Execute,
            PaneEvent::Show { .. } => PaneEventKind::Show,
            PaneEvent::Hide { .. } => PaneEventKind::Hide,
            PaneEvent::Focus { .. } => PaneEventKind::Focus,
            PaneEvent::Drop { .. } => PaneEventKind::Drop,
            PaneEvent::Repaint => PaneEventKind::Repaint,
        }
    }

    /// Tab the notification is addressed to, for tab-level events
    pub fn tab(&self) -> Option<&TabId> {
        match self {
            PaneEvent::Show { tab } | PaneEvent::Hide { tab } | PaneEvent::Focus { tab } => Some(tab),
            _ => None,
        }
    }
}

/// FIFO of pending notifications
///
/// Events are queued while an operation runs and delivered after it returns,
/// so a listener can never re-enter a transition that is still in progress.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<PaneEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PaneEvent) {
        tracing::trace!(?event, "queued pane event");
        self.pending.push_back(event);
    }

    pub fn pop(&mut self) -> Option<PaneEvent> {
        self.pending.pop_front()
    }

    /// Remove and return every pending event in order
    pub fn drain(&mut self) -> Vec<PaneEvent> {
        self.pending.drain(..).collect()
    }

    /// Number of pending events of the given kind
    pub fn count(&self, kind: PaneEventKind) -> usize {
        self.pending.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         Input Routing                                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// What a terminal event asks the pane to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneAction {
    /// Step to the previous enabled tab
    SelectPrevious,

    /// Step to the next enabled tab
    SelectNext,

    /// Mouse press at (column, row), possibly on a header
    Activate { column: u16, row: u16 },

    /// Mouse release at (column, row), forwarded as a drop
    Release { column: u16, row: u16 },

    /// No operation
    None,
}

/// Converts terminal events into pane actions
pub struct InputRouter;

impl InputRouter {
    /// Convert a crossterm event to a pane action
    pub fn route(event: &Event) -> PaneAction {
        match event {
            Event::Key(key) => Self::route_key(key),
            Event::Mouse(mouse) => Self::route_mouse(mouse),
            _ => PaneAction::None,
        }
    }

    fn route_key(key: &KeyEvent) -> PaneAction {
        // Only handle key press events (repeats and releases are ignored)
        if key.kind != KeyEventKind::Press {
            return PaneAction::None;
        }

        match key.code {
            KeyCode::PageUp | KeyCode::Left => PaneAction::SelectPrevious,
            KeyCode::PageDown | KeyCode::Right => PaneAction::SelectNext,
            _ => PaneAction::None,
        }
    }

    fn route_mouse(mouse: &MouseEvent) -> PaneAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PaneAction::Activate {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::Up(MouseButton::Left) => PaneAction::Release {
                column: mouse.column,
                row: mouse.row,
            },
            _ => PaneAction::None,
        }
    }
}
