// Selection State
// Stored selection, selection targets, transition options and the index policies
// (lazy default, removal clamping, render-time repair, enabled-tab stepping)

use crossterm::event::Event;

use crate::elements::tab::TabId;

/// Stored selection of a tabbed pane
///
/// `Unset` reads as the first tab while children exist, `None` is the explicit
/// "nothing selected" state of an empty pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unset,
    None,
    Index(usize),
}

impl Selection {
    /// Resolve the stored value against the current child count
    pub fn resolve(self, child_count: usize) -> Option<usize> {
        match self {
            Selection::Unset => (child_count > 0).then_some(0),
            Selection::None => None,
            Selection::Index(index) => Some(index),
        }
    }
}

impl From<Option<usize>> for Selection {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Selection::None, Selection::Index)
    }
}

/// What a selection request points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectTarget {
    /// A position in the child list
    Index(usize),
    /// A tab, resolved to its current position
    Tab(TabId),
    /// No selection
    Clear,
}

impl From<usize> for SelectTarget {
    fn from(index: usize) -> Self {
        SelectTarget::Index(index)
    }
}

impl From<TabId> for SelectTarget {
    fn from(id: TabId) -> Self {
        SelectTarget::Tab(id)
    }
}

impl From<&TabId> for SelectTarget {
    fn from(id: &TabId) -> Self {
        SelectTarget::Tab(id.clone())
    }
}

impl From<Option<usize>> for SelectTarget {
    fn from(index: Option<usize>) -> Self {
        index.map_or(SelectTarget::Clear, SelectTarget::Index)
    }
}

/// Options for a full selection transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    /// Input event that triggered the activation; raises `Execute` when present
    pub origin: Option<Event>,
    /// Run the transition even when the target is already selected
    pub force: bool,
    /// Do not send `Hide` to the previously selected tab
    pub suppress_hide: bool,
    /// Move focus to the newly selected tab
    pub focus: bool,
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition caused by user interaction
    pub fn activated_by(origin: Event) -> Self {
        Self {
            origin: Some(origin),
            ..Self::default()
        }
    }

    pub fn forced(mut self) -> Self {
        self.force = true;
        self
    }

    pub fn suppressing_hide(mut self) -> Self {
        self.suppress_hide = true;
        self
    }

    pub fn with_focus(mut self) -> Self {
        self.focus = true;
        self
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                        Index Policies                                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Index to reselect after a single child was removed
///
/// Keeps `min(remaining - 1, previous)`; an emptied pane has no selection.
pub fn clamp_after_removal(remaining: usize, previous: usize) -> Option<usize> {
    remaining.checked_sub(1).map(|last| previous.min(last))
}

/// Render-time repair of a selection
///
/// An out-of-range (or missing) index becomes 0. If the tab at the index is
/// disabled the first enabled tab wins; with no enabled tab the index stays.
pub fn repaired_index(current: Option<usize>, enabled: &[bool]) -> Option<usize> {
    if enabled.is_empty() {
        return None;
    }

    let index = current.filter(|&i| i < enabled.len()).unwrap_or(0);
    if enabled[index] {
        return Some(index);
    }

    Some(enabled.iter().position(|&e| e).unwrap_or(index))
}

/// Next enabled index from `current` in `direction` (negative = previous), wrapping around
///
/// Returns `None` when no other enabled tab exists.
pub fn step_enabled(current: Option<usize>, enabled: &[bool], direction: i32) -> Option<usize> {
    let count = enabled.len();
    if count == 0 {
        return None;
    }

    let start = current.filter(|&i| i < count);
    for offset in 1..=count {
        let candidate = match (start, direction < 0) {
            (Some(i), true) => (i + count - offset % count) % count,
            (Some(i), false) => (i + offset) % count,
            // Nothing selected yet: walk from the matching end
            (None, true) => count - offset,
            (None, false) => offset - 1,
        };
        if Some(candidate) == start {
            break;
        }
        if enabled[candidate] {
            return Some(candidate);
        }
    }
    None
}
