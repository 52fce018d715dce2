// Tabbed Pane Library
// A tabbed container widget for ratatui: selection state machine, layout and painting

// Core infrastructure - selection, layout, events and compiled defaults
pub mod core;

// Elements - tabs, the tab strip and the tabbed pane itself
pub mod elements;

// Managers - YAML configuration helpers
pub mod managers;

// Utilities - color helpers and dimming
pub mod utilities;

// Error types
pub mod error;

// Re-export commonly used items for convenience
pub use crate::core::{
    Allotment, EventQueue, LayoutParent, PaneDefaults, PaneEvent, PaneEventKind, PaneLayout, SelectTarget,
    Transition,
};
pub use elements::{Child, ContentPane, PaintPlan, StripStyle, Tab, TabId, TabbedPane};
pub use error::{AttachError, PaneError};
pub use managers::{create_tabbed_pane_from_config, load_pane_config, TabbedPaneManager};
pub use utilities::DimmingContext;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
