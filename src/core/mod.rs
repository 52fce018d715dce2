// Core infrastructure module
// Selection policies, layout coordination, notifications and compiled defaults

pub mod app_config;
pub mod events;
pub mod layout;
pub mod selection;

pub use app_config::{PaneDefaults, PanePalette, DEFAULT_TAB_HEIGHT};
pub use events::{EventQueue, InputRouter, PaneAction, PaneEvent, PaneEventKind};
pub use layout::{Allotment, LayoutCoordinator, LayoutParent, PaneLayout};
pub use selection::{SelectTarget, Selection, Transition};
