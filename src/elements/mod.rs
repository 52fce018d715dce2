// Elements - widgets that make up a tabbed pane

pub mod tab;
pub mod tab_strip;
pub mod tabbed_pane;

pub use tab::{Child, ContentPane, Display, PaneBody, Tab, TabId, TabStyle, Visibility};
pub use tab_strip::{HeaderItem, StripStyle, TabBounds, TabStrip};
pub use tabbed_pane::{ContentBox, PaintPlan, StripBox, StripContent, TabbedPane};
