// Tabbed Pane Manager
// YAML configuration structures, conversion helpers and a manager wrapper around a pane

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::PaneDefaults;
use crate::elements::tab::{Tab, TabId};
use crate::elements::tab_strip::StripStyle;
use crate::elements::tabbed_pane::TabbedPane;
use crate::error::{AttachError, PaneError, Result};
use crate::utilities::parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Whole configuration file: application settings plus named panes
#[derive(Debug, Clone, Deserialize)]
pub struct PaneConfigFile {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub tabbed_panes: HashMap<String, TabbedPaneConfigYaml>,
}

impl PaneConfigFile {
    /// Look up a pane by its handle name (HWND)
    pub fn pane_by_hwnd(&self, hwnd: &str) -> Result<&TabbedPaneConfigYaml> {
        self.tabbed_panes
            .values()
            .find(|config| config.hwnd == hwnd)
            .ok_or_else(|| PaneError::UnknownPane(hwnd.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub status_text: String,
}

/// Flag accepted as a bool, a number or a string ("yes", "1", "false", ...)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoolLike {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl BoolLike {
    /// An empty string counts as true, so a blank `show_tabs:` still shows the strip
    pub fn as_bool(&self) -> bool {
        match self {
            BoolLike::Bool(value) => *value,
            BoolLike::Int(value) => *value != 0,
            BoolLike::Text(value) => !matches!(
                value.trim().to_lowercase().as_str(),
                "false" | "no" | "off" | "0"
            ),
        }
    }
}

/// Tabbed pane configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabbedPaneConfigYaml {
    /// Handle name (HWND)
    pub hwnd: String,
    /// Strip height; missing or 0 uses the compiled default
    pub tab_height: Option<u16>,
    /// Whether the tab strip is shown (defaults to shown)
    pub show_tabs: Option<BoolLike>,
    /// Style string ("tab", "text", "boxed")
    pub style: Option<String>,
    /// Accent color (defaults to "cyan" if not specified)
    #[serde(default = "default_pane_color")]
    pub color: String,
    /// Forward mouse releases over the pane as drops
    pub accept_drops: Option<BoolLike>,
    /// List of tabs
    #[serde(default)]
    pub tabs: Vec<TabConfigYaml>,
}

fn default_pane_color() -> String {
    "cyan".to_string()
}

fn default_enabled() -> bool {
    true
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Tab ID
    pub id: String,
    /// Tab display name
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Optional: "active" selects this tab initially
    pub default: Option<String>,
    /// Text shown in the tab's content pane
    pub content: Option<String>,
}

impl TabConfigYaml {
    fn is_default_active(&self) -> bool {
        self.default
            .as_deref()
            .map(|d| d.eq_ignore_ascii_case("active"))
            .unwrap_or(false)
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Read and parse a configuration file
pub fn load_pane_config(path: impl AsRef<Path>) -> Result<PaneConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| PaneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: PaneConfigFile = serde_yaml::from_str(&contents)?;
    debug!(path = %path.display(), panes = config.tabbed_panes.len(), "loaded pane config");
    Ok(config)
}

/// Build a tab from its YAML configuration
pub fn create_tab_from_config(config: &TabConfigYaml) -> Tab {
    let tab = Tab::new(config.id.as_str(), config.name.as_str()).with_enabled(config.enabled);
    match &config.content {
        Some(content) => tab.with_content(content.clone()),
        None => tab,
    }
}

/// Create a tabbed pane and its tabs from YAML configuration
///
/// The first tab marked `default: "active"` is selected without raising any
/// notifications; otherwise the pane starts on its first tab.
pub fn create_tabbed_pane_from_config(config: &TabbedPaneConfigYaml) -> Result<TabbedPane> {
    let defaults = PaneDefaults::default();
    let mut pane = TabbedPane::with_defaults(config.hwnd.as_str(), &defaults);

    if let Some(style) = &config.style {
        pane = pane.with_style(StripStyle::from_str(style));
    }
    match parse_color(&config.color) {
        Some(color) => pane = pane.with_color(color),
        None => warn!(pane = %config.hwnd, color = %config.color, "unknown color, keeping default"),
    }
    if let Some(accept) = &config.accept_drops {
        pane.set_accept_drops(accept.as_bool());
    }
    pane.set_show_tabs(config.show_tabs.as_ref().map_or(true, BoolLike::as_bool));
    pane.set_tab_height(config.tab_height);

    for tab_config in &config.tabs {
        match pane.add_child(create_tab_from_config(tab_config)) {
            Ok(_) => {}
            Err(AttachError::DuplicateId(tab)) => return Err(PaneError::DuplicateTab(tab.id().to_string())),
            Err(err) => warn!(pane = %config.hwnd, error = %err, "tab rejected"),
        }
    }

    if let Some(active) = config.tabs.iter().find(|t| t.is_default_active()) {
        pane.select_silently(TabId::from(active.id.as_str()));
    }

    // Construction is not a state change anyone listens to
    pane.take_events();
    Ok(pane)
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                         Tabbed Pane Manager - Handle-Bound Pane Operations                     │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Owns a configured pane and associates it with its handle name
#[derive(Debug)]
pub struct TabbedPaneManager {
    pane: TabbedPane,
    handle_name: String,
}

impl TabbedPaneManager {
    /// Create the pane registered under `handle_name` in the config file
    pub fn create(config: &PaneConfigFile, handle_name: &str) -> Result<Self> {
        let pane_config = config.pane_by_hwnd(handle_name)?;
        Ok(Self {
            pane: create_tabbed_pane_from_config(pane_config)?,
            handle_name: handle_name.to_string(),
        })
    }

    pub fn handle_name(&self) -> &str {
        &self.handle_name
    }

    pub fn pane(&self) -> &TabbedPane {
        &self.pane
    }

    pub fn pane_mut(&mut self) -> &mut TabbedPane {
        &mut self.pane
    }

    /// Show or hide the strip
    pub fn toggle_tabs(&mut self) -> bool {
        let show = !self.pane.show_tabs();
        self.pane.set_show_tabs(show);
        show
    }

    /// Grow or shrink the strip height by `delta` rows, never below one
    pub fn adjust_tab_height(&mut self, delta: i32) -> u16 {
        let height = (i32::from(self.pane.tab_size()) + delta).clamp(1, i32::from(u16::MAX)) as u16;
        self.pane.set_tab_height(Some(height));
        height
    }

    /// Flip the enabled flag of the selected tab
    pub fn toggle_selected_enabled(&mut self) -> Option<bool> {
        let tab = self.pane.selected_tab()?;
        let id = tab.id().clone();
        let enabled = !tab.enabled();
        self.pane.set_tab_enabled(&id, enabled);
        Some(enabled)
    }

    /// Remove the selected tab
    pub fn remove_selected(&mut self) -> Option<Tab> {
        let index = self.pane.selected_index()?;
        self.pane.remove_child(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
application:
  title: "Test"
tabbed_panes:
  main:
    hwnd: "hwndMain"
    tab_height: 2
    show_tabs: ""
    style: "boxed"
    tabs:
      - id: "one"
        name: "ONE"
        content: "first"
      - id: "two"
        name: "TWO"
        default: "active"
      - id: "three"
        name: "THREE"
        enabled: false
"#;

    fn parse() -> PaneConfigFile {
        serde_yaml::from_str(CONFIG).unwrap()
    }

    #[test]
    fn test_bool_like_values() {
        assert!(BoolLike::Bool(true).as_bool());
        assert!(!BoolLike::Int(0).as_bool());
        assert!(BoolLike::Int(1).as_bool());
        assert!(BoolLike::Text(String::new()).as_bool());
        assert!(BoolLike::Text("yes".into()).as_bool());
        assert!(!BoolLike::Text("No".into()).as_bool());
    }

    #[test]
    fn test_pane_from_config() {
        let config = parse();
        let pane = create_tabbed_pane_from_config(config.pane_by_hwnd("hwndMain").unwrap()).unwrap();

        assert_eq!(pane.len(), 3);
        assert!(pane.show_tabs());
        assert_eq!(pane.tab_size(), 2);
        assert_eq!(pane.strip_style(), StripStyle::Boxed);
        assert_eq!(pane.selected_tab().unwrap().id().as_str(), "two");
        assert!(!pane.child(2).unwrap().enabled());
        assert!(pane.events().is_empty());
    }

    #[test]
    fn test_flags_accept_bool_like_values() {
        let yaml = r#"
hwnd: "flags"
show_tabs: "no"
accept_drops: "no"
"#;
        let config: TabbedPaneConfigYaml = serde_yaml::from_str(yaml).unwrap();
        let pane = create_tabbed_pane_from_config(&config).unwrap();
        assert!(!pane.show_tabs());
        assert!(!pane.accept_drops());

        let config: TabbedPaneConfigYaml = serde_yaml::from_str("hwnd: \"flags\"\naccept_drops: 1\n").unwrap();
        assert!(create_tabbed_pane_from_config(&config).unwrap().accept_drops());
    }

    #[test]
    fn test_unknown_hwnd() {
        let config = parse();
        let err = TabbedPaneManager::create(&config, "hwndMissing").unwrap_err();
        assert!(matches!(err, PaneError::UnknownPane(name) if name == "hwndMissing"));
    }

    #[test]
    fn test_duplicate_tab_ids_are_an_error() {
        let yaml = r#"
hwnd: "dup"
tabs:
  - { id: "a", name: "A" }
  - { id: "a", name: "A again" }
"#;
        let config: TabbedPaneConfigYaml = serde_yaml::from_str(yaml).unwrap();
        let err = create_tabbed_pane_from_config(&config).unwrap_err();
        assert!(matches!(err, PaneError::DuplicateTab(id) if id == "a"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_pane_config("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_manager_operations() {
        let config = parse();
        let mut manager = TabbedPaneManager::create(&config, "hwndMain").unwrap();
        assert_eq!(manager.handle_name(), "hwndMain");

        assert!(!manager.toggle_tabs());
        assert_eq!(manager.adjust_tab_height(-5), 1);
        assert_eq!(manager.adjust_tab_height(2), 3);

        assert_eq!(manager.toggle_selected_enabled(), Some(false));
        let removed = manager.remove_selected().unwrap();
        assert_eq!(removed.id().as_str(), "two");
        assert_eq!(manager.pane().selected_tab().unwrap().id().as_str(), "three");
    }
}
