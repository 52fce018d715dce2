// Managers - YAML configuration and pane construction helpers

pub mod tabbed_pane;

pub use tabbed_pane::{
    create_tabbed_pane_from_config, load_pane_config, ApplicationConfig, BoolLike, PaneConfigFile,
    TabConfigYaml, TabbedPaneConfigYaml, TabbedPaneManager,
};
