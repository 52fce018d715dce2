// Error types for tabbed panes

use std::path::PathBuf;

use thiserror::Error;

use crate::elements::tab::{Child, ContentPane, Tab};

/// A child offered to a pane was not accepted; the child is handed back
#[derive(Debug, Error)]
pub enum AttachError {
    /// Only tabs can be children of a tabbed pane
    #[error("tabbed panes only accept tabs as children")]
    NotATab(ContentPane),

    /// Tab ids are unique within a pane
    #[error("tab id '{}' is already attached", .0.id())]
    DuplicateId(Tab),
}

impl AttachError {
    /// Take back the rejected child
    pub fn into_child(self) -> Child {
        match self {
            AttachError::NotATab(pane) => Child::Pane(pane),
            AttachError::DuplicateId(tab) => Child::Tab(tab),
        }
    }
}

/// Errors raised while building panes from configuration
#[derive(Debug, Error)]
pub enum PaneError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pane config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("tabbed pane '{0}' not found in config")]
    UnknownPane(String),

    #[error("duplicate tab id '{0}'")]
    DuplicateTab(String),
}

pub type Result<T> = std::result::Result<T, PaneError>;
