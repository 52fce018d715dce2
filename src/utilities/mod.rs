// Utilities module
// Helper functions for colors and dimming

pub mod helpers;

pub use helpers::*;
