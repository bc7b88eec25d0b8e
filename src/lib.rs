// Library exports for testing and potential library use

/// Application version (root crate version, for display and logging).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cards_ui;
pub mod cli;
pub mod debug;
pub mod details_ui;
pub mod session;
pub mod worker;
