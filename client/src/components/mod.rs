//! UI components.

pub mod initial_loader;
pub mod site_shell;
