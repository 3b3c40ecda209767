pub mod cli;
pub mod config;
pub mod core;
pub mod exit;
pub mod extract;
pub mod loader;
pub mod logging;
pub mod ui;
