pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod scenarios;
pub mod utils;
