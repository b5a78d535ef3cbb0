pub mod api;
pub mod cli;
pub mod config;
pub mod deletion;
pub mod logging;
pub mod search;
pub mod tags;
pub mod tui;
