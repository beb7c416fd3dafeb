pub mod cli;
pub mod clipboard;
pub mod config;
pub mod dice;
pub mod lifecycle;
pub mod logging;
pub mod mvi;
pub mod state;
pub mod ui;
