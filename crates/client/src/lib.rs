//! Command-line front end for the pocket party manager.
//!
//! - [`app`] wires content, persistence, and the roster together
//! - [`cli`] declares the clap command surface
//! - [`commands`] executes commands and renders their text output
//! - [`logging`] sets up `tracing` output

pub mod app;
pub mod cli;
pub mod commands;
pub mod logging;

pub use app::App;
pub use cli::{Cli, Command};
