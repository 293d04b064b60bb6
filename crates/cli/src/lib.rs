//! `brewerp-cli`
//!
//! Command-line front-end: a thin shell over the workspace. Parsing lives in
//! [`args`], environment/defaults in [`config`], dispatch in [`commands`] and
//! all terminal formatting in [`render`].

pub mod args;
pub mod commands;
pub mod config;
pub mod render;

pub use args::{Cli, Commands};
pub use commands::execute;
pub use config::CliConfig;
