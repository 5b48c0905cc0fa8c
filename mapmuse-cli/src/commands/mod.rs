//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and
//! handlers.
//!
//! - [`tick`] - Run one wallpaper tick
//! - [`run`] - Run ticks continuously on the configured schedule
//! - [`preview`] - Print URLs without publishing
//! - [`share`] - Share the current artwork
//! - [`config`] - Configuration management

pub mod common;
pub mod config;
pub mod preview;
pub mod run;
pub mod share;
pub mod tick;
