//! # CLI Layer
//!
//! This module is **one possible client** of the docwatch library. It is the
//! only place that:
//! - Parses arguments (clap)
//! - Writes to stdout/stderr and reads confirmations from stdin
//! - Sets up logging
//! - Decides the exit code
//!
//! Handlers turn arguments into `DocwatchApi` calls and render the returned
//! `CmdResult`. Business rules stay in `commands/`.
//!
//! - `setup`: argument definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `render`: tables, edit previews and messages

pub mod commands;
mod render;
mod setup;
