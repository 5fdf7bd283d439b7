//! Command-line interface module.
//!
//! Provides argument parsing, console I/O, and the command menu loop.

pub mod args;
pub mod console;
pub mod menu;
