//! Reporting tool for the CTA L daily ridership database.
//!
//! The binary opens the dataset read-only, prints general statistics, and
//! runs a numbered command menu of ridership reports. Reports that have a
//! natural chart can be plotted on the terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod core;
pub mod db;
pub mod state;
pub mod theme;
pub mod ui;
