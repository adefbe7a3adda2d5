//! KBridge command line front end
//!
//! Loads configuration, runs analyses over dataset files or synthetic data,
//! and renders reports.

pub mod cli;
pub mod commands;
pub mod config;
