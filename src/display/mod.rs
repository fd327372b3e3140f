//! # Display Module
//!
//! This module provides panel-specific configurations.
//!
//! ## Modules
//!
//! - [`config`]: Character LCD geometry presets

pub mod config;

pub use config::DisplayConfig;
