//! # Lectorium Common Library
//!
//! Shared code for the Lectorium inbox tooling:
//! - Error type and result alias
//! - TOML bootstrap configuration with graceful degradation
//! - Tracing subscriber initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
