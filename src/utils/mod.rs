//! Utility modules for common functionality
//!
//! This module provides the logging and progress helpers used throughout the application.

pub mod logger;
pub(crate) mod progress;
