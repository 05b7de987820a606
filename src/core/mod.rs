//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Domain errors
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Path utilities
//! - Common utilities
//! - Source file reading
//! - Logging setup

pub mod error;
pub mod file_reader;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
