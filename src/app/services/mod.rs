//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Page geometry and pagination
//! - Scroll arithmetic
//! - File reading/writing and dialog filters
//! - HTML passthrough
//! - Text helpers

pub mod file_filters;
pub mod file_io;
pub mod html;
pub mod pagination;
pub mod text_ops;
pub mod viewport;
