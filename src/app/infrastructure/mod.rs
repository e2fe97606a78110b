//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - The FLTK text editor behind `TextSurface` and leak-free buffer reads
//! - Platform directories
//! - Error types

pub mod buffer_text;
pub mod error;
pub mod fltk_surface;
pub mod platform;
