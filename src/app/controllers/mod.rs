//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - File commands for the open document
//! - Page layout and zoom
//! - Zoom step bookkeeping

pub mod document;
pub mod pagination;
pub mod zoom;
