//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (document state, settings, messages, capability traits)
//! - `controllers/` - Orchestration (file commands, pagination, zoom)
//! - `services/` - Business operations (page layout, file I/O, HTML, scrolling)
//! - `infrastructure/` - External integrations (FLTK editor, platform, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenient external access
pub use domain::{AppSettings, DocumentState, FontChoice, Message, PaperSize};
pub use infrastructure::error::{AppError, Result};
pub use state::AppState;
