//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document file state
//! - Application settings
//! - Message types for the event system
//! - Capability traits for the editor widget and dialogs

pub mod dialogs;
pub mod document;
pub mod messages;
pub mod settings;
pub mod surface;

pub use dialogs::Dialogs;
pub use document::{APP_NAME, DocumentState};
pub use messages::Message;
pub use settings::{AppSettings, FontChoice, PaperSize};
pub use surface::{FontZoom, TextSurface};
