use std::path::{Path, PathBuf};

use crate::app::services::text_ops::extract_filename;

pub const APP_NAME: &str = "PaperFlow";

/// File-level state of the open document. Text, cursor and the modified
/// flag belong to the text surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    file_path: Option<PathBuf>,
    display_name: String,
}

impl DocumentState {
    pub fn new() -> Self {
        Self {
            file_path: None,
            display_name: "Untitled".to_string(),
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_file_path(&mut self, path: PathBuf) {
        self.display_name = extract_filename(&path.to_string_lossy());
        self.file_path = Some(path);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn window_title(&self, modified: bool) -> String {
        let prefix = if modified { "*" } else { "" };
        match self.file_path {
            Some(ref path) => format!("{}{} - {}", prefix, APP_NAME, path.display()),
            None => format!("{}{}", prefix, APP_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_untitled() {
        let doc = DocumentState::new();
        assert!(doc.file_path().is_none());
        assert_eq!(doc.display_name(), "Untitled");
        assert_eq!(doc.window_title(false), "PaperFlow");
    }

    #[test]
    fn test_title_includes_path_and_dirty_marker() {
        let mut doc = DocumentState::new();
        doc.set_file_path(PathBuf::from("/home/user/notes.pflow"));
        assert_eq!(doc.display_name(), "notes.pflow");
        assert_eq!(doc.window_title(false), "PaperFlow - /home/user/notes.pflow");
        assert_eq!(doc.window_title(true), "*PaperFlow - /home/user/notes.pflow");
    }

    #[test]
    fn test_clear_resets_path_and_name() {
        let mut doc = DocumentState::new();
        doc.set_file_path(PathBuf::from("a.txt"));
        doc.clear();
        assert_eq!(doc, DocumentState::new());
    }
}
