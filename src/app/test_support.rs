//! In-memory stand-ins for the FLTK widget and native dialogs.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::app::domain::{Dialogs, FontZoom, TextSurface};
use crate::app::services::html;

const LINE_SPACING: f64 = 1.25;

/// Number of lines a buffer holds; an empty buffer still has one.
fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

#[derive(Debug, Clone)]
pub struct MemorySurface {
    text: String,
    modified: bool,
    font_size: i32,
    /// Forces `content_height` regardless of text, for layout tests.
    pub height_override: Option<f64>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self {
            text: String::new(),
            modified: false,
            font_size: 12,
            height_override: None,
        }
    }
}

impl MemorySurface {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// Simulate keystrokes at the end of the buffer.
    pub fn type_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.modified = true;
    }
}

impl FontZoom for MemorySurface {
    fn font_size(&self) -> i32 {
        self.font_size
    }

    fn set_font_size(&mut self, size: i32) {
        self.font_size = size;
    }
}

impl TextSurface for MemorySurface {
    fn plain_text(&self) -> String {
        self.text.clone()
    }

    fn set_plain_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.modified = true;
    }

    fn html(&self) -> String {
        html::to_html(&self.text)
    }

    fn set_html(&mut self, html: &str) {
        self.set_plain_text(&html::to_plain_text(html));
    }

    fn is_modified(&self) -> bool {
        self.modified
    }

    fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    fn content_height(&self) -> f64 {
        self.height_override
            .unwrap_or_else(|| line_count(&self.text) as f64 * self.font_size as f64 * LINE_SPACING)
    }
}

/// Dialogs that answer from a script and record what they were asked.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub open_paths: VecDeque<Option<PathBuf>>,
    pub save_paths: VecDeque<Option<PathBuf>>,
    pub discard_answers: VecDeque<bool>,
    pub errors: Vec<(String, String)>,
    pub confirmations_asked: usize,
    pub save_start_dirs: Vec<PathBuf>,
    pub save_suggestions: Vec<String>,
}

impl Dialogs for ScriptedDialogs {
    fn choose_open_path(&mut self, _start_dir: Option<&Path>) -> Option<PathBuf> {
        self.open_paths.pop_front().flatten()
    }

    fn choose_save_path(&mut self, start_dir: &Path, suggested_name: &str) -> Option<PathBuf> {
        self.save_start_dirs.push(start_dir.to_path_buf());
        self.save_suggestions.push(suggested_name.to_string());
        self.save_paths.pop_front().flatten()
    }

    fn confirm_discard(&mut self) -> bool {
        self.confirmations_asked += 1;
        self.discard_answers.pop_front().unwrap_or(false)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("one"), 1);
        assert_eq!(line_count("one\ntwo\n"), 3);
    }
}
