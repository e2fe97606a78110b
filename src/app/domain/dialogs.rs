use std::path::{Path, PathBuf};

/// Blocking user prompts raised by file commands.
pub trait Dialogs {
    /// Ask for a file to open. `None` when the user cancels.
    fn choose_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Ask for a destination file, pre-filled with `suggested_name`.
    /// `None` when the user cancels.
    fn choose_save_path(&mut self, start_dir: &Path, suggested_name: &str) -> Option<PathBuf>;

    /// Yes/No question about throwing away unsaved edits. `true` means discard.
    fn confirm_discard(&mut self) -> bool;

    fn show_error(&mut self, title: &str, message: &str);
}
