pub mod about;

use std::path::{Path, PathBuf};

use fltk::{app, dialog, prelude::*, window::Window};

use crate::app::domain::Dialogs;
use super::file_dialogs::{native_open_dialog, native_save_dialog};

/// Run a dialog's event loop, automatically closing the dialog if the app
/// is quitting (e.g. user clicks X on the main window while a dialog is open).
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}

/// `Dialogs` implementation using FLTK's native choosers and message boxes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn choose_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        native_open_dialog(start_dir)
    }

    fn choose_save_path(&mut self, start_dir: &Path, suggested_name: &str) -> Option<PathBuf> {
        native_save_dialog(start_dir, suggested_name)
    }

    fn confirm_discard(&mut self) -> bool {
        dialog::message_title("Unsaved Changes");
        let choice = dialog::choice2_default(
            "You have unsaved changes. Discard them?",
            "No",
            "Yes",
            "",
        );
        choice == Some(1)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        dialog::message_title(title);
        dialog::alert_default(message);
    }
}
