use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::services::file_filters::{open_filter, save_filter};

fn chosen_path(nfc: &NativeFileChooser) -> Option<PathBuf> {
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() { None } else { Some(filename) }
}

pub fn native_open_dialog(start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open Document");
    nfc.set_filter(&open_filter());
    if let Some(dir) = start_dir {
        // A stale directory just means the chooser opens somewhere else.
        let _ = nfc.set_directory(&dir);
    }
    nfc.show(); // blocks until close
    chosen_path(&nfc)
}

pub fn native_save_dialog(start_dir: &Path, suggested_name: &str) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save Document");
    nfc.set_filter(&save_filter());
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    let _ = nfc.set_directory(&start_dir);
    nfc.set_preset_file(suggested_name);
    nfc.show();
    chosen_path(&nfc)
}
