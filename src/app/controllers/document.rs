use std::path::{Path, PathBuf};

use crate::app::domain::{Dialogs, DocumentState, TextSurface};
use crate::app::infrastructure::error::AppError;
use crate::app::infrastructure::platform::default_save_directory;
use crate::app::services::file_io::{load_into, save_from, with_default_extension};

/// New/Open/Save/Save As for the single open document.
///
/// Every command returns `true` when it changed the document's file state
/// so the caller can refresh the window title. Failures never escape: they
/// are reported through `Dialogs::show_error` and leave the state as it was.
#[derive(Debug)]
pub struct DocumentController {
    document: DocumentState,
    last_directory: Option<PathBuf>,
}

impl DocumentController {
    pub fn new(last_directory: Option<PathBuf>) -> Self {
        Self {
            document: DocumentState::new(),
            last_directory,
        }
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    /// Last directory used in an open/save dialog.
    pub fn last_directory(&self) -> Option<&Path> {
        self.last_directory.as_deref()
    }

    pub fn window_title(&self, surface: &impl TextSurface) -> String {
        self.document.window_title(surface.is_modified())
    }

    pub fn file_new(&mut self, surface: &mut impl TextSurface, dialogs: &mut impl Dialogs) -> bool {
        if surface.is_modified() && !dialogs.confirm_discard() {
            return false;
        }
        surface.set_plain_text("");
        surface.set_modified(false);
        self.document.clear();
        tracing::debug!("Started a new document");
        true
    }

    pub fn file_open(&mut self, surface: &mut impl TextSurface, dialogs: &mut impl Dialogs) -> bool {
        match dialogs.choose_open_path(self.last_directory.as_deref()) {
            Some(path) => self.open_path(surface, dialogs, path),
            None => false,
        }
    }

    pub fn open_path(
        &mut self,
        surface: &mut impl TextSurface,
        dialogs: &mut impl Dialogs,
        path: PathBuf,
    ) -> bool {
        match load_into(surface, &path) {
            Ok(()) => {
                self.remember_directory(&path);
                self.document.set_file_path(path);
                true
            }
            Err(e) => {
                tracing::warn!("{}", e);
                dialogs.show_error("Open Failed", &dialog_message(&e));
                false
            }
        }
    }

    pub fn file_save(&mut self, surface: &mut impl TextSurface, dialogs: &mut impl Dialogs) -> bool {
        match self.document.file_path().map(Path::to_path_buf) {
            Some(path) => self.save_to(surface, dialogs, path),
            None => self.file_save_as(surface, dialogs),
        }
    }

    pub fn file_save_as(&mut self, surface: &mut impl TextSurface, dialogs: &mut impl Dialogs) -> bool {
        let start_dir = self
            .last_directory
            .clone()
            .unwrap_or_else(default_save_directory);
        match dialogs.choose_save_path(&start_dir, self.document.display_name()) {
            Some(path) => self.save_to(surface, dialogs, with_default_extension(path)),
            None => false,
        }
    }

    /// Whether closing may go ahead, asking first when there are unsaved edits.
    pub fn confirm_quit(&self, surface: &impl TextSurface, dialogs: &mut impl Dialogs) -> bool {
        !surface.is_modified() || dialogs.confirm_discard()
    }

    fn save_to(&mut self, surface: &mut impl TextSurface, dialogs: &mut impl Dialogs, path: PathBuf) -> bool {
        match save_from(surface, &path) {
            Ok(()) => {
                self.remember_directory(&path);
                self.document.set_file_path(path);
                true
            }
            Err(e) => {
                tracing::warn!("{}", e);
                dialogs.show_error("Save Failed", &dialog_message(&e));
                false
            }
        }
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}

/// The underlying OS message for file errors, the full error otherwise.
fn dialog_message(err: &AppError) -> String {
    match err {
        AppError::Open { source, .. } | AppError::Save { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
