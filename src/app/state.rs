use std::path::PathBuf;

use fltk::{app, app::Sender, menu::MenuBar, prelude::*, window::Window};

use super::controllers::document::DocumentController;
use super::controllers::pagination::PaginationController;
use super::controllers::zoom::ZoomController;
use super::domain::{AppSettings, Message};
use super::infrastructure::fltk_surface::{FltkTextSurface, fltk_font};
use super::services::pagination::PageGeometry;
use crate::ui::dialogs::NativeDialogs;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::main_window::build_main_window;
use crate::ui::menu::build_menu;
use crate::ui::page_view::PageView;
use crate::ui::theme::apply_theme;

/// Owns the widgets and controllers and handles every dispatched `Message`.
pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub view: PageView,
    pub surface: FltkTextSurface,
    pub pages: PaginationController,
    pub docs: DocumentController,
    pub dialogs: NativeDialogs,
    pub settings: AppSettings,
    /// Set by cursor moves, consumed by the next `flush_layout`.
    reveal_pending: bool,
}

impl AppState {
    pub fn new(settings: AppSettings, sender: Sender<Message>) -> Self {
        let geometry = PageGeometry::from_dpi(settings.dpi, settings.paper_size);
        let widgets = build_main_window(geometry, &sender);

        let mut window = widgets.wind;
        let mut menu = widgets.menu;
        let mut view = widgets.view;
        build_menu(&mut menu, &sender);

        let mut editor = view.editor();
        apply_theme(&mut window, &mut menu, &mut view.scroll, &mut editor);

        let surface = FltkTextSurface::new(
            editor,
            fltk_font(settings.font),
            settings.font_size as i32,
            sender,
        );
        let pages = PaginationController::new(
            geometry,
            ZoomController::new(settings.min_font_size as i32, settings.max_font_size as i32),
        );
        let docs = DocumentController::new(settings.last_open_directory.as_ref().map(PathBuf::from));

        let mut state = Self {
            window,
            menu,
            view,
            surface,
            pages,
            docs,
            dialogs: NativeDialogs,
            settings,
            reveal_pending: false,
        };
        state.update_window_title();
        state
    }

    pub fn update_window_title(&mut self) {
        let title = self.docs.window_title(&self.surface);
        if self.window.label() != title {
            self.window.set_label(&title);
        }
    }

    /// Show the main window maximized to the screen's work area.
    pub fn show_window(&mut self) {
        let (x, y, w, h) = app::screen_work_area(0);
        self.window.resize(x, y, w, h);
        self.window.show();
        let mut editor = self.view.editor();
        editor.take_focus().ok();
    }

    // --- File commands ---

    pub fn file_new(&mut self) {
        if self.docs.file_new(&mut self.surface, &mut self.dialogs) {
            self.after_file_command();
        }
    }

    pub fn file_open(&mut self) {
        if self.docs.file_open(&mut self.surface, &mut self.dialogs) {
            self.after_file_command();
        }
        self.remember_directory();
    }

    /// Open a file named on the command line.
    pub fn open_path(&mut self, path: PathBuf) {
        if self.docs.open_path(&mut self.surface, &mut self.dialogs, path) {
            self.after_file_command();
        }
        self.remember_directory();
    }

    pub fn file_save(&mut self) {
        self.docs.file_save(&mut self.surface, &mut self.dialogs);
        self.update_window_title();
        self.remember_directory();
    }

    pub fn file_save_as(&mut self) {
        self.docs.file_save_as(&mut self.surface, &mut self.dialogs);
        self.update_window_title();
        self.remember_directory();
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        self.docs.confirm_quit(&self.surface, &mut self.dialogs)
    }

    fn after_file_command(&mut self) {
        self.pages.content_changed();
        self.update_window_title();
    }

    fn remember_directory(&mut self) {
        let dir = self
            .docs
            .last_directory()
            .map(|p| p.to_string_lossy().into_owned());
        if dir == self.settings.last_open_directory {
            return;
        }
        self.settings.last_open_directory = dir;
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    // --- Edit commands ---

    pub fn edit_undo(&mut self) {
        self.surface.undo();
    }

    pub fn edit_redo(&mut self) {
        self.surface.redo();
    }

    pub fn edit_cut(&mut self) {
        self.surface.cut();
    }

    pub fn edit_copy(&mut self) {
        self.surface.copy();
    }

    pub fn edit_paste(&mut self) {
        self.surface.paste();
    }

    pub fn select_all(&mut self) {
        self.surface.select_all();
    }

    // --- View commands ---

    pub fn zoom_in(&mut self) {
        if self.pages.zoom_in(&mut self.surface) {
            self.apply_layout();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.pages.zoom_out(&mut self.surface) {
            self.apply_layout();
        }
    }

    pub fn zoom_reset(&mut self) {
        if self.pages.zoom_reset(&mut self.surface) {
            self.apply_layout();
        }
    }

    pub fn show_about(&mut self) {
        show_about_dialog();
    }

    // --- Editor notifications ---

    pub fn content_changed(&mut self) {
        self.pages.content_changed();
        self.reveal_pending = true;
        self.update_window_title();
    }

    pub fn cursor_moved(&mut self) {
        self.reveal_pending = true;
    }

    pub fn viewport_resized(&mut self) {
        self.apply_layout();
    }

    /// Deferred work after a batch of messages: one layout pass for all
    /// pending edits, then keep the caret in view.
    pub fn flush_layout(&mut self) {
        if self.pages.flush(&self.surface) {
            self.apply_layout();
        }
        if std::mem::take(&mut self.reveal_pending) {
            let (cx, cy) = self.surface.caret_xy();
            let half_line = self.surface.line_height() / 2;
            self.view.reveal(cx, cy + half_line);
        }
    }

    fn apply_layout(&mut self) {
        self.view.apply_layout(self.pages.layout());
    }
}
