use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::Font,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
};

use crate::app::domain::{FontChoice, FontZoom, Message, TextSurface};
use crate::app::services::html;
use super::buffer_text::buffer_text;

pub fn fltk_font(choice: FontChoice) -> Font {
    match choice {
        FontChoice::Times => Font::Times,
        FontChoice::Helvetica => Font::Helvetica,
        FontChoice::Courier => Font::Courier,
    }
}

/// `TextSurface` backed by an FLTK `TextEditor` and its buffer.
///
/// Buffer edits flip the shared modified flag and post
/// `Message::ContentChanged`, which is the content-changed notification the
/// pagination layer listens for.
pub struct FltkTextSurface {
    editor: TextEditor,
    buffer: TextBuffer,
    font: Font,
    modified: Rc<Cell<bool>>,
}

impl FltkTextSurface {
    pub fn new(mut editor: TextEditor, font: Font, font_size: i32, sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let modified = Rc::new(Cell::new(false));

        let changes = modified.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
                sender.send(Message::ContentChanged);
            }
        });

        editor.set_buffer(buffer.clone());
        editor.set_text_font(font);
        editor.set_text_size(font_size);
        editor.wrap_mode(WrapMode::AtBounds, 0);

        Self {
            editor,
            buffer,
            font,
            modified,
        }
    }

    /// Caret position in window coordinates.
    pub fn caret_xy(&self) -> (i32, i32) {
        self.editor.position_to_xy(self.editor.insert_position())
    }

    /// Height of one text line at the current font size.
    pub fn line_height(&self) -> i32 {
        draw::set_font(self.font, self.editor.text_size());
        draw::height()
    }

    pub fn undo(&mut self) {
        let _ = self.editor.undo();
    }

    pub fn redo(&mut self) {
        let _ = self.editor.redo();
    }

    pub fn cut(&mut self) {
        let _ = self.editor.cut();
    }

    pub fn copy(&mut self) {
        let _ = self.editor.copy();
    }

    pub fn paste(&mut self) {
        let _ = self.editor.paste();
    }

    pub fn select_all(&mut self) {
        let _ = self.editor.kf_select_all();
    }
}

impl FontZoom for FltkTextSurface {
    fn font_size(&self) -> i32 {
        self.editor.text_size()
    }

    fn set_font_size(&mut self, size: i32) {
        self.editor.set_text_size(size);
        self.editor.redraw();
    }
}

impl TextSurface for FltkTextSurface {
    fn plain_text(&self) -> String {
        buffer_text(&self.buffer)
    }

    fn set_plain_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
    }

    fn html(&self) -> String {
        html::to_html(&buffer_text(&self.buffer))
    }

    fn set_html(&mut self, html: &str) {
        self.set_plain_text(&html::to_plain_text(html));
    }

    fn is_modified(&self) -> bool {
        self.modified.get()
    }

    fn set_modified(&mut self, modified: bool) {
        self.modified.set(modified);
    }

    fn content_height(&self) -> f64 {
        let lines = self.editor.count_lines(0, self.buffer.length(), true) + 1;
        lines as f64 * self.line_height() as f64
    }
}
