//! Capabilities the application needs from the text-editing widget.
//!
//! The paginated view, the zoom controller and the file commands only talk
//! to the editor through these traits, so they run unchanged against the
//! FLTK widget and against an in-memory buffer in tests.

/// Font-size stepping used by zoom.
pub trait FontZoom {
    fn font_size(&self) -> i32;
    fn set_font_size(&mut self, size: i32);
}

/// Editable text buffer with its modified flag and rendered height.
pub trait TextSurface: FontZoom {
    fn plain_text(&self) -> String;
    fn set_plain_text(&mut self, text: &str);

    /// Content serialized as an HTML document.
    fn html(&self) -> String;
    fn set_html(&mut self, html: &str);

    fn is_modified(&self) -> bool;
    fn set_modified(&mut self, modified: bool);

    /// Height in display pixels of the laid-out text at the current font size.
    fn content_height(&self) -> f64;
}
