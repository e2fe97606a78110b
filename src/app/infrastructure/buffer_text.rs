use std::ffi::{CStr, c_char, c_void};

use fltk::text::TextBuffer;

unsafe extern "C" {
    fn Fl_Text_Buffer_text(buf: *mut c_void) -> *mut c_char;
    fn free(ptr: *mut c_void);
}

/// Whole contents of `buffer`, freeing FLTK's malloc'd copy afterwards.
///
/// `TextBuffer::text()` copies the C string into a `String` but never
/// releases the original, so every call leaks the full document. Saves and
/// HTML export read the buffer through here instead.
pub fn buffer_text(buffer: &TextBuffer) -> String {
    // SAFETY: `buffer` keeps the Fl_Text_Buffer alive for this call.
    // Fl_Text_Buffer_text returns a NUL-terminated string allocated with
    // malloc (or null), which we copy out and hand back to `free` exactly once.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buffer.as_ptr() as *mut c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut c_void);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_multiline_unicode_text() {
        let mut buffer = TextBuffer::default();
        buffer.set_text("Chapter 1\nCafé crème\n");
        assert_eq!(buffer_text(&buffer), "Chapter 1\nCafé crème\n");
    }

    #[test]
    fn test_empty_buffer_reads_empty() {
        let buffer = TextBuffer::default();
        assert_eq!(buffer_text(&buffer), "");
    }

    #[test]
    fn test_repeated_reads_track_edits() {
        let mut buffer = TextBuffer::default();
        buffer.set_text("draft");
        assert_eq!(buffer_text(&buffer), "draft");
        buffer.append(" two");
        assert_eq!(buffer_text(&buffer), "draft two");
    }
}
