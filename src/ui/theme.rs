use fltk::{
    enums::{Color, FrameType},
    group::Scroll,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::services::pagination::{PAGE_COLOR, Rgb, SURFACE_COLOR};

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

const CHROME: Rgb = Rgb(0xf2, 0xf2, 0xf2);
const INK: Rgb = Rgb(0x1f, 0x1f, 0x1f);
const SELECTION: Rgb = Rgb(0xcf, 0xe3, 0xff);
const MENU_HOVER: Rgb = Rgb(0xc6, 0xc6, 0xc6);

/// Light paper-and-desk palette used throughout the window.
pub fn apply_theme(window: &mut Window, menu: &mut MenuBar, scroll: &mut Scroll, editor: &mut TextEditor) {
    window.set_color(to_color(CHROME));
    window.set_label_color(to_color(INK));

    menu.set_color(to_color(CHROME));
    menu.set_text_color(to_color(INK));
    menu.set_selection_color(to_color(MENU_HOVER));

    scroll.set_frame(FrameType::FlatBox);
    scroll.set_color(to_color(SURFACE_COLOR));

    editor.set_frame(FrameType::FlatBox);
    editor.set_color(to_color(PAGE_COLOR));
    editor.set_text_color(to_color(INK));
    editor.set_cursor_color(to_color(INK));
    editor.set_selection_color(to_color(SELECTION));

    window.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color_keeps_channels() {
        assert_eq!(to_color(Rgb(0xd4, 0xd4, 0xd4)).to_rgb(), (0xd4, 0xd4, 0xd4));
        assert_eq!(to_color(Rgb(1, 2, 3)).to_rgb(), (1, 2, 3));
    }
}
