use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::domain::APP_NAME;
use super::run_dialog;

fn about_text() -> String {
    format!(
        "Version {}\n\n\
         A word processor that lays your writing out\n\
         on real-size pages while you type.\n\n\
         Built with Rust and FLTK",
        env!("CARGO_PKG_VERSION")
    )
}

/// Show About dialog
pub fn show_about_dialog() {
    let mut dialog = Window::default()
        .with_size(380, 260)
        .with_label(&format!("About {}", APP_NAME))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 360, 240, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label(APP_NAME);
    title.set_label_size(24);
    title.set_label_font(Font::TimesBold);
    flex.fixed(&title, 40);

    let mut info_frame = Frame::default();
    info_frame.set_label(&about_text());
    info_frame.set_label_size(12);
    info_frame.set_label_color(Color::from_rgb(90, 90, 90));
    info_frame.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_text_carries_version() {
        assert!(about_text().starts_with(&format!("Version {}", env!("CARGO_PKG_VERSION"))));
    }
}
