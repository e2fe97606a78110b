use std::time::Duration;

use fltk::{
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    prelude::*,
    window::Window,
};

use crate::app::domain::APP_NAME;

/// Minimum time the splash stays up, measured from when it is shown.
pub const SPLASH_MIN: Duration = Duration::from_secs(2);

const SPLASH_W: i32 = 520;
const SPLASH_H: i32 = 320;

/// Remaining time to keep the splash up after `elapsed` has passed.
pub fn splash_delay(elapsed: Duration) -> Duration {
    SPLASH_MIN.saturating_sub(elapsed)
}

/// Borderless startup window. Call `hide()` on it when the main window is
/// ready.
pub fn show_splash() -> Window {
    let mut splash = Window::default()
        .with_size(SPLASH_W, SPLASH_H)
        .center_screen();
    splash.set_border(false);
    splash.set_color(Color::White);

    let mut label = Frame::new(0, 0, SPLASH_W, SPLASH_H, None);
    label.set_frame(FrameType::FlatBox);
    label.set_color(Color::White);
    label.set_label(&format!("Loading {}...", APP_NAME));
    label.set_label_font(Font::Times);
    label.set_label_size(22);
    label.set_label_color(Color::from_rgb(0x5a, 0x5a, 0x5a));
    label.set_align(Align::Center | Align::Inside);

    splash.end();
    splash.show();
    splash
}
