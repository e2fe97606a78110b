#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use fltk::{app, prelude::*};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_flow::app::{AppSettings, AppState, Message};
use paper_flow::ui::splash::{show_splash, splash_delay};

/// PaperFlow - a word processor that shows your text on printed pages
#[derive(Parser, Debug)]
#[command(name = "paperflow")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Skip the startup splash screen
    #[arg(long)]
    no_splash: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() {
    let args = Args::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(args.verbose)));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();

    tracing::info!("Starting PaperFlow v{}", env!("CARGO_PKG_VERSION"));

    let app = app::App::default();
    let settings = AppSettings::load();
    let (sender, receiver) = app::channel::<Message>();

    let started = Instant::now();
    let mut splash = (settings.show_splash && !args.no_splash).then(show_splash);
    if splash.is_some() {
        // Paint the splash before building the main window
        app::flush();
        app::check();
    }

    let mut state = AppState::new(settings, sender);
    if let Some(path) = args.file {
        state.open_path(path);
    }

    if splash.is_some() {
        let delay = splash_delay(started.elapsed());
        app::add_timeout3(delay.as_secs_f64(), move |_| sender.send(Message::ShowMainWindow));
    } else {
        state.show_window();
    }

    while app.wait() {
        while let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit | Message::WindowClose => {
                    if state.file_quit() {
                        app.quit();
                    }
                }
                Message::EditUndo => state.edit_undo(),
                Message::EditRedo => state.edit_redo(),
                Message::EditCut => state.edit_cut(),
                Message::EditCopy => state.edit_copy(),
                Message::EditPaste => state.edit_paste(),
                Message::SelectAll => state.select_all(),
                Message::ZoomIn => state.zoom_in(),
                Message::ZoomOut => state.zoom_out(),
                Message::ZoomReset => state.zoom_reset(),
                Message::ShowAbout => state.show_about(),
                Message::ContentChanged => state.content_changed(),
                Message::CursorMoved => state.cursor_moved(),
                Message::ViewportResized => state.viewport_resized(),
                Message::ShowMainWindow => {
                    if let Some(mut s) = splash.take() {
                        s.hide();
                    }
                    state.show_window();
                }
            }
        }
        state.flush_layout();
    }

    tracing::debug!("Event loop finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["paperflow"]);
        assert!(args.file.is_none());
        assert!(!args.no_splash);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_file_and_flags() {
        let args = Args::parse_from(["paperflow", "--no-splash", "-vv", "notes.pflow"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.pflow")));
        assert!(args.no_splash);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_verbosity_maps_to_levels() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(2), "debug");
        assert_eq!(log_filter(7), "trace");
    }
}
