/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
    SelectAll,

    // View
    ZoomIn,
    ZoomOut,
    ZoomReset,

    // Help
    ShowAbout,

    // Editor notifications
    ContentChanged,
    CursorMoved,
    ViewportResized,

    // Startup
    ShowMainWindow,
}
