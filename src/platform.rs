//! Platform-specific key hints

/// Submit shortcut display for the help line.
/// Ctrl+S is used on every platform; Cmd+S is captured by most macOS terminals.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Ctrl+C";
