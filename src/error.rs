//! Error types for window-capture.

use thiserror::Error;

/// Main error type for window lookup and capture operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No top-level window carries the requested title.
    #[error("window not found: {0:?}")]
    WindowNotFound(String),

    /// The window rectangle is too small to leave a client area after the
    /// border and title-bar margins are cropped away.
    #[error("cropped client area is empty ({width}x{height})")]
    EmptyRegion { width: i32, height: i32 },

    /// A GDI call failed while copying the window contents.
    #[cfg(windows)]
    #[error("capture failed in {call}: {source}")]
    Capture {
        call: &'static str,
        #[source]
        source: windows::core::Error,
    },

    /// A window-manager query or mutation failed.
    #[cfg(windows)]
    #[error("{call} failed: {source}")]
    Os {
        call: &'static str,
        #[source]
        source: windows::core::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse options: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for window-capture operations.
pub type Result<T> = std::result::Result<T, Error>;
