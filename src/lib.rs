//! window-capture
//!
//! Locates an on-screen window by exact title, captures its client-area
//! pixels into an in-memory RGB buffer, and translates image coordinates
//! back to absolute screen coordinates. Built as a vision block for
//! automation tools that need to see and click on a specific window.
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn run() -> window_capture::Result<()> {
//! use window_capture::WindowCapture;
//!
//! let capture = WindowCapture::new("Notepad")?;
//! let frame = capture.capture()?;
//! let on_screen = capture.translate_to_screen((10, 20));
//! # let _ = (frame, on_screen);
//! # Ok(())
//! # }
//! ```
//!
//! The window handle and crop rectangle are frozen at construction; if the
//! window moves or resizes afterwards, captures and coordinate translation
//! silently use the old geometry. Re-attach to pick up new geometry.

pub mod capture;
pub mod config;
pub mod error;

pub use capture::CaptureRegion;
pub use config::CaptureOptions;
pub use error::{Error, Result};

#[cfg(windows)]
pub use capture::{
    window::{
        find_window, foreground_window, foreground_window_title, list_windows,
        set_foreground_window, set_window_title, window_rect, window_title, WindowInfo,
    },
    WindowCapture,
};
