//! Window capture functionality.
//!
//! This module provides:
//! - Window discovery and passthroughs (`window`)
//! - Crop-rectangle math (`region`)
//! - Pixel-format conversion (`convert`)
//! - Client-area capture (`screenshot`)

pub mod convert;
pub mod region;
#[cfg(windows)]
pub mod screenshot;
#[cfg(windows)]
pub mod window;

pub use region::CaptureRegion;
#[cfg(windows)]
pub use screenshot::WindowCapture;
#[cfg(windows)]
pub use window::{find_window, list_windows, WindowInfo};
