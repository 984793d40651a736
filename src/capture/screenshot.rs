//! Client-area capture over a GDI device context.
//!
//! A [`WindowCapture`] attaches to one window at construction time and then
//! copies that window's client-area pixels on demand with `BitBlt`. All GDI
//! handles used by a copy are scoped to the call and released on every exit
//! path, including mid-copy failures.

use image::RgbImage;

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, DeleteDC, DeleteObject, GetDIBits,
    GetWindowDC, ReleaseDC, SelectObject, BI_RGB, BITMAPINFO, BITMAPINFOHEADER, DIB_RGB_COLORS,
    HBITMAP, HDC, HGDIOBJ, SRCCOPY,
};
use windows::Win32::UI::WindowsAndMessaging::{ShowWindow, SW_MAXIMIZE};

use super::convert::bgra_to_rgb;
use super::region::CaptureRegion;
use super::window::{find_window, window_rect};
use crate::config::CaptureOptions;
use crate::error::{Error, Result};

/// Captures the client area of one window located by exact title.
///
/// The window handle and crop rectangle are resolved once, at construction,
/// and never refreshed. If the window moves or resizes afterwards the stored
/// region goes stale: [`WindowCapture::capture`] grabs the wrong screen area
/// and [`WindowCapture::translate_to_screen`] reports outdated coordinates.
/// Callers that expect the window to move should construct a fresh instance.
pub struct WindowCapture {
    hwnd: HWND,
    region: CaptureRegion,
}

impl WindowCapture {
    /// Attaches to the window titled `window_name` using default options.
    pub fn new(window_name: &str) -> Result<Self> {
        Self::with_options(window_name, &CaptureOptions::default())
    }

    /// Attaches to the window titled `window_name`.
    ///
    /// Fails with [`Error::WindowNotFound`] when no visible window carries
    /// that exact title. With `maximize_on_attach` set, the window is
    /// maximized before its rectangle is measured.
    pub fn with_options(window_name: &str, options: &CaptureOptions) -> Result<Self> {
        let hwnd = find_window(window_name)?;

        if options.maximize_on_attach {
            unsafe {
                let _ = ShowWindow(hwnd, SW_MAXIMIZE);
            }
        }

        let (left, top, right, bottom) = window_rect(hwnd)?;
        let region = CaptureRegion::from_window_rect(left, top, right, bottom, options)?;

        log::debug!(
            "attached to {:?} ({}x{} at screen offset ({}, {}))",
            window_name,
            region.width,
            region.height,
            region.screen_offset_x,
            region.screen_offset_y,
        );

        Ok(Self { hwnd, region })
    }

    /// Handle of the captured window.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Crop rectangle and screen offset frozen at construction.
    pub fn region(&self) -> &CaptureRegion {
        &self.region
    }

    /// Copies the window's current client-area pixels into a fresh RGB
    /// buffer of shape `(height, width, 3)`.
    ///
    /// Single-shot, synchronous and blocking. A failed copy surfaces
    /// [`Error::Capture`] but leaves the instance usable; the caller may
    /// simply try again.
    pub fn capture(&self) -> Result<RgbImage> {
        let CaptureRegion {
            width,
            height,
            crop_origin_x,
            crop_origin_y,
            ..
        } = self.region;

        let mut frame = GdiFrame::acquire(self.hwnd, width, height)?;

        unsafe {
            BitBlt(
                frame.mem_dc,
                0,
                0,
                width,
                height,
                frame.window_dc,
                crop_origin_x,
                crop_origin_y,
                SRCCOPY,
            )
            .map_err(|e| Error::Capture {
                call: "BitBlt",
                source: e,
            })?;
        }

        // The bitmap must be deselected before GetDIBits may read it.
        unsafe {
            SelectObject(frame.mem_dc, frame.previous);
        }
        frame.previous = HGDIOBJ::default();

        // Negative height requests a top-down DIB, so rows come out in
        // image order. 32-bit rows need no DWORD padding.
        let row_pitch = width as usize * 4;
        let mut raw = vec![0u8; row_pitch * height as usize];
        let mut info = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height,
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0 as u32,
                ..Default::default()
            },
            ..Default::default()
        };

        let copied = unsafe {
            GetDIBits(
                frame.mem_dc,
                frame.bitmap,
                0,
                height as u32,
                Some(raw.as_mut_ptr().cast()),
                &mut info,
                DIB_RGB_COLORS,
            )
        };
        drop(frame);
        if copied != height {
            return Err(capture_err("GetDIBits"));
        }

        log::debug!("captured {}x{} frame", width, height);
        Ok(bgra_to_rgb(&raw, width as u32, height as u32, row_pitch))
    }

    /// Translates a pixel position on a captured image to an absolute screen
    /// position, matching the coordinate space the OS input APIs expect.
    ///
    /// Assumes the window has not moved since construction; a moved window
    /// yields a wrong, not erroring, result.
    pub fn translate_to_screen(&self, pos: (i32, i32)) -> (i32, i32) {
        self.region.translate_to_screen(pos)
    }
}

/// GDI handles for one copy, released in reverse acquisition order on drop.
struct GdiFrame {
    hwnd: HWND,
    window_dc: HDC,
    mem_dc: HDC,
    bitmap: HBITMAP,
    previous: HGDIOBJ,
}

impl GdiFrame {
    fn acquire(hwnd: HWND, width: i32, height: i32) -> Result<Self> {
        let mut frame = GdiFrame {
            hwnd,
            window_dc: HDC::default(),
            mem_dc: HDC::default(),
            bitmap: HBITMAP::default(),
            previous: HGDIOBJ::default(),
        };

        // Partial acquisition still releases through Drop on early return.
        unsafe {
            frame.window_dc = GetWindowDC(hwnd);
            if frame.window_dc.is_invalid() {
                return Err(capture_err("GetWindowDC"));
            }

            frame.mem_dc = CreateCompatibleDC(frame.window_dc);
            if frame.mem_dc.is_invalid() {
                return Err(capture_err("CreateCompatibleDC"));
            }

            frame.bitmap = CreateCompatibleBitmap(frame.window_dc, width, height);
            if frame.bitmap.is_invalid() {
                return Err(capture_err("CreateCompatibleBitmap"));
            }

            frame.previous = SelectObject(frame.mem_dc, frame.bitmap);
            if frame.previous.is_invalid() {
                return Err(capture_err("SelectObject"));
            }
        }

        Ok(frame)
    }
}

impl Drop for GdiFrame {
    fn drop(&mut self) {
        unsafe {
            if !self.previous.is_invalid() {
                SelectObject(self.mem_dc, self.previous);
            }
            if !self.bitmap.is_invalid() {
                let _ = DeleteObject(self.bitmap);
            }
            if !self.mem_dc.is_invalid() {
                let _ = DeleteDC(self.mem_dc);
            }
            if !self.window_dc.is_invalid() {
                ReleaseDC(self.hwnd, self.window_dc);
            }
        }
    }
}

fn capture_err(call: &'static str) -> Error {
    Error::Capture {
        call,
        source: windows::core::Error::from_win32(),
    }
}
