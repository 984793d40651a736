//! Window discovery and thin window-manager passthroughs.
//!
//! Lookup is enumeration based: every visible, titled top-level window is
//! collected into a local list and matched by exact title. Nothing here keeps
//! process-wide state between calls.

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use windows::core::HSTRING;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, RECT, TRUE};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetForegroundWindow, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    IsWindowVisible, SetForegroundWindow, SetWindowTextW,
};

use crate::error::{Error, Result};

/// Handle and title of one visible top-level window.
#[derive(Clone, Debug)]
pub struct WindowInfo {
    pub hwnd: HWND,
    pub title: String,
}

/// Enumerates all visible top-level windows that carry a title.
///
/// Returns a freshly built list on every call; handles may go stale as soon
/// as the enumerated windows close.
pub fn list_windows() -> Result<Vec<WindowInfo>> {
    unsafe extern "system" fn enum_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
        unsafe {
            let found = &mut *(lparam.0 as *mut Vec<WindowInfo>);

            if !IsWindowVisible(hwnd).as_bool() {
                return TRUE;
            }

            // Untitled windows are usually not main windows.
            let title = window_title(hwnd);
            if !title.is_empty() {
                found.push(WindowInfo { hwnd, title });
            }

            TRUE
        }
    }

    let mut found: Vec<WindowInfo> = Vec::new();
    unsafe {
        EnumWindows(Some(enum_callback), LPARAM(&mut found as *mut _ as isize)).map_err(|e| {
            Error::Os {
                call: "EnumWindows",
                source: e,
            }
        })?;
    }

    log::trace!("enumerated {} visible windows", found.len());
    Ok(found)
}

/// Finds the visible top-level window whose title exactly matches
/// `window_name`.
pub fn find_window(window_name: &str) -> Result<HWND> {
    list_windows()?
        .into_iter()
        .find(|w| w.title == window_name)
        .map(|w| w.hwnd)
        .ok_or_else(|| Error::WindowNotFound(window_name.to_string()))
}

/// Reads a window's title bar text. Returns an empty string for untitled
/// windows or stale handles.
pub fn window_title(hwnd: HWND) -> String {
    let title_len = unsafe { GetWindowTextLengthW(hwnd) };
    if title_len <= 0 {
        return String::new();
    }

    let mut title_buf: Vec<u16> = vec![0; (title_len + 1) as usize];
    let copied = unsafe { GetWindowTextW(hwnd, &mut title_buf) };
    OsString::from_wide(&title_buf[..copied.max(0) as usize])
        .to_string_lossy()
        .to_string()
}

/// Replaces a window's title bar text.
pub fn set_window_title(hwnd: HWND, title: &str) -> Result<()> {
    unsafe {
        SetWindowTextW(hwnd, &HSTRING::from(title)).map_err(|e| Error::Os {
            call: "SetWindowTextW",
            source: e,
        })
    }
}

/// Returns the window the user is currently working in, if any.
pub fn foreground_window() -> Option<HWND> {
    let hwnd = unsafe { GetForegroundWindow() };
    if hwnd.is_invalid() { None } else { Some(hwnd) }
}

/// Title of the current foreground window, if any.
pub fn foreground_window_title() -> Option<String> {
    foreground_window().map(window_title)
}

/// Brings a window to the foreground and gives it input focus.
pub fn set_foreground_window(hwnd: HWND) -> Result<()> {
    let ok = unsafe { SetForegroundWindow(hwnd) };
    if ok.as_bool() {
        Ok(())
    } else {
        Err(Error::Os {
            call: "SetForegroundWindow",
            source: windows::core::Error::from_win32(),
        })
    }
}

/// Full bounding rectangle of a window as `(left, top, right, bottom)` in
/// screen coordinates.
pub fn window_rect(hwnd: HWND) -> Result<(i32, i32, i32, i32)> {
    let mut rect = RECT::default();
    unsafe {
        GetWindowRect(hwnd, &mut rect).map_err(|e| Error::Os {
            call: "GetWindowRect",
            source: e,
        })?;
    }
    Ok((rect.left, rect.top, rect.right, rect.bottom))
}
