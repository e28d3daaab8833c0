//! Windows implementation of the window system using Win32.

use dwm_core::{NativeError, ShowMode, WindowHandle, WindowSystem, ERROR_INVALID_WINDOW_HANDLE};
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::ptr;
use tracing::{debug, trace};
use windows_sys::Win32::Foundation::{
    GetLastError, SetLastError, BOOL, ERROR_MORE_DATA, HWND, LPARAM, TRUE,
};
use windows_sys::Win32::System::SystemInformation::{
    ComputerNamePhysicalDnsHostname, GetComputerNameExW,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsWindow,
    IsWindowVisible, ShowWindow, SwitchToThisWindow,
};

/// Win32 window system. Stateless; handles are plain `HWND` values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

fn hwnd(handle: WindowHandle) -> HWND {
    handle.as_raw() as HWND
}

// Runs inside EnumWindows on the calling thread. It only records the handle so
// nothing here can block or re-enter the window manager.
unsafe extern "system" fn collect_handle(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = &mut *(lparam as *mut Vec<WindowHandle>);
    handles.push(WindowHandle(hwnd as usize));
    TRUE
}

/// A zero return is only a failure when the last error is set; otherwise the
/// window simply has no title.
fn check_last_error(call: &'static str) -> Result<(), NativeError> {
    let code = unsafe { GetLastError() };
    if code == 0 {
        Ok(())
    } else {
        Err(NativeError::from_code(call, code as i32))
    }
}

impl WindowSystem for Win32WindowSystem {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>, NativeError> {
        let mut handles: Vec<WindowHandle> = Vec::new();

        let ok = unsafe {
            EnumWindows(
                Some(collect_handle),
                &mut handles as *mut Vec<WindowHandle> as LPARAM,
            )
        };
        if ok == 0 {
            return Err(NativeError::last_os_error("EnumWindows"));
        }

        trace!(count = handles.len(), "EnumWindows returned");
        Ok(handles)
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        unsafe { IsWindowVisible(hwnd(handle)) != 0 }
    }

    fn window_text(&self, handle: WindowHandle) -> Result<String, NativeError> {
        let hwnd = hwnd(handle);
        unsafe {
            // Both calls return 0 for an untitled window without touching the
            // last error, so it has to be cleared first.
            SetLastError(0);
            let title_len = GetWindowTextLengthW(hwnd);
            if title_len <= 0 {
                check_last_error("GetWindowTextLengthW")?;
                return Ok(String::new());
            }

            let mut title_buf: Vec<u16> = vec![0; (title_len + 1) as usize];
            SetLastError(0);
            let copied = GetWindowTextW(hwnd, title_buf.as_mut_ptr(), title_buf.len() as i32);
            if copied <= 0 {
                check_last_error("GetWindowTextW")?;
                return Ok(String::new());
            }

            title_buf.truncate(copied as usize);
            Ok(OsString::from_wide(&title_buf)
                .to_string_lossy()
                .into_owned())
        }
    }

    fn process_id(&self, handle: WindowHandle) -> Result<u32, NativeError> {
        let mut pid: u32 = 0;
        let thread_id = unsafe { GetWindowThreadProcessId(hwnd(handle), &mut pid) };
        if thread_id == 0 {
            return Err(NativeError::last_os_error("GetWindowThreadProcessId"));
        }
        Ok(pid)
    }

    fn switch_to(&self, handle: WindowHandle) -> Result<(), NativeError> {
        let hwnd = hwnd(handle);
        unsafe {
            // SwitchToThisWindow has no return value; reject dead handles up front.
            if IsWindow(hwnd) == 0 {
                return Err(NativeError::from_code(
                    "SwitchToThisWindow",
                    ERROR_INVALID_WINDOW_HANDLE,
                ));
            }
            SwitchToThisWindow(hwnd, TRUE);
        }
        debug!(%handle, "switched to window");
        Ok(())
    }

    fn show(&self, handle: WindowHandle, mode: ShowMode) -> bool {
        unsafe { ShowWindow(hwnd(handle), mode.code()) != 0 }
    }

    fn host_name(&self) -> Result<String, NativeError> {
        unsafe {
            let mut size: u32 = 0;
            let ok = GetComputerNameExW(ComputerNamePhysicalDnsHostname, ptr::null_mut(), &mut size);
            if ok == 0 && GetLastError() != ERROR_MORE_DATA {
                return Err(NativeError::last_os_error("GetComputerNameExW"));
            }

            let mut name_buf: Vec<u16> = vec![0; size.max(1) as usize];
            let mut size = name_buf.len() as u32;
            if GetComputerNameExW(ComputerNamePhysicalDnsHostname, name_buf.as_mut_ptr(), &mut size) == 0 {
                return Err(NativeError::last_os_error("GetComputerNameExW"));
            }

            // On success `size` excludes the terminating null.
            name_buf.truncate(size as usize);
            Ok(OsString::from_wide(&name_buf)
                .to_string_lossy()
                .into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_some_windows() {
        let system = Win32WindowSystem::new();
        let handles = system.top_level_windows().unwrap();
        assert!(!handles.is_empty());
    }

    #[test]
    fn test_host_name_is_not_empty() {
        let system = Win32WindowSystem::new();
        assert!(!system.host_name().unwrap().is_empty());
    }

    #[test]
    fn test_dead_handle_is_rejected() {
        let system = Win32WindowSystem::new();
        let err = system.switch_to(WindowHandle(0)).unwrap_err();
        assert!(err.is_stale_handle());
    }
}
