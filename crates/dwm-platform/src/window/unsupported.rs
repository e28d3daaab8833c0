//! Fallback for targets without a window-system backend.

use dwm_core::{NativeError, ShowMode, WindowHandle, WindowSystem};
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedWindowSystem;

impl UnsupportedWindowSystem {
    pub fn new() -> Self {
        Self
    }
}

impl WindowSystem for UnsupportedWindowSystem {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>, NativeError> {
        Err(NativeError::Unsupported("window enumeration"))
    }

    fn is_visible(&self, _handle: WindowHandle) -> bool {
        false
    }

    fn window_text(&self, _handle: WindowHandle) -> Result<String, NativeError> {
        Err(NativeError::Unsupported("reading window text"))
    }

    fn process_id(&self, _handle: WindowHandle) -> Result<u32, NativeError> {
        Err(NativeError::Unsupported("querying the window owner"))
    }

    fn switch_to(&self, _handle: WindowHandle) -> Result<(), NativeError> {
        Err(NativeError::Unsupported("window activation"))
    }

    fn show(&self, handle: WindowHandle, mode: ShowMode) -> bool {
        debug!(%handle, %mode, "show ignored on unsupported platform");
        false
    }

    fn host_name(&self) -> Result<String, NativeError> {
        Err(NativeError::Unsupported("host name lookup"))
    }
}
