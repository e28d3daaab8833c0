//! Boundary between the window service and the OS window manager.

use crate::error::NativeError;
use crate::show::ShowMode;
use crate::window::WindowHandle;

/// The native primitives the service is built from.
///
/// Implementations live in `dwm-platform`. Every method maps onto one OS call
/// (or a short fixed sequence of them) and reports failures unretried.
pub trait WindowSystem {
    /// All top-level windows in OS enumeration order.
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>, NativeError>;

    fn is_visible(&self, handle: WindowHandle) -> bool;

    /// Current window text. An empty string means the window has no title.
    fn window_text(&self, handle: WindowHandle) -> Result<String, NativeError>;

    /// Id of the process that created the window.
    fn process_id(&self, handle: WindowHandle) -> Result<u32, NativeError>;

    /// Bring the window to the foreground and give it input focus.
    fn switch_to(&self, handle: WindowHandle) -> Result<(), NativeError>;

    /// Apply a show-mode. Returns whether the window was previously visible.
    fn show(&self, handle: WindowHandle, mode: ShowMode) -> bool;

    /// Name of the machine the windows live on.
    fn host_name(&self) -> Result<String, NativeError>;
}
