//! dwm-platform: native window-system boundary for win-dwm.
//!
//! Provides [`NativeWindowSystem`], the [`dwm_core::WindowSystem`] for the
//! target OS:
//!
//! - Windows: Win32 `EnumWindows`, `GetWindowTextW`,
//!   `GetWindowThreadProcessId`, `SwitchToThisWindow` and `ShowWindow`
//! - everything else: every call reports `Unsupported`

mod window;

pub use window::NativeWindowSystem;
