//! dwm-core: window listing and activation, independent of the OS.
//!
//! The native primitives sit behind [`WindowSystem`]; `dwm-platform` provides
//! the Win32 implementation. [`WindowService`] composes them into the two
//! operations the `win-dwm` binary exposes.

mod error;
mod format;
mod selector;
mod service;
mod show;
mod system;
mod window;

pub use error::{DwmError, DwmResult, NativeError, ERROR_INVALID_WINDOW_HANDLE};
pub use format::{ListingFormat, WindowRecord};
pub use selector::{parse_handle, parse_pid, Selector, SelectorKind};
pub use service::WindowService;
pub use show::ShowMode;
pub use system::WindowSystem;
pub use window::{WindowFilter, WindowHandle, WindowInfo};
