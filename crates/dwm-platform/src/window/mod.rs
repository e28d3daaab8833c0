//! Window enumeration and activation backends.
//!
//! Platform implementations:
//! - Windows: Uses Win32 API (`windows.rs`)
//! - Others: `unsupported.rs`, errors on every call

#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
mod unsupported;

#[cfg(windows)]
pub use windows::Win32WindowSystem as NativeWindowSystem;

#[cfg(not(windows))]
pub use unsupported::UnsupportedWindowSystem as NativeWindowSystem;
