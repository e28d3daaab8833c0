//! Error types for window queries and activation.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Win32 `ERROR_INVALID_WINDOW_HANDLE`.
pub const ERROR_INVALID_WINDOW_HANDLE: i32 = 1400;

/// Failure reported by a native window-system call.
#[derive(Debug, Error)]
pub enum NativeError {
    #[error("{call} failed: {source}")]
    Call {
        call: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}

impl NativeError {
    /// Capture the calling thread's last OS error for `call`.
    pub fn last_os_error(call: &'static str) -> Self {
        Self::Call {
            call,
            source: io::Error::last_os_error(),
        }
    }

    /// Build an error from a raw OS error code.
    pub fn from_code(call: &'static str, code: i32) -> Self {
        Self::Call {
            call,
            source: io::Error::from_raw_os_error(code),
        }
    }

    /// The raw OS error code, if the failure came from an OS call.
    pub fn raw_code(&self) -> Option<i32> {
        match self {
            Self::Call { source, .. } => source.raw_os_error(),
            Self::Unsupported(_) => None,
        }
    }

    /// True when the window was destroyed between enumeration and inspection.
    pub fn is_stale_handle(&self) -> bool {
        self.raw_code() == Some(ERROR_INVALID_WINDOW_HANDLE)
    }
}

/// Errors surfaced by [`crate::WindowService`] and argument parsing.
#[derive(Debug, Error)]
pub enum DwmError {
    #[error("invalid window handle {0:?}: expected a decimal, 0x, 0o or 0b integer")]
    InvalidHandle(String),
    #[error("window handle {0:?} does not fit in a pointer-sized integer")]
    HandleOutOfRange(String),
    #[error("invalid process id {value:?}: {source}")]
    InvalidProcessId {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("-i and -p cannot both select the -a value")]
    ConflictingSelectors,
    #[error("{flag} requires a non-empty value")]
    EmptyValue { flag: &'static str },
    #[error("invalid show mode {0:?} (expected 1/normal, 5/show, 9/restore or 10/default)")]
    InvalidShowMode(String),
    #[error("window not found for {0}")]
    WindowNotFound(String),
    #[error(transparent)]
    Native(#[from] NativeError),
}

/// Result type for window operations.
pub type DwmResult<T> = Result<T, DwmError>;
