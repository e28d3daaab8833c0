//! Window data model: handles, enumeration results and filters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque platform-assigned window identifier.
///
/// The OS owns the window; this is only a transient reference and carries no
/// lifecycle obligations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(pub usize);

impl WindowHandle {
    pub fn as_raw(self) -> usize {
        self.0
    }
}

impl From<usize> for WindowHandle {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::LowerHex for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// A visible top-level window captured during one enumeration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub handle: WindowHandle,
    /// Virtual desktop index. Not resolved yet, always 0.
    pub desktop: i64,
    /// Owning process id, only queried when a filter or the listing needs it.
    pub pid: Option<u32>,
    /// Window text at the instant of enumeration.
    pub title: String,
}

impl WindowInfo {
    pub fn new(handle: WindowHandle, title: impl Into<String>) -> Self {
        Self {
            handle,
            desktop: 0,
            pid: None,
            title: title.into(),
        }
    }

    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }
}

/// Narrows an enumeration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowFilter {
    /// Case-sensitive title substring. Empty means no filter.
    pub title: Option<String>,
    /// Only windows owned by this process.
    pub pid: Option<u32>,
    /// Record the owning process id on every result.
    pub include_pid: bool,
}

impl WindowFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn by_pid(pid: u32) -> Self {
        Self {
            pid: Some(pid),
            ..Self::default()
        }
    }

    pub fn including_pid(mut self, include: bool) -> Self {
        self.include_pid = include;
        self
    }

    /// Whether the owning process id has to be queried for each window.
    pub fn needs_pid(&self) -> bool {
        self.include_pid || self.pid.is_some()
    }

    pub fn matches_title(&self, title: &str) -> bool {
        match self.title.as_deref() {
            Some(needle) if !needle.is_empty() => title.contains(needle),
            _ => true,
        }
    }

    pub fn matches_pid(&self, pid: u32) -> bool {
        self.pid.map_or(true, |wanted| wanted == pid)
    }
}
