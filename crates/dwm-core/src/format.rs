//! Text and JSON rendering of window listings.

use crate::window::WindowInfo;
use serde::Serialize;

/// Per-listing output settings. The host name belongs to the machine, not to
/// any window, so it travels here instead of on [`WindowInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFormat {
    pub host: String,
    pub include_pid: bool,
}

impl ListingFormat {
    pub fn new(host: impl Into<String>, include_pid: bool) -> Self {
        Self {
            host: host.into(),
            include_pid,
        }
    }

    /// `0x<handle> <desktop> [<pid>] <host> <title>`
    pub fn line(&self, info: &WindowInfo) -> String {
        if self.include_pid {
            format!(
                "{} {} {} {} {}",
                info.handle,
                info.desktop,
                info.pid.unwrap_or_default(),
                self.host,
                info.title
            )
        } else {
            format!("{} {} {} {}", info.handle, info.desktop, self.host, info.title)
        }
    }

    pub fn lines<'a>(&'a self, windows: &'a [WindowInfo]) -> impl Iterator<Item = String> + 'a {
        windows.iter().map(move |w| self.line(w))
    }

    pub fn records<'a>(&'a self, windows: &'a [WindowInfo]) -> Vec<WindowRecord<'a>> {
        windows
            .iter()
            .map(|w| WindowRecord {
                handle: w.handle.to_string(),
                desktop: w.desktop,
                pid: if self.include_pid { w.pid } else { None },
                host: &self.host,
                title: &w.title,
            })
            .collect()
    }

    pub fn to_json(&self, windows: &[WindowInfo]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records(windows))
    }
}

/// One listed window as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct WindowRecord<'a> {
    pub handle: String,
    pub desktop: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    pub host: &'a str,
    pub title: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowHandle;

    fn sample() -> Vec<WindowInfo> {
        vec![
            WindowInfo::new(WindowHandle(0x20a4c), "Untitled - Notepad").with_pid(4312),
            WindowInfo::new(WindowHandle(0x10), "Calculator").with_pid(88),
        ]
    }

    #[test]
    fn test_line_without_pid() {
        let fmt = ListingFormat::new("DESKTOP-1", false);
        let lines: Vec<_> = fmt.lines(&sample()).collect();
        assert_eq!(lines[0], "0x20a4c 0 DESKTOP-1 Untitled - Notepad");
        assert_eq!(lines[1], "0x10 0 DESKTOP-1 Calculator");
    }

    #[test]
    fn test_line_with_pid() {
        let fmt = ListingFormat::new("DESKTOP-1", true);
        let lines: Vec<_> = fmt.lines(&sample()).collect();
        assert_eq!(lines[0], "0x20a4c 0 4312 DESKTOP-1 Untitled - Notepad");
        assert_eq!(lines[1], "0x10 0 88 DESKTOP-1 Calculator");
    }

    #[test]
    fn test_field_counts() {
        let windows = vec![WindowInfo::new(WindowHandle(1), "Title").with_pid(2)];
        let plain = ListingFormat::new("host", false).line(&windows[0]);
        let with_pid = ListingFormat::new("host", true).line(&windows[0]);
        assert_eq!(plain.split(' ').count(), 4);
        assert_eq!(with_pid.split(' ').count(), 5);
    }

    #[test]
    fn test_json_records() {
        let fmt = ListingFormat::new("host", false);
        let json = fmt.to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["handle"], "0x20a4c");
        assert_eq!(value[0]["desktop"], 0);
        assert_eq!(value[0]["host"], "host");
        assert!(value[0].get("pid").is_none());

        let fmt = ListingFormat::new("host", true);
        let value: serde_json::Value = serde_json::from_str(&fmt.to_json(&sample()).unwrap()).unwrap();
        assert_eq!(value[1]["pid"], 88);
        assert_eq!(value[1]["title"], "Calculator");
    }
}
