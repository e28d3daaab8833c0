//! Activation selectors and their parsing.

use crate::error::{DwmError, DwmResult};
use crate::window::WindowHandle;
use std::fmt;

/// How the window to activate is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Literal handle, used without enumerating.
    Handle(WindowHandle),
    /// First visible window whose title contains the text.
    Title(String),
    /// First visible window owned by the process.
    Pid(u32),
}

/// How the raw `-a` value should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorKind {
    #[default]
    Title,
    Handle,
    Pid,
}

impl Selector {
    /// Interpret a raw command-line value.
    pub fn parse(value: &str, kind: SelectorKind) -> DwmResult<Self> {
        if value.is_empty() {
            return Err(DwmError::EmptyValue { flag: "-a" });
        }
        match kind {
            SelectorKind::Handle => parse_handle(value).map(Self::Handle),
            SelectorKind::Pid => parse_pid(value).map(Self::Pid),
            SelectorKind::Title => Ok(Self::Title(value.to_string())),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handle(handle) => write!(f, "handle {handle}"),
            Self::Title(title) => write!(f, "title {title:?}"),
            Self::Pid(pid) => write!(f, "pid {pid}"),
        }
    }
}

/// Parse a window handle, accepting `0x`, `0o`, `0b` and leading-`0` octal
/// prefixes as well as `_` digit separators.
pub fn parse_handle(value: &str) -> DwmResult<WindowHandle> {
    let raw = parse_prefixed_u64(value).ok_or_else(|| DwmError::InvalidHandle(value.to_string()))?;
    let raw = usize::try_from(raw).map_err(|_| DwmError::HandleOutOfRange(value.to_string()))?;
    Ok(WindowHandle(raw))
}

pub fn parse_pid(value: &str) -> DwmResult<u32> {
    value.parse().map_err(|source| DwmError::InvalidProcessId {
        value: value.to_string(),
        source,
    })
}

fn parse_prefixed_u64(value: &str) -> Option<u64> {
    let bytes = value.as_bytes();
    let (radix, digits, prefixed) = match bytes {
        [b'0', b'x' | b'X', ..] => (16, &value[2..], true),
        [b'0', b'o' | b'O', ..] => (8, &value[2..], true),
        [b'0', b'b' | b'B', ..] => (2, &value[2..], true),
        [b'0', _, ..] => (8, &value[1..], true),
        _ => (10, value, false),
    };

    if digits.is_empty() || !separators_ok(digits, prefixed) {
        return None;
    }

    let mut acc: u64 = 0;
    for c in digits.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(radix)?;
        acc = acc.checked_mul(u64::from(radix))?.checked_add(u64::from(digit))?;
    }
    Some(acc)
}

// An underscore must sit between digits; a base prefix counts as a digit.
fn separators_ok(digits: &str, prefixed: bool) -> bool {
    let mut after_digit = prefixed;
    for c in digits.chars() {
        if c == '_' {
            if !after_digit {
                return false;
            }
            after_digit = false;
        } else {
            after_digit = true;
        }
    }
    after_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handle_bases() {
        assert_eq!(parse_handle("0x10").unwrap(), WindowHandle(16));
        assert_eq!(parse_handle("0XfF").unwrap(), WindowHandle(255));
        assert_eq!(parse_handle("42").unwrap(), WindowHandle(42));
        assert_eq!(parse_handle("0o17").unwrap(), WindowHandle(15));
        assert_eq!(parse_handle("017").unwrap(), WindowHandle(15));
        assert_eq!(parse_handle("0b101").unwrap(), WindowHandle(5));
        assert_eq!(parse_handle("0").unwrap(), WindowHandle(0));
    }

    #[test]
    fn test_parse_handle_separators() {
        assert_eq!(parse_handle("1_000").unwrap(), WindowHandle(1000));
        assert_eq!(parse_handle("0x_ff").unwrap(), WindowHandle(255));
        assert!(parse_handle("_1").is_err());
        assert!(parse_handle("1_").is_err());
        assert!(parse_handle("1__0").is_err());
    }

    #[test]
    fn test_parse_handle_rejects_garbage() {
        for bad in ["", "0x", "0xg", "abc", "-1", "+1", "09", "0b2", " 1"] {
            assert!(
                matches!(parse_handle(bad), Err(DwmError::InvalidHandle(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_handle_overflow() {
        assert!(parse_handle("0x1_0000_0000_0000_0000").is_err());
        assert!(parse_handle("18446744073709551616").is_err());
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(
            Selector::parse("0x10", SelectorKind::Handle).unwrap(),
            Selector::Handle(WindowHandle(16))
        );
        assert_eq!(
            Selector::parse("1234", SelectorKind::Pid).unwrap(),
            Selector::Pid(1234)
        );
        assert_eq!(
            Selector::parse("0x10", SelectorKind::Title).unwrap(),
            Selector::Title("0x10".into())
        );
        assert!(matches!(
            Selector::parse("", SelectorKind::Title),
            Err(DwmError::EmptyValue { flag: "-a" })
        ));
        assert!(matches!(
            Selector::parse("notepad", SelectorKind::Pid),
            Err(DwmError::InvalidProcessId { .. })
        ));
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::Title("Edit".into()).to_string(), "title \"Edit\"");
        assert_eq!(Selector::Pid(3).to_string(), "pid 3");
        assert_eq!(Selector::Handle(WindowHandle(16)).to_string(), "handle 0x10");
    }
}
