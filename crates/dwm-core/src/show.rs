//! Show-modes applied to a window after activation.

use crate::error::DwmError;
use std::fmt;
use std::str::FromStr;

/// Visibility transform. Discriminants are the Win32 `SW_*` command codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowMode {
    /// `SW_SHOWNORMAL`
    Normal = 1,
    /// `SW_SHOW`
    Show = 5,
    /// `SW_RESTORE`: un-minimize and activate.
    #[default]
    Restore = 9,
    /// `SW_SHOWDEFAULT`
    ShowDefault = 10,
}

impl ShowMode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Normal),
            5 => Some(Self::Show),
            9 => Some(Self::Restore),
            10 => Some(Self::ShowDefault),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Show => "show",
            Self::Restore => "restore",
            Self::ShowDefault => "default",
        }
    }
}

impl fmt::Display for ShowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShowMode {
    type Err = DwmError;

    /// Accepts the numeric code or the mode name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i32>() {
            return Self::from_code(code).ok_or_else(|| DwmError::InvalidShowMode(s.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "normal" | "shownormal" => Ok(Self::Normal),
            "show" => Ok(Self::Show),
            "restore" => Ok(Self::Restore),
            "default" | "showdefault" | "show-default" => Ok(Self::ShowDefault),
            _ => Err(DwmError::InvalidShowMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_restore() {
        assert_eq!(ShowMode::default(), ShowMode::Restore);
        assert_eq!(ShowMode::default().code(), 9);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("1".parse::<ShowMode>().unwrap(), ShowMode::Normal);
        assert_eq!("5".parse::<ShowMode>().unwrap(), ShowMode::Show);
        assert_eq!("9".parse::<ShowMode>().unwrap(), ShowMode::Restore);
        assert_eq!("10".parse::<ShowMode>().unwrap(), ShowMode::ShowDefault);
        assert!("0".parse::<ShowMode>().is_err());
        assert!("3".parse::<ShowMode>().is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Restore".parse::<ShowMode>().unwrap(), ShowMode::Restore);
        assert_eq!("show-default".parse::<ShowMode>().unwrap(), ShowMode::ShowDefault);
        assert!(matches!(
            "maximize".parse::<ShowMode>(),
            Err(DwmError::InvalidShowMode(v)) if v == "maximize"
        ));
    }

    #[test]
    fn test_code_round_trips() {
        for mode in [ShowMode::Normal, ShowMode::Show, ShowMode::Restore, ShowMode::ShowDefault] {
            assert_eq!(ShowMode::from_code(mode.code()), Some(mode));
        }
    }
}
