// crates/tinylayout-core/src/layout_units.rs
use serde::{Deserialize, Serialize};

use crate::{CoreError, Result};

/// A style dimension: an explicit pixel size or one of the sentinel modes.
///
/// Hosts that speak the raw 16-bit encoding use [`Length::from_raw`] and
/// [`Length::to_raw`]; any non-negative raw value is an explicit size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "LengthRepr", into = "LengthRepr")]
pub enum Length {
    /// Fixed pixel value
    Pixels(i16),
    /// Size from content
    Auto,
    /// Unset, no override
    #[default]
    None,
    /// Reserved, not consumed by layout
    Full,
}

impl Length {
    pub const RAW_AUTO: i16 = -1;
    pub const RAW_NONE: i16 = -2;
    pub const RAW_FULL: i16 = -3;

    pub fn from_raw(raw: i16) -> Self {
        match raw {
            Self::RAW_AUTO => Length::Auto,
            Self::RAW_NONE => Length::None,
            Self::RAW_FULL => Length::Full,
            px => Length::Pixels(px),
        }
    }

    pub fn to_raw(self) -> i16 {
        match self {
            Length::Pixels(px) => px,
            Length::Auto => Self::RAW_AUTO,
            Length::None => Self::RAW_NONE,
            Length::Full => Self::RAW_FULL,
        }
    }

    /// The explicit size, if this length overrides content sizing.
    ///
    /// Negative pixel values never override, matching the raw `>= 0` test.
    pub fn explicit(self) -> Option<i16> {
        match self {
            Length::Pixels(px) if px >= 0 => Some(px),
            _ => None,
        }
    }

    pub fn is_explicit(self) -> bool {
        self.explicit().is_some()
    }

    /// Parse `"auto"`, `"none"`, `"full"`, `"120"` or `"120px"`.
    pub fn from_string(value: &str) -> Result<Self> {
        let value = value.trim();

        match value {
            "auto" => return Ok(Length::Auto),
            "none" => return Ok(Length::None),
            "full" => return Ok(Length::Full),
            _ => {}
        }

        let number = value.strip_suffix("px").unwrap_or(value);
        number
            .trim()
            .parse::<i16>()
            .map(Length::Pixels)
            .map_err(|_| CoreError::InvalidLength(value.to_string()))
    }
}

impl From<i16> for Length {
    fn from(px: i16) -> Self {
        Length::Pixels(px)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Pixels(i16),
    Keyword(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = CoreError;

    fn try_from(repr: LengthRepr) -> Result<Self> {
        match repr {
            LengthRepr::Pixels(px) => Ok(Length::Pixels(px)),
            LengthRepr::Keyword(keyword) => Length::from_string(&keyword),
        }
    }
}

impl From<Length> for LengthRepr {
    fn from(length: Length) -> Self {
        match length {
            Length::Pixels(px) => LengthRepr::Pixels(px),
            Length::Auto => LengthRepr::Keyword("auto".to_string()),
            Length::None => LengthRepr::Keyword("none".to_string()),
            Length::Full => LengthRepr::Keyword("full".to_string()),
        }
    }
}
