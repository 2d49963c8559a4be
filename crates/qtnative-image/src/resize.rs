//! Resize modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How an image is fitted into its frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    #[default]
    Cover,
    Contain,
    Stretch,
    Repeat,
    Center,
}

impl ResizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::Stretch => "stretch",
            Self::Repeat => "repeat",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised resize mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize mode '{0}'")]
pub struct ParseResizeModeError(pub String);

impl FromStr for ResizeMode {
    type Err = ParseResizeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(Self::Cover),
            "contain" => Ok(Self::Contain),
            "stretch" => Ok(Self::Stretch),
            "repeat" => Ok(Self::Repeat),
            "center" => Ok(Self::Center),
            other => Err(ParseResizeModeError(other.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_mode_by_name() {
        for mode in [
            ResizeMode::Cover,
            ResizeMode::Contain,
            ResizeMode::Stretch,
            ResizeMode::Repeat,
            ResizeMode::Center,
        ] {
            assert_eq!(mode.as_str().parse::<ResizeMode>(), Ok(mode));
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!("fill".parse::<ResizeMode>().is_err());
    }

    #[test]
    fn default_is_cover() {
        assert_eq!(ResizeMode::default(), ResizeMode::Cover);
    }
}
