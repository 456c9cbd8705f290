//! Theme error types

use std::fmt;

use thiserror::Error;
use tinta_color::ColorError;

use crate::tone::ToneName;

/// Color field of a hue specification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HueField {
    Lightest,
    Darkest,
    Mid,
}

impl HueField {
    pub fn name(self) -> &'static str {
        match self {
            HueField::Lightest => "lightest",
            HueField::Darkest => "darkest",
            HueField::Mid => "mid",
        }
    }
}

impl fmt::Display for HueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced while resolving a palette
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// A hue color string failed to parse
    #[error("Invalid `{field}` color for tone `{tone}`: {source}")]
    InvalidHue {
        tone: ToneName,
        field: HueField,
        source: ColorError,
    },

    /// A tone name outside the semantic tone set
    #[error("Unknown tone `{0}`")]
    UnknownTone(String),

    /// A hue query string was malformed
    #[error("Invalid hue query: {0}")]
    InvalidQuery(String),

    /// The token tree could not be flattened
    #[error("Failed to serialize theme: {0}")]
    Serialize(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
