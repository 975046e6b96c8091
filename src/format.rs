//! Image format enumeration and its single-character code table.
//!
//! Each format has exactly one code character used as the identifier suffix,
//! and a lowercase name used as the URL file extension. The mapping is an
//! exhaustive `match` in both directions, so adding a variant without a code
//! is a compile error; a test pins the codes as pairwise distinct.

use crate::error::IdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported image encodings. Fixed set, known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
    Gif,
}

impl ImageFormat {
    /// Every format, in canonical order.
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::Webp,
        ImageFormat::Gif,
    ];

    /// The single-character code written at the end of an identifier.
    pub fn code(self) -> char {
        match self {
            ImageFormat::Jpeg => 'j',
            ImageFormat::Png => 'p',
            ImageFormat::Webp => 'w',
            ImageFormat::Gif => 'g',
        }
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: char) -> Result<ImageFormat, IdError> {
        match code {
            'j' => Ok(ImageFormat::Jpeg),
            'p' => Ok(ImageFormat::Png),
            'w' => Ok(ImageFormat::Webp),
            'g' => Ok(ImageFormat::Gif),
            other => Err(IdError::UnknownFormatCode(other)),
        }
    }

    /// Look up the format encoded by the *last* character of `s`.
    ///
    /// Accepts a bare code, a full identifier, or a URL-like string — anything
    /// whose trailing character is a format code.
    pub fn from_trailing(s: &str) -> Result<ImageFormat, IdError> {
        match s.chars().last() {
            Some(c) => ImageFormat::from_code(c),
            None => Err(IdError::MalformedIdentifier(
                "empty string has no trailing format code".into(),
            )),
        }
    }

    /// Lowercase name, doubling as the URL file extension.
    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
            ImageFormat::Gif => "gif",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageFormat {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            "webp" => Ok(ImageFormat::Webp),
            "gif" => Ok(ImageFormat::Gif),
            other => Err(IdError::MalformedIdentifier(format!(
                "unknown format name: {other:?}"
            ))),
        }
    }
}
