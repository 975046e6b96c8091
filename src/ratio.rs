//! Ratio token encoding and orientation bucketing.
//!
//! The token is the legacy two-significant-digit rendering of width/height
//! with the decimal point removed, right-padded with `'0'` to exactly 3
//! characters: 3/2 → 1.5 → `"150"`, 3/4 → 0.75 → `"075"`, 12/1 → 12 →
//! `"120"`. The rendering is deliberately lossy — `"150"` is produced by both
//! 1.5 and 15 — so decoding only recovers a coarse orientation bucket, never
//! the numeric ratio.

use crate::error::IdError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse orientation bucket derived from a ratio token's first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        })
    }
}

/// Encode `width / height` as a 3-digit ratio token.
///
/// The ratio is rounded to two significant digits (half away from zero) and
/// rendered without an exponent, mirroring the rendering the identifiers were
/// originally minted with: `[0.1, 1)` → `0.XX`, `[1, 10)` → `X.X`,
/// `[10, 100)` → `XX`. The decimal point is removed and the result padded on
/// the right with `'0'` to 3 characters.
///
/// Fails with [`IdError::InvalidRatio`] when either dimension is zero or the
/// rounded ratio falls outside what that rendering fits in 3 characters,
/// i.e. below roughly 0.1 or at/above 99.5.
pub fn encode(width: u32, height: u32) -> Result<String, IdError> {
    if width == 0 || height == 0 {
        return Err(IdError::InvalidRatio { width, height });
    }
    let r = width as f64 / height as f64;

    // Bucket by the raw magnitude, then round to a 2-digit mantissa within
    // the bucket (half away from zero). The multipliers are exact powers of
    // ten, so each product rounds once. Rounding can carry the mantissa to
    // 100 (e.g. 0.0996 → 0.10), which bumps the exponent by one.
    let (scaled, bucket_exp) = if r >= 100.0 {
        return Err(IdError::InvalidRatio { width, height });
    } else if r >= 10.0 {
        (r, 1)
    } else if r >= 1.0 {
        (r * 10.0, 0)
    } else if r >= 0.1 {
        (r * 100.0, -1)
    } else if r >= 0.01 {
        (r * 1000.0, -2)
    } else {
        return Err(IdError::InvalidRatio { width, height });
    };
    let mut mant = scaled.round() as u32;
    let mut exp = bucket_exp;
    if mant == 100 {
        mant = 10;
        exp += 1;
    }

    match exp {
        // 0.XX → "0XX"
        -1 => Ok(format!("0{mant}")),
        // X.X → "XX" → pad; XX → pad. Both render as the mantissa digits.
        0 | 1 => Ok(format!("{mant}0")),
        // exp 2: rounded to 100; exp -2: would render as "0.0XX", 4 digits.
        _ => Err(IdError::InvalidRatio { width, height }),
    }
}

/// Orientation bucket for a ratio token: portrait iff the first character is
/// `'0'`.
///
/// This only detects ratios that rendered with a leading zero (roughly
/// [0.1, 1)); it is a display heuristic, not an inverse of [`encode`].
pub fn orientation(token: &str) -> Orientation {
    if token.starts_with('0') {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    }
}

/// Extract the 3-character ratio token following the last `-` in `id`.
///
/// Fails with [`IdError::MalformedIdentifier`] when there is no `-` or fewer
/// than 3 characters follow it.
pub fn extract_token(id: &str) -> Result<&str, IdError> {
    let sep = id
        .rfind('-')
        .ok_or_else(|| IdError::MalformedIdentifier(format!("no '-' separator in {id:?}")))?;
    id.get(sep + 1..sep + 4)
        .ok_or_else(|| IdError::MalformedIdentifier(format!("no ratio token after '-' in {id:?}")))
}
