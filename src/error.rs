//! Shared error type for identifier encoding and decoding.
//!
//! All failures are local, synchronous failures of a single call: there is no
//! partial state to roll back and nothing to retry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ratio of width/height does not render as 1–3 digits at two
    /// significant figures. Raised for zero dimensions and for ratios
    /// outside roughly [0.10, 99.5).
    #[error("invalid ratio for {width}x{height}: not representable as a 3-digit token")]
    InvalidRatio { width: u32, height: u32 },

    /// The trailing character has no registered format mapping.
    #[error("unknown format code '{0}'")]
    UnknownFormatCode(char),

    /// The identifier is too short or missing the `-` separator needed for
    /// positional extraction.
    #[error("malformed identifier: {0}")]
    MalformedIdentifier(String),
}
