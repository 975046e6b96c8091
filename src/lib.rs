//! # imgid
//!
//! Compact textual image identifiers and the CDN delivery URLs derived from
//! them. An identifier packs four pieces of metadata into one string:
//!
//! ```text
//! 5f2ab91c-darkred-150j
//! └──────┘ └─────┘ └─┬┘└ format code ('j' = jpeg)
//!   hash     color   ratio token (150 ≈ 1.5, landscape)
//! ```
//!
//! The grammar is `{hash}-{color}-{ratio_token}{format_code}`: hash and color
//! are free-form caller strings (trimmed; color also lowercased), the ratio
//! token is a fixed 3-digit rendering of width/height, and the format code is
//! a single character. Decoding parses from the *end* of the string — the
//! last character is the format code and the 3 characters after the last `-`
//! are the ratio token — so hash and color are write-only: they go into the
//! identifier but cannot be recovered from it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`format`] | `ImageFormat` enum and its single-character code table |
//! | [`ratio`] | 3-digit ratio token encoding, orientation bucket, token extraction |
//! | [`id`] | Identifier composition and positional decomposition |
//! | [`record`] | Full `ImageRecord` assembly: host normalization, expiry arithmetic |
//! | [`url`] | Delivery URL grammar and the `news`/`events` folder wrappers |
//! | [`config`] | `config.toml` loading for the CLI (retention days, delivery host) |
//! | [`error`] | `IdError` — the shared error type of the codec modules |
//!
//! # Design Decisions
//!
//! ## The Ratio Token Is a Display Bucket, Not a Ratio
//!
//! [`ratio::encode`] keeps only two significant digits of width/height and
//! drops the decimal point, so `"150"` is both 1.5 and 15. Decoding never
//! reconstructs the number; [`ratio::orientation`] reads just the leading
//! digit (`'0'` means portrait) and that is the whole inverse. Consumers that
//! need the true aspect ratio must store width and height separately —
//! [`record::ImageRecord`] does.
//!
//! ## Positional Parsing from the Last Separator
//!
//! Hash and color are not escaped when composed into an identifier. Decoding
//! relies on the last `-` to locate the ratio/format suffix, which holds as
//! long as callers keep `-` out of the color value (a hash may contain `-`
//! freely; only the final separator matters). This permissiveness is
//! deliberate: the identifiers live in URLs produced and consumed by the same
//! system, and the compact shape matters more than self-description.
//!
//! ## No Ambient Configuration
//!
//! Retention days and the delivery host are plain parameters of
//! [`record::build`] and [`url::delivery_url`]. The library never reads
//! globals or files; only the CLI loads `config.toml` and passes values down.
//! Every function here is a pure synchronous computation, safe to call from
//! any number of threads.

pub mod config;
pub mod error;
pub mod format;
pub mod id;
pub mod ratio;
pub mod record;
pub mod url;
