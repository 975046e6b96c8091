//! Delivery URL construction.
//!
//! URL grammar: `{host}/{folder}/{shard}/{size_class}/{id}.{ext}` where the
//! shard is the first 4 characters of the identifier and the extension is the
//! lowercase format name. The format defaults to the one encoded in the
//! identifier's trailing character; the host defaults to [`DEFAULT_HOST`].

use crate::error::IdError;
use crate::format::ImageFormat;
use crate::id;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default CDN delivery host, protocol-relative.
pub const DEFAULT_HOST: &str = "//img.newsdesk-cdn.net";

/// Logical CDN path segment selecting the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    News,
    Events,
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Folder::News => "news",
            Folder::Events => "events",
        })
    }
}

impl FromStr for Folder {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "news" => Ok(Folder::News),
            "events" => Ok(Folder::Events),
            other => Err(IdError::MalformedIdentifier(format!(
                "unknown delivery folder: {other:?}"
            ))),
        }
    }
}

/// Build a fully qualified delivery URL for `id`.
///
/// `size_class` is a caller-chosen label for a predefined dimension variant
/// (e.g. `"M"`, `"2400"`). An omitted `format` is decoded from the
/// identifier; an omitted `host` falls back to [`DEFAULT_HOST`]. Fails with
/// [`IdError::MalformedIdentifier`] when `id` has fewer than 4 characters to
/// shard on.
pub fn delivery_url(
    id: &str,
    size_class: &str,
    folder: Folder,
    format: Option<ImageFormat>,
    host: Option<&str>,
) -> Result<String, IdError> {
    let format = match format {
        Some(f) => f,
        None => id::decode_format(id)?,
    };
    let host = host.unwrap_or(DEFAULT_HOST);
    let shard = match id.char_indices().nth(3) {
        Some((pos, c)) => &id[..pos + c.len_utf8()],
        None => {
            return Err(IdError::MalformedIdentifier(format!(
                "identifier {id:?} is shorter than the 4-character shard"
            )));
        }
    };
    Ok(format!("{host}/{folder}/{shard}/{size_class}/{id}.{format}"))
}

/// Delivery URL in the `news` folder with the default host.
pub fn news_url(id: &str, size_class: &str, format: Option<ImageFormat>) -> Result<String, IdError> {
    delivery_url(id, size_class, Folder::News, format, None)
}

/// Delivery URL in the `events` folder with the default host.
pub fn event_url(
    id: &str,
    size_class: &str,
    format: Option<ImageFormat>,
) -> Result<String, IdError> {
    delivery_url(id, size_class, Folder::Events, format, None)
}
