//! Image record assembly: identifier, host normalization, expiry arithmetic.
//!
//! [`build`] turns caller-supplied metadata into a complete, immutable
//! [`ImageRecord`]. Retention is injected as a parameter rather than read
//! from ambient state, so the function stays pure apart from the clock read
//! when no `created_at` is given.

use crate::error::IdError;
use crate::format::ImageFormat;
use crate::id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds per retention day.
const DAY_SECONDS: i64 = 86_400;

/// Input metadata for [`build`]. Plain data; nothing is mutated.
#[derive(Debug, Clone)]
pub struct BuildParams {
    /// Content hash. Stored as given; the identifier uses a trimmed copy.
    pub hash: String,
    /// Dominant color name. Trimmed and lowercased before storage.
    pub color: String,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    /// Byte length of the image payload.
    pub length: u64,
    /// Origin host; normalized via [`normalize_host`].
    pub host: String,
    /// Ingestion instant. `None` means "now".
    pub created_at: Option<DateTime<Utc>>,
}

/// A fully assembled image record. Created once at ingestion, immutable
/// thereafter; serialization to whatever store the caller uses is the
/// caller's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub hash: String,
    pub width: u32,
    pub height: u32,
    /// Delivery hosts, insertion order preserved. Owned by the record.
    pub hosts: Vec<String>,
    pub length: u64,
    pub format: ImageFormat,
    pub color: String,
    pub created_at: DateTime<Utc>,
    /// Epoch seconds, truncated toward zero.
    pub expires_at: i64,
}

/// Assemble an [`ImageRecord`] from `params`, expiring `retention_days`
/// after `created_at`.
pub fn build(params: &BuildParams, retention_days: u32) -> Result<ImageRecord, IdError> {
    let id = id::encode(
        &params.hash,
        &params.color,
        params.format,
        params.width,
        params.height,
    )?;

    let created_at = params.created_at.unwrap_or_else(Utc::now);

    Ok(ImageRecord {
        id,
        hash: params.hash.clone(),
        width: params.width,
        height: params.height,
        hosts: vec![normalize_host(&params.host)],
        length: params.length,
        format: params.format,
        color: params.color.trim().to_lowercase(),
        created_at,
        expires_at: expires_at(created_at, retention_days),
    })
}

/// Expiry instant as epoch seconds: exactly `retention_days` of 86 400
/// seconds after `created_at`, sub-second part truncated toward zero.
pub fn expires_at(created_at: DateTime<Utc>, retention_days: u32) -> i64 {
    created_at.timestamp() + i64::from(retention_days) * DAY_SECONDS
}

/// Trim and lowercase a host, stripping one leading `www`/`www0`–`www9`/
/// `m`/`mobi` label when followed by a dot.
///
/// `"www2.example.com"` → `"example.com"`, `"shop.example.com"` unchanged.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().to_lowercase();
    if let Some(dot) = host.find('.') {
        let label = &host[..dot];
        let strippable = matches!(label, "www" | "m" | "mobi")
            || (label.len() == 4 && label.starts_with("www") && label.as_bytes()[3].is_ascii_digit());
        if strippable {
            return host[dot + 1..].to_string();
        }
    }
    host
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn params() -> BuildParams {
        BuildParams {
            hash: "5f2ab91c".into(),
            color: " DarkRed ".into(),
            width: 3,
            height: 2,
            format: ImageFormat::Jpeg,
            length: 48_213,
            host: "www.example.com".into(),
            created_at: Some(Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()),
        }
    }

    #[test]
    fn build_assembles_all_fields() {
        let record = build(&params(), 30).unwrap();
        assert_eq!(record.id, "5f2ab91c-darkred-150j");
        assert_eq!(record.hash, "5f2ab91c");
        assert_eq!(record.width, 3);
        assert_eq!(record.height, 2);
        assert_eq!(record.hosts, vec!["example.com".to_string()]);
        assert_eq!(record.length, 48_213);
        assert_eq!(record.format, ImageFormat::Jpeg);
        assert_eq!(record.color, "darkred");
    }

    #[test]
    fn build_honors_explicit_created_at() {
        let record = build(&params(), 30).unwrap();
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
        );
    }

    #[test]
    fn build_defaults_created_at_to_now() {
        let mut p = params();
        p.created_at = None;
        let before = Utc::now();
        let record = build(&p, 1).unwrap();
        let after = Utc::now();
        assert!(record.created_at >= before && record.created_at <= after);
    }

    #[test]
    fn build_propagates_invalid_ratio() {
        let mut p = params();
        p.height = 0;
        assert!(matches!(
            build(&p, 30),
            Err(IdError::InvalidRatio { .. })
        ));
    }

    #[test]
    fn expiry_is_exact_day_multiples() {
        let t = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(expires_at(t, 30) - t.timestamp(), 30 * 86_400);
        assert_eq!(expires_at(t, 0), t.timestamp());
    }

    #[test]
    fn expiry_truncates_subseconds() {
        let t = Utc.timestamp_opt(1_767_225_600, 999_000_000).unwrap();
        assert_eq!(expires_at(t, 1), 1_767_225_600 + 86_400);
    }

    #[test]
    fn record_expiry_matches_helper() {
        let record = build(&params(), 7).unwrap();
        assert_eq!(record.expires_at - record.created_at.timestamp(), 7 * 86_400);
    }

    #[test]
    fn normalize_strips_mobile_subdomains() {
        assert_eq!(normalize_host("www.example.com"), "example.com");
        assert_eq!(normalize_host("www2.example.com"), "example.com");
        assert_eq!(normalize_host("www0.example.com"), "example.com");
        assert_eq!(normalize_host("m.example.com"), "example.com");
        assert_eq!(normalize_host("mobi.example.com"), "example.com");
    }

    #[test]
    fn normalize_keeps_other_subdomains() {
        assert_eq!(normalize_host("shop.example.com"), "shop.example.com");
        assert_eq!(normalize_host("www10.example.com"), "www10.example.com");
        assert_eq!(normalize_host("mm.example.com"), "mm.example.com");
        assert_eq!(normalize_host("example.com"), "example.com");
    }

    #[test]
    fn normalize_trims_and_lowercases_first() {
        assert_eq!(normalize_host("  WWW.Example.COM  "), "example.com");
        assert_eq!(normalize_host(" Shop.Example.com "), "shop.example.com");
    }

    #[test]
    fn normalize_host_without_dot_passes_through() {
        assert_eq!(normalize_host("localhost"), "localhost");
        assert_eq!(normalize_host("www"), "www");
    }

    #[test]
    fn record_serializes_with_rfc3339_timestamp() {
        let record = build(&params(), 30).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"created_at\":\"2026-03-14T09:26:53Z\""));
        let back: ImageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
