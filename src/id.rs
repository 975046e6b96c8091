//! Identifier composition and decomposition.
//!
//! An identifier is `{hash}-{color}-{ratio_token}{format_code}`. Composition
//! trims the hash, trims and lowercases the color, and appends the fixed
//! 3-digit ratio token plus single-character format code. Decomposition works
//! purely positionally from the end of the string: the format code is the
//! last character, the ratio token the 3 characters after the last `-`.

use crate::error::IdError;
use crate::format::ImageFormat;
use crate::ratio::{self, Orientation};

/// Compose an identifier from raw metadata.
///
/// Hash and color are not escaped: the caller must keep `-` out of the color
/// (and out of any trailing hash segment that could shadow the ratio/format
/// suffix), since decoding extracts from the *last* separator. Hash and color
/// cannot be recovered from the result; only the ratio token and format code
/// can.
pub fn encode(
    hash: &str,
    color: &str,
    format: ImageFormat,
    width: u32,
    height: u32,
) -> Result<String, IdError> {
    let token = ratio::encode(width, height)?;
    Ok(format!(
        "{}-{}-{}{}",
        hash.trim(),
        color.trim().to_lowercase(),
        token,
        format.code()
    ))
}

/// The format encoded in the identifier's trailing character.
pub fn decode_format(id: &str) -> Result<ImageFormat, IdError> {
    ImageFormat::from_trailing(id)
}

/// The 3-character ratio token following the identifier's last `-`.
pub fn decode_ratio_token(id: &str) -> Result<&str, IdError> {
    ratio::extract_token(id)
}

/// The orientation bucket encoded in the identifier's ratio token.
pub fn decode_orientation(id: &str) -> Result<Orientation, IdError> {
    Ok(ratio::orientation(ratio::extract_token(id)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_composes_all_fields() {
        let id = encode("5f2ab91c", "DarkRed", ImageFormat::Jpeg, 3, 2).unwrap();
        assert_eq!(id, "5f2ab91c-darkred-150j");
    }

    #[test]
    fn encode_trims_hash_without_lowercasing() {
        let id = encode("  AbC123  ", "red", ImageFormat::Png, 1, 1).unwrap();
        assert_eq!(id, "AbC123-red-100p");
    }

    #[test]
    fn encode_trims_and_lowercases_color() {
        let id = encode("h", "  Steel Blue ", ImageFormat::Gif, 3, 4).unwrap();
        assert_eq!(id, "h-steel blue-075g");
    }

    #[test]
    fn encode_propagates_invalid_ratio() {
        assert!(matches!(
            encode("h", "c", ImageFormat::Jpeg, 0, 1),
            Err(IdError::InvalidRatio { .. })
        ));
    }

    #[test]
    fn format_round_trips() {
        for format in ImageFormat::ALL {
            let id = encode("hash", "color", format, 16, 9).unwrap();
            assert_eq!(decode_format(&id).unwrap(), format);
        }
    }

    #[test]
    fn ratio_token_round_trips() {
        for (w, h) in [(3, 2), (3, 4), (1, 1), (16, 9), (9, 16), (12, 1)] {
            let id = encode("hash", "color", ImageFormat::Webp, w, h).unwrap();
            assert_eq!(
                decode_ratio_token(&id).unwrap(),
                ratio::encode(w, h).unwrap()
            );
        }
    }

    #[test]
    fn orientation_from_identifier() {
        let portrait = encode("h", "c", ImageFormat::Jpeg, 3, 4).unwrap();
        let landscape = encode("h", "c", ImageFormat::Jpeg, 3, 2).unwrap();
        assert_eq!(decode_orientation(&portrait).unwrap(), Orientation::Portrait);
        assert_eq!(
            decode_orientation(&landscape).unwrap(),
            Orientation::Landscape
        );
    }

    #[test]
    fn hash_with_dashes_still_decodes() {
        // The last separator is the one encode appended before the token.
        let id = encode("ab-cd-ef", "red", ImageFormat::Png, 3, 2).unwrap();
        assert_eq!(id, "ab-cd-ef-red-150p");
        assert_eq!(decode_ratio_token(&id).unwrap(), "150");
        assert_eq!(decode_format(&id).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn decode_on_garbage_is_malformed() {
        assert!(matches!(
            decode_ratio_token("no_separator"),
            Err(IdError::MalformedIdentifier(_))
        ));
        assert!(matches!(
            decode_orientation("x-"),
            Err(IdError::MalformedIdentifier(_))
        ));
    }
}
