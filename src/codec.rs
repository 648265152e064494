//! Text <-> Base64 conversion.
//!
//! Text is encoded through its UTF-8 bytes with the standard padded alphabet,
//! so any Unicode input survives a round trip. Decoding is as lenient as a
//! browser's `atob`: padding is optional and stray trailing bits are dropped.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes Base64 back into text.
///
/// ASCII whitespace is skipped so wrapped or indented input decodes the same
/// as a single line.
pub fn decode(base64: &str) -> Result<String, DecodeError> {
    let compact: String = base64
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = LENIENT.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_ascii() {
        assert_eq!(encode("hello"), "aGVsbG8=");
        assert_eq!(decode("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn encodes_utf8_bytes() {
        let encoded = encode("日本語");
        assert_eq!(encoded, "5pel5pys6Kqe");
        assert_eq!(decode(&encoded).unwrap(), "日本語");
    }

    #[test]
    fn round_trips_unicode() {
        let samples = [
            "",
            "a",
            "ab",
            "abc",
            "Base64 转换工具",
            "🚀 emoji and ✨ sparkles",
            "line one\nline two\r\n\ttabbed",
            "한국어 • 日本語 • English",
            "\u{0}\u{7f}\u{80}\u{ffff}\u{10ffff}",
        ];

        for sample in samples {
            assert_eq!(decode(&encode(sample)).unwrap(), sample);
        }
    }

    #[test]
    fn rejects_non_alphabet_characters() {
        assert!(matches!(
            decode("not-valid-base64!!"),
            Err(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn accepts_missing_padding() {
        assert_eq!(decode("aGVsbG8").unwrap(), "hello");
        assert_eq!(decode("5pel5pys6Kqe").unwrap(), "日本語");
        assert_eq!(decode("YWI").unwrap(), "ab");
    }

    #[test]
    fn ignores_trailing_bits() {
        assert_eq!(decode("aGVsbG9=").unwrap(), "hello");
        assert_eq!(decode("aGVsbG9").unwrap(), "hello");
    }

    #[test]
    fn rejects_bad_padding() {
        assert!(decode("aGVsbG8==").is_err());
        assert!(decode("a").is_err());
        assert!(decode("aGVs=bG8").is_err());
    }

    #[test]
    fn ignores_whitespace() {
        assert_eq!(decode("  aGVs\nbG8=\n").unwrap(), "hello");
    }

    #[test]
    fn rejects_invalid_utf8_payload() {
        // 0xff 0xfe
        assert!(matches!(decode("//4="), Err(DecodeError::Utf8(_))));
    }
}
