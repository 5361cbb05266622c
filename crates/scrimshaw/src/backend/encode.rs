//! PlantUML URL encoding
//!
//! PlantUML servers accept the diagram source embedded in the request URL:
//! the UTF-8 text is deflated (raw, no zlib header) and the compressed bytes
//! are rendered with PlantUML's own base64 alphabet, which differs from the
//! standard one so the result stays URL-safe without percent escapes.

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::core::UmlError;

const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Encode diagram source text for use as a PlantUML server URL segment.
pub fn encode_diagram_source(source: &str) -> Result<String, UmlError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(source.as_bytes())?;
    let deflated = encoder.finish()?;
    Ok(encode64(&deflated))
}

/// PlantUML's base64 variant: 3-byte groups map to 4 alphabet characters,
/// the final group zero-padded rather than `=`-padded.
fn encode64(data: &[u8]) -> String {
    let mut text = String::with_capacity(data.len().div_ceil(3) * 4);
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        text.push(ALPHABET[(b0 >> 2) as usize] as char);
        text.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);
        text.push(ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        text.push(ALPHABET[(b2 & 0x3f) as usize] as char);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode64_zero_bytes() {
        assert_eq!(encode64(&[0, 0, 0]), "0000");
    }

    #[test]
    fn test_encode64_partial_group_is_zero_padded() {
        // 0xff = 0b11111111: 111111 -> '_', 110000 -> 'm', rest zeros.
        assert_eq!(encode64(&[0xff]), "_m00");
        assert_eq!(encode64(&[0xff, 0xff]), "__x0");
        assert_eq!(encode64(&[0xff, 0xff, 0xff]), "____");
    }

    #[test]
    fn test_encode64_empty() {
        assert_eq!(encode64(&[]), "");
    }

    #[test]
    fn test_encoded_source_is_url_safe() {
        let encoded = encode_diagram_source("@startuml\nclass Foo\n@enduml\n").unwrap();
        assert!(!encoded.is_empty());
        assert!(encoded
            .bytes()
            .all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let source = "@startuml\nclass Foo {\n  +bar: String\n}\n@enduml\n";
        assert_eq!(
            encode_diagram_source(source).unwrap(),
            encode_diagram_source(source).unwrap()
        );
    }
}
