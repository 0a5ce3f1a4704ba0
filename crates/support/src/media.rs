//! Chunked decoding of base64 media payloads.
//!
//! Media arrives from the upstream client as one large base64 string;
//! decoding it in slices keeps peak memory at one chunk instead of the
//! whole file.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Input characters decoded per chunk. Must stay a multiple of 4 so no
/// slice boundary splits a base64 group.
pub const BASE64_CHUNK_SIZE: usize = 1024;

const _: () = assert!(BASE64_CHUNK_SIZE % 4 == 0);

/// Lazily decode `encoded` in [`BASE64_CHUNK_SIZE`]-character slices.
///
/// Each call returns a fresh iterator over the same input. Concatenating
/// the decoded chunks in order reproduces the decode of the whole string;
/// chunk boundaries are input slices, so decoded chunk sizes are not
/// uniform for the final chunk.
pub fn decode_base64_chunks(encoded: &str) -> Base64Chunks<'_> {
    Base64Chunks {
        rest: encoded.as_bytes(),
    }
}

/// Iterator yielding one decoded chunk per step. Finite: at most
/// `ceil(input_len / 1024)` items.
#[derive(Debug, Clone)]
pub struct Base64Chunks<'a> {
    // Byte slices, not str: a slice boundary may fall inside a multi-byte
    // character, and such input is invalid base64 that must surface as a
    // decode error rather than a slicing panic.
    rest: &'a [u8],
}

impl Iterator for Base64Chunks<'_> {
    type Item = Result<Vec<u8>, base64::DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let at = self.rest.len().min(BASE64_CHUNK_SIZE);
        let (chunk, rest) = self.rest.split_at(at);
        self.rest = rest;
        Some(STANDARD.decode(chunk))
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(encoded: &str) -> Vec<u8> {
        decode_base64_chunks(encoded)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
            .concat()
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert_eq!(decode_base64_chunks("").count(), 0);
    }

    #[test]
    fn short_input_is_a_single_chunk() {
        let encoded = STANDARD.encode(b"hello webhook");
        assert_eq!(decode_base64_chunks(&encoded).count(), 1);
        assert_eq!(decode_all(&encoded), b"hello webhook");
    }

    #[test]
    fn long_input_chunks_reassemble_to_full_decode() {
        // 1500 raw bytes encode to 2000 characters: exactly two chunks.
        let raw: Vec<u8> = (0..1500u32).map(|i| (i % 251) as u8).collect();
        let encoded = STANDARD.encode(&raw);
        assert_eq!(encoded.len(), 2000);

        let chunks: Vec<Vec<u8>> = decode_base64_chunks(&encoded)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 768);
        assert_eq!(chunks.concat(), raw);
        assert_eq!(chunks.concat(), STANDARD.decode(&encoded).unwrap());
    }

    #[test]
    fn exact_chunk_boundary() {
        // 768 raw bytes encode to exactly 1024 characters.
        let raw = vec![0xabu8; 768];
        let encoded = STANDARD.encode(&raw);
        assert_eq!(encoded.len(), BASE64_CHUNK_SIZE);
        assert_eq!(decode_base64_chunks(&encoded).count(), 1);
        assert_eq!(decode_all(&encoded), raw);
    }

    #[test]
    fn iterator_is_restartable() {
        let encoded = STANDARD.encode(vec![7u8; 2048]);
        assert_eq!(decode_all(&encoded), decode_all(&encoded));
    }

    #[test]
    fn invalid_base64_surfaces_the_decode_error() {
        let mut results = decode_base64_chunks("not!valid!b64!");
        assert!(results.next().unwrap().is_err());
    }

    #[test]
    fn multibyte_char_straddling_the_boundary_errors_instead_of_panicking() {
        // 'é' spans bytes 1023..1025, so the first slice ends mid-character.
        let mut garbage = "A".repeat(1023);
        garbage.push('é');
        garbage.push_str(&"A".repeat(100));

        let results: Vec<_> = decode_base64_chunks(&garbage).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
    }
}
