//! Canonical ABI tuple encoding for static words and a leading string.
//!
//! Every field occupies a 32-byte big-endian word. A dynamic `string` is
//! encoded as an offset word in the head, pointing at a tail holding the
//! length word followed by the UTF-8 bytes right-padded to a word boundary.

use entropy_core::errors::PayloadError;
use entropy_core::types::{U256, WORD_BYTES};

/// Encode a tuple of static `uint256` words.
pub fn encode_words(words: &[U256]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * WORD_BYTES);
    for word in words {
        out.extend_from_slice(word.as_be_bytes());
    }
    out
}

/// Read the word starting at byte `offset`, if the slice is long enough.
pub fn word_at(data: &[u8], offset: usize) -> Option<U256> {
    let end = offset.checked_add(WORD_BYTES)?;
    data.get(offset..end).and_then(U256::from_be_slice)
}

/// Encode `(string, uint256...)`: a leading dynamic string followed by
/// `words.len()` static words.
pub fn encode_string_tuple(text: &str, words: &[U256]) -> Vec<u8> {
    let head_len = (1 + words.len()) * WORD_BYTES;
    let padded_len = padded(text.len());
    let mut out = Vec::with_capacity(head_len + WORD_BYTES + padded_len);

    out.extend_from_slice(U256::from_u64(head_len as u64).as_be_bytes());
    for word in words {
        out.extend_from_slice(word.as_be_bytes());
    }
    out.extend_from_slice(U256::from_u64(text.len() as u64).as_be_bytes());
    out.extend_from_slice(text.as_bytes());
    out.resize(head_len + WORD_BYTES + padded_len, 0);
    out
}

/// Decode `(string, uint256 × word_count)` produced by [`encode_string_tuple`].
///
/// Offsets and lengths are bounds-checked against the payload; trailing bytes
/// past the string are ignored.
pub fn decode_string_tuple(
    data: &[u8],
    word_count: usize,
) -> Result<(String, Vec<U256>), PayloadError> {
    let head_len = (1 + word_count) * WORD_BYTES;
    if data.len() < head_len {
        return Err(PayloadError::Truncated {
            needed: head_len,
            actual: data.len(),
        });
    }

    let offset_word = word_at(data, 0).unwrap_or_default();
    let words = (1..=word_count)
        .map(|i| word_at(data, i * WORD_BYTES).unwrap_or_default())
        .collect();

    let offset = offset_word
        .to_usize()
        .filter(|o| o.checked_add(WORD_BYTES).is_some_and(|end| end <= data.len()))
        .ok_or_else(|| PayloadError::OffsetOutOfBounds {
            offset: offset_word.to_string(),
            len: data.len(),
        })?;

    let length_word = word_at(data, offset).unwrap_or_default();
    let start = offset + WORD_BYTES;
    let bytes = length_word
        .to_usize()
        .and_then(|len| data.get(start..start.checked_add(len)?))
        .ok_or_else(|| PayloadError::LengthOutOfBounds {
            length: length_word.to_string(),
            len: data.len(),
        })?;

    let text = std::str::from_utf8(bytes)
        .map_err(|e| PayloadError::InvalidUtf8(e.to_string()))?
        .to_string();
    Ok((text, words))
}

/// Round `len` up to the next multiple of the word size.
fn padded(len: usize) -> usize {
    len.div_ceil(WORD_BYTES) * WORD_BYTES
}
