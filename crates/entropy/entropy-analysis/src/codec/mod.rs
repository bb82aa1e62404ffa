//! Byte-level encoding shared by snapshots and alert payloads.

pub mod abi;

pub use abi::{decode_string_tuple, encode_string_tuple, encode_words, word_at};
