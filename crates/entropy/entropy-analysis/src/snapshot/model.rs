//! EntropySnapshot: The unit of observation and its wire encoding.

use entropy_core::constants::SNAPSHOT_ENCODED_LEN;
use entropy_core::errors::SnapshotError;
use entropy_core::types::{U256, WORD_BYTES};
use serde::{Deserialize, Serialize};

use crate::codec::abi;

/// A captured clock reading and randomness-beacon value plus the
/// thresholds that were configured at capture time.
///
/// Wire format: four 32-byte big-endian words in field order, 128 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntropySnapshot {
    pub timestamp: U256,
    pub randomness_seed: U256,
    pub max_timestamp_delta: U256,
    pub max_randomness_delta: U256,
}

impl EntropySnapshot {
    pub fn encode(&self) -> Vec<u8> {
        abi::encode_words(&[
            self.timestamp,
            self.randomness_seed,
            self.max_timestamp_delta,
            self.max_randomness_delta,
        ])
    }

    /// Decode a record. `index` is the record's position in its history and
    /// is only used for error reporting.
    ///
    /// The length must be exactly 128 bytes; every 32-byte word is a valid
    /// `uint256`, so length is the only thing that can be wrong.
    pub fn decode(bytes: &[u8], index: usize) -> Result<Self, SnapshotError> {
        if bytes.len() != SNAPSHOT_ENCODED_LEN {
            return Err(SnapshotError::InvalidLength {
                index,
                expected: SNAPSHOT_ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        let word = |i: usize| abi::word_at(bytes, i * WORD_BYTES).unwrap_or_default();
        Ok(Self {
            timestamp: word(0),
            randomness_seed: word(1),
            max_timestamp_delta: word(2),
            max_randomness_delta: word(3),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EntropySnapshot {
        EntropySnapshot {
            timestamp: U256::from_u64(1000),
            randomness_seed: U256::MAX,
            max_timestamp_delta: U256::from_u64(5),
            max_randomness_delta: U256::from_u128(u128::MAX / 2),
        }
    }

    #[test]
    fn encoding_is_fixed_width_big_endian() {
        let encoded = sample().encode();
        assert_eq!(encoded.len(), SNAPSHOT_ENCODED_LEN);
        // timestamp 1000 = 0x03e8 in the last two bytes of word 0
        assert!(encoded[..30].iter().all(|b| *b == 0));
        assert_eq!(&encoded[30..32], &[0x03, 0xe8]);
        assert!(encoded[32..64].iter().all(|b| *b == 0xff));
        assert_eq!(encoded[95], 5);
    }

    #[test]
    fn decode_recovers_fields() {
        let snapshot = sample();
        assert_eq!(EntropySnapshot::decode(&snapshot.encode(), 0), Ok(snapshot));
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let mut encoded = sample().encode();
        encoded.push(0);
        assert_eq!(
            EntropySnapshot::decode(&encoded, 3),
            Err(SnapshotError::InvalidLength {
                index: 3,
                expected: 128,
                actual: 129
            })
        );
        assert!(EntropySnapshot::decode(&[], 0).is_err());
    }
}
