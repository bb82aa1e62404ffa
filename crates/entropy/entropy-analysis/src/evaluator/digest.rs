//! Record fingerprints for the hash-equality policy.

use entropy_core::types::DigestAlgorithm;
use sha2::{Digest, Sha256};
use xxhash_rust::xxh3::xxh3_128;

/// Digest of one raw history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordDigest {
    Sha256([u8; 32]),
    Xxh3(u128),
}

/// Fingerprint raw record bytes. No decoding is performed.
#[inline]
pub fn record_digest(algorithm: DigestAlgorithm, bytes: &[u8]) -> RecordDigest {
    match algorithm {
        DigestAlgorithm::Sha256 => {
            let mut out = [0u8; 32];
            out.copy_from_slice(&Sha256::digest(bytes));
            RecordDigest::Sha256(out)
        }
        DigestAlgorithm::Xxh3 => RecordDigest::Xxh3(xxh3_128(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_digest() {
        for algorithm in [DigestAlgorithm::Sha256, DigestAlgorithm::Xxh3] {
            assert_eq!(
                record_digest(algorithm, b"snapshot"),
                record_digest(algorithm, b"snapshot")
            );
        }
    }

    #[test]
    fn different_content_different_digest() {
        for algorithm in [DigestAlgorithm::Sha256, DigestAlgorithm::Xxh3] {
            assert_ne!(record_digest(algorithm, b"a"), record_digest(algorithm, b"b"));
        }
    }

    #[test]
    fn sha256_known_vector() {
        let RecordDigest::Sha256(bytes) = record_digest(DigestAlgorithm::Sha256, b"") else {
            panic!("expected sha256 digest");
        };
        assert_eq!(bytes[..4], [0xe3u8, 0xb0, 0xc4, 0x42]);
    }
}
