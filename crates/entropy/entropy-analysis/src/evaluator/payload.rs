//! Alert payload construction and interpretation.
//!
//! Payloads carry no discriminant. The shape is fixed by the pair
//! `(policy, alert)`:
//!
//! | policy           | alert | payload                                  |
//! |------------------|-------|------------------------------------------|
//! | any              | false | plain UTF-8 reason                       |
//! | `HashEquality`   | true  | ABI `(string)`                           |
//! | `ThresholdDelta` | true  | ABI `(string, uint256, uint256)`         |

use entropy_core::errors::PayloadError;
use entropy_core::types::{DriftPolicy, U256};

use crate::codec::abi;

/// Typed view of an evaluation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertPayload {
    /// A bare reason string (all non-alert results, and hash-equality alerts).
    Message(String),
    /// Threshold-delta alert with the computed deltas.
    Metrics {
        reason: String,
        ts_delta: U256,
        rand_delta: U256,
    },
}

impl AlertPayload {
    /// Bytes for a non-alert result: the reason as plain UTF-8.
    pub(crate) fn plain(reason: &str) -> Vec<u8> {
        reason.as_bytes().to_vec()
    }

    /// Bytes for a hash-equality alert: ABI `(string)`.
    pub(crate) fn encode_message(reason: &str) -> Vec<u8> {
        abi::encode_string_tuple(reason, &[])
    }

    /// Bytes for a threshold-delta alert: ABI `(string, uint256, uint256)`.
    pub(crate) fn encode_metrics(reason: &str, ts_delta: U256, rand_delta: U256) -> Vec<u8> {
        abi::encode_string_tuple(reason, &[ts_delta, rand_delta])
    }

    /// Decode `payload` using the pairing rule above.
    pub fn interpret(policy: DriftPolicy, alert: bool, payload: &[u8]) -> Result<Self, PayloadError> {
        if !alert {
            return std::str::from_utf8(payload)
                .map(|s| Self::Message(s.to_string()))
                .map_err(|e| PayloadError::InvalidUtf8(e.to_string()));
        }
        match policy {
            DriftPolicy::HashEquality => {
                let (reason, _) = abi::decode_string_tuple(payload, 0)?;
                Ok(Self::Message(reason))
            }
            DriftPolicy::ThresholdDelta => {
                let (reason, words) = abi::decode_string_tuple(payload, 2)?;
                Ok(Self::Metrics {
                    reason,
                    ts_delta: words[0],
                    rand_delta: words[1],
                })
            }
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Message(reason) => reason,
            Self::Metrics { reason, .. } => reason,
        }
    }
}
