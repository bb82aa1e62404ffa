//! `U256`: 256-bit unsigned word stored as 32 big-endian bytes.
//!
//! Big-endian storage makes the derived lexicographic `Ord` agree with
//! numeric order, and makes ABI word encoding a plain byte copy.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::WordError;

/// Width of a single word in bytes.
pub const WORD_BYTES: usize = 32;

/// Unsigned 256-bit integer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct U256([u8; WORD_BYTES]);

impl U256 {
    pub const ZERO: Self = Self([0u8; WORD_BYTES]);
    pub const MAX: Self = Self([0xff; WORD_BYTES]);

    /// Build a word from its big-endian byte representation.
    pub const fn from_be_bytes(bytes: [u8; WORD_BYTES]) -> Self {
        Self(bytes)
    }

    /// Build a word from a big-endian slice of exactly 32 bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        let array: [u8; WORD_BYTES] = bytes.try_into().ok()?;
        Some(Self(array))
    }

    pub const fn from_u64(value: u64) -> Self {
        Self::from_u128(value as u128)
    }

    pub const fn from_u128(value: u128) -> Self {
        let low = value.to_be_bytes();
        let mut bytes = [0u8; WORD_BYTES];
        let mut i = 0;
        while i < 16 {
            bytes[16 + i] = low[i];
            i += 1;
        }
        Self(bytes)
    }

    pub const fn to_be_bytes(self) -> [u8; WORD_BYTES] {
        self.0
    }

    pub const fn as_be_bytes(&self) -> &[u8; WORD_BYTES] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Returns the value as `u128` if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.0[..16].iter().any(|b| *b != 0) {
            return None;
        }
        let mut low = [0u8; 16];
        low.copy_from_slice(&self.0[16..]);
        Some(u128::from_be_bytes(low))
    }

    /// Returns the value as `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    /// Returns the value as `usize` if it fits.
    pub fn to_usize(&self) -> Option<usize> {
        self.to_u128().and_then(|v| usize::try_from(v).ok())
    }

    /// Wrapping addition plus carry-out flag.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u8; WORD_BYTES];
        let mut carry = 0u16;
        for i in (0..WORD_BYTES).rev() {
            let sum = self.0[i] as u16 + rhs.0[i] as u16 + carry;
            out[i] = sum as u8;
            carry = sum >> 8;
        }
        (Self(out), carry != 0)
    }

    /// Wrapping subtraction plus borrow-out flag.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u8; WORD_BYTES];
        let mut borrow = 0i16;
        for i in (0..WORD_BYTES).rev() {
            let mut diff = self.0[i] as i16 - rhs.0[i] as i16 - borrow;
            if diff < 0 {
                diff += 256;
                borrow = 1;
            } else {
                borrow = 0;
            }
            out[i] = diff as u8;
        }
        (Self(out), borrow != 0)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (value, false) => Some(value),
            (_, true) => None,
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (value, false) => Some(value),
            (_, true) => None,
        }
    }

    /// `|self - other|`, always computed as larger minus smaller.
    pub fn abs_diff(self, other: Self) -> Self {
        let (high, low) = if self >= other { (self, other) } else { (other, self) };
        high.overflowing_sub(low).0
    }

    /// `self * factor + addend`, or `None` on overflow. Used by the decimal parser.
    fn checked_mul_add_small(self, factor: u8, addend: u8) -> Option<Self> {
        let mut out = [0u8; WORD_BYTES];
        let mut carry = addend as u16;
        for i in (0..WORD_BYTES).rev() {
            let product = self.0[i] as u16 * factor as u16 + carry;
            out[i] = product as u8;
            carry = product >> 8;
        }
        (carry == 0).then_some(Self(out))
    }

    /// Divide by a small divisor, returning quotient and remainder.
    fn div_rem_small(self, divisor: u8) -> (Self, u8) {
        let mut out = [0u8; WORD_BYTES];
        let mut rem = 0u16;
        for i in 0..WORD_BYTES {
            let acc = (rem << 8) | self.0[i] as u16;
            out[i] = (acc / divisor as u16) as u8;
            rem = acc % divisor as u16;
        }
        (Self(out), rem as u8)
    }

    /// Parse a base-10 string. Underscores are accepted as digit separators.
    pub fn from_dec_str(s: &str) -> Result<Self, WordError> {
        let digits = s.trim();
        if digits.is_empty() {
            return Err(WordError::Empty);
        }
        let mut value = Self::ZERO;
        for ch in digits.chars().filter(|c| *c != '_') {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| WordError::InvalidDigit { ch, radix: 10 })?;
            value = value
                .checked_mul_add_small(10, digit as u8)
                .ok_or_else(|| WordError::Overflow(s.to_string()))?;
        }
        Ok(value)
    }

    /// Parse a base-16 string, with or without a `0x` prefix.
    pub fn from_hex_str(s: &str) -> Result<Self, WordError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(WordError::Empty);
        }
        if digits.len() > WORD_BYTES * 2 {
            return Err(WordError::Overflow(s.to_string()));
        }
        if let Some(ch) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(WordError::InvalidDigit { ch, radix: 16 });
        }
        let padded = format!("{:0>width$}", digits, width = WORD_BYTES * 2);
        let mut bytes = [0u8; WORD_BYTES];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| WordError::Malformed(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<[u8; WORD_BYTES]> for U256 {
    fn from(bytes: [u8; WORD_BYTES]) -> Self {
        Self(bytes)
    }
}

impl FromStr for U256 {
    type Err = WordError;

    /// `0x`-prefixed input is hex, anything else is decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
            Self::from_hex_str(trimmed)
        } else {
            Self::from_dec_str(trimmed)
        }
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }
        let mut digits = Vec::with_capacity(78);
        let mut rest = *self;
        while !rest.is_zero() {
            let (quotient, rem) = rest.div_rem_small(10);
            digits.push(b'0' + rem);
            rest = quotient;
        }
        digits.reverse();
        let s = String::from_utf8_lossy(&digits);
        f.pad_integral(true, "", &s)
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = hex::encode(self.0);
        let trimmed = encoded.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        f.pad_integral(true, "0x", digits)
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({self})")
    }
}

impl Serialize for U256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WordVisitor)
    }
}

/// Accepts non-negative integers and decimal or `0x` hex strings.
struct WordVisitor;

impl<'de> Visitor<'de> for WordVisitor {
    type Value = U256;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a decimal/0x-hex string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<U256, E> {
        Ok(U256::from_u64(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<U256, E> {
        Ok(U256::from_u128(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<U256, E> {
        u64::try_from(v)
            .map(U256::from_u64)
            .map_err(|_| E::custom(WordError::Negative(v.to_string())))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<U256, E> {
        v.parse().map_err(E::custom)
    }
}
