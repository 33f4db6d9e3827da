//! Contiguous-prefix netmasks.
//!
//! A [`Netmask`] is a [`Bin32`] whose binary form is a run of `1`s followed
//! by a run of `0`s, so it is always one of 33 values (`/0` to `/32`).
//! Every constructor decodes with the shared codec first and then checks the
//! shape, rejecting patterns such as `0.0.255.0`.

use super::bin32::{self, AsBits32, Bin32};
use super::notation::{self, Notation, MAX_PREFIX_LEN};
use crate::error::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Convert a prefix length to its mask bits.
///
/// # Examples
/// ```
/// use ipv4_subnet::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_PREFIX_LEN {
        Err(Error::invalid_argument(format!(
            "expected an integer between 0 and 32 inclusive: {len}"
        )))
    } else {
        let right_len = MAX_PREFIX_LEN - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// True when the bits are all `1`s followed by all `0`s.
pub fn is_contiguous(bits: u32) -> bool {
    bits.leading_ones() == bits.count_ones()
}

fn validate(bits: u32, input: &str, kind: &str) -> Result<u32> {
    if is_contiguous(bits) {
        Ok(bits)
    } else {
        log::debug!("rejected non-contiguous netmask {input}");
        Err(Error::parse(format!(
            "{kind} does not represent a valid netmask: {input}"
        )))
    }
}

/// A netmask with a contiguous prefix of set bits. Renders as its prefix length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Netmask(Bin32);

impl Netmask {
    /// `/0`
    pub const fn new() -> Netmask {
        Netmask(Bin32::new())
    }

    /// First `n` bits set, `0 <= n <= 32`.
    pub fn from_num_bits(n: u8) -> Result<Netmask> {
        get_cidr_mask(n).map(|bits| Netmask(Bin32::from_bits(bits)))
    }

    /// Count of set bits, 0-32.
    pub fn as_num_bits(&self) -> u8 {
        self.0.bits().count_ones() as u8
    }

    pub fn from_binary_string(s: &str) -> Result<Netmask> {
        let bits = bin32::decode_binary(s)?;
        validate(bits, s, "binary string").map(Netmask::from_valid)
    }

    pub fn from_dotted_quad(s: &str) -> Result<Netmask> {
        let bits = bin32::decode_dotted_quad(s)?;
        validate(bits, s, "dotted quad").map(Netmask::from_valid)
    }

    pub fn from_hex_string(s: &str) -> Result<Netmask> {
        let bits = bin32::decode_hex(s)?;
        validate(bits, s, "hex string").map(Netmask::from_valid)
    }

    /// Parse with netmask priority: prefix length, dotted quad, binary, hex.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet::{AsBits32, Netmask};
    /// assert_eq!(Netmask::parse("24").unwrap().as_dotted_quad(), "255.255.255.0");
    /// assert_eq!(Netmask::parse("255.255.0.0").unwrap().as_num_bits(), 16);
    /// assert!(Netmask::parse("0.0.255.0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Netmask> {
        match notation::detect_netmask(s) {
            Some(Notation::NumBits) => {
                let n = notation::num_bits_value(s)
                    .ok_or_else(|| Error::parse(format!("not a prefix length: {s}")))?;
                Netmask::from_num_bits(n)
            }
            Some(Notation::DottedQuad) => Netmask::from_dotted_quad(s),
            Some(Notation::Binary) => Netmask::from_binary_string(s),
            Some(Notation::Hex) => Netmask::from_hex_string(s),
            None => Err(Error::parse(format!(
                "failed to parse the given value as a netmask: {s}"
            ))),
        }
    }

    /// Replace the mask; on error the old one stays.
    pub fn set(&mut self, s: &str) -> Result<&mut Netmask> {
        *self = Netmask::parse(s)?;
        Ok(self)
    }

    /// Replace the mask from a prefix length; on error the old one stays.
    pub fn set_num_bits(&mut self, n: u8) -> Result<&mut Netmask> {
        *self = Netmask::from_num_bits(n)?;
        Ok(self)
    }

    /// Prefix length comparison for one or two digit strings, otherwise
    /// generic 32-bit comparison. Never fails.
    pub fn equals_str(&self, s: &str) -> bool {
        if notation::num_bits_value(s) == Some(self.as_num_bits()) {
            return true;
        }
        self.0.equals_str(s)
    }

    pub fn equals_num_bits(&self, n: u8) -> bool {
        self.as_num_bits() == n
    }

    pub fn as_bin32(&self) -> Bin32 {
        self.0
    }

    fn from_valid(bits: u32) -> Netmask {
        Netmask(Bin32::from_bits(bits))
    }
}

impl AsBits32 for Netmask {
    fn bits(&self) -> u32 {
        self.0.bits()
    }
}

impl FromStr for Netmask {
    type Err = Error;

    fn from_str(s: &str) -> Result<Netmask> {
        Netmask::parse(s)
    }
}

impl fmt::Display for Netmask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_num_bits())
    }
}

impl TryFrom<u32> for Netmask {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Netmask> {
        if is_contiguous(bits) {
            Ok(Netmask::from_valid(bits))
        } else {
            Err(Error::invalid_argument(format!(
                "0x{bits:08x} does not represent a valid netmask"
            )))
        }
    }
}

impl TryFrom<Ipv4Addr> for Netmask {
    type Error = Error;

    fn try_from(addr: Ipv4Addr) -> Result<Netmask> {
        Netmask::try_from(u32::from(addr))
    }
}

impl TryFrom<Bin32> for Netmask {
    type Error = Error;

    fn try_from(value: Bin32) -> Result<Netmask> {
        Netmask::try_from(value.bits())
    }
}

impl From<Netmask> for Ipv4Addr {
    fn from(mask: Netmask) -> Ipv4Addr {
        Ipv4Addr::from(mask.0)
    }
}

impl PartialEq<u8> for Netmask {
    fn eq(&self, other: &u8) -> bool {
        self.equals_num_bits(*other)
    }
}

impl PartialEq<str> for Netmask {
    fn eq(&self, other: &str) -> bool {
        self.equals_str(other)
    }
}

impl PartialEq<&str> for Netmask {
    fn eq(&self, other: &&str) -> bool {
        self.equals_str(other)
    }
}

impl Serialize for Netmask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Netmask {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Netmask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Netmask::parse(&s).map_err(|e| de::Error::custom(format!("invalid netmask: {e}")))
    }
}
