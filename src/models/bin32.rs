//! Fixed width 32-bit value with its textual codecs.
//!
//! [`Bin32`] is the shared base of [`Ip`](super::Ip) and
//! [`Netmask`](super::Netmask). The [`AsBits32`] trait is the capability
//! they share, so AND and comparison accept any of them.

use super::notation::{self, Notation};
use crate::error::{Error, Result};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Width of every value in bits.
pub const BITS: u32 = 32;

/// Anything that can be read as exactly 32 bits.
///
/// Bit 0 of the binary rendering is the most significant bit, so the
/// octet layout matches network byte order.
pub trait AsBits32 {
    /// The raw 32-bit content.
    fn bits(&self) -> u32;

    /// 32 characters of `0`/`1`, most significant bit first.
    fn as_binary_string(&self) -> String {
        format!("{:032b}", self.bits())
    }

    /// Four decimal octets joined by `.`.
    fn as_dotted_quad(&self) -> String {
        Ipv4Addr::from(self.bits()).to_string()
    }

    /// `0x` followed by exactly 8 lowercase hex digits.
    fn as_hex_string(&self) -> String {
        format!("0x{:08x}", self.bits())
    }

    /// Position-wise AND; neither operand changes.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet::{AsBits32, Ip, Netmask};
    /// let ip: Ip = "10.20.30.40".parse().unwrap();
    /// let mask = Netmask::from_num_bits(16).unwrap();
    /// assert_eq!(ip.bitwise_and(&mask).as_dotted_quad(), "10.20.0.0");
    /// ```
    fn bitwise_and(&self, other: &dyn AsBits32) -> Bin32 {
        Bin32::from_bits(self.bits() & other.bits())
    }

    /// AND against a string in any generic notation.
    fn bitwise_and_str(&self, other: &str) -> Result<Bin32> {
        let other = Bin32::parse(other)?;
        Ok(self.bitwise_and(&other))
    }

    /// Identical 32-bit content.
    fn same_bits(&self, other: &dyn AsBits32) -> bool {
        self.bits() == other.bits()
    }
}

pub(crate) fn decode_binary(s: &str) -> Result<u32> {
    if !notation::is_binary(s) {
        return Err(Error::parse(format!("not a 32-bit binary string: {s}")));
    }
    u32::from_str_radix(s, 2).map_err(|e| Error::parse(format!("{s}: {e}")))
}

pub(crate) fn decode_dotted_quad(s: &str) -> Result<u32> {
    if !notation::is_dotted_quad(s) {
        return Err(Error::parse(format!("expected a dotted quad, got: {s}")));
    }
    let mut bits: u32 = 0;
    for octet in s.split('.') {
        let octet: u8 = octet
            .parse()
            .map_err(|_| Error::parse(format!("octet out of range in {s}: {octet}")))?;
        bits = (bits << 8) | u32::from(octet);
    }
    Ok(bits)
}

pub(crate) fn decode_hex(s: &str) -> Result<u32> {
    if !notation::is_hex(s) {
        return Err(Error::parse(format!("expected a 32-bit hex value, got: {s}")));
    }
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| Error::parse(format!("{s}: {e}")))
}

/// Decode in the generic priority order: dotted quad, binary, hex.
pub(crate) fn decode_any(s: &str) -> Result<u32> {
    match notation::detect(s) {
        Some(Notation::DottedQuad) => decode_dotted_quad(s),
        Some(Notation::Binary) => decode_binary(s),
        Some(Notation::Hex) => decode_hex(s),
        _ => Err(Error::parse(format!("unrecognized 32-bit notation: {s}"))),
    }
}

/// Total string comparison: unrecognised input is simply not equal.
pub(crate) fn str_equals(bits: u32, s: &str) -> bool {
    match decode_any(s) {
        Ok(other) => bits == other,
        Err(e) => {
            log::debug!("equality against unparseable value: {e}");
            false
        }
    }
}

/// An exact 32-bit unsigned quantity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bin32 {
    bits: u32,
}

impl Bin32 {
    /// All 32 bits cleared.
    pub const fn new() -> Bin32 {
        Bin32 { bits: 0 }
    }

    pub const fn from_bits(bits: u32) -> Bin32 {
        Bin32 { bits }
    }

    /// Load from exactly 32 characters of `0`/`1`.
    pub fn from_binary_string(s: &str) -> Result<Bin32> {
        decode_binary(s).map(Bin32::from_bits)
    }

    /// Load from `a.b.c.d`, each octet 0-255.
    pub fn from_dotted_quad(s: &str) -> Result<Bin32> {
        decode_dotted_quad(s).map(Bin32::from_bits)
    }

    /// Load from 8 hex digits, `0x` optional, any case.
    pub fn from_hex_string(s: &str) -> Result<Bin32> {
        decode_hex(s).map(Bin32::from_bits)
    }

    /// Detect the notation and decode.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet::{AsBits32, Bin32};
    /// let value = Bin32::parse("0xC0A80100").unwrap();
    /// assert_eq!(value.as_dotted_quad(), "192.168.1.0");
    /// ```
    pub fn parse(s: &str) -> Result<Bin32> {
        decode_any(s).map(Bin32::from_bits)
    }

    /// Replace the value from any notation; on error the old value stays.
    pub fn set(&mut self, s: &str) -> Result<&mut Bin32> {
        *self = Bin32::parse(s)?;
        Ok(self)
    }

    /// Compare against a string in any notation, false if it is not one.
    pub fn equals_str(&self, s: &str) -> bool {
        str_equals(self.bits, s)
    }
}

impl AsBits32 for Bin32 {
    fn bits(&self) -> u32 {
        self.bits
    }
}

impl FromStr for Bin32 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Bin32> {
        Bin32::parse(s)
    }
}

impl fmt::Display for Bin32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:032b}", self.bits)
    }
}

impl From<u32> for Bin32 {
    fn from(bits: u32) -> Bin32 {
        Bin32::from_bits(bits)
    }
}

impl From<Ipv4Addr> for Bin32 {
    fn from(addr: Ipv4Addr) -> Bin32 {
        Bin32::from_bits(u32::from(addr))
    }
}

impl From<Bin32> for u32 {
    fn from(value: Bin32) -> u32 {
        value.bits
    }
}

impl From<Bin32> for Ipv4Addr {
    fn from(value: Bin32) -> Ipv4Addr {
        Ipv4Addr::from(value.bits)
    }
}

impl PartialEq<str> for Bin32 {
    fn eq(&self, other: &str) -> bool {
        self.equals_str(other)
    }
}

impl PartialEq<&str> for Bin32 {
    fn eq(&self, other: &&str) -> bool {
        self.equals_str(other)
    }
}
