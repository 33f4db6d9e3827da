//! IPv4 host or network address.

use super::bin32::{AsBits32, Bin32};
use crate::error::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A 32-bit value read as an IPv4 address. Renders as a dotted quad.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ip(Bin32);

impl Ip {
    /// `0.0.0.0`
    pub const fn new() -> Ip {
        Ip(Bin32::new())
    }

    pub fn from_binary_string(s: &str) -> Result<Ip> {
        Bin32::from_binary_string(s).map(Ip)
    }

    pub fn from_dotted_quad(s: &str) -> Result<Ip> {
        Bin32::from_dotted_quad(s).map(Ip)
    }

    pub fn from_hex_string(s: &str) -> Result<Ip> {
        Bin32::from_hex_string(s).map(Ip)
    }

    /// Parse any generic notation (dotted quad, binary, hex).
    pub fn parse(s: &str) -> Result<Ip> {
        Bin32::parse(s).map(Ip)
    }

    /// Replace the address; on error the old one stays.
    pub fn set(&mut self, s: &str) -> Result<&mut Ip> {
        *self = Ip::parse(s)?;
        Ok(self)
    }

    pub fn equals_str(&self, s: &str) -> bool {
        self.0.equals_str(s)
    }

    /// The underlying 32-bit value.
    pub fn as_bin32(&self) -> Bin32 {
        self.0
    }
}

impl AsBits32 for Ip {
    fn bits(&self) -> u32 {
        self.0.bits()
    }
}

impl FromStr for Ip {
    type Err = Error;

    fn from_str(s: &str) -> Result<Ip> {
        Ip::parse(s)
    }
}

impl fmt::Display for Ip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_dotted_quad())
    }
}

impl From<Bin32> for Ip {
    fn from(value: Bin32) -> Ip {
        Ip(value)
    }
}

impl From<u32> for Ip {
    fn from(bits: u32) -> Ip {
        Ip(Bin32::from_bits(bits))
    }
}

impl From<Ipv4Addr> for Ip {
    fn from(addr: Ipv4Addr) -> Ip {
        Ip(Bin32::from(addr))
    }
}

impl From<Ip> for Ipv4Addr {
    fn from(ip: Ip) -> Ipv4Addr {
        Ipv4Addr::from(ip.0)
    }
}

impl From<Ip> for u32 {
    fn from(ip: Ip) -> u32 {
        ip.bits()
    }
}

impl PartialEq<str> for Ip {
    fn eq(&self, other: &str) -> bool {
        self.equals_str(other)
    }
}

impl PartialEq<&str> for Ip {
    fn eq(&self, other: &&str) -> bool {
        self.equals_str(other)
    }
}

impl Serialize for Ip {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.as_dotted_quad())
    }
}

impl<'de> Deserialize<'de> for Ip {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ip, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ip::parse(&s).map_err(|e| de::Error::custom(format!("invalid IP address: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notations() {
        let ip = Ip::parse("192.168.1.100").unwrap();
        assert_eq!(ip.to_string(), "192.168.1.100");
        assert_eq!(ip.as_hex_string(), "0xc0a80164");
        assert_eq!(Ip::parse("0xc0a80164").unwrap(), ip);
        assert_eq!(
            Ip::parse("11000000101010000000000101100100").unwrap(),
            ip
        );
    }

    #[test]
    fn test_invalid_input() {
        assert!(Ip::parse("999.1.1.1").unwrap_err().is_parse());
        assert!(Ip::parse("1.2.3").is_err());
        assert!(Ip::parse("").is_err());
        assert!(Ip::from_dotted_quad("0xc0a80164").is_err());
        assert!(Ip::from_hex_string("192.168.1.1").is_err());
        assert!(Ip::from_binary_string("192.168.1.1").is_err());
    }

    #[test]
    fn test_set_keeps_value_on_error() {
        let mut ip = Ip::parse("10.1.2.3").unwrap();
        assert!(ip.set("999.1.1.1").is_err());
        assert!(ip.set("1.2.3").is_err());
        assert_eq!(ip.to_string(), "10.1.2.3");
        ip.set("10.1.2.4").unwrap().set("10.1.2.5").unwrap();
        assert_eq!(ip.to_string(), "10.1.2.5");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Ip::parse("10.0.0.1").unwrap();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set("10.0.0.2").unwrap();
        assert_eq!(original.to_string(), "10.0.0.1");
        assert_eq!(copy.to_string(), "10.0.0.2");
    }

    #[test]
    fn test_equals() {
        let ip = Ip::parse("10.0.0.1").unwrap();
        assert!(ip.equals_str("0x0a000001"));
        assert!(ip == "10.0.0.1");
        assert!(ip != "10.0.0.2");
        assert!(!ip.equals_str("garbage"));
        assert!(ip.same_bits(&Bin32::from_bits(0x0A000001)));
    }

    #[test]
    fn test_ipv4addr_conversion() {
        let ip = Ip::from(Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(ip.to_string(), "10.1.2.3");
        assert_eq!(Ipv4Addr::from(ip), Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(u32::from(ip), 0x0A010203);
    }

    #[test]
    fn test_serde() {
        let ip = Ip::parse("10.1.2.3").unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"10.1.2.3\"");
        let back: Ip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ip);
        assert!(serde_json::from_str::<Ip>("\"10.1.2\"").is_err());
    }
}
