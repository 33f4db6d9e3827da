//! IPv4 subnet (CIDR block).

use super::bin32::AsBits32;
use super::notation;
use super::{Ip, Netmask};
use crate::error::{Error, Result, SubnetPart};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A network address and its netmask.
///
/// The stored address is always already masked: host bits are cleared on the
/// way in, so `10.1.2.3/8` is held as `10.0.0.0/8`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subnet {
    net_address: Ip,
    net_mask: Netmask,
}

/// Netmask half of a CIDR string: prefix length, dotted quad or hex.
fn parse_mask(s: &str) -> Result<Netmask> {
    if notation::is_num_bits(s) {
        Netmask::parse(s)
    } else if notation::is_dotted_quad(s) {
        Netmask::from_dotted_quad(s)
    } else if notation::is_hex(s) {
        Netmask::from_hex_string(s)
    } else {
        Err(Error::parse(format!("unrecognized netmask notation: {s}")))
    }
}

impl Subnet {
    /// Build from an address and mask, clearing the host bits.
    pub fn new(ip: &Ip, mask: &Netmask) -> Subnet {
        let mut subnet = Subnet::default();
        subnet.set(ip, mask);
        subnet
    }

    /// Store `ip AND mask` as the network address. The raw address is not kept.
    pub fn set(&mut self, ip: &Ip, mask: &Netmask) -> &mut Subnet {
        self.net_mask = *mask;
        self.net_address = Ip::from(ip.bitwise_and(mask));
        self
    }

    /// Parse `address/mask`.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet::Subnet;
    /// let subnet = Subnet::parse("192.168.1.100/24").unwrap();
    /// assert_eq!(subnet.to_string(), "192.168.1.0/24");
    /// assert_eq!(Subnet::parse("10.0.0.0/255.0.0.0").unwrap().to_string(), "10.0.0.0/8");
    /// ```
    pub fn parse(s: &str) -> Result<Subnet> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(Error::parse(format!(
                "failed to split IP and netmask declarations: {s}"
            )));
        }
        Subnet::parse_parts(parts[0], parts[1])
    }

    /// Parse a separate address (dotted quad) and mask.
    pub fn parse_parts(address: &str, mask: &str) -> Result<Subnet> {
        let ip = Ip::from_dotted_quad(address).map_err(|e| {
            log::debug!("bad subnet address {address:?}: {e}");
            Error::subnet(SubnetPart::Address, e)
        })?;
        let net_mask = parse_mask(mask).map_err(|e| {
            log::debug!("bad subnet mask {mask:?}: {e}");
            Error::subnet(SubnetPart::Netmask, e)
        })?;
        Ok(Subnet::new(&ip, &net_mask))
    }

    /// Replace the subnet from a CIDR string; on error the old one stays.
    pub fn set_str(&mut self, s: &str) -> Result<&mut Subnet> {
        *self = Subnet::parse(s)?;
        Ok(self)
    }

    /// Same subnet as a CIDR string, false if it does not parse.
    pub fn equals_str(&self, s: &str) -> bool {
        match Subnet::parse(s) {
            Ok(other) => *self == other,
            Err(e) => {
                log::debug!("equality against unparseable subnet: {e}");
                false
            }
        }
    }

    /// Same subnet as an address and mask pair, false if they do not parse.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet::Subnet;
    /// let subnet = Subnet::parse("10.0.0.0/8").unwrap();
    /// assert!(subnet.equals_parts("10.1.2.3", "255.0.0.0"));
    /// ```
    pub fn equals_parts(&self, address: &str, mask: &str) -> bool {
        match Subnet::parse_parts(address, mask) {
            Ok(other) => *self == other,
            Err(e) => {
                log::debug!("equality against unparseable subnet: {e}");
                false
            }
        }
    }

    pub fn network_address(&self) -> Ip {
        self.net_address
    }

    pub fn netmask(&self) -> Netmask {
        self.net_mask
    }

    /// Network address as a dotted quad.
    pub fn address(&self) -> String {
        self.net_address.as_dotted_quad()
    }

    pub fn address_as_binary_string(&self) -> String {
        self.net_address.as_binary_string()
    }

    pub fn address_as_hex_string(&self) -> String {
        self.net_address.as_hex_string()
    }

    /// Prefix length.
    pub fn mask(&self) -> u8 {
        self.net_mask.as_num_bits()
    }

    pub fn mask_as_dotted_quad(&self) -> String {
        self.net_mask.as_dotted_quad()
    }

    pub fn mask_as_hex_string(&self) -> String {
        self.net_mask.as_hex_string()
    }

    pub fn mask_as_binary_string(&self) -> String {
        self.net_mask.as_binary_string()
    }
}

impl FromStr for Subnet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Subnet> {
        Subnet::parse(s)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address(), self.mask())
    }
}

impl PartialEq<str> for Subnet {
    fn eq(&self, other: &str) -> bool {
        self.equals_str(other)
    }
}

impl PartialEq<&str> for Subnet {
    fn eq(&self, other: &&str) -> bool {
        self.equals_str(other)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::parse(&s).map_err(|e| de::Error::custom(format!("invalid CIDR format: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clears_host_bits() {
        let subnet = Subnet::parse("192.168.1.100/24").unwrap();
        assert_eq!(subnet.to_string(), "192.168.1.0/24");
        assert_eq!(subnet.address(), "192.168.1.0");
        assert_eq!(subnet.mask(), 24);

        let subnet = Subnet::parse("10.20.30.40/16").unwrap();
        assert_eq!(subnet.address(), "10.20.0.0");
    }

    #[test]
    fn test_parse_mask_notations() {
        for cidr in ["172.16.5.4/12", "172.16.5.4/255.240.0.0", "172.16.5.4/0xfff00000"] {
            assert_eq!(Subnet::parse(cidr).unwrap().to_string(), "172.16.0.0/12", "{cidr}");
        }
        assert_eq!(Subnet::parse("1.2.3.4/0").unwrap().to_string(), "0.0.0.0/0");
        assert_eq!(Subnet::parse("1.2.3.4/32").unwrap().to_string(), "1.2.3.4/32");
    }

    #[test]
    fn test_parse_errors() {
        let err = Subnet::parse("10.0.0.0").unwrap_err();
        assert!(err.is_parse());
        assert_eq!(err.subnet_part(), None);
        assert!(Subnet::parse("10.0.0.0/8/8").is_err());

        let err = Subnet::parse("999.0.0.0/8").unwrap_err();
        assert_eq!(err.subnet_part(), Some(SubnetPart::Address));
        assert!(err.to_string().starts_with("failed to parse IP address"));

        // address must be a dotted quad
        let err = Subnet::parse("0x0a000000/8").unwrap_err();
        assert_eq!(err.subnet_part(), Some(SubnetPart::Address));

        let err = Subnet::parse("10.0.0.0/33").unwrap_err();
        assert_eq!(err.subnet_part(), Some(SubnetPart::Netmask));
        assert!(err.to_string().starts_with("failed to parse netmask"));

        let err = Subnet::parse("10.0.0.0/0.0.255.0").unwrap_err();
        assert_eq!(err.subnet_part(), Some(SubnetPart::Netmask));
        assert!(err.is_parse());

        assert!(Subnet::parse("10.0.0.0/").is_err());
        assert!(Subnet::parse("/8").is_err());
    }

    #[test]
    fn test_new_normalises() {
        let ip = Ip::parse("10.1.2.3").unwrap();
        let mask = Netmask::from_num_bits(8).unwrap();
        let subnet = Subnet::new(&ip, &mask);
        assert_eq!(subnet.network_address().to_string(), "10.0.0.0");
        assert_eq!(subnet.netmask(), mask);
        // inputs are copied, not shared
        assert_eq!(ip.to_string(), "10.1.2.3");
    }

    #[test]
    fn test_set() {
        let mut subnet = Subnet::default();
        assert_eq!(subnet.to_string(), "0.0.0.0/0");

        let ip = Ip::parse("192.168.7.9").unwrap();
        let mask = Netmask::parse("255.255.252.0").unwrap();
        subnet.set(&ip, &mask);
        assert_eq!(subnet.to_string(), "192.168.4.0/22");

        assert!(subnet.set_str("192.168.7.9/40").is_err());
        assert_eq!(subnet.to_string(), "192.168.4.0/22");
        subnet.set_str("10.9.8.7/30").unwrap();
        assert_eq!(subnet.to_string(), "10.9.8.4/30");
    }

    #[test]
    fn test_equals() {
        let subnet = Subnet::parse("10.0.0.0/8").unwrap();
        assert!(subnet.equals_parts("10.1.2.3", "255.0.0.0"));
        assert!(subnet.equals_parts("10.255.255.255", "8"));
        assert!(subnet.equals_str("10.1.2.3/8"));
        assert!(subnet == "10.0.0.0/0xff000000");
        assert!(subnet == Subnet::parse("10.200.0.0/8").unwrap());

        assert!(!subnet.equals_str("10.0.0.0/9"));
        assert!(!subnet.equals_str("11.0.0.0/8"));
        assert!(!subnet.equals_str("garbage"));
        assert!(!subnet.equals_parts("10.0.0.0", "0.255.0.0"));
        assert!(!subnet.equals_parts("nope", "8"));
    }

    #[test]
    fn test_accessors() {
        let subnet = Subnet::parse("192.168.1.77/26").unwrap();
        assert_eq!(subnet.address(), "192.168.1.64");
        assert_eq!(subnet.address_as_hex_string(), "0xc0a80140");
        assert_eq!(
            subnet.address_as_binary_string(),
            "11000000101010000000000101000000"
        );
        assert_eq!(subnet.mask(), 26);
        assert_eq!(subnet.mask_as_dotted_quad(), "255.255.255.192");
        assert_eq!(subnet.mask_as_hex_string(), "0xffffffc0");
        assert_eq!(
            subnet.mask_as_binary_string(),
            "11111111111111111111111111000000"
        );
    }

    #[test]
    fn test_serde() {
        let subnet = Subnet::parse("10.1.2.3/16").unwrap();
        let json = serde_json::to_string(&subnet).unwrap();
        assert_eq!(json, "\"10.1.0.0/16\"");
        let back: Subnet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, subnet);
        assert!(serde_json::from_str::<Subnet>("\"10.1.0.0\"").is_err());
    }
}
