//! IPv4 addresses, netmasks and subnets as 32-bit value types.
//!
//! Every value is parsed from one of several textual notations (dotted quad,
//! 32-character binary string, 8-digit hex, and for netmasks a prefix length)
//! into a canonical 32-bit form, and rendered back on demand.
//!
//! ```
//! use ipv4_subnet::{AsBits32, Ip, Netmask, Subnet};
//!
//! let ip: Ip = "10.20.30.40".parse().unwrap();
//! let mask: Netmask = "16".parse().unwrap();
//! let subnet = Subnet::new(&ip, &mask);
//! assert_eq!(subnet.to_string(), "10.20.0.0/16");
//! assert_eq!(mask.as_hex_string(), "0xffff0000");
//! assert!(subnet.equals_parts("10.20.99.1", "255.255.0.0"));
//! ```

pub mod error;
pub mod models;

pub use error::{Error, Result, SubnetPart};
pub use models::{AsBits32, Bin32, Ip, Netmask, Subnet};
