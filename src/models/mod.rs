//! 32-bit value types.
//!
//! - [`Bin32`] - fixed width 32-bit value with its codecs, and the [`AsBits32`] trait
//! - [`Ip`] - an IPv4 address
//! - [`Netmask`] - a contiguous-prefix netmask
//! - [`Subnet`] - a network address plus netmask (CIDR block)

mod bin32;
pub mod notation;
mod ip;
mod netmask;
mod subnet;

// Re-export public types
pub use bin32::{AsBits32, Bin32, BITS};
pub use ip::Ip;
pub use netmask::{get_cidr_mask, is_contiguous, Netmask};
pub use notation::{Notation, MAX_PREFIX_LEN};
pub use subnet::Subnet;
