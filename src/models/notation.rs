//! Syntactic detection of the textual 32-bit notations.
//!
//! Detection only looks at the shape of the string (plus the octet range for
//! dotted quads and the 0-32 range for prefix lengths); it never decodes.

use lazy_static::lazy_static;
use regex::Regex;

/// Highest valid prefix length.
pub const MAX_PREFIX_LEN: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD_RE: Regex =
        Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$").expect("Invalid Regex?");
    static ref BINARY_RE: Regex = Regex::new(r"^[01]{32}$").expect("Invalid Regex?");
    static ref HEX_RE: Regex = Regex::new(r"^(?i:0x)?[0-9a-fA-F]{8}$").expect("Invalid Regex?");
    static ref NUM_BITS_RE: Regex = Regex::new(r"^[0-9]{1,2}$").expect("Invalid Regex?");
}

/// A recognised textual notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    DottedQuad,
    Binary,
    Hex,
    NumBits,
}

/// Four dot separated decimal groups, each 0-255.
pub fn is_dotted_quad(s: &str) -> bool {
    DOTTED_QUAD_RE.is_match(s)
        && s.split('.')
            .all(|octet| octet.parse::<u16>().map_or(false, |v| v <= 255))
}

/// Exactly 32 characters of `0` and `1`.
pub fn is_binary(s: &str) -> bool {
    BINARY_RE.is_match(s)
}

/// Eight hex digits with an optional `0x`, any case.
pub fn is_hex(s: &str) -> bool {
    HEX_RE.is_match(s)
}

/// One or two decimal digits whose value is at most 32.
pub fn is_num_bits(s: &str) -> bool {
    num_bits_value(s).map_or(false, |n| n <= MAX_PREFIX_LEN)
}

/// Value of a one or two digit decimal string, whatever its range.
pub(crate) fn num_bits_value(s: &str) -> Option<u8> {
    if NUM_BITS_RE.is_match(s) {
        s.parse().ok()
    } else {
        None
    }
}

/// Classify a generic 32-bit value: dotted quad, then binary, then hex.
pub fn detect(s: &str) -> Option<Notation> {
    let notation = if is_dotted_quad(s) {
        Some(Notation::DottedQuad)
    } else if is_binary(s) {
        Some(Notation::Binary)
    } else if is_hex(s) {
        Some(Notation::Hex)
    } else {
        None
    };
    log::trace!("detect({s:?}) = {notation:?}");
    notation
}

/// Classify a netmask: prefix length first, then the generic order.
pub fn detect_netmask(s: &str) -> Option<Notation> {
    if is_num_bits(s) {
        log::trace!("detect_netmask({s:?}) = NumBits");
        Some(Notation::NumBits)
    } else {
        detect(s)
    }
}
