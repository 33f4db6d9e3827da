//! Error types for parsing and validating 32-bit values.

use std::fmt;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of a CIDR string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubnetPart {
    Address,
    Netmask,
}

impl fmt::Display for SubnetPart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubnetPart::Address => write!(f, "IP address"),
            SubnetPart::Netmask => write!(f, "netmask"),
        }
    }
}

/// Errors raised by the parsers and constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input text matches no grammar, or breaks a semantic rule of the one it matches.
    #[error("parse error - {0}")]
    Parse(String),
    /// A typed argument is out of range.
    #[error("invalid argument - {0}")]
    InvalidArgument(String),
    /// One half of an `address/mask` pair was rejected.
    #[error("failed to parse {part} ({source})")]
    Subnet {
        part: SubnetPart,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn parse(msg: impl Into<String>) -> Error {
        Error::Parse(msg.into())
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Error {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn subnet(part: SubnetPart, source: Error) -> Error {
        Error::Subnet {
            part,
            source: Box::new(source),
        }
    }

    /// True when the root cause is a text parse failure.
    pub fn is_parse(&self) -> bool {
        match self {
            Error::Parse(_) => true,
            Error::InvalidArgument(_) => false,
            Error::Subnet { source, .. } => source.is_parse(),
        }
    }

    /// The CIDR half that failed, if this error came from subnet parsing.
    pub fn subnet_part(&self) -> Option<SubnetPart> {
        match self {
            Error::Subnet { part, .. } => Some(*part),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::parse("not a 32-bit binary string: 101").to_string(),
            "parse error - not a 32-bit binary string: 101"
        );
        assert_eq!(
            Error::invalid_argument("expected 0-32").to_string(),
            "invalid argument - expected 0-32"
        );
    }

    #[test]
    fn test_subnet_error_names_part() {
        let err = Error::subnet(SubnetPart::Netmask, Error::parse("bad"));
        assert_eq!(err.to_string(), "failed to parse netmask (parse error - bad)");
        assert_eq!(err.subnet_part(), Some(SubnetPart::Netmask));
        assert!(err.is_parse());

        let err = Error::subnet(SubnetPart::Address, Error::invalid_argument("x"));
        assert!(err.to_string().starts_with("failed to parse IP address"));
        assert!(!err.is_parse());
    }
}
