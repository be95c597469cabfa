//! Airport code type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// Longest UTF-8 encoding of a three-character code.
const MAX_CODE_BYTES: usize = 3 * 4;

/// A 3-character airport code.
///
/// Codes are opaque keys: they are not checked against any registry of
/// real airports, only for shape. Any `AirportCode` value holds exactly
/// three characters, none of them whitespace or control characters.
/// The UTF-8 bytes are stored inline so the code stays `Copy`.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportCode;
///
/// let btw = AirportCode::parse("BTW").unwrap();
/// assert_eq!(btw.as_str(), "BTW");
///
/// // Length is counted in characters, not bytes
/// assert!(AirportCode::parse("ÖÖÖ").is_ok());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("BT").is_err());
/// assert!(AirportCode::parse("BTWX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode {
    bytes: [u8; MAX_CODE_BYTES],
    len: u8,
}

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 characters, none of them whitespace or
    /// control characters. Case is preserved.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        if s.chars().count() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidAirportCode {
                reason: "must not contain whitespace or control characters",
            });
        }

        let mut bytes = [0; MAX_CODE_BYTES];
        bytes[..s.len()].copy_from_slice(s.as_bytes());

        Ok(AirportCode {
            bytes,
            len: s.len() as u8,
        })
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only whole UTF-8 strings are ever stored.
        std::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or("???")
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(AirportCode::parse("BTW").is_ok());
        assert!(AirportCode::parse("WTF").is_ok());
        assert!(AirportCode::parse("REJ").is_ok());
        assert!(AirportCode::parse("A1Z").is_ok());
    }

    #[test]
    fn case_is_preserved() {
        let code = AirportCode::parse("btw").unwrap();
        assert_eq!(code.as_str(), "btw");
        assert_ne!(code, AirportCode::parse("BTW").unwrap());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("B").is_err());
        assert!(AirportCode::parse("BT").is_err());
        assert!(AirportCode::parse("BTWX").is_err());
        assert!(AirportCode::parse("PRAGUE").is_err());
    }

    #[test]
    fn reject_whitespace_and_control() {
        assert!(AirportCode::parse("B W").is_err());
        assert!(AirportCode::parse(" BT").is_err());
        assert!(AirportCode::parse(" BTW ").is_err());
        assert!(AirportCode::parse("BT\t").is_err());
        assert!(AirportCode::parse("BT\u{7}").is_err());
    }

    #[test]
    fn length_counts_characters() {
        let code = AirportCode::parse("ÖÖÖ").unwrap();
        assert_eq!(code.as_str(), "ÖÖÖ");
        assert_eq!(code.to_string(), "ÖÖÖ");

        assert!(AirportCode::parse("BÖ").is_err());
        assert!(AirportCode::parse("ÖÖÖÖ").is_err());
        assert!(AirportCode::parse("东京都").is_ok());
    }

    #[test]
    fn unicode_codes_are_distinct_keys() {
        let upper = AirportCode::parse("ÖBT").unwrap();
        let lower = AirportCode::parse("öBT").unwrap();
        assert_ne!(upper, lower);
        assert_eq!(upper, AirportCode::parse("ÖBT").unwrap());
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::parse("DHE").unwrap();
        assert_eq!(format!("{}", code), "DHE");
        assert_eq!(format!("{:?}", code), "AirportCode(DHE)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = AirportCode::parse("NIZ").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"NIZ\"");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(AirportCode::parse("BTW").unwrap());
        assert!(set.contains(&AirportCode::parse("BTW").unwrap()));
        assert!(!set.contains(&AirportCode::parse("REJ").unwrap()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z0-9]{3}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any three non-space letters roundtrip, whatever their encoding width
        #[test]
        fn unicode_roundtrip(s in "\\p{L}{3}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }
    }
}
