//! Airport code type.

use std::fmt;

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Iata` value is valid by construction.
///
/// # Examples
///
/// ```
/// use interconnect_server::domain::Iata;
///
/// let dub = Iata::parse("DUB").unwrap();
/// assert_eq!(dub.as_str(), "DUB");
///
/// // Lowercase is rejected by `parse`; use `parse_normalized` for user input
/// assert!(Iata::parse("dub").is_err());
/// assert!(Iata::parse_normalized("dub").is_ok());
///
/// // Wrong length is rejected
/// assert!(Iata::parse("DU").is_err());
/// assert!(Iata::parse("DUBX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIata {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Iata([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse an IATA code, accepting lowercase input.
    ///
    /// Web requests often arrive lowercased; upstream data is uppercase.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        let mut out = [0u8; 3];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidIata {
                    reason: "must be ASCII letters A-Z",
                });
            }
            out[i] = b.to_ascii_uppercase();
        }

        Ok(Iata(out))
    }

    /// Returns the IATA code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_iata() {
        assert!(Iata::parse("DUB").is_ok());
        assert!(Iata::parse("MAD").is_ok());
        assert!(Iata::parse("BCN").is_ok());
        assert!(Iata::parse("AAA").is_ok());
        assert!(Iata::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(Iata::parse("dub").is_err());
        assert!(Iata::parse("Dub").is_err());
        assert!(Iata::parse("DUb").is_err());
    }

    #[test]
    fn parse_normalized_accepts_lowercase() {
        assert_eq!(Iata::parse_normalized("dub").unwrap().as_str(), "DUB");
        assert_eq!(Iata::parse_normalized("Mad").unwrap().as_str(), "MAD");
        assert_eq!(Iata::parse_normalized("BCN").unwrap().as_str(), "BCN");
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Iata::parse("").is_err());
        assert!(Iata::parse("D").is_err());
        assert!(Iata::parse("DU").is_err());
        assert!(Iata::parse("DUBX").is_err());
        assert!(Iata::parse_normalized("dubl").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Iata::parse("D1B").is_err());
        assert!(Iata::parse("D-B").is_err());
        assert!(Iata::parse("D B").is_err());
        assert!(Iata::parse_normalized("d1b").is_err());
    }

    #[test]
    fn display_and_debug() {
        let mad = Iata::parse("MAD").unwrap();
        assert_eq!(format!("{}", mad), "MAD");
        assert_eq!(format!("{:?}", mad), "Iata(MAD)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Iata::parse("DUB").unwrap());
        assert!(set.contains(&Iata::parse("DUB").unwrap()));
        assert!(!set.contains(&Iata::parse("MAD").unwrap()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid IATA codes: 3 uppercase ASCII letters
    fn valid_iata_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{3}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_iata_string()) {
            let code = Iata::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// parse_normalized agrees with parse after uppercasing
        #[test]
        fn normalized_matches_uppercased(s in "[a-zA-Z]{3}") {
            let normalized = Iata::parse_normalized(&s).unwrap();
            let upper = Iata::parse(&s.to_ascii_uppercase()).unwrap();
            prop_assert_eq!(normalized, upper);
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(Iata::parse(&s).is_err());
        }

        /// Strings with digits are rejected
        #[test]
        fn digits_rejected(s in "[A-Z0-9]{3}".prop_filter("has digit", |s| s.chars().any(|c| c.is_ascii_digit()))) {
            prop_assert!(Iata::parse(&s).is_err());
        }
    }
}
