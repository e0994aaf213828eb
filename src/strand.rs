//! Strand orientation of a transcript.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Strand orientation of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    #[must_use]
    pub fn is_reverse(self) -> bool {
        self == Self::Reverse
    }

    /// +1 for forward, -1 for reverse.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// Parse from the database strand column ("1" or "-1").
impl FromStr for Strand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "+1" => Ok(Self::Forward),
            "-1" => Ok(Self::Reverse),
            other => Err(Error::Parse(format!("invalid strand: '{other}'"))),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_database_values() {
        assert_eq!("1".parse::<Strand>().unwrap(), Strand::Forward);
        assert_eq!("+1".parse::<Strand>().unwrap(), Strand::Forward);
        assert_eq!("-1".parse::<Strand>().unwrap(), Strand::Reverse);
    }

    #[test]
    fn invalid_strand() {
        assert!("+".parse::<Strand>().is_err());
        assert!("0".parse::<Strand>().is_err());
        assert!("".parse::<Strand>().is_err());
    }

    #[test]
    fn display_matches_database_encoding() {
        assert_eq!(Strand::Forward.to_string(), "1");
        assert_eq!(Strand::Reverse.to_string(), "-1");
    }

    #[test]
    fn is_reverse() {
        assert!(!Strand::Forward.is_reverse());
        assert!(Strand::Reverse.is_reverse());
    }
}
