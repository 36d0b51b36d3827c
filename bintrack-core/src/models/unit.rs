use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::BinTrackError;

/// Coordinate domain a bin index is expressed in: base pairs or fragment
/// (bin) numbers. Two entries computed at the same resolution but different
/// units describe different data and must never satisfy each other's cache
/// lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    Bp,
    Frag,
}

impl FromStr for Unit {
    type Err = BinTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bp" => Ok(Unit::Bp),
            "frag" => Ok(Unit::Frag),
            _ => Err(BinTrackError::UnknownUnit(s.to_string())),
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Bp => write!(f, "BP"),
            Unit::Frag => write!(f, "FRAG"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::str::FromStr;

    use super::Unit;

    #[rstest]
    #[case("bp", Unit::Bp)]
    #[case("BP", Unit::Bp)]
    #[case("frag", Unit::Frag)]
    #[case("FRAG", Unit::Frag)]
    fn test_from_str(#[case] input: &str, #[case] expected: Unit) {
        assert_eq!(Unit::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_from_str_unknown() {
        assert!(Unit::from_str("kb").is_err());
    }

    #[rstest]
    fn test_display_round_trip() {
        assert_eq!(Unit::from_str(&Unit::Bp.to_string()).unwrap(), Unit::Bp);
        assert_eq!(Unit::from_str(&Unit::Frag.to_string()).unwrap(), Unit::Frag);
    }
}
