//! Trump designation for a round.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Trump {
    #[default]
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrumps,
}

impl Trump {
    /// Fixed rotation order used by the suit cycle.
    pub const ROTATION: [Trump; 5] = [
        Trump::Clubs,
        Trump::Diamonds,
        Trump::Hearts,
        Trump::Spades,
        Trump::NoTrumps,
    ];

    /// Position of this trump within [`Trump::ROTATION`].
    pub fn rotation_index(self) -> usize {
        match self {
            Trump::Clubs => 0,
            Trump::Diamonds => 1,
            Trump::Hearts => 2,
            Trump::Spades => 3,
            Trump::NoTrumps => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trump::Clubs => "CLUBS",
            Trump::Diamonds => "DIAMONDS",
            Trump::Hearts => "HEARTS",
            Trump::Spades => "SPADES",
            Trump::NoTrumps => "NO_TRUMPS",
        }
    }
}

impl Display for Trump {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

// Accepts the wire names plus the short forms a user types on the command line.
impl FromStr for Trump {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace(['-', ' '], "_").as_str() {
            "CLUBS" | "C" => Ok(Trump::Clubs),
            "DIAMONDS" | "D" => Ok(Trump::Diamonds),
            "HEARTS" | "H" => Ok(Trump::Hearts),
            "SPADES" | "S" => Ok(Trump::Spades),
            "NO_TRUMPS" | "NO_TRUMP" | "NT" => Ok(Trump::NoTrumps),
            _ => Err(DomainError::validation(
                ValidationKind::Other("PARSE_TRUMP".into()),
                format!("Parse trump: {s}"),
            )),
        }
    }
}
