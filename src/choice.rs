use crate::*;
use std::str::FromStr;

/// One of the three canonical throws.
///
/// Input is normalized case- and whitespace-insensitively, and the plural
/// `scissors` is accepted, but display is always the singular `Scissor`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    /// Beats Scissor, loses to Paper.
    Rock,
    /// Beats Rock, loses to Scissor.
    Paper,
    /// Beats Paper, loses to Rock.
    Scissor,
}

impl Choice {
    /// The full domain, in display order.
    pub const fn all() -> [Self; N_CHOICES] {
        [Self::Rock, Self::Paper, Self::Scissor]
    }
    /// Normalize optional raw input. Absent input never matches.
    pub fn normalize(input: Option<&str>) -> Option<Self> {
        input.and_then(|s| Self::try_from(s).ok())
    }
    /// The choice this one defeats.
    pub const fn victim(&self) -> Self {
        match self {
            Self::Rock => Self::Scissor,
            Self::Paper => Self::Rock,
            Self::Scissor => Self::Paper,
        }
    }
    /// True iff this choice defeats `other` under the cyclic rule.
    pub fn beats(&self, other: &Self) -> bool {
        self.victim() == *other
    }
}

impl TryFrom<&str> for Choice {
    type Error = InvalidChoice;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissor" | "scissors" => Ok(Self::Scissor),
            _ => Err(InvalidChoice::from(s)),
        }
    }
}

impl FromStr for Choice {
    type Err = InvalidChoice;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<usize> for Choice {
    type Error = String;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::all()
            .get(n)
            .copied()
            .ok_or_else(|| format!("no choice at index {}", n))
    }
}

impl From<Choice> for usize {
    fn from(choice: Choice) -> Self {
        choice as usize
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissor => write!(f, "Scissor"),
        }
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        Self::all()[rand::random_range(0..N_CHOICES)]
    }
}
