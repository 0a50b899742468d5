use crate::*;

/// Result of settling the user's choice against the computer's.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    UserWins,
    ComputerWins,
}

/// Settles `(user, computer)`. Total over the 3×3 domain.
impl From<(Choice, Choice)> for Outcome {
    fn from((user, computer): (Choice, Choice)) -> Self {
        use Choice::*;
        match (user, computer) {
            (Rock, Rock) | (Paper, Paper) | (Scissor, Scissor) => Self::Tie,
            (Rock, Scissor) | (Paper, Rock) | (Scissor, Paper) => Self::UserWins,
            (Rock, Paper) | (Paper, Scissor) | (Scissor, Rock) => Self::ComputerWins,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tie => write!(f, "{}", TIE),
            Self::UserWins => write!(f, "{}", USER_WINS),
            Self::ComputerWins => write!(f, "{}", COMPUTER_WINS),
        }
    }
}
