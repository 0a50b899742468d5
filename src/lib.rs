//! Single-round Rock-Paper-Scissors against a computer opponent.
//!
//! One line of input is normalized into a [`Choice`], the [`Robot`] draws
//! uniformly from the same domain, and the pair is settled into an [`Outcome`].
//! The whole round is driven by a [`Table`] over any reader and writer, so the
//! binary plays on stdin/stdout while tests play on byte buffers.
mod choice;
mod error;
mod outcome;
mod players;
mod table;

pub use choice::*;
pub use error::*;
pub use outcome::*;
pub use players::*;
pub use table::*;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for opponents and Monte Carlo checks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of distinct choices in the domain.
pub const N_CHOICES: usize = 3;

// ============================================================================
// TERMINAL TEXT
// Written verbatim to stdout. The prompt carries no trailing newline.
// ============================================================================
/// Prompt shown before reading the user's choice.
pub const PROMPT: &str = "Enter your choice (Rock, Paper, Scissor): ";
/// Printed when the input does not normalize to a choice.
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter Rock, Paper, or Scissor.";
/// Prefix of the line announcing the computer's draw.
pub const COMPUTER_CHOSE: &str = "Computer chose: ";
/// Result line for equal choices.
pub const TIE: &str = "It's a tie!";
/// Result line when the user's choice beats the computer's.
pub const USER_WINS: &str = "You win!";
/// Result line when the computer's choice beats the user's.
pub const COMPUTER_WINS: &str = "Computer wins!";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr.
/// Stdout is reserved for the game text, so nothing is logged there and no
/// log file is written.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Warn,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
