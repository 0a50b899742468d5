//! Rock-Paper-Scissors Binary
//!
//! Plays one round: reads a choice from stdin, prints the computer's draw
//! and the result to stdout.

use roshambo::*;

fn main() -> anyhow::Result<()> {
    log()?;
    Table::stdio().play()?;
    Ok(())
}
