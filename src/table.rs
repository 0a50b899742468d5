use crate::*;
use std::io::BufRead;
use std::io::Write;

/// Record of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Round {
    /// Input did not normalize; the opponent was never consulted.
    Invalid(InvalidChoice),
    Played {
        user: Choice,
        computer: Choice,
        outcome: Outcome,
    },
}

impl Round {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Invalid(_) => None,
            Self::Played { outcome, .. } => Some(*outcome),
        }
    }
}

/// Runs exactly one round between a [`Human`] on `input` and an opponent,
/// writing all game text to `output`.
///
/// A table is a round still awaiting input. [`Table::play`] consumes it and
/// hands back the finished [`Round`], so the input and output handles are
/// released on every exit path and no table can be played twice.
#[derive(Debug)]
pub struct Table<R, W, P>
where
    R: BufRead,
    W: Write,
    P: Player,
{
    human: Human<R>,
    output: W,
    robot: P,
}

impl<R, W, P> Table<R, W, P>
where
    R: BufRead,
    W: Write,
    P: Player,
{
    pub fn new(input: R, output: W, robot: P) -> Self {
        Self {
            human: Human::new(input),
            output,
            robot,
        }
    }

    pub fn play(mut self) -> anyhow::Result<Round> {
        let round = self.round()?;
        self.output.flush()?;
        Ok(round)
    }

    fn round(&mut self) -> anyhow::Result<Round> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;
        let line = self.human.read()?;
        log::debug!("read {:?}", line);
        let user = match Choice::normalize(line.as_deref()) {
            Some(choice) => choice,
            None => return self.reject(line),
        };
        let computer = self.robot.choose();
        writeln!(self.output, "{}{}", COMPUTER_CHOSE, computer)?;
        let outcome = Outcome::from((user, computer));
        writeln!(self.output, "{}", outcome)?;
        log::info!("{} vs {}: {:?}", user, computer, outcome);
        Ok(Round::Played {
            user,
            computer,
            outcome,
        })
    }

    fn reject(&mut self, line: Option<String>) -> anyhow::Result<Round> {
        let error = line.as_deref().map(InvalidChoice::from).unwrap_or_default();
        log::info!("rejected input {:?}", error.input());
        writeln!(self.output, "{}", error)?;
        Ok(Round::Invalid(error))
    }
}

impl Table<std::io::StdinLock<'static>, std::io::Stdout, Robot> {
    /// A table on the process's standard streams against a randomly seeded robot.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), Robot::default())
    }
}
