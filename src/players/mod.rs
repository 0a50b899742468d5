//! The two seats at the table.
//!
//! - [`Human`] — reads one line of raw text from any buffered reader
//! - [`Robot`] — draws uniformly at random from the [`crate::Choice`] domain
mod human;
mod robot;

pub use human::*;
pub use robot::*;

use crate::Choice;

/// An opponent that produces an already canonical choice.
pub trait Player {
    fn choose(&mut self) -> Choice;
}
