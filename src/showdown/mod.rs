/// Module for comparing two hands and reporting the winner.
mod compare;
/// Export `compare`, `showdown`, `Outcome` and `Showdown`
pub use self::compare::{compare, showdown, Outcome, Showdown};
