//! Sprague-Grundy sequences of impartial games and their periodicity.
//!
//! Games are played on the non-negative integers with moves given by a
//! [move oracle](crate::ruleset::MoveOracle). The [Grundy sequence](crate::sequence)
//! of such a game can be searched for [pure and arithmetic periods](crate::period),
//! [printed](crate::report) and [plotted](crate::plot).

#![warn(missing_docs)]

pub mod drawing;
pub mod error;
pub mod games;
pub mod numeric;
pub mod period;
pub mod plot;
pub mod report;
pub mod ruleset;
pub mod sequence;

mod display;

pub use error::Error;
