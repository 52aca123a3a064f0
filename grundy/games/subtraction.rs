//! Subtraction game played on a finite subtraction set

use std::fmt::Display;

use crate::{display, error::Error, ruleset::MoveOracle};

/// Subtraction game played on an arbitrary finite subtraction set.
///
/// From a heap of size `n` a player removes `s` tokens for any `s` in the subtraction set
/// with `s <= n`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subtraction {
    // Invariant: sorted, deduplicated, no zeros
    subtraction_set: Vec<u32>,
}

impl Display for Subtraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subtraction")?;
        display::parens(f, |f| display::commas(f, self.subtraction_set()))
    }
}

impl Subtraction {
    /// Define new subtraction game with a given subtraction set
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the set is empty or contains zero
    ///
    /// # Examples
    ///
    /// ```
    /// use grundy::{games::subtraction::Subtraction, ruleset::MoveOracle};
    ///
    /// let game = Subtraction::new(vec![3, 2, 3]).unwrap();
    /// assert_eq!(game.to_string(), "Subtraction(2, 3)");
    /// assert_eq!(game.moves(4), vec![2, 1]);
    /// assert!(Subtraction::new(vec![0, 1]).is_err());
    /// ```
    pub fn new(mut subtraction_set: Vec<u32>) -> Result<Self, Error> {
        if subtraction_set.is_empty() {
            return Err(Error::InvalidArgument(
                "subtraction set cannot be empty".to_string(),
            ));
        }
        if subtraction_set.contains(&0) {
            return Err(Error::InvalidArgument(
                "subtraction set cannot contain 0".to_string(),
            ));
        }

        subtraction_set.sort_unstable();
        subtraction_set.dedup();
        Ok(Self { subtraction_set })
    }

    /// Get the subtraction set of the game
    #[inline]
    pub const fn subtraction_set(&self) -> &Vec<u32> {
        &self.subtraction_set
    }
}

impl MoveOracle for Subtraction {
    fn moves(&self, position: usize) -> Vec<usize> {
        let mut moves = Vec::with_capacity(self.subtraction_set.len());
        for &m in &self.subtraction_set {
            let m = m as usize;
            if m > position {
                break;
            }
            moves.push(position - m);
        }
        moves
    }
}
