//! All-but game: every position is reachable except the excluded ones

use std::fmt::Display;

use crate::{display, error::Error, ruleset::MoveOracle};

/// All-but game on an excluded set `S`.
///
/// From position `n` the reachable positions are `{1, ..., n} \ S`. Note that this includes
/// `n` itself unless it is excluded, so the sequence builder reads the current, still zeroed,
/// slot for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllBut {
    // Invariant: sorted, deduplicated, no zeros
    excluded: Vec<u32>,
}

impl Display for AllBut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllBut")?;
        display::parens(f, |f| display::commas(f, self.excluded()))
    }
}

impl AllBut {
    /// Define new all-but game with a given excluded set
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the set contains zero
    ///
    /// # Examples
    ///
    /// ```
    /// use grundy::{games::all_but::AllBut, ruleset::MoveOracle};
    ///
    /// let game = AllBut::new(vec![2, 3]).unwrap();
    /// assert_eq!(game.moves(6), vec![1, 4, 5, 6]);
    /// ```
    pub fn new(mut excluded: Vec<u32>) -> Result<Self, Error> {
        if excluded.contains(&0) {
            return Err(Error::InvalidArgument(
                "excluded set cannot contain 0".to_string(),
            ));
        }

        excluded.sort_unstable();
        excluded.dedup();
        Ok(Self { excluded })
    }

    /// Get the excluded set of the game
    #[inline]
    pub const fn excluded(&self) -> &Vec<u32> {
        &self.excluded
    }

    fn is_excluded(&self, position: usize) -> bool {
        u32::try_from(position).is_ok_and(|position| self.excluded.binary_search(&position).is_ok())
    }
}

impl MoveOracle for AllBut {
    fn moves(&self, position: usize) -> Vec<usize> {
        (1..=position).filter(|&m| !self.is_excluded(m)).collect()
    }
}
