//! Impartial rulesets played on the non-negative integers

/// Move generator of an impartial game whose positions are `0, 1, 2, ...`.
///
/// Every position returned by [`MoveOracle::moves`] is expected to be strictly smaller than
/// the position it was generated from. This is not verified: a position equal to or larger
/// than `position` is read from a not-yet-computed slot by
/// [`GrundySequence::build`](crate::sequence::GrundySequence::build).
pub trait MoveOracle {
    /// Get a list of positions reachable in one move from `position`
    fn moves(&self, position: usize) -> Vec<usize>;
}

impl<F> MoveOracle for F
where
    F: Fn(usize) -> Vec<usize>,
{
    fn moves(&self, position: usize) -> Vec<usize> {
        self(position)
    }
}
