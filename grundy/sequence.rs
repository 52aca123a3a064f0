//! Grundy sequence of a game played on the non-negative integers

use std::fmt::Display;

use crate::{
    display,
    error::Error,
    numeric::nimber::Nimber,
    period::{self, ArithmeticPeriod, PurePeriod},
    ruleset::MoveOracle,
};

/// Grundy values `G(0), G(1), ..., G(max_n)` of a game, computed with the mex rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GrundySequence {
    // Invariant: non-empty, values[0] == 0
    values: Vec<Nimber>,
}

impl Display for GrundySequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display::brackets(f, |f| display::commas(f, &self.values))
    }
}

impl GrundySequence {
    /// Compute Grundy values of all positions in `0..=max_n`.
    ///
    /// Positions are processed in increasing order, so an oracle that only moves to smaller
    /// positions always reads values that are already final. Slots are zero-initialized, a
    /// move to the current position therefore reads `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grundy::{games::subtraction::Subtraction, sequence::GrundySequence};
    ///
    /// let game = Subtraction::new(vec![1, 2]).unwrap();
    /// let seq = GrundySequence::build(&game, 6);
    /// assert_eq!(seq.to_string(), "[0, *, *2, 0, *, *2, 0]");
    /// ```
    pub fn build<O>(oracle: &O, max_n: usize) -> Self
    where
        O: MoveOracle + ?Sized,
    {
        let mut values = vec![Nimber::new(0); max_n + 1];

        for n in 1..=max_n {
            let reachable = oracle.moves(n);
            let g = Nimber::mex(reachable.into_iter().map(|m| values[m]));
            values[n] = g;
        }

        log::debug!("Computed {} Grundy values", values.len());
        Self { values }
    }

    /// Like [`GrundySequence::build`] but accepts a signed bound as given by the user.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `max_n` is negative
    pub fn try_build<O>(oracle: &O, max_n: i64) -> Result<Self, Error>
    where
        O: MoveOracle + ?Sized,
    {
        let max_n = usize::try_from(max_n).map_err(|_| {
            Error::InvalidArgument(format!("sequence bound must be non-negative, got {max_n}"))
        })?;
        Ok(Self::build(oracle, max_n))
    }

    /// Grundy values indexed by position
    #[inline]
    pub fn values(&self) -> &[Nimber] {
        &self.values
    }

    /// Grundy value of a position, if it was computed
    #[inline]
    pub fn get(&self, position: usize) -> Option<Nimber> {
        self.values.get(position).copied()
    }

    /// Number of computed values, `max_n + 1`
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`, position `0` is always present
    #[inline]
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Largest computed position
    #[inline]
    pub fn max_position(&self) -> usize {
        self.values.len() - 1
    }

    /// Smallest pure period, searching periods up to `max_period` or
    /// [the default bound](period::default_max_period).
    pub fn pure_period(&self, max_period: Option<usize>) -> Option<PurePeriod> {
        let max_period = max_period.unwrap_or_else(|| period::default_max_period(self.len()));
        period::detect_pure(&self.values, max_period)
    }

    /// Smallest arithmetic period, searching periods up to `max_period` or
    /// [the default bound](period::default_max_period).
    pub fn arithmetic_period(&self, max_period: Option<usize>) -> Option<ArithmeticPeriod> {
        let max_period = max_period.unwrap_or_else(|| period::default_max_period(self.len()));
        period::detect_arithmetic(&self.values, max_period)
    }
}
