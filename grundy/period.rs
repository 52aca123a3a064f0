//! Periodicity of integer sequences.
//!
//! Both detectors are exhaustive searches over candidate pre-periods `l` (outer loop,
//! ascending) and periods `p` (inner loop, ascending, at most `max_period` and at most
//! `len - l - 1`). A witness is verified on every pair `(i, i + p)` with `i` in `l..len - p`,
//! and the first verified one is returned. Absence only means that nothing was found within
//! the search bound.

use std::fmt::Display;

/// Default search bound for a sequence of length `len`: half of the length, so that at least
/// two full periods are observed.
///
/// # Examples
///
/// ```
/// use grundy::period::default_max_period;
///
/// assert_eq!(default_max_period(1001), 500);
/// assert_eq!(default_max_period(1), 0);
/// ```
pub const fn default_max_period(len: usize) -> usize {
    len / 2
}

/// Pure period: `G(i) == G(i + period)` for all `i >= pre_period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurePeriod {
    /// Length of the non-periodic prefix
    pub pre_period: usize,

    /// Length of the period, at least 1
    pub period: usize,
}

impl Display for PurePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pre-period = {}, period = {}",
            self.pre_period, self.period
        )
    }
}

impl PurePeriod {
    /// Check the witness against the sequence, independently of the search.
    pub fn holds<T>(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.period >= 1 && is_pure_period(values, self.pre_period, self.period)
    }
}

/// Arithmetic period: `G(i) + saltus == G(i + period)` for all `i >= pre_period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArithmeticPeriod {
    /// Length of the non-periodic prefix
    pub pre_period: usize,

    /// Length of the period, at least 1
    pub period: usize,

    /// Shift gained by every period, may be negative
    pub saltus: i64,
}

impl Display for ArithmeticPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pre-period = {}, period = {}, saltus = {}",
            self.pre_period, self.period, self.saltus
        )
    }
}

impl From<PurePeriod> for ArithmeticPeriod {
    fn from(pure: PurePeriod) -> Self {
        Self {
            pre_period: pure.pre_period,
            period: pure.period,
            saltus: 0,
        }
    }
}

impl ArithmeticPeriod {
    /// Check the witness against the sequence, independently of the search.
    pub fn holds<T>(&self, values: &[T]) -> bool
    where
        T: Copy + Into<i64>,
    {
        self.period >= 1 && is_arithmetic_period(values, self.pre_period, self.period, self.saltus)
    }
}

#[inline(always)]
fn as_integer<T>(value: T) -> i64
where
    T: Into<i64>,
{
    value.into()
}

fn is_pure_period<T>(values: &[T], pre_period: usize, period: usize) -> bool
where
    T: PartialEq,
{
    (pre_period..values.len().saturating_sub(period)).all(|i| values[i] == values[i + period])
}

fn is_arithmetic_period<T>(values: &[T], pre_period: usize, period: usize, saltus: i64) -> bool
where
    T: Copy + Into<i64>,
{
    (pre_period..values.len().saturating_sub(period))
        .all(|i| {
            as_integer(values[i])
                .checked_add(saltus)
                .is_some_and(|shifted| shifted == as_integer(values[i + period]))
        })
}

/// Candidate `(pre_period, period)` pairs in search order
fn candidates(len: usize, max_period: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).flat_map(move |pre_period| {
        let largest = max_period.min(len - pre_period - 1);
        (1..=largest).map(move |period| (pre_period, period))
    })
}

/// Find the smallest pure period, see [module documentation](self) for the search order.
///
/// # Examples
///
/// ```
/// use grundy::period::{detect_pure, PurePeriod};
///
/// let values = [5, 0, 1, 2, 0, 1, 2, 0, 1, 2];
/// assert_eq!(
///     detect_pure(&values, 5),
///     Some(PurePeriod { pre_period: 1, period: 3 })
/// );
/// assert_eq!(detect_pure(&[0, 1, 2, 3], 2), None);
/// ```
pub fn detect_pure<T>(values: &[T], max_period: usize) -> Option<PurePeriod>
where
    T: PartialEq,
{
    let found = candidates(values.len(), max_period)
        .find(|&(pre_period, period)| is_pure_period(values, pre_period, period))
        .map(|(pre_period, period)| PurePeriod { pre_period, period });

    log::trace!("Pure period search up to {max_period}: {found:?}");
    found
}

/// Find the smallest arithmetic period, see [module documentation](self) for the search order.
///
/// The saltus of a candidate is taken from its first pair, `G(l + p) - G(l)`. Candidates whose
/// differences do not fit into `i64` fail.
///
/// # Examples
///
/// ```
/// use grundy::period::{detect_arithmetic, ArithmeticPeriod};
///
/// let values: [u32; 8] = [0, 1, 1, 2, 2, 3, 3, 4];
/// assert_eq!(
///     detect_arithmetic(&values, 4),
///     Some(ArithmeticPeriod { pre_period: 0, period: 2, saltus: 1 })
/// );
/// ```
pub fn detect_arithmetic<T>(values: &[T], max_period: usize) -> Option<ArithmeticPeriod>
where
    T: Copy + Into<i64>,
{
    let found = candidates(values.len(), max_period).find_map(|(pre_period, period)| {
        let saltus =
            as_integer(values[pre_period + period]).checked_sub(as_integer(values[pre_period]))?;
        is_arithmetic_period(values, pre_period, period, saltus).then_some(ArithmeticPeriod {
            pre_period,
            period,
            saltus,
        })
    });

    log::trace!("Arithmetic period search up to {max_period}: {found:?}");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, QuickCheck};

    /// Short sequence over a small alphabet, so that periods show up often
    #[derive(Debug, Clone)]
    struct Sequence(Vec<u32>);

    impl Arbitrary for Sequence {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 24;
            Sequence((0..len).map(|_| u32::arbitrary(g) % 3).collect())
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            Box::new(self.0.shrink().map(Sequence))
        }
    }

    /// Sequence with a planted arithmetic period after a random prefix
    #[derive(Debug, Clone)]
    struct Planted {
        values: Vec<u32>,
        pre_period: usize,
        period: usize,
        saltus: u32,
    }

    impl Arbitrary for Planted {
        fn arbitrary(g: &mut Gen) -> Self {
            let pre_period = usize::arbitrary(g) % 5;
            let period = usize::arbitrary(g) % 4 + 1;
            let saltus = u32::arbitrary(g) % 3;
            let mut values = (0..pre_period + period)
                .map(|_| u32::arbitrary(g) % 4)
                .collect::<Vec<_>>();
            for i in pre_period..pre_period + 4 * period {
                values.push(values[i] + saltus);
            }
            Planted {
                values,
                pre_period,
                period,
                saltus,
            }
        }
    }

    #[test]
    fn trivial_sequences() {
        assert_eq!(detect_pure::<u32>(&[], 10), None);
        assert_eq!(detect_pure(&[0_u32], 10), None);
        assert_eq!(detect_arithmetic(&[0_u32], 10), None);
        assert_eq!(
            detect_pure(&[0_u32, 0], 1),
            Some(PurePeriod {
                pre_period: 0,
                period: 1
            })
        );
    }

    #[test]
    fn zero_bound_finds_nothing() {
        assert_eq!(detect_pure(&[0_u32, 0, 0, 0], 0), None);
        assert_eq!(detect_arithmetic(&[0_u32, 1, 2, 3], 0), None);
    }

    #[test]
    fn pre_period_is_minimal_before_period() {
        // (0, 2) and (0, 4) both hold, shorter period wins
        let values = [9_u32, 1, 9, 1, 9, 1, 9, 1];
        assert_eq!(
            detect_pure(&values, 4),
            Some(PurePeriod {
                pre_period: 0,
                period: 2
            })
        );

        let values = [3_u32, 1, 0, 1, 0, 1, 0, 1, 0];
        assert_eq!(
            detect_pure(&values, 4),
            Some(PurePeriod {
                pre_period: 1,
                period: 2
            })
        );
    }

    #[test]
    fn negative_saltus() {
        let values = [10_u32, 9, 8, 7, 6];
        assert_eq!(
            detect_arithmetic(&values, 2),
            Some(ArithmeticPeriod {
                pre_period: 0,
                period: 1,
                saltus: -1
            })
        );
        assert_eq!(detect_pure(&values, 2), None);
    }

    #[test]
    fn arithmetic_search_is_independent() {
        // Constant tail is found by both searches with the same pre-period
        let values = [0_u32, 1, 2, 2, 2, 2, 2, 2];
        assert_eq!(
            detect_pure(&values, 4),
            Some(PurePeriod {
                pre_period: 2,
                period: 1
            })
        );
        assert_eq!(
            detect_arithmetic(&values, 4),
            Some(ArithmeticPeriod {
                pre_period: 2,
                period: 1,
                saltus: 0
            })
        );

        // Additive period holds from the start, the pure one only on the last pair
        let values = [0_u32, 0, 1, 1, 2, 2, 3, 3];
        assert_eq!(
            detect_pure(&values, 4),
            Some(PurePeriod {
                pre_period: 6,
                period: 1
            })
        );
        assert_eq!(
            detect_arithmetic(&values, 4),
            Some(ArithmeticPeriod {
                pre_period: 0,
                period: 2,
                saltus: 1
            })
        );
    }

    #[test]
    fn overflowing_saltus_fails() {
        let values = [i64::MIN, i64::MAX];
        assert_eq!(detect_arithmetic(&values, 1), None);

        let values = [0, i64::MAX, 0, i64::MAX];
        let witness = ArithmeticPeriod {
            pre_period: 0,
            period: 1,
            saltus: i64::MAX,
        };
        assert!(!witness.holds(&values));

        let values = [i64::MIN, 0, i64::MAX];
        assert_eq!(
            detect_arithmetic(&values, 1),
            Some(ArithmeticPeriod {
                pre_period: 1,
                period: 1,
                saltus: i64::MAX
            })
        );
    }

    #[test]
    fn pure_is_arithmetic_with_zero_saltus() {
        let pure = PurePeriod {
            pre_period: 1,
            period: 3,
        };
        let values = [7_u32, 0, 1, 2, 0, 1, 2, 0];
        assert!(pure.holds(&values));
        assert!(ArithmeticPeriod::from(pure).holds(&values));
    }

    #[test]
    fn found_witnesses_hold() {
        let mut qc = QuickCheck::new();
        let test = |seq: Sequence| {
            let max_period = default_max_period(seq.0.len());
            if let Some(pure) = detect_pure(&seq.0, max_period) {
                assert!(pure.holds(&seq.0));
                assert!(pure.period <= max_period);
            }
            if let Some(arith) = detect_arithmetic(&seq.0, max_period) {
                assert!(arith.holds(&seq.0));
                assert_eq!(
                    arith.saltus,
                    seq.0[arith.pre_period + arith.period] as i64
                        - seq.0[arith.pre_period] as i64
                );
            }
        };
        qc.quickcheck(test as fn(Sequence));
    }

    #[test]
    fn found_witness_is_smallest() {
        let mut qc = QuickCheck::new();
        let test = |seq: Sequence| {
            let len = seq.0.len();
            let max_period = default_max_period(len);
            let found = detect_pure(&seq.0, max_period);
            for pre_period in 0..len {
                for period in 1..=max_period.min(len - pre_period - 1) {
                    let candidate = PurePeriod { pre_period, period };
                    let before = found.is_none_or(|found| {
                        (pre_period, period) < (found.pre_period, found.period)
                    });
                    if before {
                        assert!(!candidate.holds(&seq.0));
                    }
                }
            }
        };
        qc.quickcheck(test as fn(Sequence));
    }

    #[test]
    fn planted_period_is_found() {
        let mut qc = QuickCheck::new();
        let test = |planted: Planted| {
            let found = detect_arithmetic(&planted.values, planted.period)
                .expect("planted period is within bound");
            assert!(found.pre_period <= planted.pre_period);
            assert!(found.holds(&planted.values));

            let witness = ArithmeticPeriod {
                pre_period: planted.pre_period,
                period: planted.period,
                saltus: planted.saltus as i64,
            };
            assert!(witness.holds(&planted.values));
        };
        qc.quickcheck(test as fn(Planted));
    }
}
