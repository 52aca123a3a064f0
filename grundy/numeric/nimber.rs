//! Nimber is a number that represents a Nim heap of a given size.

use ahash::AHashSet;
use std::fmt::Display;

/// Number that represents a Nim heap of given size, i.e. a Grundy value.
#[repr(transparent)]
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nimber(u32);

impl Nimber {
    /// Construct new nimber
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying nimber value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Compute the minimum excluded value from a collection of nimbers.
    /// See <https://en.wikipedia.org/wiki/Mex_(mathematics)>
    ///
    /// # Examples
    ///
    /// ```
    /// use grundy::numeric::nimber::Nimber;
    ///
    /// assert_eq!(Nimber::mex([Nimber::new(0), Nimber::new(2)]), Nimber::new(1));
    /// assert_eq!(Nimber::mex([]), Nimber::new(0));
    /// ```
    pub fn mex<I>(nimbers: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let seen = nimbers.into_iter().collect::<AHashSet<_>>();
        let mut current = 0;
        while seen.contains(&Self(current)) {
            current += 1;
        }
        Self(current)
    }
}

impl From<u32> for Nimber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// Grundy values are compared as plain integers when looking for additive periods
impl From<Nimber> for i64 {
    fn from(value: Nimber) -> Self {
        value.0 as i64
    }
}

impl Display for Nimber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            write!(f, "0")
        } else if self.0 == 1 {
            write!(f, "*")
        } else {
            write!(f, "*{}", self.0)
        }
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Nimber {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Keep values small so that collisions, and thus interesting mex values, are common
        Self(u32::arbitrary(g) % 16)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;

    #[test]
    fn mex_works() {
        assert_eq!(
            Nimber(3),
            Nimber::mex(vec![Nimber(0), Nimber(0), Nimber(2), Nimber(5), Nimber(1)])
        );

        assert_eq!(
            Nimber(3),
            Nimber::mex(vec![Nimber(0), Nimber(1), Nimber(2)])
        );

        assert_eq!(
            Nimber(2),
            Nimber::mex(vec![Nimber(0), Nimber(1), Nimber(1)])
        );

        assert_eq!(Nimber(0), Nimber::mex(vec![Nimber(1), Nimber(2)]));
        assert_eq!(Nimber(0), Nimber::mex(vec![]));
    }

    #[test]
    fn display() {
        assert_eq!(Nimber(0).to_string(), "0");
        assert_eq!(Nimber(1).to_string(), "*");
        assert_eq!(Nimber(4).to_string(), "*4");
    }

    #[test]
    fn mex_is_smallest_excluded() {
        let mut qc = QuickCheck::new();
        let test = |nimbers: Vec<Nimber>| {
            let mex = Nimber::mex(nimbers.iter().copied());
            assert!(!nimbers.contains(&mex));
            for smaller in 0..mex.value() {
                assert!(nimbers.contains(&Nimber(smaller)));
            }
        };
        qc.quickcheck(test as fn(Vec<Nimber>));
    }
}
