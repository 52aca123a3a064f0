//! Terminal rendering of a few periods of a sequence

use std::fmt::{self, Display};

/// How segments are rendered on the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputMode {
    /// No escape codes
    Plain,

    /// Every position of a period in its own color
    #[default]
    Colored,
}

/// Foreground terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum AnsiColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    /// Escape code that resets all attributes
    pub const RESET: &'static str = "\x1b[0m";

    /// Escape code that switches the foreground to this color
    pub const fn escape_code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }
}

/// Colors used for consecutive positions inside of a period
pub const PALETTE: [AnsiColor; 7] = [
    AnsiColor::Red,
    AnsiColor::Green,
    AnsiColor::Yellow,
    AnsiColor::Blue,
    AnsiColor::Magenta,
    AnsiColor::Cyan,
    AnsiColor::White,
];

/// Pick a color for `index`, cycling through the palette.
///
/// # Examples
///
/// ```
/// use grundy::report::{palette_color, AnsiColor, PALETTE};
///
/// assert_eq!(palette_color(&PALETTE, 1), Some(AnsiColor::Green));
/// assert_eq!(palette_color(&PALETTE, 8), Some(AnsiColor::Green));
/// assert_eq!(palette_color(&[], 8), None);
/// ```
pub fn palette_color(palette: &[AnsiColor], index: usize) -> Option<AnsiColor> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[index % palette.len()])
}

/// `num_periods` consecutive periods of a sequence starting at the pre-period, one element per
/// line as `[index] value`. Elements past the end of the sequence are skipped.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a, T> {
    values: &'a [T],
    start: usize,
    period: usize,
    num_periods: usize,
    mode: OutputMode,
}

impl<'a, T> Segment<'a, T>
where
    T: Copy + Into<i64>,
{
    /// Create new segment. Period of zero is treated as one.
    pub fn new(
        values: &'a [T],
        start: usize,
        period: usize,
        num_periods: usize,
        mode: OutputMode,
    ) -> Self {
        Segment {
            values,
            start,
            period: period.max(1),
            num_periods,
            mode,
        }
    }

    /// Range of rendered positions
    pub fn positions(&self) -> std::ops::Range<usize> {
        let end = self
            .start
            .saturating_add(self.num_periods.saturating_mul(self.period).saturating_add(1))
            .min(self.values.len());
        self.start.min(end)..end
    }
}

impl<T> Display for Segment<'_, T>
where
    T: Copy + Into<i64>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in self.positions() {
            let value: i64 = self.values[i].into();
            match self.mode {
                OutputMode::Plain => writeln!(f, "[{}] {}", i, value)?,
                OutputMode::Colored => {
                    let color = palette_color(&PALETTE, (i - self.start) % self.period)
                        .map_or("", AnsiColor::escape_code);
                    writeln!(f, "{}[{}] {}{}", color, i, value, AnsiColor::RESET)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segment() {
        let values = [0_u32, 0, 1, 1, 0, 0, 1, 1, 0];
        let segment = Segment::new(&values, 1, 2, 2, OutputMode::Plain);
        assert_eq!(segment.positions(), 1..6);
        assert_eq!(segment.to_string(), "[1] 0\n[2] 1\n[3] 1\n[4] 0\n[5] 0\n");
    }

    #[test]
    fn segment_is_clamped() {
        let values = [0_u32, 1, 0];
        let segment = Segment::new(&values, 1, 1, 3, OutputMode::Plain);
        assert_eq!(segment.positions(), 1..3);

        let segment = Segment::new(&values, 7, 1, 3, OutputMode::Plain);
        assert_eq!(segment.to_string(), "");
    }

    #[test]
    fn many_periods_are_clamped() {
        let values = [0_u32, 1, 0, 1, 0];
        let segment = Segment::new(&values, 0, 2, usize::MAX, OutputMode::Plain);
        assert_eq!(segment.positions(), 0..5);
    }

    #[test]
    fn colors_cycle_with_period() {
        let values = [5_u32, 6, 5, 6];
        let segment = Segment::new(&values, 0, 2, 1, OutputMode::Colored);
        assert_eq!(
            segment.to_string(),
            "\x1b[31m[0] 5\x1b[0m\n\x1b[32m[1] 6\x1b[0m\n\x1b[31m[2] 5\x1b[0m\n"
        );
    }

    #[test]
    fn long_periods_reuse_palette() {
        let values = (0..10_u32).collect::<Vec<_>>();
        let segment = Segment::new(&values, 0, 9, 1, OutputMode::Colored);
        let lines = segment.to_string();
        let lines = lines.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 10);
        assert!(lines[7].starts_with(AnsiColor::Red.escape_code()));
        assert!(lines[9].starts_with(AnsiColor::Red.escape_code()));
    }
}
