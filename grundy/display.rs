//! Display utilities shared by rulesets and sequences

use std::fmt::{self, Display, Write};

/// Write `xs` separated by `", "`
pub fn commas(w: &mut impl Write, xs: &[impl Display]) -> fmt::Result {
    let mut xs = xs.iter();
    if let Some(first) = xs.next() {
        write!(w, "{}", first)?;
    }
    for x in xs {
        write!(w, ", {}", x)?;
    }
    Ok(())
}

fn delimited<W>(
    w: &mut W,
    open: char,
    close: char,
    middle: impl FnOnce(&mut W) -> fmt::Result,
) -> fmt::Result
where
    W: Write,
{
    w.write_char(open)?;
    middle(w)?;
    w.write_char(close)
}

pub fn parens<W>(w: &mut W, middle: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write,
{
    delimited(w, '(', ')', middle)
}

pub fn brackets<W>(w: &mut W, middle: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write,
{
    delimited(w, '[', ']', middle)
}

#[test]
fn formats_lists() {
    struct Sample(Vec<u32>);

    impl Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            parens(f, |f| commas(f, &self.0))?;
            brackets(f, |f| commas(f, &self.0[..1]))
        }
    }

    assert_eq!(Sample(vec![2, 3]).to_string(), "(2, 3)[2]");
    assert_eq!(Sample(vec![7]).to_string(), "(7)[7]");
}
