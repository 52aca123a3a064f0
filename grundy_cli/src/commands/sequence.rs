use crate::{commands::common::Game, io::FileOrStdout};
use anyhow::{Context, Result};
use clap::{self, Parser};
use grundy::sequence::GrundySequence;
use itertools::Itertools;
use std::io::{BufWriter, Write};

/// Print Grundy values `G(0), ..., G(n)` of a single game.
#[derive(Parser, Debug, Clone)]
pub struct Args {
    /// Comma separated set S
    #[arg(long, num_args = 1.., value_delimiter = ',', default_values_t = vec![2, 3])]
    moves: Vec<u32>,

    /// Largest position
    #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
    n: i64,

    #[arg(long, value_enum, default_value_t = Game::Subtraction)]
    game: Game,

    /// Print values in nimber notation (`0`, `*`, `*2`, ...)
    #[arg(long)]
    nimbers: bool,

    /// Output path, `-` for stdout
    #[arg(long, default_value = "-")]
    output: FileOrStdout,
}

pub fn run(args: Args) -> Result<()> {
    let ruleset = args.game.ruleset(&args.moves)?;
    let sequence = GrundySequence::try_build(&ruleset, args.n)?;

    let line = if args.nimbers {
        sequence.to_string()
    } else {
        sequence.values().iter().map(|g| g.value()).join(", ")
    };

    let mut w = BufWriter::new(
        args.output
            .create()
            .context(format!("Could not create file '{}'", args.output))?,
    );
    writeln!(w, "{}", line).context(format!("Could not write to file '{}'", args.output))?;
    w.flush()
        .context(format!("Could not write to file '{}'", args.output))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_values() {
        let path = std::env::temp_dir().join(format!("grundy-cli-sequence-{}", std::process::id()));
        let path_arg = path.to_string_lossy().to_string();
        let args = Args::parse_from([
            "sequence",
            "--moves",
            "1,2",
            "--n",
            "6",
            "--output",
            path_arg.as_str(),
        ]);
        run(args).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "0, 1, 2, 0, 1, 2, 0\n"
        );
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejects_negative_bound() {
        let args = Args::parse_from(["sequence", "--n", "-1"]);
        assert!(run(args).is_err());
    }
}
