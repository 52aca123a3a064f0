use crate::{
    commands::common::{Game, Ruleset},
    io::recreate_dir,
};
use anyhow::{Context, Result, bail};
use clap::{self, Parser, ValueEnum};
use grundy::{
    drawing::{Draw, svg, tiny_skia},
    period::{ArithmeticPeriod, PurePeriod},
    plot::SegmentPlot,
    report::{OutputMode, Segment},
    sequence::GrundySequence,
};
use serde::Serialize;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GameSelection {
    Subtraction,
    AllBut,
    Both,
}

impl GameSelection {
    fn games(self) -> &'static [Game] {
        match self {
            GameSelection::Subtraction => &[Game::Subtraction],
            GameSelection::AllBut => &[Game::AllBut],
            GameSelection::Both => &[Game::Subtraction, Game::AllBut],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Colors {
    Plain,
    Colored,
}

impl From<Colors> for OutputMode {
    fn from(colors: Colors) -> OutputMode {
        match colors {
            Colors::Plain => OutputMode::Plain,
            Colors::Colored => OutputMode::Colored,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlotFormat {
    Png,
    Svg,
    None,
}

impl PlotFormat {
    const fn extension(self) -> Option<&'static str> {
        match self {
            PlotFormat::Png => Some("png"),
            PlotFormat::Svg => Some("svg"),
            PlotFormat::None => None,
        }
    }
}

/// Compute Grundy values of subtraction and all-but games and look for their periods.
#[derive(Parser, Debug, Clone)]
pub struct Args {
    /// Comma separated set S: allowed moves in the subtraction game, disallowed in the all-but
    /// game
    #[arg(long, num_args = 1.., value_delimiter = ',', default_values_t = vec![2, 3])]
    moves: Vec<u32>,

    /// Compute Grundy values up to this position
    #[arg(long, default_value_t = 1000, allow_hyphen_values = true)]
    n: i64,

    /// Number of consecutive periods to print and plot
    #[arg(long, default_value_t = 3)]
    num_periods: usize,

    /// Maximum period candidate to check. Defaults to half of the sequence length
    #[arg(long)]
    max_period: Option<usize>,

    #[arg(long, value_enum, default_value_t = GameSelection::Both)]
    game: GameSelection,

    /// Directory for plots, wiped and recreated on each run
    #[arg(long, default_value = "out")]
    output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Colors::Colored)]
    output_mode: Colors,

    #[arg(long, value_enum, default_value_t = PlotFormat::Png)]
    plot_format: PlotFormat,

    /// Print one JSON report per game instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct Report {
    ruleset: String,
    sequence_length: usize,
    max_period: usize,
    pure: Option<PurePeriod>,
    arithmetic: Option<ArithmeticPeriod>,
}

#[derive(Debug)]
struct Analysis {
    game: Game,
    ruleset: Ruleset,
    sequence: GrundySequence,
    max_period: usize,
    pure: Option<PurePeriod>,
    arithmetic: Option<ArithmeticPeriod>,
}

impl Analysis {
    fn new(game: Game, ruleset: Ruleset, max_n: i64, max_period: Option<usize>) -> Result<Self> {
        let sequence = GrundySequence::try_build(&ruleset, max_n)?;
        let max_period =
            max_period.unwrap_or_else(|| grundy::period::default_max_period(sequence.len()));

        // Both searches are independent and reported separately
        let pure = sequence.pure_period(Some(max_period));
        let arithmetic = sequence.arithmetic_period(Some(max_period));
        log::info!("{ruleset}: pure {pure:?}, arithmetic {arithmetic:?}");

        Ok(Analysis {
            game,
            ruleset,
            sequence,
            max_period,
            pure,
            arithmetic,
        })
    }

    fn report(&self) -> Report {
        Report {
            ruleset: self.ruleset.to_string(),
            sequence_length: self.sequence.len(),
            max_period: self.max_period,
            pure: self.pure,
            arithmetic: self.arithmetic,
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    if args.moves.is_empty() {
        bail!("Move set cannot be empty. Use --moves a,b,... to specify it.");
    }
    if args.n < 0 {
        bail!("Sequence bound must be non-negative, got --n {}", args.n);
    }

    let games = args.game.games();
    let rulesets = games
        .iter()
        .map(|game| game.ruleset(&args.moves))
        .collect::<Result<Vec<_>>>()?;

    // Only touch the output directory once the input is known to be valid
    recreate_dir(&args.output_dir).context(format!(
        "Could not recreate output directory '{}'",
        args.output_dir.display()
    ))?;

    let analyses = match (games, rulesets.as_slice()) {
        ([first_game, second_game], [first, second]) => {
            let (first, second) = rayon::join(
                || Analysis::new(*first_game, first.clone(), args.n, args.max_period),
                || Analysis::new(*second_game, second.clone(), args.n, args.max_period),
            );
            vec![first?, second?]
        }
        _ => games
            .iter()
            .zip(rulesets.iter())
            .map(|(game, ruleset)| Analysis::new(*game, ruleset.clone(), args.n, args.max_period))
            .collect::<Result<Vec<_>>>()?,
    };

    for (idx, analysis) in analyses.iter().enumerate() {
        let mut stdout = std::io::stdout();
        if args.json {
            writeln!(stdout, "{}", serde_json::to_string(&analysis.report())?)?;
        } else {
            if idx != 0 {
                writeln!(stdout, "{}", "---".repeat(10))?;
            }
            print_analysis(&mut stdout, analysis, &args)?;
        }
        write_plots(analysis, &args)?;
    }

    Ok(())
}

fn print_analysis<W>(w: &mut W, analysis: &Analysis, args: &Args) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        w,
        "Analyzing {}: up to n = {}",
        analysis.ruleset,
        analysis.sequence.max_position()
    )?;
    write_witnesses(
        w,
        analysis.sequence.values(),
        analysis.pure,
        analysis.arithmetic,
        args.num_periods,
        OutputMode::from(args.output_mode),
    )
}

/// Print every witness followed by its own segment of the sequence
fn write_witnesses<W, T>(
    w: &mut W,
    values: &[T],
    pure: Option<PurePeriod>,
    arithmetic: Option<ArithmeticPeriod>,
    num_periods: usize,
    mode: OutputMode,
) -> io::Result<()>
where
    W: Write,
    T: Copy + Into<i64>,
{
    match pure {
        Some(pure) => {
            writeln!(w, "[Pure Periodicity] Found: {pure}")?;
            write!(
                w,
                "{}",
                Segment::new(values, pure.pre_period, pure.period, num_periods, mode)
            )?;
        }
        None => writeln!(w, "[Pure Periodicity] No period found in the naive search range.")?,
    }

    match arithmetic {
        Some(arith) => {
            writeln!(w, "[Arithmetic Periodicity] Found: {arith}")?;
            write!(
                w,
                "{}",
                Segment::new(values, arith.pre_period, arith.period, num_periods, mode)
            )?;
        }
        None => writeln!(
            w,
            "[Arithmetic Periodicity] No arithmetic period found in the naive search range."
        )?,
    }

    Ok(())
}

fn write_plots(analysis: &Analysis, args: &Args) -> Result<()> {
    let Some(extension) = args.plot_format.extension() else {
        return Ok(());
    };
    let values = analysis.sequence.values();
    let prefix = analysis.game.file_prefix();

    if let Some(pure) = analysis.pure {
        let plot = SegmentPlot::new(
            values,
            pure.pre_period,
            pure.period,
            args.num_periods,
            format!("{}, pure p={}", analysis.ruleset, pure.period),
        );
        let path = args.output_dir.join(format!("{prefix}_pure.{extension}"));
        write_plot(&plot, args.plot_format, &path, args.json)?;
    }

    if let Some(arith) = analysis.arithmetic {
        let plot = SegmentPlot::new(
            values,
            arith.pre_period,
            arith.period,
            args.num_periods,
            format!(
                "{}, arith p={} d={}",
                analysis.ruleset, arith.period, arith.saltus
            ),
        );
        let path = args.output_dir.join(format!("{prefix}_arith.{extension}"));
        write_plot(&plot, args.plot_format, &path, args.json)?;
    }

    Ok(())
}

fn write_plot<P>(plot: &P, format: PlotFormat, path: &Path, quiet: bool) -> Result<()>
where
    P: Draw,
{
    let bytes = match format {
        PlotFormat::Svg => {
            let mut canvas = svg::Canvas::new(plot.required_canvas::<svg::Canvas>());
            plot.draw(&mut canvas);
            canvas.to_svg().into_bytes()
        }
        PlotFormat::Png => {
            let mut canvas = tiny_skia::Canvas::new(plot.required_canvas::<tiny_skia::Canvas>())?;
            plot.draw(&mut canvas);
            canvas.to_png()?
        }
        PlotFormat::None => return Ok(()),
    };

    std::fs::write(path, bytes).context(format!("Could not write to file '{}'", path.display()))?;
    log::debug!("Wrote {}", path.display());
    if !quiet {
        println!("Plot saved to {}", path.display());
    }
    Ok(())
}
