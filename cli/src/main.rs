use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use minesweeper_alpha_core::*;

mod banner;
mod game;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Seed file describing the mine field
    #[arg(required_unless_present = "generate")]
    seed_file: Option<PathBuf>,

    /// Which cells must be revealed to win
    #[arg(long, value_enum, default_value_t = WinRuleArg::AllCells)]
    win_rule: WinRuleArg,

    /// Print a random seed of the given size instead of playing
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_size)]
    generate: Option<Coord2>,

    /// Mines to place with --generate
    #[arg(long, default_value_t = 10, requires = "generate")]
    mines: CellCount,

    /// Force a seed instead of random, for --generate
    #[arg(short, long, requires = "generate")]
    seed: Option<u64>,

    /// Write the generated seed as JSON
    #[arg(long, requires = "generate")]
    json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum WinRuleArg {
    /// Every cell revealed, mines included
    AllCells,
    /// Every safe cell revealed
    SafeCells,
    /// Every safe cell revealed and every mine marked
    MinesMarked,
}

impl From<WinRuleArg> for WinRule {
    fn from(arg: WinRuleArg) -> Self {
        match arg {
            WinRuleArg::AllCells => WinRule::AllCellsRevealed,
            WinRuleArg::SafeCells => WinRule::SafeCellsRevealed,
            WinRuleArg::MinesMarked => WinRule::MinesMarkedRestRevealed,
        }
    }
}

fn parse_size(text: &str) -> std::result::Result<Coord2, String> {
    let (rows, cols) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got {text:?}"))?;
    let rows: Coord = rows.trim().parse().map_err(|err| format!("rows: {err}"))?;
    let cols: Coord = cols.trim().parse().map_err(|err| format!("cols: {err}"))?;
    Ok((rows, cols))
}

/// Why the game could not be set up; each maps to its own exit code.
enum SetupFailure {
    Value,
    Format,
}

impl SetupFailure {
    fn exit_code(self) -> ExitCode {
        match self {
            Self::Value => ExitCode::from(3),
            Self::Format => ExitCode::from(1),
        }
    }
}

fn load_engine(
    path: &Path,
    win_rule: WinRule,
) -> Result<std::result::Result<MinefieldEngine, SetupFailure>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read seed file {}", path.display()))?;

    let seed = match Seed::parse(&text) {
        Ok(seed) => seed,
        Err(err) => {
            log::debug!("seed parse error: {err}");
            return Ok(Err(if err.is_value_error() {
                SetupFailure::Value
            } else {
                SetupFailure::Format
            }));
        }
    };

    Ok(match MinefieldEngine::from_seed(&seed) {
        Ok(engine) => Ok(engine.with_win_rule(win_rule)),
        Err(err) => {
            log::debug!("seed rejected: {err}");
            Err(if err.is_value_error() {
                SetupFailure::Value
            } else {
                SetupFailure::Format
            })
        }
    })
}

fn generate(args: &Args, size: Coord2) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    });
    log::debug!("seed: {seed}");

    let field = RandomSeedGenerator::new(seed).generate(FieldConfig::new(size, args.mines));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&field)?);
    } else {
        print!("{field}");
    }
    Ok(())
}

fn run(args: Args) -> Result<ExitCode> {
    if let Some(size) = args.generate {
        generate(&args, size)?;
        return Ok(ExitCode::SUCCESS);
    }

    let path = args
        .seed_file
        .context("A seed file is required unless --generate is given")?;

    let mut engine = match load_engine(&path, args.win_rule.into())? {
        Ok(engine) => engine,
        Err(SetupFailure::Value) => {
            println!();
            println!(
                "Seedfile Value Error: Cannot create a mine field with that many rows and/or columns!"
            );
            return Ok(SetupFailure::Value.exit_code());
        }
        Err(failure) => {
            println!(
                "Seedfile Format Error: Cannot create game with {}, because it is not formatted correctly.",
                path.display()
            );
            return Ok(failure.exit_code());
        }
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let ending = game::play(&mut engine, stdin.lock(), &mut stdout)?;
    log::info!(
        "Game over: {ending:?} after {} rounds",
        engine.rounds_completed()
    );

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
