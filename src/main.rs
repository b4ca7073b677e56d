//! Dropblox command line runner (default binary).
//!
//! Scores a solution against a puzzle the way the puzzle's evaluator does:
//! parse both files, replay the drops, print the resulting field and score.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, warn};

use dropblox::core::evaluate;
use dropblox::format::{read_puzzle_file, read_solution_file, write_solution_file, ScoreReport};
use dropblox::term::{print_field, render_block_text, ColorMode};
use dropblox::{logger, Config};

#[derive(Parser, Debug)]
#[command(name = "dropblox", version, about = "Replay and score block-drop puzzle solutions")]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Render mode: emoji | ansi | plain (overrides DROPBLOX_RENDER)
    #[arg(long, global = true, value_name = "MODE")]
    render: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a solution onto a puzzle and print the score
    Score {
        puzzle: PathBuf,
        solution: PathBuf,

        /// Print a JSON report instead of the rendered field
        #[arg(long)]
        json: bool,

        /// Write the replayed drop history to this file
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Render the empty field of a puzzle
    Show {
        puzzle: PathBuf,

        /// Also render every block
        #[arg(long)]
        blocks: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from_env().with_verbosity(args.verbose);

    if logger::init(config.log_level).is_err() {
        eprintln!("[dropblox] logger already installed");
    }

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, config: Config) -> Result<()> {
    let mode = match args.render.as_deref() {
        Some(name) => ColorMode::from_str(name)
            .with_context(|| format!("unknown render mode {:?} (expected emoji, ansi or plain)", name))?,
        None => config.render,
    };

    match args.command {
        Command::Score {
            puzzle,
            solution,
            json,
            out,
        } => score(&puzzle, &solution, json, out.as_deref(), mode),
        Command::Show { puzzle, blocks } => show(&puzzle, blocks, mode),
    }
}

fn score(
    puzzle_path: &std::path::Path,
    solution_path: &std::path::Path,
    json: bool,
    out: Option<&std::path::Path>,
    mode: ColorMode,
) -> Result<()> {
    let mut puzzle = read_puzzle_file(puzzle_path)?;
    let solution = read_solution_file(solution_path)?;

    let result = evaluate(&mut puzzle.field, &puzzle.blocks, &solution, &puzzle.rewards);

    if let Some(out) = out {
        write_solution_file(out, &puzzle.field.drop_history())?;
    }

    match result {
        Ok(evaluation) => {
            if json {
                println!("{}", ScoreReport::from_evaluation(&evaluation, &puzzle.field).to_json_pretty()?);
            } else {
                print_field(&puzzle.field, mode)?;
                println!("Score: {}", evaluation.score);
            }
            Ok(())
        }
        Err(e) => {
            if json {
                println!("{}", ScoreReport::from_failure(&e, &puzzle.field).to_json_pretty()?);
            } else {
                warn!("replay stopped after {} drops", puzzle.field.dropped_ids().len());
                print_field(&puzzle.field, mode)?;
            }
            Err(e).with_context(|| format!("replaying {}", solution_path.display()))
        }
    }
}

fn show(puzzle_path: &std::path::Path, blocks: bool, mode: ColorMode) -> Result<()> {
    let puzzle = read_puzzle_file(puzzle_path)?;

    println!(
        "Field {}x{}, {} blocks, {} rewards",
        puzzle.field.width(),
        puzzle.field.height(),
        puzzle.blocks.len(),
        puzzle.rewards.len()
    );
    print_field(&puzzle.field, mode)?;

    if blocks {
        for block in &puzzle.blocks {
            println!(
                "#{} {}x{} {} ({}), {} cells",
                block.id(),
                block.width(),
                block.height(),
                block.color(),
                block.color().name(),
                block.filled_cells()
            );
            print!("{}", render_block_text(block, mode));
        }
    }
    Ok(())
}
