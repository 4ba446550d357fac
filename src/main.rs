//! Terminal front end: scramble, apply, solve and the cross quiz.

use std::{
	io::{self, BufRead, Write},
	path::{Path, PathBuf},
	process::ExitCode,
	time::Instant,
};

use clap::{ArgAction, Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info, warn};
use thiserror::Error;

use cross_trainer::{
	Config, ConfigError, CubeState, ParseMoveError, SearchStats, Solution, SolveMode, Solver, StatsError,
	format_formula, parse_formula,
	practice::{PracticeRound, Statistics},
	scramble::scramble_with_rng,
};



#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
	/// Configuration file, in TOML format.
	#[arg(long, short = 'c', value_name = "CONFIG")]
	config: Option<PathBuf>,

	/// Increase logging verbosity (can be repeated)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print a random scramble and the state it leads to.
	Scramble {
		#[arg(long, short, default_value_t = SolveMode::Normal)]
		mode: SolveMode,
	},
	/// Apply a formula to the solved cube and print the result.
	Apply {
		/// The formula, e.g. "R U' F2".
		formula: String,
		#[arg(long, short, default_value_t = SolveMode::Normal)]
		mode: SolveMode,
	},
	/// Apply a formula to the solved cube and search for the shortest way back.
	Solve {
		/// The formula, e.g. "R U' F2".
		formula: String,
		#[arg(long, short, default_value_t = SolveMode::Normal)]
		mode: SolveMode,
		/// Overrides the configured depth bound.
		#[arg(long)]
		max_depth: Option<usize>,
		/// Overrides the configured number of parallel chunks.
		#[arg(long)]
		cores_n: Option<usize>,
	},
	/// Guess how many moves cross scrambles need.
	Practice {
		/// Stop after this many answered rounds.
		#[arg(long, short)]
		rounds: Option<usize>,
		/// Attempt history file; overrides the configured one.
		#[arg(long)]
		stats: Option<PathBuf>,
	},
	/// Summarize the attempt history.
	Stats {
		#[arg(long)]
		stats: Option<PathBuf>,
	},
}

#[derive(Debug, Error)]
enum CliError {
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error(transparent)]
	Stats(#[from] StatsError),
	#[error(transparent)]
	Formula(#[from] ParseMoveError),
	#[error("terminal i/o failed: {0}")]
	Io(#[from] io::Error),
}



fn main() -> ExitCode {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(match cli.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		})
		.format_timestamp(Some(TimestampPrecision::Millis))
		.init();

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("error: {e}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: Cli) -> Result<(), CliError> {
	let config = match &cli.config {
		Some(path) => Config::load(path)?,
		None => Config::default(),
	};
	info!("config: {config:?}");

	match cli.command {
		Commands::Scramble { mode } => {
			let length = config.scramble.length(mode);
			let scramble = scramble_with_rng(mode, length, &mut rand::rng());
			println!("{}", scramble.formula);
			println!();
			print!("{}", scramble.state);
		}
		Commands::Apply { formula, mode } => {
			let state = mode.initial_state().apply_all(&parse_formula(&formula)?);
			print!("{state}");
		}
		Commands::Solve { formula, mode, max_depth, cores_n } => {
			let state = mode.initial_state().apply_all(&parse_formula(&formula)?);
			let mut solver = Solver::new(mode, &config.solver);
			if let Some(max_depth) = max_depth {
				solver = solver.with_max_depth(max_depth);
			}
			if let Some(cores_n) = cores_n {
				solver = solver.with_cores_n(cores_n);
			}
			run_solve(&solver, &state);
		}
		Commands::Practice { rounds, stats } => {
			let path = stats.unwrap_or_else(|| config.practice.stats_file.clone());
			run_practice(&config, &path, rounds)?;
		}
		Commands::Stats { stats } => {
			let path = stats.unwrap_or(config.practice.stats_file);
			print_summary(&Statistics::load(&path)?);
		}
	}
	Ok(())
}

fn run_solve(solver: &Solver, state: &CubeState) {
	print!("{state}");
	println!();
	let mut stats = SearchStats::default();
	match solver.solve_with_stats(state, &mut stats) {
		Solution::AlreadySolved => println!("already solved"),
		Solution::Found(moves) => println!("{} ({} moves)", format_formula(&moves), moves.len()),
		Solution::NotFound { depth } => println!("no solution within {depth} moves"),
	}
	println!(
		"generated: {}, pruned: {}, elapsed: {:?}",
		stats.generated,
		stats.pruned_hidden_face + stats.pruned_same_face + stats.pruned_opposite_face,
		stats.elapsed,
	);
}

fn run_practice(config: &Config, path: &Path, rounds: Option<usize>) -> Result<(), CliError> {
	let mut statistics = Statistics::load(path)?;
	let mut rng = rand::rng();
	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();
	let mut answered_n = 0;

	while rounds.is_none_or(|rounds| answered_n < rounds) {
		let round = PracticeRound::new(config, &mut rng);
		if round.actual_length().is_none() {
			warn!("skipping \"{}\": no cross solution within the depth bound", round.scramble.formula);
			continue;
		}
		println!("{}", "-".repeat(42));
		println!("scramble: {}", round.scramble.formula);
		println!();
		print!("{}", round.scramble.state);

		let time_begin = Instant::now();
		let Some(guess) = read_guess(&mut lines)? else {
			break
		};
		let time_spent = time_begin.elapsed();

		let Some(attempt) = round.attempt(statistics.next_id(), guess, time_spent) else {
			continue;
		};
		if attempt.is_correct {
			println!("correct: {}", round.solution.formula());
		} else {
			println!("wrong, it takes {}: {}", attempt.actual_length, round.solution.formula());
		}
		statistics.record(attempt);
		statistics.save(path)?;
		answered_n += 1;
		println!(
			"last 5: {:.0}%, last 12: {:.0}%, last 100: {:.0}%",
			statistics.last5_rate, statistics.last12_rate, statistics.last100_rate,
		);
	}
	Ok(())
}

/// `None` on end of input.
fn read_guess(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<usize>, CliError> {
	loop {
		print!("moves to solve the cross? ");
		io::stdout().flush()?;
		let Some(line) = lines.next().transpose()? else {
			println!();
			return Ok(None);
		};
		match line.trim().parse() {
			Ok(guess) => return Ok(Some(guess)),
			Err(_) => println!("expected a number of moves, got {:?}", line.trim()),
		}
	}
}

fn print_summary(statistics: &Statistics) {
	let attempts = &statistics.attempts;
	let correct_n = attempts.iter().filter(|a| a.is_correct).count();
	println!("attempts: {} ({correct_n} correct)", attempts.len());
	println!("last 5 success rate: {:.1}%", statistics.last5_rate);
	println!("last 12 success rate: {:.1}%", statistics.last12_rate);
	println!("last 100 success rate: {:.1}%", statistics.last100_rate);
	println!("last 12 average time: {:.1}s", statistics.last12_avg_time / 1000.0);
	for attempt in attempts.iter().rev().take(5) {
		println!(
			"#{}: guessed {}, actual {} ({:.1}s) {}",
			attempt.id,
			attempt.user_guess,
			attempt.actual_length,
			attempt.time_spent_ms as f64 / 1000.0,
			attempt.scramble_formula,
		);
	}
}
