//! 3x3 cube model, move engine, scrambler and bounded solver, with a cross trainer
//! on top.

pub mod config;
pub mod cube;
pub mod error;
pub mod geometry;
pub mod goal;
pub mod moves;
pub mod practice;
pub mod scramble;
pub mod solver;

pub use config::Config;
pub use cube::{CubeState, Piece};
pub use error::{ConfigError, InvariantError, ParseModeError, ParseMoveError, StatsError};
pub use geometry::{Color, Face, Position};
pub use moves::{ALL_MOVES, Move, Variant, format_formula, parse_formula};
pub use scramble::Scramble;
pub use solver::{SearchStats, Solution, SolveMode, Solver};



pub fn apply_move(state: &CubeState, move_: Move) -> CubeState {
	state.apply(move_)
}

/// A scramble of the default length for `mode`, from the thread-local RNG.
pub fn scramble(mode: SolveMode) -> Scramble {
	let length = config::ScrambleConfig::default().length(mode);
	scramble::scramble_with_rng(mode, length, &mut rand::rng())
}

/// Solves with the default depth bound for `mode`.
pub fn solve(state: &CubeState, mode: SolveMode) -> Solution {
	Solver::new(mode, &config::SolverConfig::default()).solve(state)
}
