//! Random-walk scrambles.

use log::trace;
use rand::Rng;

use crate::{
	cube::CubeState,
	moves::{ALL_MOVES, Move, format_formula},
	solver::SolveMode,
};



#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
	pub state: CubeState,
	pub moves: Vec<Move>,
	pub formula: String,
}

/// Walks `length` random moves away from `mode`'s solved state.
///
/// A move is rejected if it turns the same face as either of the two moves
/// before it, whatever the variants. This is stricter than the solver's
/// pruning, which allows `X Y X` when `Y` is not opposite `X`.
pub fn scramble_with_rng<R: Rng + ?Sized>(mode: SolveMode, length: usize, rng: &mut R) -> Scramble {
	let mut moves: Vec<Move> = Vec::with_capacity(length);
	let mut state = mode.initial_state();
	for _ in 0..length {
		let move_ = shuffle_once(&moves, rng);
		trace!("scramble draw {}: {move_}", moves.len());
		state = state.apply(move_);
		moves.push(move_);
	}
	let formula = format_formula(&moves);
	Scramble { state, moves, formula }
}

fn shuffle_once<R: Rng + ?Sized>(previous: &[Move], rng: &mut R) -> Move {
	let recent: Vec<_> = previous.iter().rev().take(2).map(|m| m.face).collect();
	// at most two faces are excluded, leaving at least 12 candidates
	let candidates: Vec<Move> = ALL_MOVES.into_iter()
		.filter(|m| !recent.contains(&m.face))
		.collect();
	candidates[rng.random_range(0..candidates.len())]
}



#[cfg(test)]
mod tests {
	use super::*;
	use rand::{SeedableRng, rngs::StdRng};

	#[test]
	fn length_and_formula() {
		let mut rng = StdRng::seed_from_u64(42);
		let scramble = scramble_with_rng(SolveMode::Normal, 20, &mut rng);
		assert_eq!(20, scramble.moves.len());
		assert_eq!(format_formula(&scramble.moves), scramble.formula);
		assert_eq!(20, scramble.formula.split(' ').count());
		assert_eq!(CubeState::new().apply_all(&scramble.moves), scramble.state);
	}

	#[test]
	fn cross_scramble_starts_masked() {
		let mut rng = StdRng::seed_from_u64(7);
		let scramble = scramble_with_rng(SolveMode::Cross, 4, &mut rng);
		assert_eq!(4, scramble.moves.len());
		assert_eq!(CubeState::new_cross().apply_all(&scramble.moves), scramble.state);
		assert_eq!(Ok(()), scramble.state.check_invariants());
	}

	#[test]
	fn no_face_repeats_within_three_moves() {
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..200 {
			let scramble = scramble_with_rng(SolveMode::Normal, 20, &mut rng);
			for window in scramble.moves.windows(2) {
				assert_ne!(window[0].face, window[1].face, "{}", scramble.formula);
			}
			for window in scramble.moves.windows(3) {
				assert_ne!(window[0].face, window[2].face, "{}", scramble.formula);
			}
		}
	}

	#[test]
	fn zero_length() {
		let mut rng = StdRng::seed_from_u64(0);
		let scramble = scramble_with_rng(SolveMode::Normal, 0, &mut rng);
		assert_eq!(CubeState::new(), scramble.state);
		assert_eq!("", scramble.formula);
	}

	#[test]
	fn same_seed_same_scramble() {
		let a = scramble_with_rng(SolveMode::Normal, 20, &mut StdRng::seed_from_u64(99));
		let b = scramble_with_rng(SolveMode::Normal, 20, &mut StdRng::seed_from_u64(99));
		assert_eq!(a, b);
	}
}
