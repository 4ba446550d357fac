//! Bounded search for the shortest formula back to a goal.
//!
//! Ply `k` tries every canonical `k`-move sequence in [`ALL_MOVES`] order and
//! checks the goal on the last move, so the first hit is a shortest solution. Each
//! ply is walked depth-first from the start state, which keeps memory bounded by
//! the depth instead of by the number of sequences.

use std::{
	fmt,
	str::FromStr,
	time::{Duration, Instant},
};

use log::{debug, info};
use rayon::{iter::ParallelIterator, slice::ParallelSlice};

use crate::{
	config::SolverConfig,
	cube::CubeState,
	error::ParseModeError,
	geometry::{ALL_FACES, Face, Position},
	goal,
	moves::{ALL_MOVES, Move, format_formula},
};



#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolveMode {
	/// Restore the whole cube.
	#[default]
	Normal,
	/// Restore the bottom cross only.
	Cross,
}

impl SolveMode {
	/// The solved state as this mode presents it.
	pub fn initial_state(self) -> CubeState {
		match self {
			SolveMode::Normal => CubeState::new(),
			SolveMode::Cross => CubeState::new_cross(),
		}
	}

	pub fn is_goal(self, state: &CubeState) -> bool {
		match self {
			SolveMode::Normal => goal::is_solved(state),
			SolveMode::Cross => goal::is_cross_solved(state),
		}
	}

	/// Whether turning `face` can change anything this mode looks at. In cross
	/// mode a face none of whose edges shows a sticker only shuffles masked pieces.
	pub fn can_turn(self, state: &CubeState, face: Face) -> bool {
		match self {
			SolveMode::Normal => true,
			SolveMode::Cross => ALL_FACES.into_iter()
				.filter(|&side| side.axis() != face.axis())
				.map(|side| Position::edge_between(face, side))
				.any(|edge| !state.color_at(edge, face).is_hidden()),
		}
	}
}

impl fmt::Display for SolveMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SolveMode::Normal => write!(f, "normal"),
			SolveMode::Cross => write!(f, "cross"),
		}
	}
}

impl FromStr for SolveMode {
	type Err = ParseModeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"normal" => Ok(SolveMode::Normal),
			"cross" => Ok(SolveMode::Cross),
			_ => Err(ParseModeError(s.to_string())),
		}
	}
}



#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
	/// The start state already satisfies the goal.
	AlreadySolved,
	Found(Vec<Move>),
	/// Nothing within `depth` moves reaches the goal. Says nothing about deeper solutions.
	NotFound { depth: usize },
}

impl Solution {
	pub fn moves(&self) -> &[Move] {
		match self {
			Solution::Found(moves) => moves,
			Solution::AlreadySolved | Solution::NotFound { .. } => &[],
		}
	}

	/// Number of moves needed, if known.
	pub fn move_count(&self) -> Option<usize> {
		match self {
			Solution::AlreadySolved => Some(0),
			Solution::Found(moves) => Some(moves.len()),
			Solution::NotFound { .. } => None,
		}
	}

	pub const fn is_not_found(&self) -> bool {
		matches!(self, Solution::NotFound { .. })
	}

	/// Space separated tokens; empty unless a solution was found.
	pub fn formula(&self) -> String {
		format_formula(self.moves())
	}
}



/// Counters filled in by [`Solver::solve_with_stats`].
///
/// Every count is taken on the last move of each ply only, so the numbers are
/// those of a search that stores whole levels, whatever the walk revisits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
	/// States produced by applying a move.
	pub generated: u64,
	pub goal_checks: u64,
	pub pruned_hidden_face: u64,
	pub pruned_same_face: u64,
	pub pruned_opposite_face: u64,
	/// Number of sequences extended at each ply, starting with the empty one.
	pub frontier_sizes: Vec<usize>,
	pub elapsed: Duration,
}

impl SearchStats {
	/// Adds the counters of `other`; `frontier_sizes` and `elapsed` are left alone.
	fn merge_counters(&mut self, other: &SearchStats) {
		self.generated += other.generated;
		self.goal_checks += other.goal_checks;
		self.pruned_hidden_face += other.pruned_hidden_face;
		self.pruned_same_face += other.pruned_same_face;
		self.pruned_opposite_face += other.pruned_opposite_face;
	}

	fn count_prune(&mut self, prune: Prune) {
		match prune {
			Prune::HiddenFace => self.pruned_hidden_face += 1,
			Prune::SameFace => self.pruned_same_face += 1,
			Prune::OppositeFace => self.pruned_opposite_face += 1,
		}
	}
}



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prune {
	HiddenFace,
	SameFace,
	OppositeFace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
	mode: SolveMode,
	max_depth: usize,
	cores_n: usize,
}

impl Solver {
	pub fn new(mode: SolveMode, config: &SolverConfig) -> Self {
		Self {
			mode,
			max_depth: config.max_depth(mode),
			cores_n: config.cores_n.max(1),
		}
	}

	#[must_use]
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	#[must_use]
	pub fn with_cores_n(mut self, cores_n: usize) -> Self {
		self.cores_n = cores_n.max(1);
		self
	}

	pub const fn mode(&self) -> SolveMode {
		self.mode
	}

	pub const fn max_depth(&self) -> usize {
		self.max_depth
	}

	pub fn solve(&self, state: &CubeState) -> Solution {
		self.solve_with_stats(state, &mut SearchStats::default())
	}

	pub fn solve_with_stats(&self, state: &CubeState, stats: &mut SearchStats) -> Solution {
		let time_begin = Instant::now();
		let solution = self.search(state, stats);
		stats.elapsed = time_begin.elapsed();
		info!(
			"{} solve finished in {:?}: {} ({} states generated)",
			self.mode,
			stats.elapsed,
			match &solution {
				Solution::AlreadySolved => "already solved".to_string(),
				Solution::Found(moves) => format!("\"{}\"", format_formula(moves)),
				Solution::NotFound { depth } => format!("nothing within {depth} moves"),
			},
			stats.generated,
		);
		solution
	}

	fn search(&self, state: &CubeState, stats: &mut SearchStats) -> Solution {
		stats.goal_checks += 1;
		if self.mode.is_goal(state) {
			return Solution::AlreadySolved;
		}

		let mut frontier_n = 1;
		let mut path = Vec::with_capacity(self.max_depth);
		for ply in 1..=self.max_depth {
			debug!("ply: {ply}, frontier.len: {frontier_n}");
			stats.frontier_sizes.push(frontier_n);
			let generated_before = stats.generated;
			let found = if self.cores_n == 1 || ply == 1 {
				self.descend(state, &mut path, ply, stats)
			}
			else {
				self.descend_parallel(state, ply, stats)
			};
			if let Some(moves) = found {
				return Solution::Found(moves);
			}
			// no goal on this ply, so every generated state is extended on the next
			frontier_n = (stats.generated - generated_before) as usize;
			if frontier_n == 0 {
				break
			}
		}
		Solution::NotFound { depth: self.max_depth }
	}

	/// Tries every legal continuation of `path` up to exactly `depth` moves, in
	/// [`ALL_MOVES`] order, and returns the first one that reaches the goal.
	fn descend(&self, state: &CubeState, path: &mut Vec<Move>, depth: usize, stats: &mut SearchStats) -> Option<Vec<Move>> {
		let is_last = path.len() + 1 == depth;
		for move_ in ALL_MOVES {
			if let Some(prune) = self.prune(state, path, move_.face) {
				if is_last {
					stats.count_prune(prune);
				}
				continue;
			}
			let next = state.apply(move_);
			path.push(move_);
			let found = if is_last {
				stats.generated += 1;
				stats.goal_checks += 1;
				self.mode.is_goal(&next).then(|| path.clone())
			}
			else {
				self.descend(&next, path, depth, stats)
			};
			path.pop();
			if found.is_some() {
				return found;
			}
		}
		None
	}

	/// Same result as [`Solver::descend`] from the start state: the first moves are
	/// split into `cores_n` chunks, chunks are merged in order and the first one
	/// that reaches the goal wins.
	fn descend_parallel(&self, state: &CubeState, depth: usize, stats: &mut SearchStats) -> Option<Vec<Move>> {
		let firsts: Vec<(Move, CubeState)> = state.juxt()
			.into_iter()
			.filter(|(move_, _)| self.prune(state, &[], move_.face).is_none())
			.collect();
		let chunk_size = firsts.len().div_ceil(self.cores_n).max(1);
		let parts: Vec<(Option<Vec<Move>>, SearchStats)> = firsts
			.par_chunks(chunk_size)
			.map(|chunk| {
				let mut chunk_stats = SearchStats::default();
				let mut path = Vec::with_capacity(depth);
				let found = chunk.iter().find_map(|&(move_, next)| {
					path.clear();
					path.push(move_);
					self.descend(&next, &mut path, depth, &mut chunk_stats)
				});
				(found, chunk_stats)
			})
			.collect();
		for (found, chunk_stats) in parts {
			stats.merge_counters(&chunk_stats);
			if found.is_some() {
				return found;
			}
		}
		None
	}

	fn prune(&self, state: &CubeState, path: &[Move], face: Face) -> Option<Prune> {
		if !self.mode.can_turn(state, face) {
			return Some(Prune::HiddenFace);
		}
		match path {
			[.., last] if last.face == face => Some(Prune::SameFace),
			// X Y X with Y opposite X is the same as X2 Y or Y, already covered
			[.., two_back, last] if two_back.face == face && last.face.is_opposite(face) => Some(Prune::OppositeFace),
			_ => None,
		}
	}
}
