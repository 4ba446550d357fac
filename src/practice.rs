//! The cross quiz: how many moves does this cross need?
//!
//! Attempts are kept in a JSON file next to rolling success rates and the average
//! answer time.

use std::{
	fs,
	io::ErrorKind,
	path::Path,
	time::{Duration, SystemTime, UNIX_EPOCH},
};

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
	config::Config,
	error::StatsError,
	scramble::{Scramble, scramble_with_rng},
	solver::{SolveMode, Solution, Solver},
};



#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveAttempt {
	pub id: u64,
	/// Milliseconds since the Unix epoch.
	pub timestamp: u64,
	#[serde(rename = "timeSpent")]
	pub time_spent_ms: u64,
	pub is_correct: bool,
	pub user_guess: usize,
	pub actual_length: usize,
	pub scramble_formula: String,
	pub solution_formula: String,
}

/// Files that only carry `last12Rate` and `last12AvgTime` load too; every
/// aggregate is recomputed from `attempts` anyway.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistics {
	pub attempts: Vec<SolveAttempt>,
	pub last5_rate: f64,
	pub last12_rate: f64,
	pub last100_rate: f64,
	/// Milliseconds.
	pub last12_avg_time: f64,
}

/// Percentage of correct answers among the last `count` attempts. Attempts that
/// have not happened yet count as half right, so a fresh history sits at 50%.
pub fn success_rate(attempts: &[SolveAttempt], count: usize) -> f64 {
	if count == 0 {
		return 0.0;
	}
	let recent = &attempts[attempts.len().saturating_sub(count)..];
	let correct_n = recent.iter().filter(|a| a.is_correct).count();
	let missing_n = count - recent.len();
	(correct_n as f64 + missing_n as f64 * 0.5) / count as f64 * 100.0
}

/// Mean time in milliseconds over the last `count` attempts, 0 with no attempts.
pub fn average_time(attempts: &[SolveAttempt], count: usize) -> f64 {
	let recent = &attempts[attempts.len().saturating_sub(count)..];
	if recent.is_empty() {
		return 0.0;
	}
	let total: u64 = recent.iter().map(|a| a.time_spent_ms).sum();
	total as f64 / recent.len() as f64
}

impl Statistics {
	pub fn from_attempts(attempts: Vec<SolveAttempt>) -> Self {
		Self {
			last5_rate: success_rate(&attempts, 5),
			last12_rate: success_rate(&attempts, 12),
			last100_rate: success_rate(&attempts, 100),
			last12_avg_time: average_time(&attempts, 12),
			attempts,
		}
	}

	pub fn next_id(&self) -> u64 {
		self.attempts.last().map_or(1, |a| a.id + 1)
	}

	pub fn record(&mut self, attempt: SolveAttempt) {
		let mut attempts = std::mem::take(&mut self.attempts);
		attempts.push(attempt);
		*self = Self::from_attempts(attempts);
	}

	/// A missing file is an empty history.
	pub fn load(path: &Path) -> Result<Self, StatsError> {
		let text = match fs::read_to_string(path) {
			Ok(text) => text,
			Err(e) if e.kind() == ErrorKind::NotFound => {
				debug!("no statistics at {path:?}, starting fresh");
				return Ok(Self::from_attempts(vec![]));
			}
			Err(source) => return Err(StatsError::Io { path: path.to_path_buf(), source }),
		};
		let stored: Self = serde_json::from_str(&text)
			.map_err(|source| StatsError::Json { path: path.to_path_buf(), source })?;
		// aggregates are derived data, recompute rather than trust the file
		Ok(Self::from_attempts(stored.attempts))
	}

	pub fn save(&self, path: &Path) -> Result<(), StatsError> {
		let text = serde_json::to_string_pretty(self)
			.map_err(|source| StatsError::Json { path: path.to_path_buf(), source })?;
		fs::write(path, text).map_err(|source| StatsError::Io { path: path.to_path_buf(), source })
	}
}



/// One quiz question: a cross scramble and the solver's answer to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeRound {
	pub scramble: Scramble,
	pub solution: Solution,
}

impl PracticeRound {
	pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
		let mode = SolveMode::Cross;
		let scramble = scramble_with_rng(mode, config.scramble.length(mode), rng);
		let solution = Solver::new(mode, &config.solver).solve(&scramble.state);
		if solution.is_not_found() {
			warn!("no cross solution within the depth bound for \"{}\"", scramble.formula);
		}
		Self { scramble, solution }
	}

	/// `None` when the solver could not find an answer to compare against.
	pub fn actual_length(&self) -> Option<usize> {
		self.solution.move_count()
	}

	pub fn check(&self, guess: usize) -> Option<bool> {
		self.actual_length().map(|actual| actual == guess)
	}

	/// Builds the record for `guess`, or `None` when the round has no known answer.
	pub fn attempt(&self, id: u64, guess: usize, time_spent: Duration) -> Option<SolveAttempt> {
		let actual_length = self.actual_length()?;
		Some(SolveAttempt {
			id,
			timestamp: unix_millis(),
			time_spent_ms: time_spent.as_millis() as u64,
			is_correct: guess == actual_length,
			user_guess: guess,
			actual_length,
			scramble_formula: self.scramble.formula.clone(),
			solution_formula: self.solution.formula(),
		})
	}
}

fn unix_millis() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map_or(0, |d| d.as_millis() as u64)
}



#[cfg(test)]
mod tests {
	use super::*;
	use rand::{SeedableRng, rngs::StdRng};

	fn attempt(id: u64, is_correct: bool, time_spent_ms: u64) -> SolveAttempt {
		SolveAttempt {
			id,
			timestamp: 0,
			time_spent_ms,
			is_correct,
			user_guess: 3,
			actual_length: if is_correct { 3 } else { 4 },
			scramble_formula: "R U F' D".to_string(),
			solution_formula: "F R' D'".to_string(),
		}
	}

	#[test]
	fn empty_history_is_fifty_percent() {
		assert_eq!(50.0, success_rate(&[], 12));
		assert_eq!(0.0, average_time(&[], 12));
	}

	#[test]
	fn missing_attempts_count_half() {
		let attempts = vec![attempt(1, true, 1000), attempt(2, false, 3000)];
		// (1 + 10 * 0.5) / 12
		assert_eq!(50.0, success_rate(&attempts, 12));
		assert_eq!(50.0, success_rate(&attempts, 2));
		assert_eq!(0.0, success_rate(&attempts, 1));
		assert_eq!(2000.0, average_time(&attempts, 12));
		assert_eq!(3000.0, average_time(&attempts, 1));
	}

	#[test]
	fn only_recent_attempts_count() {
		let mut attempts: Vec<_> = (1..=10).map(|id| attempt(id, false, 100)).collect();
		attempts.extend((11..=15).map(|id| attempt(id, true, 500)));
		assert_eq!(100.0, success_rate(&attempts, 5));
		assert!((success_rate(&attempts, 12) - 5.0 / 12.0 * 100.0).abs() < 1e-9);
		assert_eq!(500.0, average_time(&attempts, 5));
	}

	#[test]
	fn record_updates_aggregates() {
		let mut stats = Statistics::from_attempts(vec![]);
		assert_eq!(1, stats.next_id());
		stats.record(attempt(1, true, 2000));
		assert_eq!(2, stats.next_id());
		assert_eq!(1, stats.attempts.len());
		assert_eq!(60.0, stats.last5_rate);
		assert_eq!(2000.0, stats.last12_avg_time);
	}

	#[test]
	fn save_and_load() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("stats.json");
		assert_eq!(Statistics::from_attempts(vec![]), Statistics::load(&path).unwrap());

		let stats = Statistics::from_attempts(vec![attempt(1, true, 1500), attempt(2, false, 2500)]);
		stats.save(&path).unwrap();
		assert_eq!(stats, Statistics::load(&path).unwrap());

		let text = fs::read_to_string(&path).unwrap();
		assert!(text.contains("\"timeSpent\": 1500"));
		assert!(text.contains("\"last12Rate\""));
	}

	#[test]
	fn loads_history_without_the_newer_rates() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("stats.json");
		let text = r#"{
			"attempts": [{
				"id": 1,
				"timestamp": 1700000000000,
				"timeSpent": 5200,
				"isCorrect": true,
				"userGuess": 2,
				"actualLength": 2,
				"scrambleFormula": "R F",
				"solutionFormula": "F' R'"
			}],
			"last12Rate": 54.2,
			"last12AvgTime": 5200
		}"#;
		fs::write(&path, text).unwrap();
		let stats = Statistics::load(&path).unwrap();
		assert_eq!(1, stats.attempts.len());
		assert_eq!(5200, stats.attempts[0].time_spent_ms);
		assert_eq!(60.0, stats.last5_rate);
		assert_eq!(50.5, stats.last100_rate);
		assert_eq!(5200.0, stats.last12_avg_time);
	}

	#[test]
	fn malformed_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("stats.json");
		fs::write(&path, "{ not json").unwrap();
		assert!(matches!(Statistics::load(&path), Err(StatsError::Json { .. })));
	}

	#[test]
	fn round_checks_guess_against_solver() {
		let mut rng = StdRng::seed_from_u64(3);
		let round = PracticeRound::new(&Config::default(), &mut rng);
		let actual = round.actual_length().unwrap();
		assert!(actual <= 4);
		assert_eq!(Some(true), round.check(actual));
		assert_eq!(Some(false), round.check(actual + 1));

		let record = round.attempt(7, actual + 1, Duration::from_millis(4200)).unwrap();
		assert_eq!(7, record.id);
		assert!(!record.is_correct);
		assert_eq!(4200, record.time_spent_ms);
		assert_eq!(round.scramble.formula, record.scramble_formula);
		assert_eq!(round.solution.formula(), record.solution_formula);
	}
}
