//! Tunables, loadable from a TOML file.
//!
//! ```toml
//! [solver]
//! normal_depth = 8
//! cross_depth = 4
//! cores_n = 1
//!
//! [scramble]
//! normal_length = 20
//! cross_length = 4
//!
//! [practice]
//! stats_file = "cross-trainer-stats.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, solver::SolveMode};



#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub solver: SolverConfig,
	pub scramble: ScrambleConfig,
	pub practice: PracticeConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
	/// Deepest ply searched for a full solve.
	pub normal_depth: usize,
	/// Deepest ply searched for a cross solve.
	pub cross_depth: usize,
	/// Number of frontier chunks expanded in parallel; 1 searches on the calling thread.
	pub cores_n: usize,
}

impl Default for SolverConfig {
	fn default() -> Self {
		Self { normal_depth: 8, cross_depth: 4, cores_n: 1 }
	}
}

impl SolverConfig {
	pub const fn max_depth(&self, mode: SolveMode) -> usize {
		match mode {
			SolveMode::Normal => self.normal_depth,
			SolveMode::Cross => self.cross_depth,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleConfig {
	pub normal_length: usize,
	pub cross_length: usize,
}

impl Default for ScrambleConfig {
	fn default() -> Self {
		Self { normal_length: 20, cross_length: 4 }
	}
}

impl ScrambleConfig {
	pub const fn length(&self, mode: SolveMode) -> usize {
		match mode {
			SolveMode::Normal => self.normal_length,
			SolveMode::Cross => self.cross_length,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PracticeConfig {
	pub stats_file: PathBuf,
}

impl Default for PracticeConfig {
	fn default() -> Self {
		Self { stats_file: PathBuf::from("cross-trainer-stats.json") }
	}
}



impl Config {
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path)
			.map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
		Self::parse(&text, path)
	}

	/// `path` is only used for error messages.
	pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(text)
			.map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });
		if self.solver.normal_depth == 0 {
			return invalid("solver.normal_depth", "must be at least 1");
		}
		if self.solver.cross_depth == 0 {
			return invalid("solver.cross_depth", "must be at least 1");
		}
		if self.solver.cores_n == 0 {
			return invalid("solver.cores_n", "must be at least 1");
		}
		Ok(())
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = Config::default();
		assert_eq!(8, config.solver.max_depth(SolveMode::Normal));
		assert_eq!(4, config.solver.max_depth(SolveMode::Cross));
		assert_eq!(20, config.scramble.length(SolveMode::Normal));
		assert_eq!(4, config.scramble.length(SolveMode::Cross));
		assert_eq!(1, config.solver.cores_n);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn empty_file_gives_defaults() {
		assert_eq!(Config::default(), Config::parse("", Path::new("x.toml")).unwrap());
	}

	#[test]
	fn partial_override() {
		let config = Config::parse(
			"[solver]\ncross_depth = 5\ncores_n = 4\n\n[practice]\nstats_file = \"s.json\"\n",
			Path::new("x.toml"),
		).unwrap();
		assert_eq!(5, config.solver.cross_depth);
		assert_eq!(8, config.solver.normal_depth);
		assert_eq!(4, config.solver.cores_n);
		assert_eq!(ScrambleConfig::default(), config.scramble);
		assert_eq!(PathBuf::from("s.json"), config.practice.stats_file);
	}

	#[test]
	fn rejects_unknown_keys() {
		let err = Config::parse("[solver]\ndepth = 3\n", Path::new("x.toml")).unwrap_err();
		assert!(matches!(err, ConfigError::Parse { .. }));
	}

	#[test]
	fn rejects_zero_cores() {
		let err = Config::parse("[solver]\ncores_n = 0\n", Path::new("x.toml")).unwrap_err();
		assert!(matches!(err, ConfigError::Invalid { field: "solver.cores_n", .. }));
	}

	#[test]
	fn load_from_disk() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("cross-trainer.toml");
		std::fs::write(&path, "[scramble]\nnormal_length = 25\n").unwrap();
		assert_eq!(25, Config::load(&path).unwrap().scramble.normal_length);
		assert!(matches!(
			Config::load(&dir.path().join("missing.toml")),
			Err(ConfigError::Read { .. })
		));
	}
}
