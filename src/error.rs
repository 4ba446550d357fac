use std::{io, path::PathBuf};

use thiserror::Error;

use crate::geometry::{Face, Position};



#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
	#[error("Invalid move token {0:?}, expected a face letter (U D L R F B) optionally followed by ' or 2")]
	InvalidToken(String),
	#[error("Formula is empty")]
	EmptyFormula,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid mode {0:?}, expected \"normal\" or \"cross\"")]
pub struct ParseModeError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
	#[error("Expected 26 pieces but got {0}")]
	PieceCount(usize),
	#[error("Position {0:?} is not a valid cubie position")]
	InvalidPosition(Position),
	#[error("Position {0:?} is occupied by more than one piece")]
	DuplicatePosition(Position),
	#[error("Piece at {position:?} has a color on {face}, which it does not expose")]
	ColorOnHiddenSlot { position: Position, face: Face },
	#[error("Piece at {position:?} is partially masked: {face} is hidden but other slots are colored")]
	PartiallyMasked { position: Position, face: Face },
}

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Failed to read config file {path:?}: {source}")]
	Read { path: PathBuf, source: io::Error },
	#[error("Failed to parse config file {path:?}: {source}")]
	Parse { path: PathBuf, source: toml::de::Error },
	#[error("Invalid config value for {field}: {reason}")]
	Invalid { field: &'static str, reason: &'static str },
}

#[derive(Error, Debug)]
pub enum StatsError {
	#[error("Failed to access statistics file {path:?}: {source}")]
	Io { path: PathBuf, source: io::Error },
	#[error("Statistics file {path:?} is malformed: {source}")]
	Json { path: PathBuf, source: serde_json::Error },
}
