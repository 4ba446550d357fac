//! Face turns and the move engine.

use std::{fmt, str::FromStr};

use crate::{
	cube::CubeState,
	error::ParseMoveError,
	geometry::{ALL_POSITIONS, Face, Position},
};



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant { Cw, Ccw, Double }

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
	pub face: Face,
	pub variant: Variant,
}

/// Every move, in the order the solver tries them: all clockwise turns, then
/// all counter-clockwise turns, then all half turns.
pub const ALL_MOVES: [Move; 18] = {
	use {Face::*, Variant::*};
	[
		Move::new(U, Cw), Move::new(D, Cw), Move::new(L, Cw),
		Move::new(R, Cw), Move::new(F, Cw), Move::new(B, Cw),
		Move::new(U, Ccw), Move::new(D, Ccw), Move::new(L, Ccw),
		Move::new(R, Ccw), Move::new(F, Ccw), Move::new(B, Ccw),
		Move::new(U, Double), Move::new(D, Double), Move::new(L, Double),
		Move::new(R, Double), Move::new(F, Double), Move::new(B, Double),
	]
};

impl Move {
	pub const fn new(face: Face, variant: Variant) -> Self {
		Self { face, variant }
	}

	pub const fn inverse(self) -> Self {
		let variant = match self.variant {
			Variant::Cw => Variant::Ccw,
			Variant::Ccw => Variant::Cw,
			Variant::Double => Variant::Double,
		};
		Self { face: self.face, variant }
	}
}

impl fmt::Display for Move {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let suffix = match self.variant {
			Variant::Cw => "",
			Variant::Ccw => "'",
			Variant::Double => "2",
		};
		write!(f, "{}{suffix}", self.face)
	}
}

impl FromStr for Move {
	type Err = ParseMoveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ParseMoveError::InvalidToken(s.to_string());
		let mut chars = s.chars();
		let face = chars.next().and_then(Face::from_char).ok_or_else(invalid)?;
		let variant = match chars.as_str() {
			"" => Variant::Cw,
			"'" => Variant::Ccw,
			"2" => Variant::Double,
			_ => return Err(invalid()),
		};
		Ok(Self { face, variant })
	}
}

/// Parses a whitespace separated formula such as `"R U R' U'"`.
pub fn parse_formula(formula: &str) -> Result<Vec<Move>, ParseMoveError> {
	let moves = formula
		.split_whitespace()
		.map(str::parse)
		.collect::<Result<Vec<Move>, _>>()?;
	if moves.is_empty() {
		return Err(ParseMoveError::EmptyFormula);
	}
	Ok(moves)
}

pub fn format_formula(moves: &[Move]) -> String {
	moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" ")
}



impl Face {
	/// Where a piece at `p` ends up after a clockwise quarter turn of this face.
	pub const fn rotate_cw(self, p: Position) -> Position {
		let Position { x, y, z } = p;
		match self {
			Face::U => Position::new(-z, y, x),
			Face::D => Position::new(z, y, -x),
			Face::L => Position::new(x, -z, y),
			Face::R => Position::new(x, z, -y),
			Face::F => Position::new(y, -x, z),
			Face::B => Position::new(-y, x, z),
		}
	}

	pub const fn rotate_ccw(self, p: Position) -> Position {
		let Position { x, y, z } = p;
		match self {
			Face::U => Position::new(z, y, -x),
			Face::D => Position::new(-z, y, x),
			Face::L => Position::new(x, z, -y),
			Face::R => Position::new(x, -z, y),
			Face::F => Position::new(-y, x, z),
			Face::B => Position::new(y, -x, z),
		}
	}

	/// The side directions visited by a sticker under a clockwise turn, in
	/// [`ExtArrayRotate4::rotate4`] order: the color on the first moves to the second.
	pub const fn cw_cycle(self) -> [Face; 4] {
		use Face::*;
		match self {
			U => [R, F, L, B],
			D => [F, R, B, L],
			L => [U, F, D, B],
			R => [U, B, D, F],
			F => [U, R, D, L],
			B => [U, L, D, R],
		}
	}
}



pub trait ExtArrayRotate4 {
	fn rotate4(&mut self, i1: usize, i2: usize, i3: usize, i4: usize);
}
impl<T: Copy, const L: usize> ExtArrayRotate4 for [T; L] {
	/// Moves the value at `i1` to `i2`, `i2` to `i3`, `i3` to `i4` and `i4` to `i1`.
	fn rotate4(&mut self, i1: usize, i2: usize, i3: usize, i4: usize) {
		let temp = self[i4];
		self[i4] = self[i3];
		self[i3] = self[i2];
		self[i2] = self[i1];
		self[i1] = temp;
	}
}



impl CubeState {
	pub fn apply(&self, move_: Move) -> Self {
		debug_assert_eq!(Ok(()), self.check_invariants());
		match move_.variant {
			Variant::Cw => self.quarter_turn(move_.face, true),
			Variant::Ccw => self.quarter_turn(move_.face, false),
			Variant::Double => self.quarter_turn(move_.face, true).quarter_turn(move_.face, true),
		}
	}

	pub fn apply_all(&self, moves: &[Move]) -> Self {
		moves.iter().fold(*self, |state, &move_| state.apply(move_))
	}

	/// All 18 successors, in [`ALL_MOVES`] order.
	pub fn juxt(&self) -> [(Move, CubeState); 18] {
		ALL_MOVES.map(|move_| (move_, self.apply(move_)))
	}

	fn quarter_turn(&self, face: Face, clockwise: bool) -> Self {
		let old = self.as_array();
		let mut pieces = *old;
		let [c1, c2, c3, c4] = face.cw_cycle().map(Face::index);
		for position in ALL_POSITIONS.into_iter().filter(|p| p.exposes(face)) {
			let mut piece = old[position.index()];
			let target = if clockwise {
				piece.slots.rotate4(c1, c2, c3, c4);
				face.rotate_cw(position)
			} else {
				piece.slots.rotate4(c4, c3, c2, c1);
				face.rotate_ccw(position)
			};
			pieces[target.index()] = piece;
		}
		Self::from_array(pieces)
	}
}
