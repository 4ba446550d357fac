//! The 26-piece cube state.
//!
//! A piece is identified by where it currently sits, so the state is just an
//! array of color maps indexed by [`Position::index`]. Moves build a fresh
//! array; nothing is ever mutated in place once handed out.

use std::fmt;

use crate::{
	error::InvariantError,
	geometry::{ALL_FACES, ALL_POSITIONS, Color, Face, POSITIONS_N, Position},
};



/// One color per face direction, in [`Face::index`] order (`U D L R F B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Piece {
	pub slots: [Color; 6],
}

impl Piece {
	pub const MASKED: Self = Self { slots: [Color::Hidden; 6] };

	/// The piece that belongs at `position` in the solved cube.
	pub const fn solved_at(position: Position) -> Self {
		let mut slots = [Color::Hidden; 6];
		let mut i = 0;
		while i < ALL_FACES.len() {
			let face = ALL_FACES[i];
			if position.exposes(face) {
				slots[face.index()] = face.home_color();
			}
			i += 1;
		}
		Self { slots }
	}

	pub const fn color(&self, face: Face) -> Color {
		self.slots[face.index()]
	}

	pub fn is_masked(&self) -> bool {
		self.slots.iter().all(|c| c.is_hidden())
	}
}



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubeState {
	pieces: [Piece; POSITIONS_N],
}

impl Default for CubeState {
	fn default() -> Self {
		Self::new()
	}
}

impl CubeState {
	const NEW: Self = {
		let mut pieces = [Piece::MASKED; POSITIONS_N];
		let mut i = 0;
		while i < POSITIONS_N {
			pieces[i] = Piece::solved_at(ALL_POSITIONS[i]);
			i += 1;
		}
		Self { pieces }
	};

	/// The solved cube.
	pub const fn new() -> Self {
		Self::NEW
	}

	/// The solved cube as the cross trainer sees it: only the bottom center and
	/// the four bottom edges keep their colors.
	pub fn new_cross() -> Self {
		Self::new().masked_to_cross()
	}

	pub(crate) const fn from_array(pieces: [Piece; POSITIONS_N]) -> Self {
		Self { pieces }
	}

	/// Builds a state from explicit `(position, piece)` pairs, checking that every
	/// position is covered exactly once and that colors sit only on exposed slots.
	pub fn from_pieces(
		pieces: impl IntoIterator<Item = (Position, Piece)>,
	) -> Result<Self, InvariantError> {
		let mut slots: [Option<Piece>; POSITIONS_N] = [None; POSITIONS_N];
		let mut count = 0;
		for (position, piece) in pieces {
			count += 1;
			if !position.is_valid() {
				return Err(InvariantError::InvalidPosition(position));
			}
			let slot = &mut slots[position.index()];
			if slot.is_some() {
				return Err(InvariantError::DuplicatePosition(position));
			}
			*slot = Some(piece);
		}
		if count != POSITIONS_N {
			return Err(InvariantError::PieceCount(count));
		}
		let mut array = [Piece::MASKED; POSITIONS_N];
		for (dst, src) in array.iter_mut().zip(slots) {
			*dst = src.ok_or(InvariantError::PieceCount(count))?;
		}
		let state = Self { pieces: array };
		state.check_invariants()?;
		Ok(state)
	}

	/// A piece is either fully colored (exactly its exposed slots are non-hidden)
	/// or fully masked.
	pub fn check_invariants(&self) -> Result<(), InvariantError> {
		for (position, piece) in self.pieces() {
			if piece.is_masked() {
				continue;
			}
			for face in ALL_FACES {
				let hidden = piece.color(face).is_hidden();
				match (position.exposes(face), hidden) {
					(false, false) => return Err(InvariantError::ColorOnHiddenSlot { position, face }),
					(true, true) => return Err(InvariantError::PartiallyMasked { position, face }),
					_ => {}
				}
			}
		}
		Ok(())
	}

	/// Hides every piece except the bottom center and the edges around it.
	pub fn masked_to_cross(&self) -> Self {
		let mut pieces = self.pieces;
		for (position, piece) in ALL_POSITIONS.iter().zip(pieces.iter_mut()) {
			let is_cross = position.y == -1 && !position.is_corner();
			if !is_cross {
				*piece = Piece::MASKED;
			}
		}
		Self { pieces }
	}

	pub const fn piece_at(&self, position: Position) -> &Piece {
		&self.pieces[position.index()]
	}

	pub const fn color_at(&self, position: Position, face: Face) -> Color {
		self.piece_at(position).color(face)
	}

	pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
		ALL_POSITIONS.into_iter().zip(self.pieces.iter().copied())
	}

	pub(crate) const fn as_array(&self) -> &[Piece; POSITIONS_N] {
		&self.pieces
	}

	/// The nine facelets of `face`, as seen looking at that face from outside with
	/// the net orientation used by [`CubeState`]'s `Display`.
	pub fn facelets(&self, face: Face) -> [[Color; 3]; 3] {
		let mut grid = [[Color::Hidden; 3]; 3];
		for (row, line) in grid.iter_mut().enumerate() {
			for (col, cell) in line.iter_mut().enumerate() {
				let (r, c) = (row as i8, col as i8);
				let position = match face {
					Face::U => Position::new(c - 1, 1, r - 1),
					Face::D => Position::new(c - 1, -1, 1 - r),
					Face::F => Position::new(c - 1, 1 - r, 1),
					Face::B => Position::new(1 - c, 1 - r, -1),
					Face::L => Position::new(-1, 1 - r, c - 1),
					Face::R => Position::new(1, 1 - r, 1 - c),
				};
				*cell = self.color_at(position, face);
			}
		}
		grid
	}
}

//       U U U
//       U U U
//       U U U
// L L L F F F R R R B B B
// L L L F F F R R R B B B
// L L L F F F R R R B B B
//       D D D
//       D D D
//       D D D
impl fmt::Display for CubeState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let row = |face: Face, r: usize| -> String {
			self.facelets(face)[r].iter().map(|c| c.to_char().to_string()).collect::<Vec<_>>().join(" ")
		};
		for r in 0..3 {
			writeln!(f, "      {}", row(Face::U, r))?;
		}
		for r in 0..3 {
			let line = [Face::L, Face::F, Face::R, Face::B].map(|face| row(face, r)).join(" ");
			writeln!(f, "{line}")?;
		}
		for r in 0..3 {
			writeln!(f, "      {}", row(Face::D, r))?;
		}
		Ok(())
	}
}
