//! Coordinate space, faces and the color palette.

use std::fmt;



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis { X, Y, Z }

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face { U, D, L, R, F, B }
pub const ALL_FACES: [Face; 6] = {use Face::*; [U, D, L, R, F, B]};

impl Face {
	/// Slot of this face in a piece's color map.
	pub const fn index(self) -> usize {
		self as usize
	}

	pub const fn axis(self) -> Axis {
		match self {
			Face::U | Face::D => Axis::Y,
			Face::L | Face::R => Axis::X,
			Face::F | Face::B => Axis::Z,
		}
	}

	/// `+1` or `-1`: the coordinate a piece must have on [`Face::axis`] to lie on this face.
	pub const fn sign(self) -> i8 {
		match self {
			Face::U | Face::R | Face::F => 1,
			Face::D | Face::L | Face::B => -1,
		}
	}

	pub const fn opposite(self) -> Face {
		match self {
			Face::U => Face::D,
			Face::D => Face::U,
			Face::L => Face::R,
			Face::R => Face::L,
			Face::F => Face::B,
			Face::B => Face::F,
		}
	}

	pub const fn is_opposite(self, other: Face) -> bool {
		self.opposite() as u8 == other as u8
	}

	/// Color of this face's center in the solved cube (yellow top, green front).
	pub const fn home_color(self) -> Color {
		match self {
			Face::U => Color::Yellow,
			Face::D => Color::White,
			Face::L => Color::Red,
			Face::R => Color::Orange,
			Face::F => Color::Green,
			Face::B => Color::Blue,
		}
	}

	pub const fn to_char(self) -> char {
		match self {
			Face::U => 'U',
			Face::D => 'D',
			Face::L => 'L',
			Face::R => 'R',
			Face::F => 'F',
			Face::B => 'B',
		}
	}

	pub fn from_char(c: char) -> Option<Self> {
		ALL_FACES.into_iter().find(|face| face.to_char() == c)
	}
}

impl fmt::Display for Face {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_char())
	}
}



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Color {
	#[default]
	Hidden,
	White,
	Yellow,
	Green,
	Blue,
	Red,
	Orange,
}

impl Color {
	pub const fn is_hidden(self) -> bool {
		matches!(self, Color::Hidden)
	}

	/// One-letter form used by the net renderer, `.` for hidden.
	pub const fn to_char(self) -> char {
		match self {
			Color::Hidden => '.',
			Color::White => 'W',
			Color::Yellow => 'Y',
			Color::Green => 'G',
			Color::Blue => 'B',
			Color::Red => 'R',
			Color::Orange => 'O',
		}
	}
}



/// A cubie location. Each coordinate is in `-1..=1` and the core `(0,0,0)` is never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
	pub x: i8,
	pub y: i8,
	pub z: i8,
}

pub const POSITIONS_N: usize = 26;

pub const ALL_POSITIONS: [Position; POSITIONS_N] = {
	let mut positions = [Position { x: 0, y: 0, z: 0 }; POSITIONS_N];
	let mut i = 0;
	let mut raw = 0;
	while raw < 27 {
		if raw != 13 {
			positions[i] = Position {
				x: (raw / 9) as i8 - 1,
				y: ((raw / 3) % 3) as i8 - 1,
				z: (raw % 3) as i8 - 1,
			};
			i += 1;
		}
		raw += 1;
	}
	positions
};

impl Position {
	pub const fn new(x: i8, y: i8, z: i8) -> Self {
		Self { x, y, z }
	}

	pub const fn is_valid(self) -> bool {
		-1 <= self.x && self.x <= 1
			&& -1 <= self.y && self.y <= 1
			&& -1 <= self.z && self.z <= 1
			&& !(self.x == 0 && self.y == 0 && self.z == 0)
	}

	/// Canonical array slot in `0..26`.
	pub const fn index(self) -> usize {
		debug_assert!(self.is_valid());
		let raw = (self.x + 1) as usize * 9 + (self.y + 1) as usize * 3 + (self.z + 1) as usize;
		if raw > 13 { raw - 1 } else { raw }
	}

	pub const fn coord(self, axis: Axis) -> i8 {
		match axis {
			Axis::X => self.x,
			Axis::Y => self.y,
			Axis::Z => self.z,
		}
	}

	/// Whether a piece here shows a sticker toward `face`.
	pub const fn exposes(self, face: Face) -> bool {
		self.coord(face.axis()) == face.sign()
	}

	pub fn exposed_faces(self) -> impl Iterator<Item = Face> {
		ALL_FACES.into_iter().filter(move |&face| self.exposes(face))
	}

	pub const fn zeros_n(self) -> u8 {
		(self.x == 0) as u8 + (self.y == 0) as u8 + (self.z == 0) as u8
	}

	pub const fn is_corner(self) -> bool {
		self.zeros_n() == 0
	}

	pub const fn is_edge(self) -> bool {
		self.zeros_n() == 1
	}

	pub const fn is_center(self) -> bool {
		self.zeros_n() == 2
	}

	/// The edge position between two adjacent faces.
	pub const fn edge_between(a: Face, b: Face) -> Position {
		let mut c = [0_i8; 3];
		c[a.axis() as usize] = a.sign();
		c[b.axis() as usize] = b.sign();
		Position::new(c[0], c[1], c[2])
	}

	pub const fn center_of(face: Face) -> Position {
		let mut c = [0_i8; 3];
		c[face.axis() as usize] = face.sign();
		Position::new(c[0], c[1], c[2])
	}
}
