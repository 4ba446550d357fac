//! Solved-state predicates.

use crate::{
	cube::CubeState,
	geometry::{ALL_FACES, Color, Face, Position},
};



/// Every face shows a single color.
pub fn is_solved(state: &CubeState) -> bool {
	ALL_FACES.into_iter().all(|face| {
		let facelets = state.facelets(face);
		let first = facelets[0][0];
		!first.is_hidden() && facelets.iter().flatten().all(|&c| c == first)
	})
}

/// Side colors of the bottom edges read in this order going F, R, B, L.
const CROSS_SIDE_CYCLE: [Color; 4] = [Color::Green, Color::Orange, Color::Blue, Color::Red];
const CROSS_SIDES: [Face; 4] = [Face::F, Face::R, Face::B, Face::L];

/// The bottom center and the four bottom edges are white underneath, and the
/// edges' side colors are in solved order up to a turn of the bottom layer.
pub fn is_cross_solved(state: &CubeState) -> bool {
	let bottom = Face::D.home_color();
	if state.color_at(Position::center_of(Face::D), Face::D) != bottom {
		return false;
	}
	let mut sides = [Color::Hidden; 4];
	for (side, color) in CROSS_SIDES.into_iter().zip(sides.iter_mut()) {
		let edge = Position::edge_between(Face::D, side);
		if state.color_at(edge, Face::D) != bottom {
			return false;
		}
		*color = state.color_at(edge, side);
	}
	(0..4).any(|shift| {
		(0..4).all(|i| sides[i] == CROSS_SIDE_CYCLE[(i + shift) % 4])
	})
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::moves::{ALL_MOVES, parse_formula};

	#[test]
	fn solved_cube() {
		assert!(is_solved(&CubeState::new()));
		assert!(is_cross_solved(&CubeState::new()));
		for move_ in ALL_MOVES {
			assert!(!is_solved(&CubeState::new().apply(move_)));
		}
	}

	#[test]
	fn masked_cube_is_never_fully_solved() {
		assert!(!is_solved(&CubeState::new_cross()));
	}

	#[test]
	fn cross_accepts_bottom_layer_rotations() {
		for start in [CubeState::new(), CubeState::new_cross()] {
			for formula in ["D", "D2", "D'"] {
				let state = start.apply_all(&parse_formula(formula).unwrap());
				assert!(is_cross_solved(&state), "{formula}");
			}
		}
	}

	#[test]
	fn cross_ignores_the_rest_of_the_cube() {
		for formula in ["U", "U2 R U R'", "F' U F"] {
			let state = CubeState::new().apply_all(&parse_formula(formula).unwrap());
			assert!(is_cross_solved(&state), "{formula}");
			assert!(!is_solved(&state), "{formula}");
		}
	}

	#[test]
	fn cross_rejects_white_off_the_bottom() {
		// a quarter turn of a side face lifts its cross edge out of the bottom layer
		for formula in ["F", "R'", "B2", "L"] {
			let state = CubeState::new_cross().apply_all(&parse_formula(formula).unwrap());
			assert!(!is_cross_solved(&state), "{formula}");
		}
	}

	#[test]
	fn cross_rejects_white_on_a_side() {
		for start in [CubeState::new(), CubeState::new_cross()] {
			for side in [Face::F, Face::R, Face::B, Face::L] {
				let edge = Position::edge_between(Face::D, side);
				let pieces = start.pieces().map(|(position, mut piece)| {
					if position == edge {
						piece.slots.swap(Face::D.index(), side.index());
					}
					(position, piece)
				});
				let flipped = CubeState::from_pieces(pieces).unwrap();
				assert_eq!(Color::White, flipped.color_at(edge, side));
				assert!(!is_cross_solved(&flipped), "{side}");
			}
		}
	}

	#[test]
	fn cross_rejects_swapped_edges() {
		let solved = CubeState::new();
		let front = Position::edge_between(Face::D, Face::F);
		let right = Position::edge_between(Face::D, Face::R);
		let pieces = solved.pieces().map(|(position, mut piece)| {
			if position == front {
				piece.slots[Face::F.index()] = Color::Orange;
			} else if position == right {
				piece.slots[Face::R.index()] = Color::Green;
			}
			(position, piece)
		});
		let swapped = CubeState::from_pieces(pieces).unwrap();
		assert!(!is_cross_solved(&swapped));
	}
}
