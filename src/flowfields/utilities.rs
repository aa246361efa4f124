//! Useful structures and tools used by the fields
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Traversal cost multiplier of ordinary, easy terrain
pub const DEFAULT_COST: f32 = 1.0;
/// Default traversal cost multiplier of terrain that is walkable but not
/// buildable (slopes and the like)
pub const DEFAULT_STEEP_COST: f32 = 2.0;
/// Base step cost of moving to an orthogonally adjacent cell
pub const ORTHOGONAL_STEP: f32 = 1.0;
/// Base step cost of moving to a diagonally adjacent cell
pub const DIAGONAL_STEP: f32 = std::f32::consts::SQRT_2;

/// Convenience way of accessing the 8 directions of movement between grid
/// cells. `North` points towards decreasing `y` (which is decreasing world
/// `z`), `East` towards increasing `x`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Reflect)]
pub enum Ordinal {
	North,
	NorthEast,
	East,
	SouthEast,
	South,
	SouthWest,
	West,
	NorthWest,
}

impl Ordinal {
	/// Fixed scan order used whenever neighbours are enumerated. The
	/// direction builder takes the first strictly-cheapest neighbour in this
	/// order so ties always resolve the same way
	pub const SCAN_ORDER: [Ordinal; 8] = [
		Ordinal::North,
		Ordinal::NorthEast,
		Ordinal::East,
		Ordinal::SouthEast,
		Ordinal::South,
		Ordinal::SouthWest,
		Ordinal::West,
		Ordinal::NorthWest,
	];
	/// The `(dx, dy)` grid offset of the direction
	pub fn get_offset(&self) -> (i32, i32) {
		match self {
			Ordinal::North => (0, -1),
			Ordinal::NorthEast => (1, -1),
			Ordinal::East => (1, 0),
			Ordinal::SouthEast => (1, 1),
			Ordinal::South => (0, 1),
			Ordinal::SouthWest => (-1, 1),
			Ordinal::West => (-1, 0),
			Ordinal::NorthWest => (-1, -1),
		}
	}
	/// Whether the direction moves along both axes
	pub fn is_diagonal(&self) -> bool {
		let (dx, dy) = self.get_offset();
		dx != 0 && dy != 0
	}
	/// Base cost of a single step in this direction, `1` orthogonally and
	/// `√2` diagonally
	pub fn get_step_cost(&self) -> f32 {
		if self.is_diagonal() {
			DIAGONAL_STEP
		} else {
			ORTHOGONAL_STEP
		}
	}
	/// Unit world-space vector of travelling one step in this direction on a
	/// grid whose cells are `cell_size` wide. The `y` component is always `0`
	pub fn get_world_direction(&self, cell_size: f32) -> Vec3 {
		let (dx, dy) = self.get_offset();
		Vec3::new(dx as f32 * cell_size, 0.0, dy as f32 * cell_size).normalize_or_zero()
	}
	/// Find the neighbouring cell in this direction, [None] if it would sit
	/// outside of the grid
	pub fn get_cell_neighbour(&self, cell: GridCell, dimensions: &GridDimensions) -> Option<GridCell> {
		let (dx, dy) = self.get_offset();
		let x = cell.get_x() as i64 + dx as i64;
		let y = cell.get_y() as i64 + dy as i64;
		if dimensions.is_valid_cell(x, y) {
			Some(GridCell::new(x as usize, y as usize))
		} else {
			None
		}
	}
	/// Based on a cell's `(x, y)` position find all neighbours within the
	/// grid including diagonals, listed in [Ordinal::SCAN_ORDER]
	pub fn get_all_cell_neighbours(
		cell: GridCell,
		dimensions: &GridDimensions,
	) -> Vec<(Ordinal, GridCell)> {
		let mut neighbours = Vec::with_capacity(8);
		for ordinal in Ordinal::SCAN_ORDER.iter() {
			if let Some(n) = ordinal.get_cell_neighbour(cell, dimensions) {
				neighbours.push((*ordinal, n));
			}
		}
		neighbours
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	fn dimensions() -> GridDimensions {
		GridDimensions::new(10, 10, 1.0, Vec3::ZERO).unwrap()
	}
	#[test]
	fn ordinal_cell_neighbours_corner() {
		let cell = GridCell::new(0, 0);
		let result = Ordinal::get_all_cell_neighbours(cell, &dimensions());
		let actual = vec![
			(Ordinal::East, GridCell::new(1, 0)),
			(Ordinal::SouthEast, GridCell::new(1, 1)),
			(Ordinal::South, GridCell::new(0, 1)),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn ordinal_cell_neighbours_far_corner() {
		let cell = GridCell::new(9, 9);
		let result = Ordinal::get_all_cell_neighbours(cell, &dimensions());
		let actual = vec![
			(Ordinal::North, GridCell::new(9, 8)),
			(Ordinal::West, GridCell::new(8, 9)),
			(Ordinal::NorthWest, GridCell::new(8, 8)),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn ordinal_cell_neighbours_centre() {
		let cell = GridCell::new(4, 4);
		let result = Ordinal::get_all_cell_neighbours(cell, &dimensions());
		let actual = vec![
			(Ordinal::North, GridCell::new(4, 3)),
			(Ordinal::NorthEast, GridCell::new(5, 3)),
			(Ordinal::East, GridCell::new(5, 4)),
			(Ordinal::SouthEast, GridCell::new(5, 5)),
			(Ordinal::South, GridCell::new(4, 5)),
			(Ordinal::SouthWest, GridCell::new(3, 5)),
			(Ordinal::West, GridCell::new(3, 4)),
			(Ordinal::NorthWest, GridCell::new(3, 3)),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn ordinal_cell_neighbours_edge() {
		let cell = GridCell::new(5, 0);
		let result = Ordinal::get_all_cell_neighbours(cell, &dimensions());
		assert_eq!(5, result.len());
	}
	#[test]
	fn step_costs() {
		assert_eq!(1.0, Ordinal::East.get_step_cost());
		assert_eq!(std::f32::consts::SQRT_2, Ordinal::SouthWest.get_step_cost());
	}
	#[test]
	fn world_direction_east() {
		let result = Ordinal::East.get_world_direction(1.0);
		assert_eq!(Vec3::X, result);
	}
	#[test]
	fn world_direction_south_east() {
		let result = Ordinal::SouthEast.get_world_direction(4.0);
		let actual = Vec3::new(1.0, 0.0, 1.0).normalize();
		assert!((actual - result).length() < 1e-6);
		assert_eq!(0.0, result.y);
	}
}
