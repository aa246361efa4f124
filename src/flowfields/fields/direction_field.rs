//! A [DirectionField] is a 2D array of world-space unit vectors. Each one
//! points from a cell towards the neighbour that lies closest to the target
//! so a steering pipeline/character controller can read the vector under an
//! actor and blend it into its movement.
//!
//! For every walkable cell that the [IntegrationField] reached, the 8
//! neighbours are scanned in the order N, NE, E, SE, S, SW, W, NW and the
//! first one holding the strictly smallest distance is picked. If that
//! distance is also strictly smaller than the cell's own the direction is
//! `normalize((dx, 0, dy) * cell_size)`, otherwise (the target itself, or a
//! cell sat on a plateau) the direction is [Vec3::ZERO]. Ties between equally
//! cheap neighbours always go to the earlier one in the scan order, this is
//! deterministic but arbitrary and can show as a slight bias on plateaus.
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! |  ↘  |  ↘  |  ↓  |  ↙  |  ↙  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  ↘  |  ↘  |  ↓  |  ↙  |  ↙  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  →  |  →  |  o  |  ←  |  ←  |
//! |_____|_____|_____|_____|_____|
//! ```
//!

use bevy::prelude::*;

use crate::prelude::*;

/// World-space direction of travel from each cell
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionField {
	/// Number of columns, used to index the flat array
	width: usize,
	/// Row-major unit vectors, [Vec3::ZERO] where there is no way forward
	directions: Vec<Vec3>,
}

impl DirectionField {
	/// Create a new [DirectionField] where every cell has no direction
	pub fn new(dimensions: &GridDimensions) -> Self {
		DirectionField {
			width: dimensions.get_width(),
			directions: vec![Vec3::ZERO; dimensions.get_cell_count()],
		}
	}
	/// Zero every direction
	pub fn reset(&mut self) {
		for d in self.directions.iter_mut() {
			*d = Vec3::ZERO;
		}
	}
	/// Find the neighbour of `cell` with the strictly smallest distance that
	/// also improves on the distance of `cell` itself
	pub fn find_downhill_neighbour(
		cell: GridCell,
		integration_field: &IntegrationField,
		dimensions: &GridDimensions,
	) -> Option<(Ordinal, GridCell)> {
		let mut cheapest_value = integration_field.get_field_cell_value(cell);
		let mut cheapest_neighbour = None;
		for (ordinal, n) in Ordinal::get_all_cell_neighbours(cell, dimensions) {
			let neighbour_distance = integration_field.get_field_cell_value(n);
			if neighbour_distance < cheapest_value {
				cheapest_value = neighbour_distance;
				cheapest_neighbour = Some((ordinal, n));
			}
		}
		cheapest_neighbour
	}
	/// Calculate the [DirectionField] from a completed [IntegrationField]
	pub fn calculate(
		&mut self,
		integration_field: &IntegrationField,
		cost_field: &CostField,
		dimensions: &GridDimensions,
	) {
		self.reset();
		for (index, distance) in integration_field.get().iter().enumerate() {
			// skip unreached cells and the target
			if !distance.is_finite() || *distance == 0.0 {
				continue;
			}
			let cell = dimensions.get_cell_from_index(index);
			if !cost_field.is_walkable(cell) {
				continue;
			}
			if let Some((ordinal, _)) =
				DirectionField::find_downhill_neighbour(cell, integration_field, dimensions)
			{
				self.directions[index] = ordinal.get_world_direction(dimensions.get_cell_size());
			}
		}
	}
	/// Row-major index of a cell, panics if the cell is outside of the field
	fn index(&self, cell: GridCell) -> usize {
		let height = self.directions.len() / self.width;
		if cell.get_x() >= self.width || cell.get_y() >= height {
			panic!("Cannot access a DirectionField value, index out of bounds. Asked for x {}, y {}, field width is {}, field height is {}", cell.get_x(), cell.get_y(), self.width, height)
		}
		cell.get_y() * self.width + cell.get_x()
	}
}

impl Field<Vec3> for DirectionField {
	/// Get a reference to the field array
	fn get(&self) -> &[Vec3] {
		&self.directions
	}
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, cell: GridCell) -> Vec3 {
		self.directions[self.index(cell)]
	}
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: Vec3, cell: GridCell) {
		let i = self.index(cell);
		self.directions[i] = value;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	fn build(
		dims: &GridDimensions,
		cost_field: &CostField,
		target: GridCell,
	) -> (IntegrationField, DirectionField) {
		let mut integration_field = IntegrationField::new(dims);
		integration_field.calculate_field(target, cost_field, dims);
		let mut direction_field = DirectionField::new(dims);
		direction_field.calculate(&integration_field, cost_field, dims);
		(integration_field, direction_field)
	}
	#[test]
	fn open_field_points_at_target() {
		let dims = GridDimensions::new(5, 5, 1.0, Vec3::ZERO).unwrap();
		let cost_field = CostField::new(&dims);
		let (_, direction_field) = build(&dims, &cost_field, GridCell::new(2, 2));
		assert_eq!(Vec3::X, direction_field.get_field_cell_value(GridCell::new(0, 2)));
		assert_eq!(Vec3::NEG_X, direction_field.get_field_cell_value(GridCell::new(4, 2)));
		assert_eq!(Vec3::Z, direction_field.get_field_cell_value(GridCell::new(2, 0)));
		assert_eq!(Vec3::NEG_Z, direction_field.get_field_cell_value(GridCell::new(2, 4)));
		assert_eq!(Vec3::ZERO, direction_field.get_field_cell_value(GridCell::new(2, 2)));
		let diagonal = direction_field.get_field_cell_value(GridCell::new(0, 0));
		assert!((diagonal - Vec3::new(1.0, 0.0, 1.0).normalize()).length() < 1e-6);
	}
	/// Equal neighbours resolve to the first in N, NE, E, SE, S, SW, W, NW order
	#[test]
	fn ties_follow_scan_order() {
		let dims = GridDimensions::new(5, 5, 1.0, Vec3::ZERO).unwrap();
		let mut cost_field = CostField::new(&dims);
		cost_field.set_walkable(false, GridCell::new(2, 1));
		let (integration_field, direction_field) = build(&dims, &cost_field, GridCell::new(2, 2));
		// (3, 1) and (1, 1) are both √2 away, SE comes before SW
		assert_eq!(
			integration_field.get_field_cell_value(GridCell::new(3, 1)),
			integration_field.get_field_cell_value(GridCell::new(1, 1))
		);
		let result = direction_field.get_field_cell_value(GridCell::new(2, 0));
		assert!((result - Vec3::new(1.0, 0.0, 1.0).normalize()).length() < 1e-6);
	}
	#[test]
	fn unreached_and_unwalkable_have_no_direction() {
		let dims = GridDimensions::new(5, 5, 1.0, Vec3::ZERO).unwrap();
		let mut cost_field = CostField::new(&dims);
		for (x, y) in [(3, 3), (3, 4), (4, 3)] {
			cost_field.set_walkable(false, GridCell::new(x, y));
		}
		let (_, direction_field) = build(&dims, &cost_field, GridCell::new(2, 2));
		assert_eq!(Vec3::ZERO, direction_field.get_field_cell_value(GridCell::new(4, 4)));
		assert_eq!(Vec3::ZERO, direction_field.get_field_cell_value(GridCell::new(3, 3)));
	}
	/// Non-unit cells still produce unit vectors
	#[test]
	fn scaled_cells_normalised() {
		let dims = GridDimensions::new(3, 3, 2.5, Vec3::new(-3.0, 1.0, 7.0)).unwrap();
		let cost_field = CostField::new(&dims);
		let (_, direction_field) = build(&dims, &cost_field, GridCell::new(0, 0));
		for d in direction_field.get().iter().skip(1) {
			assert!((d.length() - 1.0).abs() < 1e-6);
			assert_eq!(0.0, d.y);
		}
	}
	#[test]
	fn downhill_neighbour_of_target_is_none() {
		let dims = GridDimensions::new(3, 3, 1.0, Vec3::ZERO).unwrap();
		let cost_field = CostField::new(&dims);
		let (integration_field, _) = build(&dims, &cost_field, GridCell::new(1, 1));
		let result =
			DirectionField::find_downhill_neighbour(GridCell::new(1, 1), &integration_field, &dims);
		assert_eq!(None, result);
		let result =
			DirectionField::find_downhill_neighbour(GridCell::new(0, 1), &integration_field, &dims);
		assert_eq!(Some((Ordinal::East, GridCell::new(1, 1))), result);
	}
}
