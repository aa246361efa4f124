//! The CostField holds the walkability and traversal cost of every cell. A
//! walkable cell has a cost of at least `1.0`, `1.0` being the default and
//! easiest, anything higher indicates a harder cost of movement such as a
//! slope. An unwalkable cell is strictly forbidden from being used in a
//! pathing calculation (a wall, water, a building).
//!
//! An example cost field where `x` marks unwalkable cells may look:
//!
//! ```text
//!  _______________________________
//! |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  |  x  |  x  |  2  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  |  1  |  1  |  2  |  1  |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! It is populated by the [crate::prelude::WalkabilitySampler] or edited
//! directly when a footprint is already known.
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Walkability and cost of a single cell
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct CellCost {
	/// Whether an agent may occupy the cell
	walkable: bool,
	/// Traversal cost multiplier
	cost: f32,
}

impl Default for CellCost {
	fn default() -> Self {
		CellCost {
			walkable: true,
			cost: DEFAULT_COST,
		}
	}
}

impl CellCost {
	/// Create a new [CellCost], rejecting costs that are not finite or sit
	/// below `1.0`
	pub fn new(walkable: bool, cost: f32) -> Result<Self, FlowFieldError> {
		if !cost.is_finite() || cost < DEFAULT_COST {
			return Err(FlowFieldError::InvalidCost(cost));
		}
		Ok(CellCost { walkable, cost })
	}
	/// A cell nothing can move through
	pub fn unwalkable() -> Self {
		CellCost {
			walkable: false,
			cost: DEFAULT_COST,
		}
	}
	/// Whether the cell may be occupied
	pub fn is_walkable(&self) -> bool {
		self.walkable
	}
	/// Traversal cost multiplier, at least `1.0`
	pub fn get_cost(&self) -> f32 {
		self.cost
	}
}

/// Walkability and traversal cost of every cell of the grid
#[derive(Clone, Debug, PartialEq)]
pub struct CostField {
	/// Number of columns, used to index the flat array
	width: usize,
	/// Row-major cell values
	cells: Vec<CellCost>,
}

impl CostField {
	/// Create a new [CostField] where every cell is walkable with the default
	/// cost
	pub fn new(dimensions: &GridDimensions) -> Self {
		CostField {
			width: dimensions.get_width(),
			cells: vec![CellCost::default(); dimensions.get_cell_count()],
		}
	}
	/// Whether the cell may be occupied
	pub fn is_walkable(&self, cell: GridCell) -> bool {
		self.get_field_cell_value(cell).is_walkable()
	}
	/// Flip the walkability of a cell while keeping its cost
	pub fn set_walkable(&mut self, walkable: bool, cell: GridCell) {
		let mut value = self.get_field_cell_value(cell);
		value.walkable = walkable;
		self.set_field_cell_value(value, cell);
	}
	/// Number of walkable cells, handy for logging
	pub fn count_walkable(&self) -> usize {
		self.cells.iter().filter(|c| c.is_walkable()).count()
	}
	/// Row-major index of a cell, panics if the cell is outside of the field
	fn index(&self, cell: GridCell) -> usize {
		let height = self.cells.len() / self.width;
		if cell.get_x() >= self.width || cell.get_y() >= height {
			panic!("Cannot access a CostField value, index out of bounds. Asked for x {}, y {}, field width is {}, field height is {}", cell.get_x(), cell.get_y(), self.width, height)
		}
		cell.get_y() * self.width + cell.get_x()
	}
}

impl Field<CellCost> for CostField {
	/// Get a reference to the field array
	fn get(&self) -> &[CellCost] {
		&self.cells
	}
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, cell: GridCell) -> CellCost {
		self.cells[self.index(cell)]
	}
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: CellCost, cell: GridCell) {
		let i = self.index(cell);
		self.cells[i] = value;
	}
}
