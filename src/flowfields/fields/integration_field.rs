//! The IntegrationField contains a 2D array of `f32` values and uses a
//! [CostField] to produce the cumulative cost of reaching the target from
//! every cell.
//!
//! When a new target is processed the field is reset to `f32::INFINITY` and
//! the target cell is set to `0`. The field is then expanded outwards from the
//! target with Dijkstra's algorithm:
//!
//! 1. The cheapest cell is popped from a min-priority frontier
//! 2. If its popped distance is worse than the best already recorded the entry
//! is stale (a cell can be queued more than once) and it is skipped
//! 3. Each walkable neighbour (all 8 directions) receives a candidate
//! distance of `current + step * neighbour_cost` where `step` is `1` for
//! orthogonal neighbours and `√2` for diagonal ones
//! 4. Any neighbour whose candidate improves on its recorded distance is
//! updated and pushed onto the frontier
//!
//! With uniform costs of `1` this produces an octagonal wavefront:
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! | 2.8 | 2.4 |  2  | 2.4 | 2.8 |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! | 2.4 | 1.4 |  1  | 1.4 | 2.4 |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  1  |  0  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! | 2.4 | 1.4 |  1  | 1.4 | 2.4 |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! | 2.8 | 2.4 |  2  | 2.4 | 2.8 |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! Unwalkable cells are never entered so the wave flows around them, and any
//! cell the wave cannot reach keeps `f32::INFINITY`.
//!

use std::{cmp::Ordering, collections::BinaryHeap};

use bevy::prelude::*;

use crate::prelude::*;

/// An entry of the Dijkstra frontier
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
	/// Tentative distance of the cell when it was queued
	distance: f32,
	/// Row-major index of the cell
	index: usize,
}

impl PartialEq for FrontierEntry {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for FrontierEntry {}

// [BinaryHeap] is a max-heap so the ordering is reversed to pop the smallest
// distance first, ties go to the lowest index so the run is deterministic
impl Ord for FrontierEntry {
	fn cmp(&self, other: &Self) -> Ordering {
		other
			.distance
			.total_cmp(&self.distance)
			.then_with(|| other.index.cmp(&self.index))
	}
}

impl PartialOrd for FrontierEntry {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Accumulated cost from each cell to the target
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationField {
	/// Number of columns, used to index the flat array
	width: usize,
	/// Row-major accumulated costs
	distances: Vec<f32>,
}

impl IntegrationField {
	/// Creates a new [IntegrationField] where all cells are unreached
	pub fn new(dimensions: &GridDimensions) -> Self {
		IntegrationField {
			width: dimensions.get_width(),
			distances: vec![f32::INFINITY; dimensions.get_cell_count()],
		}
	}
	/// Reset all the cells of the [IntegrationField] to `f32::INFINITY`
	/// apart from the `target` which is the starting point of calculating the
	/// field and is set to `0`
	pub fn reset(&mut self, target: GridCell) {
		for d in self.distances.iter_mut() {
			*d = f32::INFINITY;
		}
		self.set_field_cell_value(0.0, target);
	}
	/// Whether the cell has been reached by the last calculation
	pub fn is_reached(&self, cell: GridCell) -> bool {
		self.get_field_cell_value(cell).is_finite()
	}
	/// Number of cells that have a finite distance
	pub fn count_reached(&self) -> usize {
		self.distances.iter().filter(|d| d.is_finite()).count()
	}
	/// Starting from the `target` cell expand a Dijkstra frontier over the
	/// walkable cells of the `cost_field` recording the cheapest accumulated
	/// cost of each cell. The field is reset first so any previous result is
	/// discarded
	pub fn calculate_field(
		&mut self,
		target: GridCell,
		cost_field: &CostField,
		dimensions: &GridDimensions,
	) {
		self.reset(target);
		let mut frontier = BinaryHeap::new();
		frontier.push(FrontierEntry {
			distance: 0.0,
			index: dimensions.get_index(target),
		});
		let mut settled = 0;
		while let Some(FrontierEntry { distance, index }) = frontier.pop() {
			// a cheaper route was found after this entry was queued
			if distance > self.distances[index] {
				continue;
			}
			settled += 1;
			let cell = dimensions.get_cell_from_index(index);
			for (ordinal, neighbour) in Ordinal::get_all_cell_neighbours(cell, dimensions) {
				let neighbour_cost = cost_field.get_field_cell_value(neighbour);
				// ignore impassable cells
				if !neighbour_cost.is_walkable() {
					continue;
				}
				let candidate = distance + ordinal.get_step_cost() * neighbour_cost.get_cost();
				let n_index = dimensions.get_index(neighbour);
				if candidate < self.distances[n_index] {
					self.distances[n_index] = candidate;
					frontier.push(FrontierEntry {
						distance: candidate,
						index: n_index,
					});
				}
			}
		}
		trace!("Settled {} cells from target {:?}", settled, target.get_xy());
	}
	/// Row-major index of a cell, panics if the cell is outside of the field
	fn index(&self, cell: GridCell) -> usize {
		let height = self.distances.len() / self.width;
		if cell.get_x() >= self.width || cell.get_y() >= height {
			panic!("Cannot access an IntegrationField value, index out of bounds. Asked for x {}, y {}, field width is {}, field height is {}", cell.get_x(), cell.get_y(), self.width, height)
		}
		cell.get_y() * self.width + cell.get_x()
	}
}

impl Field<f32> for IntegrationField {
	/// Get a reference to the field array
	fn get(&self) -> &[f32] {
		&self.distances
	}
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, cell: GridCell) -> f32 {
		self.distances[self.index(cell)]
	}
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: f32, cell: GridCell) {
		let i = self.index(cell);
		self.distances[i] = value;
	}
}
