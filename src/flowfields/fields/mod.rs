//! The kinds of fields used by the algorithm. Each is a flat, row-major array
//! with one value per [GridCell]:
//!
//! * [cost_field::CostField] - walkability and traversal cost, written by the
//! walkability sampler
//! * [integration_field::IntegrationField] - accumulated cost-to-target,
//! written by the distance solver
//! * [direction_field::DirectionField] - world-space direction of travel,
//! derived from the integration field
//!

pub mod cost_field;
pub mod direction_field;
pub mod integration_field;

use bevy::prelude::*;

use crate::prelude::*;

/// Defines required access to field arrays
pub trait Field<T> {
	/// Get a reference to the field array
	fn get(&self) -> &[T];
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, cell: GridCell) -> T;
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: T, cell: GridCell);
}

/// A read-only view of everything known about a single cell, assembled from
/// the individual fields
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
	/// Position of the cell in the grid
	pub id: GridCell,
	/// Whether an agent may occupy the cell
	pub walkable: bool,
	/// Traversal cost multiplier, at least `1.0`
	pub cost: f32,
	/// Accumulated cost to the target, `f32::INFINITY` when unreached
	pub distance: f32,
	/// Unit direction towards the target or [Vec3::ZERO]
	pub direction: Vec3,
}

impl Cell {
	/// Whether the distance solver reached this cell from the target
	pub fn is_reached(&self) -> bool {
		self.distance.is_finite()
	}
}
