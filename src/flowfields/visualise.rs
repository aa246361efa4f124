//! Hook for inspecting a [FlowField] after it has been recalculated.
//!
//! Anything implementing [FieldVisualiser] can be handed to
//! [FlowField::visualise], a renderer in the host application could draw
//! gizmo arrows from it. [TextVisualiser] renders the distances and
//! directions into plain text grids and logs them at `debug` level which is
//! usually enough when chasing down an odd path:
//!
//! ```text
//! ↘ ↘ ↓ ↙ ↙
//! ↘ ↘ ↓ ↙ ↙
//! → → o ← ←
//! ↗ ↗ ↑ x x
//! ↗ ↗ ↑ x ·
//! ```
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Receives a [FlowField] each time it is handed over for inspection
pub trait FieldVisualiser {
	/// Inspect the current state of the field
	fn visualise(&mut self, flow_field: &FlowField);
}

/// Renders fields into text grids, one text row per grid row
#[derive(Clone, Debug, Default)]
pub struct TextVisualiser {
	/// Last rendered distances
	distances: String,
	/// Last rendered directions
	directions: String,
}

impl TextVisualiser {
	/// Distances of the last inspected field
	pub fn get_distances(&self) -> &str {
		&self.distances
	}
	/// Directions of the last inspected field
	pub fn get_directions(&self) -> &str {
		&self.directions
	}
}

impl FieldVisualiser for TextVisualiser {
	fn visualise(&mut self, flow_field: &FlowField) {
		let dimensions = flow_field.get_dimensions();
		self.distances = render_distances(
			flow_field.get_integration_field(),
			flow_field.get_cost_field(),
			dimensions,
		);
		self.directions = render_directions(
			flow_field.get_direction_field(),
			flow_field.get_integration_field(),
			flow_field.get_cost_field(),
			dimensions,
		);
		debug!(
			"FlowField generation {}\n{}\n{}",
			flow_field.get_generation(),
			self.distances,
			self.directions
		);
	}
}

/// Render each distance to one decimal place, `x` marks unwalkable cells and
/// `-` cells that were never reached
pub fn render_distances(
	integration_field: &IntegrationField,
	cost_field: &CostField,
	dimensions: &GridDimensions,
) -> String {
	let mut rows = Vec::with_capacity(dimensions.get_height());
	for y in 0..dimensions.get_height() {
		let mut row = Vec::with_capacity(dimensions.get_width());
		for x in 0..dimensions.get_width() {
			let cell = GridCell::new(x, y);
			let distance = integration_field.get_field_cell_value(cell);
			let text = if !cost_field.is_walkable(cell) && distance != 0.0 {
				"x".to_string()
			} else if distance.is_finite() {
				format!("{:.1}", distance)
			} else {
				"-".to_string()
			};
			row.push(format!("{:>5}", text));
		}
		rows.push(row.join(""));
	}
	rows.join("\n")
}

/// Render each direction as an arrow, `o` marks the target, `x` unwalkable
/// cells and `·` cells without a way forward
pub fn render_directions(
	direction_field: &DirectionField,
	integration_field: &IntegrationField,
	cost_field: &CostField,
	dimensions: &GridDimensions,
) -> String {
	let mut rows = Vec::with_capacity(dimensions.get_height());
	for y in 0..dimensions.get_height() {
		let mut row = Vec::with_capacity(dimensions.get_width());
		for x in 0..dimensions.get_width() {
			let cell = GridCell::new(x, y);
			let glyph = if integration_field.get_field_cell_value(cell) == 0.0 {
				'o'
			} else if !cost_field.is_walkable(cell) {
				'x'
			} else {
				get_arrow(direction_field.get_field_cell_value(cell))
			};
			row.push(glyph.to_string());
		}
		rows.push(row.join(" "));
	}
	rows.join("\n")
}

/// Arrow glyph for a world-space direction, `-z` is drawn as up
pub fn get_arrow(direction: Vec3) -> char {
	let dx = sign(direction.x);
	let dz = sign(direction.z);
	match (dx, dz) {
		(0, -1) => '↑',
		(1, -1) => '↗',
		(1, 0) => '→',
		(1, 1) => '↘',
		(0, 1) => '↓',
		(-1, 1) => '↙',
		(-1, 0) => '←',
		(-1, -1) => '↖',
		_ => '·',
	}
}

/// Sign of a component, treating tiny values as zero
fn sign(value: f32) -> i32 {
	if value > f32::EPSILON {
		1
	} else if value < -f32::EPSILON {
		-1
	} else {
		0
	}
}
