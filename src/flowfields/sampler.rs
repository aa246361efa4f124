//! Converts what the world knows about its terrain and obstacles into the
//! walkability and traversal cost of each cell.
//!
//! Two narrow capabilities are injected, a [TerrainSampler] describing the
//! ground and an [ObstacleSampler] describing what has been placed on it. The
//! probe for each cell is taken at the world-space centre of the cell:
//!
//! * off the terrain (outside its bounds or without a height) - unwalkable
//! * water - unwalkable
//! * occupied by an obstacle - unwalkable
//! * walkable but not buildable (steep) - walkable with the steep cost
//! * otherwise - walkable with a cost of `1`
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Read access to the terrain the grid is laid over. Positions are world
/// space `x` and `z`
pub trait TerrainSampler: Send + Sync {
	/// Height of the ground, [None] signals a position off the map
	fn height_at(&self, x: f32, z: f32) -> Option<f32>;
	/// Whether the position is covered by water
	fn is_water_at(&self, x: f32, z: f32) -> bool;
	/// Whether something could be built at the position, unbuildable ground
	/// is still walkable but costs more to cross
	fn is_buildable_at(&self, x: f32, z: f32) -> bool;
	/// Whether the position lies within the terrain
	fn is_within_bounds(&self, x: f32, z: f32) -> bool;
}

/// Read access to whatever occupies space above the terrain
pub trait ObstacleSampler: Send + Sync {
	/// Whether an obstacle on `layers.obstacle` occupies `position`, the
	/// position sits on the ground at the centre of the cell being probed
	fn occupied_at(&self, position: Vec3, layers: &QueryLayers) -> bool;
}

/// Classifies cells of a [CostField] from a [TerrainSampler] and an
/// [ObstacleSampler]
pub struct WalkabilitySampler {
	/// Terrain classification source
	terrain: Box<dyn TerrainSampler>,
	/// Obstacle occupancy source
	obstacles: Box<dyn ObstacleSampler>,
}

impl Default for WalkabilitySampler {
	/// Flat buildable terrain everywhere with nothing placed on it
	fn default() -> Self {
		WalkabilitySampler::new(OpenTerrain, NoObstacles)
	}
}

impl std::fmt::Debug for WalkabilitySampler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WalkabilitySampler").finish_non_exhaustive()
	}
}

impl WalkabilitySampler {
	/// Create a new instance of [WalkabilitySampler]
	pub fn new(
		terrain: impl TerrainSampler + 'static,
		obstacles: impl ObstacleSampler + 'static,
	) -> Self {
		WalkabilitySampler {
			terrain: Box::new(terrain),
			obstacles: Box::new(obstacles),
		}
	}
	/// Classify the cell centred at `position`
	pub fn sample(&self, position: Vec3, steep_cost: f32, layers: &QueryLayers) -> CellCost {
		let (x, z) = (position.x, position.z);
		if !self.terrain.is_within_bounds(x, z) {
			return CellCost::unwalkable();
		}
		let Some(height) = self.terrain.height_at(x, z) else {
			return CellCost::unwalkable();
		};
		if self.terrain.is_water_at(x, z) {
			return CellCost::unwalkable();
		}
		if self
			.obstacles
			.occupied_at(Vec3::new(x, height, z), layers)
		{
			return CellCost::unwalkable();
		}
		let cost = if self.terrain.is_buildable_at(x, z) {
			DEFAULT_COST
		} else {
			steep_cost
		};
		// steep_cost has been validated by the grid config
		CellCost::new(true, cost).unwrap_or_default()
	}
	/// Re-sample every cell within the inclusive range `from..=to`, returns
	/// the number of cells sampled
	pub fn refresh_range(
		&self,
		cost_field: &mut CostField,
		dimensions: &GridDimensions,
		config: &GridConfig,
		from: GridCell,
		to: GridCell,
	) -> usize {
		let mut sampled = 0;
		for y in from.get_y()..=to.get_y() {
			for x in from.get_x()..=to.get_x() {
				let cell = GridCell::new(x, y);
				let position = dimensions.grid_to_world(cell);
				let value = self.sample(position, config.steep_cost, &config.layers);
				cost_field.set_field_cell_value(value, cell);
				sampled += 1;
			}
		}
		sampled
	}
	/// Re-sample every cell of the grid
	pub fn refresh_all(
		&self,
		cost_field: &mut CostField,
		dimensions: &GridDimensions,
		config: &GridConfig,
	) -> usize {
		let last = GridCell::new(dimensions.get_width() - 1, dimensions.get_height() - 1);
		self.refresh_range(cost_field, dimensions, config, GridCell::new(0, 0), last)
	}
	/// Re-sample the square window of cells around `center`. The window
	/// reaches `ceil(radius / cell_size) + 1` cells out from the centre cell
	/// and is clipped to the grid, returns the number of cells sampled
	pub fn refresh_window(
		&self,
		cost_field: &mut CostField,
		dimensions: &GridDimensions,
		config: &GridConfig,
		center: Vec3,
		radius: f32,
	) -> usize {
		let cell_radius = get_cell_radius(radius, dimensions.get_cell_size());
		let Some((cx, cy)) = dimensions.world_to_grid(center) else {
			return 0;
		};
		match dimensions.clip_range(
			(cx.saturating_sub(cell_radius), cy.saturating_sub(cell_radius)),
			(cx.saturating_add(cell_radius), cy.saturating_add(cell_radius)),
		) {
			Some((from, to)) => self.refresh_range(cost_field, dimensions, config, from, to),
			None => 0,
		}
	}
}

/// Number of cells a world-space radius spans, padded by one cell so
/// footprints straddling a cell boundary are fully covered
pub fn get_cell_radius(radius: f32, cell_size: f32) -> i64 {
	let radius = if radius.is_nan() { 0.0 } else { radius.max(0.0) };
	// `as` saturates so a huge radius just covers the whole grid
	((radius / cell_size).ceil() as i64).saturating_add(1)
}
