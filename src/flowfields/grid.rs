//! The grid is a fixed `width x height` array of square cells laid over the
//! horizontal (`x-z`) plane of the world. Cell `(0, 0)` has its corner at the
//! grid `origin` and cells are indexed by `(x, y)` where `x` runs along world
//! `x` and `y` runs along world `z`:
//!
//! ```text
//!  origin (x, z)
//!     o_____________________________  -> +x
//!     |0,0|1,0|2,0|__|__|__|__|__|__|
//!     |0,1|1,1|__|__|__|__|__|__|__|_|
//!     |0,2|__|__|__|__|__|__|__|__|__|
//!     |__|__|__|__|__|__|__|__|__|__|
//!     |
//!     v +z
//! ```
//!
//! Dimensions and cell size never change once a grid exists, a different
//! layout means building a new grid.
//!

use bevy::prelude::*;

use crate::prelude::*;

/// ID of a cell within the grid
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct GridCell((usize, usize));

impl GridCell {
	/// Create a new instance of [GridCell]
	pub fn new(x: usize, y: usize) -> Self {
		GridCell((x, y))
	}
	/// Get the `(x, y)` tuple
	pub fn get_xy(&self) -> (usize, usize) {
		self.0
	}
	/// Get the column
	pub fn get_x(&self) -> usize {
		self.0 .0
	}
	/// Get the row
	pub fn get_y(&self) -> usize {
		self.0 .1
	}
}

/// Identifiers handed to the external samplers describing which spatial
/// layers to probe
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub struct QueryLayers {
	/// Layer the terrain/ground lives on
	pub ground: u32,
	/// Layer obstacles (buildings, props) live on
	pub obstacle: u32,
}

impl Default for QueryLayers {
	fn default() -> Self {
		QueryLayers {
			ground: 0,
			obstacle: 1,
		}
	}
}

/// Settings used to initialise a grid
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(default)
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
	/// Number of cells along world `x`
	pub width: u32,
	/// Number of cells along world `z`
	pub height: u32,
	/// World units per cell side
	pub cell_size: f32,
	/// World position of the corner of cell `(0, 0)`, its `y` is the
	/// reference height reported by [GridDimensions::grid_to_world]
	pub origin: Vec3,
	/// Traversal cost multiplier applied to walkable but unbuildable terrain
	pub steep_cost: f32,
	/// Layers used when probing the environment
	pub layers: QueryLayers,
}

impl Default for GridConfig {
	fn default() -> Self {
		GridConfig {
			width: 64,
			height: 64,
			cell_size: 1.0,
			origin: Vec3::ZERO,
			steep_cost: DEFAULT_STEEP_COST,
			layers: QueryLayers::default(),
		}
	}
}

impl GridConfig {
	/// Create a config with the given layout and default costs/layers
	pub fn new(width: u32, height: u32, cell_size: f32, origin: Vec3) -> Self {
		GridConfig {
			width,
			height,
			cell_size,
			origin,
			..Default::default()
		}
	}
	/// Reject any layout or cost that a grid cannot be built from
	pub fn validate(&self) -> Result<(), FlowFieldError> {
		if self.width == 0 || self.height == 0 {
			return Err(FlowFieldError::InvalidDimensions {
				width: self.width,
				height: self.height,
			});
		}
		if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
			return Err(FlowFieldError::InvalidCellSize(self.cell_size));
		}
		if !self.steep_cost.is_finite() || self.steep_cost < DEFAULT_COST {
			return Err(FlowFieldError::InvalidSteepCost(self.steep_cost));
		}
		Ok(())
	}
	/// From a `ron` file generate the [GridConfig]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> Result<Self, FlowFieldError> {
		let file = std::fs::File::open(path)?;
		let config: GridConfig = ron::de::from_reader(file)?;
		config.validate()?;
		Ok(config)
	}
}

/// The immutable layout of the grid and the mapping between world space and
/// grid space
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct GridDimensions {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// World units per cell side
	cell_size: f32,
	/// World position of the corner of cell `(0, 0)`
	origin: Vec3,
}

impl GridDimensions {
	/// Create a new instance of [GridDimensions], refusing empty grids and
	/// non-positive cell sizes
	pub fn new(width: u32, height: u32, cell_size: f32, origin: Vec3) -> Result<Self, FlowFieldError> {
		GridConfig::new(width, height, cell_size, origin).validate()?;
		Ok(GridDimensions {
			width: width as usize,
			height: height as usize,
			cell_size,
			origin,
		})
	}
	/// Create the dimensions described by a [GridConfig]
	pub fn from_config(config: &GridConfig) -> Result<Self, FlowFieldError> {
		config.validate()?;
		Ok(GridDimensions {
			width: config.width as usize,
			height: config.height as usize,
			cell_size: config.cell_size,
			origin: config.origin,
		})
	}
	/// Number of columns along world `x`
	pub fn get_width(&self) -> usize {
		self.width
	}
	/// Number of rows along world `z`
	pub fn get_height(&self) -> usize {
		self.height
	}
	/// World width of a single square cell
	pub fn get_cell_size(&self) -> f32 {
		self.cell_size
	}
	/// World position of the minimum corner of cell `(0, 0)`
	pub fn get_origin(&self) -> Vec3 {
		self.origin
	}
	/// Total number of cells
	pub fn get_cell_count(&self) -> usize {
		self.width * self.height
	}
	/// Whether `(x, y)` addresses a cell of the grid
	pub fn is_valid_cell(&self, x: i64, y: i64) -> bool {
		x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
	}
	/// Floor a world position into signed grid coordinates. The result may
	/// sit outside of the grid, see [GridDimensions::get_cell_from_world].
	/// [None] if the position isn't finite, positions too far away to fit
	/// are clamped to the `i64` range
	pub fn world_to_grid(&self, position: Vec3) -> Option<(i64, i64)> {
		let x = to_grid_axis(((position.x - self.origin.x) / self.cell_size).floor())?;
		let y = to_grid_axis(((position.z - self.origin.z) / self.cell_size).floor())?;
		Some((x, y))
	}
	/// World position of the centre of a cell at the grid's reference height
	pub fn grid_to_world(&self, cell: GridCell) -> Vec3 {
		// NB: add half a cell to land in the centre rather than on the corner
		Vec3::new(
			self.origin.x + (cell.get_x() as f32 + 0.5) * self.cell_size,
			self.origin.y,
			self.origin.z + (cell.get_y() as f32 + 0.5) * self.cell_size,
		)
	}
	/// From a world position find the [GridCell] it resides in, [None] if it
	/// is outside of the grid
	pub fn get_cell_from_world(&self, position: Vec3) -> Option<GridCell> {
		let (x, y) = self.world_to_grid(position)?;
		if self.is_valid_cell(x, y) {
			Some(GridCell::new(x as usize, y as usize))
		} else {
			None
		}
	}
	/// Row-major index of a cell within flat field storage
	pub fn get_index(&self, cell: GridCell) -> usize {
		cell.get_y() * self.width + cell.get_x()
	}
	/// Inverse of [GridDimensions::get_index]
	pub fn get_cell_from_index(&self, index: usize) -> GridCell {
		GridCell::new(index % self.width, index / self.width)
	}
	/// Inclusive range of cells overlapped by an axis-aligned world-space
	/// rectangle spanning `min` to `max` on the `x-z` plane, clipped to the
	/// grid. [None] if the rectangle misses the grid entirely
	pub fn get_cells_overlapping(&self, min: Vec3, max: Vec3) -> Option<(GridCell, GridCell)> {
		let first_x = to_grid_axis(((min.x - self.origin.x) / self.cell_size).floor())?;
		let first_y = to_grid_axis(((min.z - self.origin.z) / self.cell_size).floor())?;
		// a rectangle whose far edge sits exactly on a cell boundary doesn't
		// overlap the next cell
		let last_x = to_grid_axis(((max.x - self.origin.x) / self.cell_size).ceil())?
			.saturating_sub(1)
			.max(first_x);
		let last_y = to_grid_axis(((max.z - self.origin.z) / self.cell_size).ceil())?
			.saturating_sub(1)
			.max(first_y);
		self.clip_range((first_x, first_y), (last_x, last_y))
	}
	/// Clip a signed inclusive cell range to the grid
	pub fn clip_range(&self, first: (i64, i64), last: (i64, i64)) -> Option<(GridCell, GridCell)> {
		let max_x = self.width as i64 - 1;
		let max_y = self.height as i64 - 1;
		if last.0 < 0 || last.1 < 0 || first.0 > max_x || first.1 > max_y {
			return None;
		}
		let from = GridCell::new(first.0.max(0) as usize, first.1.max(0) as usize);
		let to = GridCell::new(last.0.min(max_x) as usize, last.1.min(max_y) as usize);
		Some((from, to))
	}
}

/// Convert a floored or ceiled grid coordinate into an integer, [None] for
/// NaN and infinities
fn to_grid_axis(value: f32) -> Option<i64> {
	// `as` saturates at the bounds of i64
	value.is_finite().then_some(value as i64)
}
