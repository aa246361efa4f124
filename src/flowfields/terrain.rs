//! Ready made [TerrainSampler] and [ObstacleSampler] implementations.
//!
//! [OpenTerrain] and [NoObstacles] describe an empty flat world and are what
//! a default [WalkabilitySampler] is built from. [RasterTerrain] classifies
//! terrain from a per-cell raster of [TerrainClass] codes, which can be
//! authored by hand or loaded from `ron`/`csv` files, and [ObstacleSet]
//! tracks rectangular footprints of placed objects.
//!
//! A raster in csv form is one row per line, `0` is off the map, `1` is
//! buildable ground, `2` is steep ground and `3` is water:
//!
//! ```text
//! 1,1,1,3,3
//! 1,2,2,3,3
//! 1,1,1,1,0
//! ```
//!

use bevy::prelude::*;

use crate::prelude::*;

/// Flat, dry, buildable terrain without edges
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenTerrain;

impl TerrainSampler for OpenTerrain {
	fn height_at(&self, _x: f32, _z: f32) -> Option<f32> {
		Some(0.0)
	}
	fn is_water_at(&self, _x: f32, _z: f32) -> bool {
		false
	}
	fn is_buildable_at(&self, _x: f32, _z: f32) -> bool {
		true
	}
	fn is_within_bounds(&self, _x: f32, _z: f32) -> bool {
		true
	}
}

/// Nothing placed anywhere
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObstacles;

impl ObstacleSampler for NoObstacles {
	fn occupied_at(&self, _position: Vec3, _layers: &QueryLayers) -> bool {
		false
	}
}

/// Classification of a patch of terrain
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum TerrainClass {
	/// No ground at all
	OffMap,
	/// Flat ground that can be walked and built upon
	#[default]
	Buildable,
	/// Walkable but too steep to build upon
	Steep,
	/// Covered by water
	Water,
}

impl TryFrom<u8> for TerrainClass {
	type Error = FlowFieldError;
	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(TerrainClass::OffMap),
			1 => Ok(TerrainClass::Buildable),
			2 => Ok(TerrainClass::Steep),
			3 => Ok(TerrainClass::Water),
			_ => Err(FlowFieldError::UnknownTerrainClass(value)),
		}
	}
}

/// Terrain described by a row-major raster of [TerrainClass]. Raster cells
/// need not line up with grid cells, each probe looks up the raster cell
/// it lands in
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RasterTerrain {
	/// Number of raster columns along world `x`
	width: usize,
	/// Number of raster rows along world `z`
	height: usize,
	/// World units per raster cell side
	cell_size: f32,
	/// World `x` and `z` of the corner of raster cell `(0, 0)`
	origin: Vec2,
	/// Height reported for any position that has ground
	#[cfg_attr(feature = "serde", serde(default))]
	ground_height: f32,
	/// Row-major classes
	classes: Vec<TerrainClass>,
}

impl RasterTerrain {
	/// Create a new [RasterTerrain], the number of `classes` must match
	/// `width * height`
	pub fn new(
		width: usize,
		height: usize,
		cell_size: f32,
		origin: Vec2,
		classes: Vec<TerrainClass>,
	) -> Result<Self, FlowFieldError> {
		let terrain = RasterTerrain {
			width,
			height,
			cell_size,
			origin,
			ground_height: 0.0,
			classes,
		};
		terrain.validate()?;
		Ok(terrain)
	}
	/// Override the height reported for ground
	pub fn with_ground_height(mut self, ground_height: f32) -> Self {
		self.ground_height = ground_height;
		self
	}
	/// Check the raster is internally consistent
	fn validate(&self) -> Result<(), FlowFieldError> {
		if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
			return Err(FlowFieldError::InvalidCellSize(self.cell_size));
		}
		let expected = self.width * self.height;
		if self.classes.len() != expected {
			return Err(FlowFieldError::TerrainSizeMismatch {
				expected,
				found: self.classes.len(),
			});
		}
		Ok(())
	}
	/// Number of raster columns
	pub fn get_width(&self) -> usize {
		self.width
	}
	/// Number of raster rows
	pub fn get_height(&self) -> usize {
		self.height
	}
	/// Class of the raster cell containing world `x`, `z`, [None] outside of
	/// the raster
	pub fn get_class(&self, x: f32, z: f32) -> Option<TerrainClass> {
		let column = ((x - self.origin.x) / self.cell_size).floor();
		let row = ((z - self.origin.y) / self.cell_size).floor();
		if !column.is_finite() || !row.is_finite() || column < 0.0 || row < 0.0 {
			return None;
		}
		let (column, row) = (column as usize, row as usize);
		if column >= self.width || row >= self.height {
			return None;
		}
		self.classes.get(row * self.width + column).copied()
	}
	/// Overwrite the class of a single raster cell
	pub fn set_class(&mut self, class: TerrainClass, column: usize, row: usize) -> Result<(), FlowFieldError> {
		if column >= self.width || row >= self.height {
			return Err(FlowFieldError::CellOutOfBounds { x: column, y: row });
		}
		self.classes[row * self.width + column] = class;
		Ok(())
	}
	/// From a `ron` file generate the [RasterTerrain]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> Result<Self, FlowFieldError> {
		let file = std::fs::File::open(path)?;
		let terrain: RasterTerrain = ron::de::from_reader(file)?;
		terrain.validate()?;
		Ok(terrain)
	}
	/// From a `csv` file of class codes generate the [RasterTerrain], the
	/// number of rows and columns in the file sets its size
	#[cfg(feature = "csv")]
	pub fn from_csv(path: &str, cell_size: f32, origin: Vec2) -> Result<Self, FlowFieldError> {
		let data = std::fs::File::open(path)?;
		let mut rdr = csv::ReaderBuilder::new()
			.has_headers(false)
			.from_reader(data);
		let mut width = 0;
		let mut height = 0;
		let mut classes = Vec::new();
		for record in rdr.records() {
			let codes: Vec<u8> = record?.deserialize(None)?;
			width = codes.len();
			height += 1;
			for code in codes {
				classes.push(TerrainClass::try_from(code)?);
			}
		}
		RasterTerrain::new(width, height, cell_size, origin, classes)
	}
}

impl TerrainSampler for RasterTerrain {
	fn height_at(&self, x: f32, z: f32) -> Option<f32> {
		match self.get_class(x, z)? {
			TerrainClass::OffMap => None,
			_ => Some(self.ground_height),
		}
	}
	fn is_water_at(&self, x: f32, z: f32) -> bool {
		self.get_class(x, z) == Some(TerrainClass::Water)
	}
	fn is_buildable_at(&self, x: f32, z: f32) -> bool {
		self.get_class(x, z) == Some(TerrainClass::Buildable)
	}
	fn is_within_bounds(&self, x: f32, z: f32) -> bool {
		self.get_class(x, z).is_some()
	}
}

/// Axis-aligned rectangle on the `x-z` plane occupied by something placed in
/// the world
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct Footprint {
	/// World position of the centre of the footprint
	center: Vec3,
	/// Half the extent along world `x` and `z`
	half_extents: Vec2,
	/// Layer the footprint lives on
	layer: u32,
}

impl Footprint {
	/// Create a new [Footprint] of full `size` (`x`, `z`) centred on `center`
	pub fn new(center: Vec3, size: Vec2, layer: u32) -> Self {
		Footprint {
			center,
			half_extents: size.abs() / 2.0,
			layer,
		}
	}
	/// World position at the centre of the footprint
	pub fn get_center(&self) -> Vec3 {
		self.center
	}
	/// Full size along world `x` and `z`
	pub fn get_size(&self) -> Vec2 {
		self.half_extents * 2.0
	}
	/// Collision layer the footprint occupies
	pub fn get_layer(&self) -> u32 {
		self.layer
	}
	/// Whether `position` lies strictly inside the footprint
	pub fn contains(&self, position: Vec3) -> bool {
		(position.x - self.center.x).abs() < self.half_extents.x
			&& (position.z - self.center.z).abs() < self.half_extents.y
	}
}

/// A collection of [Footprint]s
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleSet {
	/// Every footprint currently placed
	footprints: Vec<Footprint>,
}

impl ObstacleSet {
	/// Create a new instance of [ObstacleSet] from existing footprints
	pub fn new(footprints: Vec<Footprint>) -> Self {
		ObstacleSet { footprints }
	}
	/// Add a footprint
	pub fn insert(&mut self, footprint: Footprint) {
		self.footprints.push(footprint);
	}
	/// Remove every footprint equal to `footprint`, returns whether any were
	/// removed
	pub fn remove(&mut self, footprint: &Footprint) -> bool {
		let before = self.footprints.len();
		self.footprints.retain(|f| f != footprint);
		before != self.footprints.len()
	}
	/// Every footprint currently placed
	pub fn get(&self) -> &[Footprint] {
		&self.footprints
	}
	/// Whether no footprints are placed
	pub fn is_empty(&self) -> bool {
		self.footprints.is_empty()
	}
}

impl ObstacleSampler for ObstacleSet {
	fn occupied_at(&self, position: Vec3, layers: &QueryLayers) -> bool {
		self.footprints
			.iter()
			.any(|f| f.layer == layers.obstacle && f.contains(position))
	}
}
