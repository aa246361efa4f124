//! Errors raised while building or mutating a [crate::prelude::FlowField]
//!
//! Only the configuration variants are fatal, they prevent a field from ever
//! being constructed. Everything else is reported to the caller and leaves
//! the field in a usable state.
//!

/// Failure modes of the flowfield grid
#[derive(Debug, thiserror::Error)]
pub enum FlowFieldError {
	/// A grid must contain at least one cell along each axis
	#[error("invalid grid dimensions `({width}, {height})`, both must be greater than zero")]
	InvalidDimensions {
		/// Requested number of columns
		width: u32,
		/// Requested number of rows
		height: u32,
	},
	/// Cell size must be a finite positive number of world units
	#[error("invalid cell size {0}, must be finite and greater than zero")]
	InvalidCellSize(f32),
	/// The steep terrain multiplier must keep every edge weight at or above `1.0`
	#[error("invalid steep cost {0}, must be finite and at least 1.0")]
	InvalidSteepCost(f32),
	/// A target position resolved to a cell outside of the grid
	#[error("target position x {x}, z {z} lies outside of the grid")]
	TargetOutOfBounds {
		/// World `x` of the rejected target
		x: f32,
		/// World `z` of the rejected target
		z: f32,
	},
	/// A calculation was requested before any target was set
	#[error("no target has been set, cannot calculate the flowfield")]
	NoTarget,
	/// A direct cell edit referenced a cell outside of the grid
	#[error("cell ({x}, {y}) lies outside of the grid")]
	CellOutOfBounds {
		/// Column of the rejected cell
		x: usize,
		/// Row of the rejected cell
		y: usize,
	},
	/// Traversal costs below `1.0` would break the non-negative edge weight
	/// precondition of the solver
	#[error("invalid traversal cost {0}, must be finite and at least 1.0")]
	InvalidCost(f32),
	/// A config or terrain file could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// A config or terrain file was not valid `ron`
	#[cfg(feature = "ron")]
	#[error("RON error: {0}")]
	Ron(#[from] ron::error::SpannedError),
	/// A terrain file was not valid `csv`
	#[cfg(feature = "csv")]
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),
	/// A terrain file did not describe the expected number of cells
	#[error("terrain data has {found} cells, expected {expected}")]
	TerrainSizeMismatch {
		/// Cells required by the declared dimensions
		expected: usize,
		/// Cells actually present
		found: usize,
	},
	/// A terrain file contained a value that isn't a known terrain class code
	#[error("unknown terrain class code {0}")]
	UnknownTerrainClass(u8),
}
