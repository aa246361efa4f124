//! The [FlowField] resource owns the grid and every field built on top of it.
//!
//! It is the only place the fields are mutated from. Writes go through
//! `&mut FlowField` (in Bevy through `ResMut<FlowField>`) while any number of
//! actors read directions through `&FlowField`. The field carries a validity
//! flag, cleared by every walkability edit or target change and set again
//! by a successful calculation, so a reader can never act on stale
//! directions:
//!
//! ```text
//!  set_target ──> compute_flow_field ──> field computed ──> get_flow_direction
//!       ^                                      │
//!       └── full_refresh/windowed_refresh/mark_area/set_cell_cost (stale)
//! ```
//!
//! Each successful calculation also increments a generation counter which
//! readers can cache to notice that the field has been replaced.
//!

use bevy::prelude::*;

use crate::prelude::*;

/// A single target flowfield over a weighted grid
#[derive(Resource, Debug)]
pub struct FlowField {
	/// Settings the grid was built from
	config: GridConfig,
	/// Layout of the grid, derived from `config`
	dimensions: GridDimensions,
	/// Walkability and traversal cost of each cell
	cost_field: CostField,
	/// Cost-to-target of each cell
	integration_field: IntegrationField,
	/// Direction of travel of each cell
	direction_field: DirectionField,
	/// Source of walkability for refreshes
	sampler: WalkabilitySampler,
	/// World position of the target and the cell it resolved to
	target: Option<(Vec3, GridCell)>,
	/// Whether the integration and direction fields reflect the current
	/// target and walkability
	field_computed: bool,
	/// Number of successful calculations
	generation: u64,
}

impl FlowField {
	/// Create a new [FlowField] where every cell is walkable with the default
	/// cost, the environment is sampled from flat open terrain until a
	/// different sampler is provided
	pub fn new(config: GridConfig) -> Result<Self, FlowFieldError> {
		FlowField::with_sampler(config, WalkabilitySampler::default())
	}
	/// Create a new [FlowField] reading the environment from `sampler`. The
	/// cells start out walkable, run [FlowField::full_refresh] to classify
	/// them
	pub fn with_sampler(config: GridConfig, sampler: WalkabilitySampler) -> Result<Self, FlowFieldError> {
		let dimensions = GridDimensions::from_config(&config)?;
		Ok(FlowField {
			config,
			dimensions,
			cost_field: CostField::new(&dimensions),
			integration_field: IntegrationField::new(&dimensions),
			direction_field: DirectionField::new(&dimensions),
			sampler,
			target: None,
			field_computed: false,
			generation: 0,
		})
	}
	/// Create a new [FlowField] from a [GridConfig] stored in a `ron` file
	#[cfg(feature = "ron")]
	pub fn new_from_disk(path: &str) -> Result<Self, FlowFieldError> {
		let config = GridConfig::from_ron(path)?;
		FlowField::new(config)
	}
	/// Rebuild the grid with a new layout. Every cell returns to its default
	/// state and the target is forgotten. An invalid `config` is rejected
	/// and the existing grid is left as it was
	pub fn reinitialize(&mut self, config: GridConfig) -> Result<(), FlowFieldError> {
		let dimensions = GridDimensions::from_config(&config)?;
		self.config = config;
		self.dimensions = dimensions;
		self.cost_field = CostField::new(&dimensions);
		self.integration_field = IntegrationField::new(&dimensions);
		self.direction_field = DirectionField::new(&dimensions);
		self.target = None;
		self.field_computed = false;
		debug!(
			"Reinitialised FlowField to {}x{} cells of size {}",
			dimensions.get_width(),
			dimensions.get_height(),
			dimensions.get_cell_size()
		);
		Ok(())
	}
	/// Replace the source of walkability used by later refreshes
	pub fn set_sampler(&mut self, sampler: WalkabilitySampler) {
		self.sampler = sampler;
	}
	/// Settings the grid was built from
	pub fn get_config(&self) -> &GridConfig {
		&self.config
	}
	/// Layout of the grid
	pub fn get_dimensions(&self) -> &GridDimensions {
		&self.dimensions
	}
	/// Walkability and cost of every cell
	pub fn get_cost_field(&self) -> &CostField {
		&self.cost_field
	}
	/// Cost-to-target of every cell, only meaningful while
	/// [FlowField::is_field_computed]
	pub fn get_integration_field(&self) -> &IntegrationField {
		&self.integration_field
	}
	/// Direction of travel of every cell, only meaningful while
	/// [FlowField::is_field_computed]
	pub fn get_direction_field(&self) -> &DirectionField {
		&self.direction_field
	}
	/// Whether the directions can be trusted
	pub fn is_field_computed(&self) -> bool {
		self.field_computed
	}
	/// Number of successful calculations since creation
	pub fn get_generation(&self) -> u64 {
		self.generation
	}
	/// World position of the current target
	pub fn get_target(&self) -> Option<Vec3> {
		self.target.map(|(position, _)| position)
	}
	/// Cell of the current target
	pub fn get_target_cell(&self) -> Option<GridCell> {
		self.target.map(|(_, cell)| cell)
	}
	/// Mark the integration and direction fields as out of date
	fn invalidate(&mut self) {
		self.field_computed = false;
	}
	/// Point the field at a new target. The fields are not recalculated until
	/// [FlowField::compute_flow_field] is called. A `position` outside of the
	/// grid is rejected, the previous target is kept but the field is still
	/// marked as out of date
	pub fn set_target(&mut self, position: Vec3) -> Result<GridCell, FlowFieldError> {
		self.invalidate();
		match self.dimensions.get_cell_from_world(position) {
			Some(cell) => {
				self.target = Some((position, cell));
				Ok(cell)
			}
			None => {
				error!(
					"Target {:?} is outside of the FlowField, cannot calculate a field",
					position
				);
				Err(FlowFieldError::TargetOutOfBounds {
					x: position.x,
					z: position.z,
				})
			}
		}
	}
	/// Calculate the integration field and then the direction field towards
	/// the current target from the current walkability
	pub fn compute_flow_field(&mut self) -> Result<(), FlowFieldError> {
		let Some((_, target)) = self.target else {
			error!("No target has been set, cannot calculate a field");
			return Err(FlowFieldError::NoTarget);
		};
		self.integration_field
			.calculate_field(target, &self.cost_field, &self.dimensions);
		self.direction_field
			.calculate(&self.integration_field, &self.cost_field, &self.dimensions);
		self.field_computed = true;
		self.generation += 1;
		debug!(
			"Calculated FlowField generation {} towards {:?}, {} of {} cells reached",
			self.generation,
			target.get_xy(),
			self.integration_field.count_reached(),
			self.dimensions.get_cell_count()
		);
		Ok(())
	}
	/// Set a new target and calculate the fields towards it in one go
	pub fn compute_flow_field_to(&mut self, position: Vec3) -> Result<(), FlowFieldError> {
		self.set_target(position)?;
		self.compute_flow_field()
	}
	/// Re-sample the walkability of every cell, returns the number of cells
	/// sampled
	pub fn full_refresh(&mut self) -> usize {
		let sampled = self
			.sampler
			.refresh_all(&mut self.cost_field, &self.dimensions, &self.config);
		self.invalidate();
		debug!(
			"Full walkability refresh, {} of {} cells walkable",
			self.cost_field.count_walkable(),
			sampled
		);
		sampled
	}
	/// Re-sample the walkability of cells within `radius` of `center`,
	/// returns the number of cells sampled
	pub fn windowed_refresh(&mut self, center: Vec3, radius: f32) -> usize {
		let sampled = self.sampler.refresh_window(
			&mut self.cost_field,
			&self.dimensions,
			&self.config,
			center,
			radius,
		);
		self.invalidate();
		debug!(
			"Windowed walkability refresh around {:?} with radius {}, {} cells sampled",
			center, radius, sampled
		);
		sampled
	}
	/// Force every cell overlapped by the rectangle centred on `position`
	/// spanning `size` (`x`, `z`) to `walkable` without sampling the
	/// environment. Cell costs are kept. Returns the number of cells changed
	pub fn mark_area(&mut self, position: Vec3, size: Vec2, walkable: bool) -> usize {
		self.invalidate();
		let half = size.abs() / 2.0;
		let min = Vec3::new(position.x - half.x, position.y, position.z - half.y);
		let max = Vec3::new(position.x + half.x, position.y, position.z + half.y);
		let Some((from, to)) = self.dimensions.get_cells_overlapping(min, max) else {
			trace!("Marked area at {:?} lies outside of the FlowField", position);
			return 0;
		};
		let mut marked = 0;
		for y in from.get_y()..=to.get_y() {
			for x in from.get_x()..=to.get_x() {
				self.cost_field.set_walkable(walkable, GridCell::new(x, y));
				marked += 1;
			}
		}
		debug!(
			"Marked {} cells around {:?} as walkable: {}",
			marked, position, walkable
		);
		marked
	}
	/// Overwrite the walkability and cost of a single cell
	pub fn set_cell_cost(&mut self, cell: GridCell, walkable: bool, cost: f32) -> Result<(), FlowFieldError> {
		if !self
			.dimensions
			.is_valid_cell(cell.get_x() as i64, cell.get_y() as i64)
		{
			error!("Cannot set the cost of {:?}, it is outside of the FlowField", cell.get_xy());
			return Err(FlowFieldError::CellOutOfBounds {
				x: cell.get_x(),
				y: cell.get_y(),
			});
		}
		let value = CellCost::new(walkable, cost).inspect_err(|e| error!("{}", e))?;
		self.cost_field.set_field_cell_value(value, cell);
		self.invalidate();
		Ok(())
	}
	/// Direction to move from `position` to approach the target, [Vec3::ZERO]
	/// when the field is out of date, the position is outside of the grid or
	/// there is no way forward
	pub fn get_flow_direction(&self, position: Vec3) -> Vec3 {
		if !self.field_computed {
			return Vec3::ZERO;
		}
		match self.dimensions.get_cell_from_world(position) {
			Some(cell) => self.direction_field.get_field_cell_value(cell),
			None => Vec3::ZERO,
		}
	}
	/// Whether `position` lies on a walkable cell. Walkability doesn't
	/// depend on the target so this is answered even while the field is out
	/// of date
	pub fn is_position_walkable(&self, position: Vec3) -> bool {
		match self.dimensions.get_cell_from_world(position) {
			Some(cell) => self.cost_field.is_walkable(cell),
			None => false,
		}
	}
	/// Cost-to-target from `position`, [None] when the field is out of date or
	/// the position is outside of the grid. Unreachable cells report
	/// `f32::INFINITY`
	pub fn get_distance(&self, position: Vec3) -> Option<f32> {
		if !self.field_computed {
			return None;
		}
		let cell = self.dimensions.get_cell_from_world(position)?;
		Some(self.integration_field.get_field_cell_value(cell))
	}
	/// Everything known about a cell, [None] if it is outside of the grid.
	/// While the field is out of date the distance is reported as
	/// unreached and the direction as zero
	pub fn get_cell(&self, cell: GridCell) -> Option<Cell> {
		if !self
			.dimensions
			.is_valid_cell(cell.get_x() as i64, cell.get_y() as i64)
		{
			return None;
		}
		let cost = self.cost_field.get_field_cell_value(cell);
		let (distance, direction) = if self.field_computed {
			(
				self.integration_field.get_field_cell_value(cell),
				self.direction_field.get_field_cell_value(cell),
			)
		} else {
			(f32::INFINITY, Vec3::ZERO)
		};
		Some(Cell {
			id: cell,
			walkable: cost.is_walkable(),
			cost: cost.get_cost(),
			distance,
			direction,
		})
	}
	/// Hand the field to a [FieldVisualiser] for inspection
	pub fn visualise(&self, visualiser: &mut impl FieldVisualiser) {
		visualiser.visualise(self);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	/// World position of the centre of cell `(x, y)` on a unit grid at the
	/// world origin
	fn centre(x: usize, y: usize) -> Vec3 {
		Vec3::new(x as f32 + 0.5, 0.0, y as f32 + 0.5)
	}
	fn five_by_five() -> FlowField {
		FlowField::new(GridConfig::new(5, 5, 1.0, Vec3::ZERO)).unwrap()
	}
	fn distance(flow_field: &FlowField, x: usize, y: usize) -> f32 {
		flow_field.get_distance(centre(x, y)).unwrap()
	}
	#[test]
	fn invalid_config_rejected() {
		assert!(matches!(
			FlowField::new(GridConfig::new(0, 5, 1.0, Vec3::ZERO)),
			Err(FlowFieldError::InvalidDimensions { .. })
		));
		assert!(matches!(
			FlowField::new(GridConfig::new(5, 5, 0.0, Vec3::ZERO)),
			Err(FlowFieldError::InvalidCellSize(_))
		));
		assert!(matches!(
			FlowField::new(GridConfig::new(5, 5, -1.0, Vec3::ZERO)),
			Err(FlowFieldError::InvalidCellSize(_))
		));
	}
	#[test]
	fn open_grid() {
		let mut flow_field = five_by_five();
		flow_field.compute_flow_field_to(centre(2, 2)).unwrap();
		assert!(flow_field.is_field_computed());
		assert_eq!(0.0, distance(&flow_field, 2, 2));
		for (x, y) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
			assert_eq!(1.0, distance(&flow_field, x, y));
		}
		assert!((distance(&flow_field, 1, 1) - std::f32::consts::SQRT_2).abs() < 1e-6);
		assert_eq!(Vec3::X, flow_field.get_flow_direction(centre(0, 2)));
		assert_eq!(Vec3::ZERO, flow_field.get_flow_direction(centre(2, 2)));
	}
	#[test]
	fn blocked_cell_routed_around() {
		let mut flow_field = five_by_five();
		flow_field.compute_flow_field_to(centre(2, 2)).unwrap();
		let open_distance = distance(&flow_field, 2, 0);
		let open_direction = flow_field.get_flow_direction(centre(2, 0));
		assert_eq!(Vec3::Z, open_direction);
		flow_field.set_cell_cost(GridCell::new(2, 1), false, 1.0).unwrap();
		flow_field.compute_flow_field().unwrap();
		let blocked_distance = distance(&flow_field, 2, 0);
		assert!(blocked_distance > open_distance);
		assert!((blocked_distance - 2.0 * std::f32::consts::SQRT_2).abs() < 1e-6);
		let blocked_direction = flow_field.get_flow_direction(centre(2, 0));
		assert_ne!(open_direction, blocked_direction);
		assert!((blocked_direction - Vec3::new(1.0, 0.0, 1.0).normalize()).length() < 1e-6);
	}
	#[test]
	fn isolated_cell() {
		let mut flow_field = five_by_five();
		for (x, y) in [(3, 3), (3, 4), (4, 3)] {
			flow_field.mark_area(centre(x, y), Vec2::splat(0.5), false);
		}
		flow_field.compute_flow_field_to(centre(2, 2)).unwrap();
		assert_eq!(f32::INFINITY, distance(&flow_field, 4, 4));
		assert_eq!(Vec3::ZERO, flow_field.get_flow_direction(centre(4, 4)));
		let cell = flow_field.get_cell(GridCell::new(4, 4)).unwrap();
		assert!(cell.walkable);
		assert!(!cell.is_reached());
	}
	#[test]
	fn out_of_bounds_target_leaves_field() {
		let mut flow_field = five_by_five();
		flow_field.compute_flow_field_to(centre(2, 2)).unwrap();
		let before = flow_field.get_integration_field().clone();
		let result = flow_field.compute_flow_field_to(Vec3::new(-0.5, 0.0, 2.5));
		assert!(matches!(result, Err(FlowFieldError::TargetOutOfBounds { .. })));
		assert!(!flow_field.is_field_computed());
		assert_eq!(&before, flow_field.get_integration_field());
		assert_eq!(Some(centre(2, 2)), flow_field.get_target());
		assert_eq!(1, flow_field.get_generation());
	}
	#[test]
	fn compute_without_target() {
		let mut flow_field = five_by_five();
		assert!(matches!(
			flow_field.compute_flow_field(),
			Err(FlowFieldError::NoTarget)
		));
		assert_eq!(0, flow_field.get_generation());
	}
	#[test]
	fn queries_before_compute() {
		let mut flow_field = five_by_five();
		flow_field.set_target(centre(2, 2)).unwrap();
		assert_eq!(Vec3::ZERO, flow_field.get_flow_direction(centre(0, 2)));
		assert_eq!(None, flow_field.get_distance(centre(0, 2)));
		assert!(flow_field.is_position_walkable(centre(0, 2)));
		assert!(!flow_field.is_position_walkable(Vec3::new(5.0, 0.0, 0.5)));
		assert!(!flow_field.is_position_walkable(Vec3::new(-0.01, 0.0, 0.5)));
	}
	#[test]
	fn every_mutation_invalidates() {
		let mut flow_field = five_by_five();
		let mutations: [fn(&mut FlowField); 5] = [
			|f| {
				f.full_refresh();
			},
			|f| {
				f.windowed_refresh(centre(1, 1), 1.0);
			},
			|f| {
				f.mark_area(centre(4, 0), Vec2::ONE, false);
			},
			|f| {
				f.set_cell_cost(GridCell::new(0, 4), true, 3.0).unwrap();
			},
			|f| {
				f.set_target(centre(1, 3)).unwrap();
			},
		];
		for mutate in mutations {
			flow_field.compute_flow_field_to(centre(2, 2)).unwrap();
			assert_ne!(Vec3::ZERO, flow_field.get_flow_direction(centre(0, 0)));
			mutate(&mut flow_field);
			assert!(!flow_field.is_field_computed());
			assert_eq!(Vec3::ZERO, flow_field.get_flow_direction(centre(0, 0)));
		}
		assert_eq!(5, flow_field.get_generation());
	}
	#[test]
	fn far_off_grid_edits_clipped() {
		let mut flow_field = five_by_five();
		assert_eq!(0, flow_field.mark_area(Vec3::new(-1e20, 0.0, 0.5), Vec2::ONE, false));
		assert_eq!(0, flow_field.windowed_refresh(Vec3::new(1e20, 0.0, 0.5), 1.0));
		assert_eq!(25, flow_field.windowed_refresh(centre(2, 2), f32::MAX));
		assert_eq!(25, flow_field.mark_area(centre(2, 2), Vec2::splat(1e20), false));
		assert_eq!(0, flow_field.get_cost_field().count_walkable());
	}
	#[test]
	fn non_finite_positions_off_grid() {
		let mut flow_field =
			FlowField::new(GridConfig::new(5, 5, 1.0, Vec3::new(10.0, 0.0, 10.0))).unwrap();
		flow_field
			.compute_flow_field_to(Vec3::new(14.5, 0.0, 14.5))
			.unwrap();
		let nan = Vec3::new(f32::NAN, 0.0, f32::NAN);
		assert_eq!(Vec3::ZERO, flow_field.get_flow_direction(nan));
		assert!(!flow_field.is_position_walkable(nan));
		assert_eq!(None, flow_field.get_distance(nan));
		assert!(matches!(
			flow_field.compute_flow_field_to(nan),
			Err(FlowFieldError::TargetOutOfBounds { .. })
		));
		assert_eq!(Some(GridCell::new(4, 4)), flow_field.get_target_cell());
		assert_eq!(0, flow_field.mark_area(Vec3::new(12.5, 0.0, 12.5), Vec2::splat(f32::NAN), false));
		assert_eq!(0, flow_field.mark_area(nan, Vec2::ONE, false));
		assert_eq!(25, flow_field.get_cost_field().count_walkable());
		assert_eq!(0, flow_field.windowed_refresh(nan, 1.0));
	}
	#[test]
	fn mark_area_covers_footprint() {
		let mut flow_field = FlowField::new(GridConfig::new(10, 10, 1.0, Vec3::ZERO)).unwrap();
		// spans x 3.0..6.0 and z 4.5..5.5
		let marked = flow_field.mark_area(Vec3::new(4.5, 0.0, 5.0), Vec2::new(3.0, 1.0), false);
		assert_eq!(6, marked);
		assert_eq!(94, flow_field.get_cost_field().count_walkable());
		assert!(!flow_field.is_position_walkable(Vec3::new(3.1, 0.0, 4.6)));
		assert!(!flow_field.is_position_walkable(Vec3::new(5.9, 0.0, 5.4)));
		assert!(flow_field.is_position_walkable(Vec3::new(6.1, 0.0, 5.0)));
		let marked = flow_field.mark_area(Vec3::new(4.5, 0.0, 5.0), Vec2::new(3.0, 1.0), true);
		assert_eq!(6, marked);
		assert_eq!(100, flow_field.get_cost_field().count_walkable());
		assert_eq!(0, flow_field.mark_area(Vec3::new(-20.0, 0.0, 5.0), Vec2::ONE, false));
	}
	#[test]
	fn mark_area_keeps_cost() {
		let mut flow_field = five_by_five();
		flow_field.set_cell_cost(GridCell::new(1, 1), true, 4.0).unwrap();
		flow_field.mark_area(centre(1, 1), Vec2::splat(0.2), false);
		flow_field.mark_area(centre(1, 1), Vec2::splat(0.2), true);
		let cell = flow_field.get_cell(GridCell::new(1, 1)).unwrap();
		assert!(cell.walkable);
		assert_eq!(4.0, cell.cost);
	}
	#[test]
	fn invalid_cell_edits() {
		let mut flow_field = five_by_five();
		assert!(matches!(
			flow_field.set_cell_cost(GridCell::new(5, 0), true, 1.0),
			Err(FlowFieldError::CellOutOfBounds { x: 5, y: 0 })
		));
		assert!(matches!(
			flow_field.set_cell_cost(GridCell::new(0, 0), true, 0.5),
			Err(FlowFieldError::InvalidCost(_))
		));
		assert_eq!(None, flow_field.get_cell(GridCell::new(0, 5)));
	}
	#[test]
	fn refresh_from_sampler() {
		let config = GridConfig::new(4, 1, 1.0, Vec3::ZERO);
		let mut obstacles = ObstacleSet::default();
		obstacles.insert(Footprint::new(Vec3::new(2.5, 0.0, 0.5), Vec2::ONE, 1));
		let sampler = WalkabilitySampler::new(OpenTerrain, obstacles);
		let mut flow_field = FlowField::with_sampler(config, sampler).unwrap();
		assert!(flow_field.is_position_walkable(centre(2, 0)));
		assert_eq!(4, flow_field.full_refresh());
		assert!(!flow_field.is_position_walkable(centre(2, 0)));
		flow_field.compute_flow_field_to(centre(0, 0)).unwrap();
		assert_eq!(f32::INFINITY, distance(&flow_field, 3, 0));
		// the obstacle is gone
		flow_field.set_sampler(WalkabilitySampler::default());
		assert_eq!(3, flow_field.windowed_refresh(centre(3, 0), 0.5));
		flow_field.compute_flow_field().unwrap();
		assert_eq!(3.0, distance(&flow_field, 3, 0));
	}
	#[test]
	fn steep_cells_cost_more() {
		let mut flow_field = FlowField::new(GridConfig::new(3, 1, 1.0, Vec3::ZERO)).unwrap();
		flow_field.set_cell_cost(GridCell::new(1, 0), true, 2.0).unwrap();
		flow_field.compute_flow_field_to(centre(0, 0)).unwrap();
		assert_eq!(2.0, distance(&flow_field, 1, 0));
		assert_eq!(3.0, distance(&flow_field, 2, 0));
	}
	#[test]
	fn offset_origin_and_cell_size() {
		let config = GridConfig::new(4, 4, 2.0, Vec3::new(-4.0, 3.0, -4.0));
		let mut flow_field = FlowField::new(config).unwrap();
		flow_field.compute_flow_field_to(Vec3::new(3.0, 0.0, 3.0)).unwrap();
		assert_eq!(Some(GridCell::new(3, 3)), flow_field.get_target_cell());
		let direction = flow_field.get_flow_direction(Vec3::new(-3.0, 0.0, 3.0));
		assert_eq!(Vec3::X, direction);
		assert_eq!(Some(0.0), flow_field.get_distance(Vec3::new(2.5, 10.0, 2.5)));
		assert_eq!(None, flow_field.get_distance(Vec3::new(4.5, 0.0, 2.5)));
	}
	#[test]
	fn reinitialize_resets() {
		let mut flow_field = five_by_five();
		flow_field.mark_area(centre(0, 0), Vec2::ONE, false);
		flow_field.compute_flow_field_to(centre(2, 2)).unwrap();
		flow_field
			.reinitialize(GridConfig::new(8, 3, 0.5, Vec3::ZERO))
			.unwrap();
		assert!(!flow_field.is_field_computed());
		assert_eq!(None, flow_field.get_target());
		assert_eq!(24, flow_field.get_cost_field().count_walkable());
		assert_eq!(8, flow_field.get_dimensions().get_width());
		assert!(flow_field
			.reinitialize(GridConfig::new(8, 0, 0.5, Vec3::ZERO))
			.is_err());
		assert_eq!(3, flow_field.get_dimensions().get_height());
	}
	#[test]
	fn deterministic() {
		let mut flow_field = five_by_five();
		for (x, y) in [(1, 1), (3, 2), (2, 4)] {
			flow_field.set_cell_cost(GridCell::new(x, y), false, 1.0).unwrap();
		}
		flow_field.compute_flow_field_to(centre(4, 0)).unwrap();
		let first = (
			flow_field.get_integration_field().clone(),
			flow_field.get_direction_field().clone(),
		);
		flow_field.compute_flow_field().unwrap();
		assert_eq!(&first.0, flow_field.get_integration_field());
		assert_eq!(&first.1, flow_field.get_direction_field());
		assert_eq!(2, flow_field.get_generation());
	}
}
