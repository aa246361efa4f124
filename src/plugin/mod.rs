//! Defines the Bevy [Plugin] for the FlowField
//!
//! The host application inserts a [FlowField] resource and then drives it
//! with events. Walkability edits are applied in [FlowFieldSet::Walkability]
//! before any recalculation happens in [FlowFieldSet::Calculate], so the
//! field read by actors later in the frame always reflects the latest world
//! state:
//!
//! ```text
//! EventFullRefresh      ─┐
//! EventWindowedRefresh  ─┼─> Walkability ─┐
//! EventMarkArea         ─┘                ├─> Calculate ─> EventFlowFieldUpdated
//! EventSetFlowTarget    ──────────────────┘
//! ```
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod flow_layer;
pub mod walkability_layer;

/// Ordering of the FlowField systems within [Update]
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlowFieldSet {
	/// Apply changes to walkability
	Walkability,
	/// Recalculate the field
	Calculate,
}

/// Registers the FlowField events and systems
pub struct FlowFieldPlugin;

impl Plugin for FlowFieldPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<Ordinal>()
			.register_type::<GridCell>()
			.register_type::<GridDimensions>()
			.register_type::<QueryLayers>()
			.register_type::<CellCost>()
			.register_type::<TerrainClass>()
			.register_type::<Footprint>()
			.init_resource::<PendingRecalculation>()
			.add_event::<walkability_layer::EventFullRefresh>()
			.add_event::<walkability_layer::EventWindowedRefresh>()
			.add_event::<walkability_layer::EventMarkArea>()
			.add_event::<flow_layer::EventSetFlowTarget>()
			.add_event::<flow_layer::EventFlowFieldUpdated>()
			.configure_sets(
				Update,
				(FlowFieldSet::Walkability, FlowFieldSet::Calculate).chain(),
			)
			.add_systems(
				Update,
				(
					walkability_layer::process_walkability_updates
						.in_set(FlowFieldSet::Walkability),
					flow_layer::process_flow_requests.in_set(FlowFieldSet::Calculate),
				),
			);
	}
}

/// Set when walkability has changed and the field should be recalculated
/// towards its current target
#[derive(Resource, Default, Debug)]
pub struct PendingRecalculation(pub bool);
