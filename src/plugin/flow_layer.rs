//! Logic relating to recalculating the [FlowField]
//!

use crate::prelude::*;
use bevy::prelude::*;

/// A request to point the [FlowField] at a new target and recalculate it
#[derive(Event, Clone, Copy, Debug)]
pub struct EventSetFlowTarget(Vec3);

impl EventSetFlowTarget {
	/// Create a new instance of [EventSetFlowTarget]
	pub fn new(position: Vec3) -> Self {
		EventSetFlowTarget(position)
	}
	/// Requested target in world space
	pub fn get_position(&self) -> Vec3 {
		self.0
	}
}

/// Emitted each time the [FlowField] has been successfully recalculated,
/// actors caching anything derived from the field should refresh it
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventFlowFieldUpdated {
	/// Generation of the field that was produced
	pub generation: u64,
}

/// Recalculate the [FlowField] when a new target has been requested or the
/// walkability has changed. Several actors may ask for a target in the same
/// frame, only the newest request is calculated and the rest are dropped
#[cfg(not(tarpaulin_include))]
pub fn process_flow_requests(
	mut events: EventReader<EventSetFlowTarget>,
	flow_field: Option<ResMut<FlowField>>,
	mut pending: ResMut<PendingRecalculation>,
	mut event_updated: EventWriter<EventFlowFieldUpdated>,
) {
	let Some(mut flow_field) = flow_field else {
		events.clear();
		return;
	};
	let latest = events.read().last().copied();
	// failures have already been logged by the field
	let mut computed = latest.is_some_and(|request| {
		trace!("Processing target request {:?}", request.get_position());
		flow_field
			.compute_flow_field_to(request.get_position())
			.is_ok()
	});
	// a rejected request keeps the previous target, it still has to follow
	// any walkability change from this frame
	if !computed && pending.0 && flow_field.get_target().is_some() {
		computed = flow_field.compute_flow_field().is_ok();
	}
	pending.0 = false;
	if computed {
		event_updated.write(EventFlowFieldUpdated {
			generation: flow_field.get_generation(),
		});
	}
}
