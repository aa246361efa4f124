//! Logic for handling changes to the walkability of the [FlowField]. Any
//! change leaves the field out of date, the [PendingRecalculation] flag asks
//! [crate::plugin::flow_layer::process_flow_requests] to rebuild it later in
//! the same frame
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Re-sample the walkability of every cell, typically sent once on startup
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct EventFullRefresh;

/// Re-sample the walkability of cells around a point, for instance after
/// something has been built or destroyed there
#[derive(Event, Clone, Copy, Debug)]
pub struct EventWindowedRefresh {
	/// World position at the centre of the window
	center: Vec3,
	/// World distance the window reaches out from the centre
	radius: f32,
}

impl EventWindowedRefresh {
	/// Create a new instance of [EventWindowedRefresh]
	pub fn new(center: Vec3, radius: f32) -> Self {
		EventWindowedRefresh { center, radius }
	}
	/// World position at the centre of the window
	pub fn get_center(&self) -> Vec3 {
		self.center
	}
	/// World distance the window reaches out from the centre
	pub fn get_radius(&self) -> f32 {
		self.radius
	}
}

/// Force a rectangular footprint to a walkability without sampling the
/// environment
#[derive(Event, Clone, Copy, Debug)]
pub struct EventMarkArea {
	/// World position at the centre of the footprint
	position: Vec3,
	/// Extent of the footprint along world `x` and `z`
	size: Vec2,
	/// Walkability the footprint should be given
	walkable: bool,
}

impl EventMarkArea {
	/// Create a new instance of [EventMarkArea]
	pub fn new(position: Vec3, size: Vec2, walkable: bool) -> Self {
		EventMarkArea {
			position,
			size,
			walkable,
		}
	}
	/// World position at the centre of the footprint
	pub fn get_position(&self) -> Vec3 {
		self.position
	}
	/// Extent of the footprint along world `x` and `z`
	pub fn get_size(&self) -> Vec2 {
		self.size
	}
	/// Walkability the footprint is given
	pub fn is_walkable(&self) -> bool {
		self.walkable
	}
}

/// Read the walkability events and apply them to the [FlowField]. A full
/// refresh is only performed once however many were requested and windowed
/// refreshes are skipped when one happens. Marked areas are applied last so
/// they always win over sampled values
#[cfg(not(tarpaulin_include))]
pub fn process_walkability_updates(
	mut full_events: EventReader<EventFullRefresh>,
	mut window_events: EventReader<EventWindowedRefresh>,
	mut mark_events: EventReader<EventMarkArea>,
	flow_field: Option<ResMut<FlowField>>,
	mut pending: ResMut<PendingRecalculation>,
) {
	let Some(mut flow_field) = flow_field else {
		if !full_events.is_empty() || !window_events.is_empty() || !mark_events.is_empty() {
			warn!("Walkability events received without a FlowField resource, ignoring them");
		}
		full_events.clear();
		window_events.clear();
		mark_events.clear();
		return;
	};
	let mut changed = false;
	// coalesce full refreshes, the windows are covered by it
	if full_events.read().count() > 0 {
		flow_field.full_refresh();
		window_events.clear();
		changed = true;
	}
	for event in window_events.read() {
		flow_field.windowed_refresh(event.get_center(), event.get_radius());
		changed = true;
	}
	for event in mark_events.read() {
		flow_field.mark_area(event.get_position(), event.get_size(), event.is_walkable());
		changed = true;
	}
	if changed {
		pending.0 = true;
	}
}
