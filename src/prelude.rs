//! `use bevy_flowfield_grid::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::flowfields::{
	fields::{cost_field::*, direction_field::*, integration_field::*, *},
	grid::*,
	sampler::*,
	terrain::*,
	utilities::*,
	visualise::*,
};

#[doc(hidden)]
pub use crate::{
	error::*,
	flow_field::*,
	plugin::{flow_layer::*, walkability_layer::*, *},
};
