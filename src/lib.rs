//! This is a plugin for Bevy game engine to calculate a single target
//! FlowField over a weighted grid.
//!
//! Every walkable cell of the grid gets a direction pointing along the
//! cheapest route to the target so any number of actors can steer towards
//! it by reading the direction beneath them.
//!
//! ```
//! use bevy::prelude::*;
//! use bevy_flowfield_grid::prelude::*;
//!
//! let mut flow_field = FlowField::new(GridConfig::new(5, 5, 1.0, Vec3::ZERO)).unwrap();
//! flow_field.mark_area(Vec3::new(2.5, 0.0, 1.5), Vec2::ONE, false);
//! flow_field.compute_flow_field_to(Vec3::new(2.5, 0.0, 2.5)).unwrap();
//! let direction = flow_field.get_flow_direction(Vec3::new(0.5, 0.0, 2.5));
//! assert_eq!(Vec3::X, direction);
//! ```
//!

pub mod error;
pub mod flow_field;
pub mod flowfields;
pub mod plugin;

pub mod prelude;
