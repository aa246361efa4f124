//! Flowfields are a means of handling pathfinding for a crowd of actors.
//!
//! [Fixing Pathfinding Once and For All](https://web.archive.org/web/20150905073624/http://www.ai-blog.net/archives/000152.html)
//!
//! [jdxdev](https://www.jdxdev.com/blog/2020/05/03/flowfields/)
//!
//! [leifnode](https://leifnode.com/2013/12/flow-field-pathfinding/)
//!
//! Rather than every actor searching for its own path, a single calculation
//! from the target outwards produces a direction for every cell of the map
//! and each actor simply reads the direction under its feet.
//!
//! The map is a single grid of square cells laid over the `x-z` plane. The
//! grid is made up of fields which the algorithm uses to calculate the
//! directions towards one shared target:
//!
//! * Cost field - whether each cell is walkable and how expensive it is to
//! enter, `1.0` being the default and easiest. Steep ground costs more so a
//! path will try to avoid it
//! * Integration field - uses the cost field as input and stores the
//! calculated cost-to-target of every cell, `f32::INFINITY` for cells that
//! cannot reach the target
//! * Direction field - a unit vector per cell pointing at the neighbour that
//! lies closest to the target, zero where there's no way forward
//!
//! The cost field is filled in by a [sampler::WalkabilitySampler] from
//! whatever terrain and obstacle data the application provides.
//!

pub mod fields;
pub mod grid;
pub mod sampler;
pub mod terrain;
pub mod utilities;
pub mod visualise;
