//! Indexed triangle meshes with typed, per-point attribute channels.
//!
//! A [Mesh] stores a number of points, a face table referencing them, and any number of
//! [PointAttributes](PointAttribute). Points carry no data themselves: every attribute maps each
//! point onto one of its own values, so many points may share a value and, once
//! [deduplicated](Mesh::deduplicate_point_ids), many faces may share a point.

mod data;
pub use data::*;

mod error;
pub use error::*;
