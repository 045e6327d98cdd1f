//! Consolidated meshes from triangle soup.
//!
//! [TriangleSoupMeshBuilder] accepts attribute data one triangle at a time, either as three
//! independent corner values or as one value shared by the whole face, and on
//! [finalize](TriangleSoupMeshBuilder::finalize) merges repeated values and repeated points into a
//! compact, shared-vertex [Mesh].
//!
//! ```
//! use trisoup::{AttributeUsage, ElementType, TriangleSoupMeshBuilder};
//! use nalgebra::Point3;
//!
//! let mut builder = TriangleSoupMeshBuilder::<u32>::with_faces(2);
//! let pos = builder.add_typed_attribute::<Point3<f32>>(AttributeUsage::Position);
//! let mat = builder.add_typed_attribute::<u16>(AttributeUsage::Material);
//!
//! let [a, b, c, d] = [
//!     Point3::new(0.0f32, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! builder.set_corner_values(pos, 0, [a, b, c]);
//! builder.set_corner_values(pos, 1, [a, c, d]);
//! builder.set_face_value(mat, 0, 7u16);
//! builder.set_face_value(mat, 1, 7u16);
//!
//! let mesh = builder.finalize().unwrap();
//! // the two triangles share the diagonal
//! assert_eq!(mesh.num_points(), 4);
//! assert_eq!(mesh.attribute(mat).num_values(), 1);
//! assert_eq!(mesh.element_type(pos), Some(ElementType::Corner));
//! assert_eq!(mesh.element_type(mat), Some(ElementType::Face));
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod builder;
pub mod error;

pub use builder::{Classification, TriangleSoupMeshBuilder};
pub use error::Error;

pub use hedron::{
    AttributeDescriptor, AttributeUsage, AttributeValue, DataType, ElementType, Mesh,
    PointAttribute,
};
