mod mesh;

pub use mesh::attribute::*;
pub use mesh::*;
