/// Errors raised while consolidating a [Mesh](crate::Mesh).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot deduplicate attribute values of a mesh with no points")]
    NoPoints,
    #[error("attribute {attribute} has {num_components} components; deduplication supports 1..=4")]
    UnsupportedComponents { attribute: usize, num_components: u8 },
    #[error("attribute {attribute} maps {mapped} points, but the mesh has {points}")]
    RaggedAttribute {
        attribute: usize,
        mapped: usize,
        points: usize,
    },
}
