/// Errors which end a [TriangleSoupMeshBuilder](crate::TriangleSoupMeshBuilder) session without a
/// mesh.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Deduplication(#[from] hedron::Error),
}
