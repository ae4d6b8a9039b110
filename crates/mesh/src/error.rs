//! Result and Error types for edgetools-mesh

/// Type alias for Result<T, mesh::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `edgetools-mesh` crate
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("quad cells need 4 corners (found {found:?})")]
    UnexpectedCornerCount { found: usize },

    #[error("corner coordinate arrays differ in shape (r {r:?}, z {z:?})")]
    CornerShapeMismatch { r: Vec<usize>, z: Vec<usize> },

    #[error("inconsistent volume array shape (expected {expected:?}, found {found:?})")]
    VolumeShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("mesh has no cells")]
    EmptyGrid,

    #[error("inconsistent number of triangle values (expected {expected:?}, found {found:?})")]
    DataLengthMismatch { expected: usize, found: usize },

    #[error("triangle {index} references a vertex outside of {n_vertices} vertices")]
    InvalidTriangle { index: usize, n_vertices: usize },
}
