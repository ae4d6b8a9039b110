//! Result and Error types for edgetools-solps
use std::path::PathBuf;

/// Type alias for Result<T, solps::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `edgetools-solps` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("source {path:?} does not exist or is not readable")]
    SourceNotFound { path: PathBuf },

    #[error("failed to decode species")]
    SpeciesError(#[from] edgetools_species::Error),

    #[error("failed to build mesh")]
    MeshError(#[from] edgetools_mesh::Error),

    #[error("species \"{label}\" at index {index} is inconsistent with {n_species} density species")]
    InconsistentSpeciesState {
        label: String,
        index: usize,
        n_species: usize,
    },

    #[error("field \"{0}\" not found")]
    MissingField(String),

    #[error("field \"{name}\" is not {expected} data")]
    UnexpectedFieldType { name: String, expected: &'static str },

    #[error("field \"{name}\" has {found} dimensions (expected {expected})")]
    UnexpectedRank {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("field \"{name}\" has an inconsistent shape (expected {expected:?}, found {found:?})")]
    UnexpectedDimensions {
        name: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("simulation is missing the {0}")]
    IncompleteSimulation(&'static str),

    #[error("failed to parse \"{0}\"")]
    ParseError(String),

    #[cfg(feature = "netcdf")]
    #[error("failed to read netcdf data")]
    NetcdfError(#[from] netcdf::Error),
}
