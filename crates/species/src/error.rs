//! Result and Error types for the species module

/// Type alias for `Result<T, species::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq)]
/// The error type for `edgetools-species`
pub enum Error {
    /// No decoding rule exists for the species code
    #[error("no decoding rule for species code \"{code}\"")]
    UnknownSpeciesCode { code: String },

    /// The (nuclear charge, atomic mass) pair is not in the catalog
    #[error("no catalog entry for Z={nuclear_charge} with atomic mass {atomic_mass}")]
    UnknownSpecies {
        nuclear_charge: u32,
        atomic_mass: f64,
    },

    /// Charge states must be non-negative whole numbers
    #[error("invalid charge state {value} for species \"{code}\"")]
    InvalidChargeState { code: String, value: f64 },
}
