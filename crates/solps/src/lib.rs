//! Load SOLPS plasma-edge simulation outputs
#![doc = include_str!("../readme.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Split into subfiles for development, but anything important is re-exported
mod constants;
mod error;
mod fields;
mod geometry;
mod neutrals;
mod radiation;
mod reshape;
mod simulation;

pub mod reader;

// inline the core types for a nice public API
#[doc(inline)]
pub use simulation::{Simulation, SimulationBuilder};

#[doc(inline)]
pub use fields::{RawField, RawFieldSet};

#[doc(inline)]
pub use geometry::GridGeometry;

#[doc(inline)]
pub use reshape::{grid_to_storage, storage_to_grid};

#[doc(inline)]
pub use neutrals::{reconcile_neutrals, NeutralSource};

#[doc(inline)]
pub use radiation::{estimate_radiation, PowerBalance, RadiationModel};

#[doc(inline)]
pub use constants::{names, ELEMENTARY_CHARGE, IONISATION_POTENTIAL, KINETIC_PADDING, NEUTRAL_LABEL};

#[doc(inline)]
pub use reader::{load_mesh_from_files, load_simulation, B2fFile, B2fHeader, B2fReader, FieldReader};

#[cfg(feature = "netcdf")]
#[cfg_attr(docsrs, doc(cfg(feature = "netcdf")))]
#[doc(inline)]
pub use reader::{read_balance, NetcdfReader};

#[doc(inline)]
pub use error::{Error, Result};
