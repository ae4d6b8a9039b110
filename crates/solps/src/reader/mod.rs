//! Readers for simulation output files
//!
//! Anything that can produce a [RawFieldSet] from a path implements
//! [FieldReader]. The loader itself never touches file formats directly.
//!
//! # Quickstart
//!
//! Balance files are NetCDF, so reading them needs the `netcdf` feature.
//!
//! ```rust, ignore
//! # use edgetools_solps::read_balance;
//! let simulation = read_balance("/path/to/balance.nc").unwrap();
//! println!("{simulation}");
//! ```
//!
//! Geometry-only b2f files (e.g. `b2fgmtry`) are plain text and always
//! available.
//!
//! ```rust, no_run
//! # use edgetools_solps::load_mesh_from_files;
//! let mesh = load_mesh_from_files("/path/to/b2fgmtry").unwrap();
//! println!("{mesh}");
//! ```

// Split into subfiles for development, but anything important is re-exported
mod b2f;
#[cfg(feature = "netcdf")]
mod netcdf;
mod parsers;

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::fields::RawFieldSet;
use crate::simulation::Simulation;

// edgetools modules
use edgetools_mesh::SolpsMesh;

// external crates
use log::info;

pub use b2f::{B2fFile, B2fHeader, B2fReader};
#[cfg(feature = "netcdf")]
pub use self::netcdf::NetcdfReader;

/// Source of raw named arrays
pub trait FieldReader {
    /// Read every available field from `path`
    fn read_fields(&self, path: &Path) -> Result<RawFieldSet>;
}

/// Load a complete [Simulation] from `path` using any [FieldReader]
///
/// The path is checked before anything is read, so a missing or unreadable
/// source fails fast with [Error::SourceNotFound].
///
/// ```rust, no_run
/// # use edgetools_solps::{load_simulation, B2fReader};
/// let simulation = load_simulation("/path/to/b2fstate", &B2fReader).unwrap();
/// ```
pub fn load_simulation<P: AsRef<Path>, R: FieldReader>(path: P, reader: &R) -> Result<Simulation> {
    let path = path.as_ref();
    check_source(path)?;

    info!("Loading simulation from {}", path.display());
    let fields = reader.read_fields(path)?;
    Simulation::from_fields(&fields)
}

/// Load a complete [Simulation] from a NetCDF balance file
#[cfg(feature = "netcdf")]
#[cfg_attr(docsrs, doc(cfg(feature = "netcdf")))]
pub fn read_balance<P: AsRef<Path>>(path: P) -> Result<Simulation> {
    load_simulation(path, &NetcdfReader)
}

/// Build just the mesh from a b2f geometry file
///
/// Only the corner coordinates and cell volumes are used, so this works for
/// `b2fgmtry` files as well as full `b2fstate` outputs.
pub fn load_mesh_from_files<P: AsRef<Path>>(path: P) -> Result<SolpsMesh> {
    let path = path.as_ref();
    check_source(path)?;

    info!("Loading mesh from {}", path.display());
    B2fReader.read(path)?.geometry()?.into_mesh()
}

/// Make sure the source exists and can be opened
fn check_source(path: &Path) -> Result<()> {
    let not_found = || Error::SourceNotFound {
        path: path.to_path_buf(),
    };

    let metadata = std::fs::metadata(path).map_err(|_| not_found())?;
    if metadata.is_file() {
        std::fs::File::open(path).map_err(|_| not_found())?;
    }
    Ok(())
}

