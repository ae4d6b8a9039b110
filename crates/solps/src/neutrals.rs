//! Reconcile fluid and kinetic neutral densities

// crate modules
use crate::constants::{names, KINETIC_PADDING, NEUTRAL_LABEL};
use crate::error::{Error, Result};

// external crates
use log::{debug, warn};
use ndarray::{s, Array3, ArrayD, Axis, Ix3};

/// Where the neutral deuterium density came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeutralSource {
    /// Fluid neutral model, densities untouched
    Fluid,
    /// Kinetic atom densities replaced the fluid values
    Kinetic,
}

impl std::fmt::Display for NeutralSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fluid => write!(f, "fluid"),
            Self::Kinetic => write!(f, "kinetic"),
        }
    }
}

/// Replace the fluid neutral density with kinetic values when available
///
/// `density` is in grid order `(nr, np, ns)` with one species per entry of
/// `species_list`. When `kinetic` atom densities are given, the first atom
/// is copied over the species labelled `D0` after dropping the trailing
/// padding columns.
///
/// Kinetic data without a `D0` species in the list is skipped with a
/// warning. A `D0` label that does not index the density array is an error.
pub fn reconcile_neutrals(
    species_list: &[String],
    density: &mut Array3<f64>,
    kinetic: Option<&ArrayD<f64>>,
) -> Result<NeutralSource> {
    let Some(kinetic) = kinetic else {
        debug!("No kinetic atom densities, keeping fluid neutrals");
        return Ok(NeutralSource::Fluid);
    };

    let index = match species_list.iter().position(|s| s == NEUTRAL_LABEL) {
        Some(index) => index,
        None => {
            warn!("Kinetic atom densities found but no {NEUTRAL_LABEL} species, skipping");
            return Ok(NeutralSource::Fluid);
        }
    };

    let (nr, np, n_species) = density.dim();
    if index >= n_species || species_list.len() != n_species {
        return Err(Error::InconsistentSpeciesState {
            label: NEUTRAL_LABEL.to_string(),
            index,
            n_species,
        });
    }

    let kinetic = kinetic
        .view()
        .into_dimensionality::<Ix3>()
        .map_err(|_| Error::UnexpectedRank {
            name: names::DAB2.to_string(),
            expected: 3,
            found: kinetic.ndim(),
        })?;

    let (n_atoms, kr, kp) = kinetic.dim();
    if n_atoms == 0 || kr != nr || kp != np + KINETIC_PADDING {
        return Err(Error::UnexpectedDimensions {
            name: names::DAB2.to_string(),
            expected: vec![n_atoms.max(1), nr, np + KINETIC_PADDING],
            found: kinetic.shape().to_vec(),
        });
    }

    let atoms = kinetic.slice(s![0, .., ..np]);
    density.index_axis_mut(Axis(2), index).assign(&atoms);
    debug!("Replaced {NEUTRAL_LABEL} density with kinetic values");

    Ok(NeutralSource::Kinetic)
}
