//! Estimate total radiated power from the energy balance
//!
//! Two models are supported, depending on what the simulation wrote out.
//!
//! **Coupled** runs with the kinetic neutral code provide both the kinetic
//! electron energy loss and the kinetic particle sources. The radiated power
//! density is then
//!
//! ```text
//! | b2 / vol + (eirene_loss - 13.6 eV * ionisation) / vol |
//! ```
//!
//! **Fluid-only** runs use the fluid ionisation sources instead
//!
//! ```text
//! | 13.6 eV * sum(ionisation) / vol - sum(b2) / vol |
//! ```
//!
//! The model is chosen once from the available fields and then never
//! revisited.

// crate modules
use crate::constants::{names, ELEMENTARY_CHARGE, IONISATION_POTENTIAL};
use crate::error::{Error, Result};
use crate::fields::RawFieldSet;

// external crates
use log::debug;
use ndarray::{Array2, ArrayD, Axis, Ix2};

/// Which energy balance was used for the radiated power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiationModel {
    Coupled,
    FluidOnly,
}

impl std::fmt::Display for RadiationModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coupled => write!(f, "coupled"),
            Self::FluidOnly => write!(f, "fluid only"),
        }
    }
}

/// Energy balance terms needed for one of the radiation models
#[derive(Debug, Clone, Copy)]
pub enum PowerBalance<'a> {
    Coupled {
        b2_energy_loss: &'a ArrayD<f64>,
        eirene_energy_loss: &'a ArrayD<f64>,
        eirene_ionisation: &'a ArrayD<f64>,
    },
    FluidOnly {
        b2_energy_loss: &'a ArrayD<f64>,
        b2_ionisation: &'a ArrayD<f64>,
    },
}

impl<'a> PowerBalance<'a> {
    /// Pick the radiation model from the available fields
    ///
    /// The coupled model needs both kinetic balance fields. If either is
    /// missing the fluid-only terms are required instead.
    pub fn resolve(fields: &'a RawFieldSet) -> Result<Self> {
        let balance = if fields.contains(names::EIRENE_ENERGY_LOSS)
            && fields.contains(names::EIRENE_IONISATION)
        {
            Self::Coupled {
                b2_energy_loss: fields.numeric(names::B2_ENERGY_LOSS)?,
                eirene_energy_loss: fields.numeric(names::EIRENE_ENERGY_LOSS)?,
                eirene_ionisation: fields.numeric(names::EIRENE_IONISATION)?,
            }
        } else {
            Self::FluidOnly {
                b2_energy_loss: fields.numeric(names::B2_ENERGY_LOSS)?,
                b2_ionisation: fields.numeric(names::B2_IONISATION)?,
            }
        };
        debug!("Using {} radiation model", balance.model());
        Ok(balance)
    }

    /// The model these terms belong to
    pub fn model(&self) -> RadiationModel {
        match self {
            Self::Coupled { .. } => RadiationModel::Coupled,
            Self::FluidOnly { .. } => RadiationModel::FluidOnly,
        }
    }

    /// Total radiated power density for every cell
    ///
    /// All terms must reduce to the shape of `volume`. The result is never
    /// negative.
    pub fn total_radiation(&self, volume: &Array2<f64>) -> Result<Array2<f64>> {
        let grid = volume.shape();

        let total = match self {
            Self::Coupled {
                b2_energy_loss,
                eirene_energy_loss,
                eirene_ionisation,
            } => {
                let b2 = match b2_energy_loss.ndim() {
                    2 => on_grid(names::B2_ENERGY_LOSS, (*b2_energy_loss).clone(), grid)?,
                    _ => sum_leading(names::B2_ENERGY_LOSS, b2_energy_loss, grid)?,
                };
                let eirene_loss = sum_leading(names::EIRENE_ENERGY_LOSS, eirene_energy_loss, grid)?;
                let ionisation = charged_sources(eirene_ionisation, grid)?;

                let b2_loss = b2 / volume;
                let eirene_loss = eirene_loss / volume;
                let potential = ionisation.mapv(|v| IONISATION_POTENTIAL * v * ELEMENTARY_CHARGE) / volume;
                b2_loss + (eirene_loss - potential)
            }
            Self::FluidOnly {
                b2_energy_loss,
                b2_ionisation,
            } => {
                let b2_loss = sum_leading(names::B2_ENERGY_LOSS, b2_energy_loss, grid)? / volume;
                let potential = sum_leading(names::B2_IONISATION, b2_ionisation, grid)? / volume;
                potential.mapv(|v| IONISATION_POTENTIAL * ELEMENTARY_CHARGE * v) - b2_loss
            }
        };

        Ok(total.mapv_into(f64::abs))
    }
}

/// Resolve the model and compute the total radiated power in one go
pub fn estimate_radiation(
    fields: &RawFieldSet,
    volume: &Array2<f64>,
) -> Result<(RadiationModel, Array2<f64>)> {
    let balance = PowerBalance::resolve(fields)?;
    Ok((balance.model(), balance.total_radiation(volume)?))
}

/// Sum over the leading axis of a 3D field
fn sum_leading(name: &str, field: &ArrayD<f64>, grid: &[usize]) -> Result<Array2<f64>> {
    if field.ndim() != 3 {
        return Err(Error::UnexpectedRank {
            name: name.to_string(),
            expected: 3,
            found: field.ndim(),
        });
    }
    on_grid(name, field.sum_axis(Axis(0)), grid)
}

/// Kinetic particle sources for the charged state
///
/// Stored as `(strata, state, nr, np)`, summed over strata and then taking
/// the second state.
fn charged_sources(field: &ArrayD<f64>, grid: &[usize]) -> Result<Array2<f64>> {
    let name = names::EIRENE_IONISATION;
    if field.ndim() != 4 {
        return Err(Error::UnexpectedRank {
            name: name.to_string(),
            expected: 4,
            found: field.ndim(),
        });
    }

    let summed = field.sum_axis(Axis(0));
    if summed.len_of(Axis(0)) < 2 {
        return Err(Error::UnexpectedDimensions {
            name: name.to_string(),
            expected: std::iter::once(2).chain(grid.iter().copied()).collect(),
            found: summed.shape().to_vec(),
        });
    }
    on_grid(name, summed.index_axis(Axis(0), 1).to_owned(), grid)
}

/// Check a reduced field against the grid shape
fn on_grid(name: &str, field: ArrayD<f64>, grid: &[usize]) -> Result<Array2<f64>> {
    if field.shape() != grid {
        return Err(Error::UnexpectedDimensions {
            name: name.to_string(),
            expected: grid.to_vec(),
            found: field.shape().to_vec(),
        });
    }
    let ndim = field.ndim();
    field
        .into_dimensionality::<Ix2>()
        .map_err(|_| Error::UnexpectedRank {
            name: name.to_string(),
            expected: 2,
            found: ndim,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, IxDyn};

    fn fluid_fields(loss: f64, sources: f64) -> RawFieldSet {
        let mut fields = RawFieldSet::new();
        fields.insert(names::B2_ENERGY_LOSS, ArrayD::<f64>::from_elem(IxDyn(&[2, 1, 2]), loss));
        fields.insert(names::B2_IONISATION, ArrayD::<f64>::from_elem(IxDyn(&[3, 1, 2]), sources));
        fields
    }

    #[test]
    fn fluid_only_model() {
        let volume = array![[2.0, 4.0]];
        let (model, total) = estimate_radiation(&fluid_fields(1.0, 0.0), &volume).unwrap();

        assert_eq!(model, RadiationModel::FluidOnly);
        // |0 - 2 / vol|
        assert_eq!(total, array![[1.0, 0.5]]);
    }

    #[test]
    fn coupled_needs_both_kinetic_fields() {
        let mut fields = fluid_fields(1.0, 0.0);
        fields.insert(names::EIRENE_ENERGY_LOSS, ArrayD::<f64>::zeros(IxDyn(&[1, 1, 2])));
        let balance = PowerBalance::resolve(&fields).unwrap();
        assert_eq!(balance.model(), RadiationModel::FluidOnly);

        fields.insert(names::EIRENE_IONISATION, ArrayD::<f64>::zeros(IxDyn(&[1, 2, 1, 2])));
        let balance = PowerBalance::resolve(&fields).unwrap();
        assert_eq!(balance.model(), RadiationModel::Coupled);
    }

    #[test]
    fn coupled_model() {
        let mut fields = RawFieldSet::new();
        fields.insert(names::B2_ENERGY_LOSS, ArrayD::<f64>::from_elem(IxDyn(&[1, 2]), -4.0));
        fields.insert(names::EIRENE_ENERGY_LOSS, ArrayD::<f64>::from_elem(IxDyn(&[2, 1, 2]), 1.0));
        fields.insert(names::EIRENE_IONISATION, ArrayD::<f64>::zeros(IxDyn(&[1, 2, 1, 2])));

        let volume = array![[1.0, 2.0]];
        let (model, total) = estimate_radiation(&fields, &volume).unwrap();

        assert_eq!(model, RadiationModel::Coupled);
        // |-4 / vol + 2 / vol|
        assert_eq!(total, array![[2.0, 1.0]]);
    }

    #[test]
    fn ionisation_potential_term() {
        let sources = 1.0 / (IONISATION_POTENTIAL * ELEMENTARY_CHARGE);
        let volume = array![[1.0, 1.0]];
        let (_, total) = estimate_radiation(&fluid_fields(0.0, sources), &volume).unwrap();

        // three strata of sources, each worth 1 W
        for value in total.iter() {
            assert!((value - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn shape_mismatch() {
        let volume = array![[1.0, 1.0, 1.0]];
        assert!(matches!(
            estimate_radiation(&fluid_fields(1.0, 1.0), &volume),
            Err(Error::UnexpectedDimensions { .. })
        ));
    }
}
