//! The assembled simulation state

// crate modules
use crate::constants::{names, ELEMENTARY_CHARGE};
use crate::error::{Error, Result};
use crate::fields::RawFieldSet;
use crate::geometry::{build_mesh, check_grid};
use crate::neutrals::{reconcile_neutrals, NeutralSource};
use crate::radiation::{PowerBalance, RadiationModel};
use crate::reshape::grid_field;

// edgetools modules
use edgetools_format::{f, trim_padding, NumFormat};
use edgetools_mesh::{Function3D, InsideOutside, SolpsMesh};
use edgetools_species::decode;

// external crates
use log::{debug, info};
use ndarray::{Array2, Array3, ArrayView2, Axis, Ix1, Ix2};

/// Complete plasma state of a single simulation
///
/// All cell-centred arrays are in grid order `(nr, np)`, with per-species
/// densities `(nr, np, ns)` indexed by position in the species list.
///
/// A [Simulation] is read-only once built. Use
/// [from_fields()](Simulation::from_fields) to assemble one from raw output
/// arrays, or the [SimulationBuilder] to put one together from parts.
#[derive(Debug, Clone)]
pub struct Simulation {
    mesh: SolpsMesh,
    species_list: Vec<String>,
    electron_temperature: Array2<f64>,
    electron_density: Array2<f64>,
    species_density: Array3<f64>,
    total_radiation: Array2<f64>,
    radiation_model: RadiationModel,
    neutral_source: NeutralSource,
    inside_mesh: InsideOutside,
}

impl Simulation {
    /// Get an instance of the [SimulationBuilder]
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::default()
    }

    /// Assemble a simulation from raw output arrays
    ///
    /// Steps run in a fixed order and the first failure is returned:
    /// - mesh and inside/outside indicator from the corner coordinates
    /// - electron temperature (converted to eV) and density
    /// - species decoding and density reordering
    /// - neutral density reconciliation
    /// - total radiated power
    pub fn from_fields(fields: &RawFieldSet) -> Result<Self> {
        let (mesh, inside_mesh) = build_mesh(fields)?;

        let electron_temperature = fields
            .view::<Ix2>(names::TE)?
            .mapv(|te| te / ELEMENTARY_CHARGE);
        let electron_density = fields.view::<Ix2>(names::NE)?.to_owned();

        let species_list = decode_species(fields)?;
        debug!("Decoded {} species: {}", species_list.len(), species_list.join(", "));

        let mut species_density = grid_field(fields, names::NA)?;
        let kinetic = if fields.contains(names::DAB2) {
            Some(fields.numeric(names::DAB2)?)
        } else {
            None
        };
        let neutral_source = reconcile_neutrals(&species_list, &mut species_density, kinetic)?;

        let balance = PowerBalance::resolve(fields)?;
        let total_radiation = balance.total_radiation(mesh.volume())?;

        Simulation::builder()
            .mesh(mesh)
            .inside_mesh(inside_mesh)
            .species_list(species_list)
            .electron_temperature(electron_temperature)
            .electron_density(electron_density)
            .species_density(species_density)
            .total_radiation(total_radiation, balance.model())
            .neutral_source(neutral_source)
            .build()
    }

    /// The simulation mesh
    pub fn mesh(&self) -> &SolpsMesh {
        &self.mesh
    }

    /// Ordered species labels, e.g. `["D0", "D1"]`
    pub fn species_list(&self) -> &[String] {
        &self.species_list
    }

    /// Position of a species label along the density species axis
    pub fn species_index(&self, label: &str) -> Option<usize> {
        self.species_list.iter().position(|s| s == label)
    }

    /// Electron temperature (eV)
    pub fn electron_temperature(&self) -> &Array2<f64> {
        &self.electron_temperature
    }

    /// Electron density (m^-3)
    pub fn electron_density(&self) -> &Array2<f64> {
        &self.electron_density
    }

    /// Density of every species `(nr, np, ns)`
    pub fn species_density(&self) -> &Array3<f64> {
        &self.species_density
    }

    /// Density of a single species by label
    pub fn density_of(&self, label: &str) -> Option<ArrayView2<'_, f64>> {
        self.species_index(label)
            .map(|index| self.species_density.index_axis(Axis(2), index))
    }

    /// Total radiated power density (W m^-3)
    pub fn total_radiation(&self) -> &Array2<f64> {
        &self.total_radiation
    }

    /// Energy balance used for the total radiated power
    pub fn radiation_model(&self) -> RadiationModel {
        self.radiation_model
    }

    /// Where the neutral deuterium density came from
    pub fn neutral_source(&self) -> NeutralSource {
        self.neutral_source
    }

    /// Inside/outside indicator of the mesh in 3D space
    pub fn inside_mesh(&self) -> &InsideOutside {
        &self.inside_mesh
    }

    /// Check if a cartesian point lies within the mesh
    pub fn is_inside(&self, x: f64, y: f64, z: f64) -> bool {
        self.inside_mesh.evaluate(x, y, z) > 0.0
    }
}

impl std::fmt::Display for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("{}\n", self.mesh);
        s += &f!("Species: {}\n", self.species_list.join(", "));
        s += &f!("Neutrals: {}\n", self.neutral_source);
        s += &f!("Radiation: {} model\n", self.radiation_model);
        s += &f!(
            "  te max : {:>10} eV\n",
            max_of(&self.electron_temperature).sci(3, 2)
        );
        s += &f!(
            "  ne max : {:>10} m^-3\n",
            max_of(&self.electron_density).sci(3, 2)
        );
        s += &f!(
            "  prad max : {:>10} W m^-3",
            max_of(&self.total_radiation).sci(3, 2)
        );
        write!(f, "{}", s)
    }
}

/// Builder implementation for [Simulation]
///
/// Every part is required. [build()](SimulationBuilder::build) fails on the
/// first missing part, or if any of the arrays do not match the mesh.
///
/// ```rust
/// # use edgetools_solps::{Simulation, Error};
/// let result = Simulation::builder()
///     .species_list(vec!["D0".to_string()])
///     .build();
///
/// assert!(matches!(result, Err(Error::IncompleteSimulation("mesh"))));
/// ```
#[derive(Debug, Default)]
pub struct SimulationBuilder {
    mesh: Option<SolpsMesh>,
    inside_mesh: Option<InsideOutside>,
    species_list: Option<Vec<String>>,
    electron_temperature: Option<Array2<f64>>,
    electron_density: Option<Array2<f64>>,
    species_density: Option<Array3<f64>>,
    total_radiation: Option<(Array2<f64>, RadiationModel)>,
    neutral_source: Option<NeutralSource>,
}

impl SimulationBuilder {
    /// Create a new instance of the builder with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [Simulation] type
    pub fn build(self) -> Result<Simulation> {
        let mesh = self.mesh.ok_or(Error::IncompleteSimulation("mesh"))?;
        let inside_mesh = self
            .inside_mesh
            .ok_or(Error::IncompleteSimulation("inside/outside indicator"))?;
        let species_list = self
            .species_list
            .ok_or(Error::IncompleteSimulation("species list"))?;
        let electron_temperature = self
            .electron_temperature
            .ok_or(Error::IncompleteSimulation("electron temperature"))?;
        let electron_density = self
            .electron_density
            .ok_or(Error::IncompleteSimulation("electron density"))?;
        let species_density = self
            .species_density
            .ok_or(Error::IncompleteSimulation("species density"))?;
        let (total_radiation, radiation_model) = self
            .total_radiation
            .ok_or(Error::IncompleteSimulation("total radiation"))?;
        let neutral_source = self
            .neutral_source
            .ok_or(Error::IncompleteSimulation("neutral source"))?;

        check_grid(names::TE, electron_temperature.shape(), &mesh)?;
        check_grid(names::NE, electron_density.shape(), &mesh)?;
        check_grid("total radiation", total_radiation.shape(), &mesh)?;

        let expected = [mesh.radial_cells(), mesh.poloidal_cells(), species_list.len()];
        if species_density.shape() != expected {
            return Err(Error::UnexpectedDimensions {
                name: names::NA.to_string(),
                expected: expected.to_vec(),
                found: species_density.shape().to_vec(),
            });
        }

        info!(
            "Loaded {} species on a {}x{} mesh ({} neutrals, {} radiation)",
            species_list.len(),
            mesh.radial_cells(),
            mesh.poloidal_cells(),
            neutral_source,
            radiation_model
        );

        Ok(Simulation {
            mesh,
            species_list,
            electron_temperature,
            electron_density,
            species_density,
            total_radiation,
            radiation_model,
            neutral_source,
            inside_mesh,
        })
    }

    /// Simulation mesh
    pub fn mesh(mut self, mesh: SolpsMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Inside/outside indicator, usually from
    /// [inside_outside()](edgetools_mesh::inside_outside)
    pub fn inside_mesh(mut self, inside_mesh: InsideOutside) -> Self {
        self.inside_mesh = Some(inside_mesh);
        self
    }

    /// Ordered species labels
    pub fn species_list(mut self, species_list: Vec<String>) -> Self {
        self.species_list = Some(species_list);
        self
    }

    /// Electron temperature in eV
    pub fn electron_temperature(mut self, temperature: Array2<f64>) -> Self {
        self.electron_temperature = Some(temperature);
        self
    }

    /// Electron density
    pub fn electron_density(mut self, density: Array2<f64>) -> Self {
        self.electron_density = Some(density);
        self
    }

    /// Species densities in grid order `(nr, np, ns)`
    pub fn species_density(mut self, density: Array3<f64>) -> Self {
        self.species_density = Some(density);
        self
    }

    /// Total radiated power and the model that produced it
    pub fn total_radiation(mut self, radiation: Array2<f64>, model: RadiationModel) -> Self {
        self.total_radiation = Some((radiation, model));
        self
    }

    /// Source of the neutral deuterium density
    pub fn neutral_source(mut self, source: NeutralSource) -> Self {
        self.neutral_source = Some(source);
        self
    }
}

/// Decode the species table into an ordered list of labels
fn decode_species(fields: &RawFieldSet) -> Result<Vec<String>> {
    let codes = fields.text(names::SPECIES)?;
    let codes = codes
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| Error::UnexpectedRank {
            name: names::SPECIES.to_string(),
            expected: 2,
            found: codes.ndim(),
        })?;
    let masses = fields.view::<Ix1>(names::AM)?;
    let charges = fields.view::<Ix1>(names::ZA)?;

    let n_species = codes.nrows();
    for (name, array) in [(names::AM, &masses), (names::ZA, &charges)] {
        if array.len() != n_species {
            return Err(Error::UnexpectedDimensions {
                name: name.to_string(),
                expected: vec![n_species],
                found: array.shape().to_vec(),
            });
        }
    }

    codes
        .rows()
        .into_iter()
        .zip(masses.iter().zip(charges.iter()))
        .map(|(row, (mass, charge))| -> Result<String> {
            let code = trim_padding(&row.to_vec());
            Ok(decode(&code, *mass, *charge)?.label())
        })
        .collect()
}

fn max_of(array: &Array2<f64>) -> f64 {
    array.iter().copied().fold(f64::NAN, f64::max)
}
