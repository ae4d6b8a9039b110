//! Grid geometry extracted from raw fields

// crate modules
use crate::constants::names;
use crate::error::{Error, Result};
use crate::fields::RawFieldSet;
use crate::reshape::grid_field;

// edgetools modules
use edgetools_mesh::{inside_outside, InsideOutside, SolpsMesh};

// external crates
use log::debug;
use ndarray::{Array2, Array3, Ix2};

/// Corner coordinates and volumes in grid order
///
/// Both balance files and b2f geometry files carry the same three arrays, so
/// this is the common step before building a [SolpsMesh].
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    /// Corner radial coordinates `(nr, np, 4)`
    pub cr_r: Array3<f64>,
    /// Corner vertical coordinates `(nr, np, 4)`
    pub cr_z: Array3<f64>,
    /// Cell volumes `(nr, np)`
    pub volume: Array2<f64>,
}

impl GridGeometry {
    /// Collect `crx`, `cry` and `vol` from a set of fields
    ///
    /// Corner arrays are reordered from storage order, volumes are already
    /// in grid order and only copied.
    pub fn from_fields(fields: &RawFieldSet) -> Result<Self> {
        Ok(Self {
            cr_r: grid_field(fields, names::CRX)?,
            cr_z: grid_field(fields, names::CRY)?,
            volume: fields.view::<Ix2>(names::VOL)?.to_owned(),
        })
    }

    /// Build the mesh, which owns the geometry from then on
    pub fn into_mesh(self) -> Result<SolpsMesh> {
        Ok(SolpsMesh::new(self.cr_r, self.cr_z, self.volume)?)
    }
}

/// Build the mesh and its inside/outside indicator
pub(crate) fn build_mesh(fields: &RawFieldSet) -> Result<(SolpsMesh, InsideOutside)> {
    let mesh = GridGeometry::from_fields(fields)?.into_mesh()?;
    let inside = inside_outside(&mesh)?;
    debug!(
        "Built {}x{} mesh with {} triangles",
        mesh.radial_cells(),
        mesh.poloidal_cells(),
        mesh.num_triangles()
    );
    Ok((mesh, inside))
}

/// Check that a cell-centred field matches the mesh
pub(crate) fn check_grid(name: &str, shape: &[usize], mesh: &SolpsMesh) -> Result<()> {
    let expected = [mesh.radial_cells(), mesh.poloidal_cells()];
    if shape != expected {
        return Err(Error::UnexpectedDimensions {
            name: name.to_string(),
            expected: expected.to_vec(),
            found: shape.to_vec(),
        });
    }
    Ok(())
}
