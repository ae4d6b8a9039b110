//! Module for the structured quad mesh and its triangulation

// crate modules
use crate::error::{Error, Result};

// edgetools modules
use edgetools_format::{f, NumFormat, ShapeFormat};

// external crates
use log::debug;
use nalgebra::Point2;
use ndarray::{Array2, Array3, ArrayView1};

/// Number of corners for every cell
pub const CORNERS: usize = 4;

/// Structured poloidal quad mesh
///
/// The mesh is defined by the (r, z) coordinates of the four corners of every
/// cell, and the volume of every cell.
///
/// ## Array layout
///
/// Corner arrays have the shape `(radial, poloidal, 4)`, and the volume
/// array `(radial, poloidal)`. The corner order within a cell is:
///
/// ```text
///   2 ----- 3
///   |       |
///   |       |
///   0 ----- 1
/// ```
///
/// i.e. lower-left, lower-right, upper-left, upper-right in the local cell
/// coordinates.
///
/// ## Triangulation
///
/// Every cell contributes its own four vertices, so the vertex list is
/// `4 * num_cells` long and ordered cell by cell. Each quad is then split
/// into two triangles, `(0, 1, 3)` and `(0, 3, 2)`.
///
/// | Cell index      | Vertices                | Triangles          |
/// | --------------- | ----------------------- | ------------------ |
/// | `ir * np + ip`  | `4 * cell .. 4 * cell + 4` | `2 * cell`, `2 * cell + 1` |
///
/// Nothing is shared between cells, which keeps guard cells and cuts in the
/// grid trivial to handle at the cost of duplicated vertices.
///
/// ```rust
/// # use edgetools_mesh::SolpsMesh;
/// # use ndarray::{Array2, Array3};
/// let mesh = SolpsMesh::new(
///     Array3::zeros((2, 3, 4)),
///     Array3::zeros((2, 3, 4)),
///     Array2::ones((2, 3)),
/// ).unwrap();
///
/// assert_eq!(mesh.num_cells(), 6);
/// assert_eq!(mesh.num_triangles(), 12);
/// assert_eq!(mesh.vertex_coords().len(), 24);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolpsMesh {
    cr_r: Array3<f64>,
    cr_z: Array3<f64>,
    volume: Array2<f64>,
    vertex_coords: Vec<Point2<f64>>,
    triangles: Vec<[usize; 3]>,
    triangle_to_grid_map: Vec<(usize, usize)>,
}

impl SolpsMesh {
    /// Build the mesh from corner coordinates and cell volumes
    ///
    /// Fails if:
    /// - the corner axis is not of length 4
    /// - `cr_r` and `cr_z` have different shapes
    /// - `volume` does not match the leading two corner axes
    /// - there are no cells at all
    pub fn new(cr_r: Array3<f64>, cr_z: Array3<f64>, volume: Array2<f64>) -> Result<Self> {
        let shape = cr_r.shape().to_vec();

        if shape[2] != CORNERS {
            return Err(Error::UnexpectedCornerCount { found: shape[2] });
        }

        if cr_z.shape() != shape.as_slice() {
            return Err(Error::CornerShapeMismatch {
                r: shape,
                z: cr_z.shape().to_vec(),
            });
        }

        if volume.shape() != &shape[..2] {
            return Err(Error::VolumeShapeMismatch {
                expected: shape[..2].to_vec(),
                found: volume.shape().to_vec(),
            });
        }

        if shape[0] * shape[1] == 0 {
            return Err(Error::EmptyGrid);
        }

        let (vertex_coords, triangles, triangle_to_grid_map) = triangulate(&cr_r, &cr_z);
        debug!(
            "Triangulated {} grid into {} triangles",
            shape.shape_string(),
            triangles.len()
        );

        Ok(Self {
            cr_r,
            cr_z,
            volume,
            vertex_coords,
            triangles,
            triangle_to_grid_map,
        })
    }

    /// Number of cells in the radial direction
    pub fn radial_cells(&self) -> usize {
        self.volume.nrows()
    }

    /// Number of cells in the poloidal direction
    pub fn poloidal_cells(&self) -> usize {
        self.volume.ncols()
    }

    /// Total number of quad cells
    pub fn num_cells(&self) -> usize {
        self.radial_cells() * self.poloidal_cells()
    }

    /// Total number of triangles, always two per cell
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Every vertex in the triangulation
    pub fn vertex_coords(&self) -> &[Point2<f64>] {
        &self.vertex_coords
    }

    /// Vertex indices of every triangle
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// (radial, poloidal) cell index of every triangle
    pub fn triangle_to_grid_map(&self) -> &[(usize, usize)] {
        &self.triangle_to_grid_map
    }

    /// Radial corner coordinates, shape (radial, poloidal, 4)
    pub fn cr_r(&self) -> &Array3<f64> {
        &self.cr_r
    }

    /// Vertical corner coordinates, shape (radial, poloidal, 4)
    pub fn cr_z(&self) -> &Array3<f64> {
        &self.cr_z
    }

    /// Cell volumes, shape (radial, poloidal)
    pub fn volume(&self) -> &Array2<f64> {
        &self.volume
    }

    /// Flat cell index for a (radial, poloidal) pair
    pub fn cell_index(&self, ir: usize, ip: usize) -> usize {
        ir * self.poloidal_cells() + ip
    }

    /// Centre of a cell, taken as the mean of its corners
    ///
    /// Returns `None` for indices outside of the grid.
    pub fn cell_centre(&self, ir: usize, ip: usize) -> Option<Point2<f64>> {
        if ir >= self.radial_cells() || ip >= self.poloidal_cells() {
            return None;
        }
        let mean = |corners: ArrayView1<f64>| corners.sum() / CORNERS as f64;
        Some(Point2::new(
            mean(self.cr_r.slice(ndarray::s![ir, ip, ..])),
            mean(self.cr_z.slice(ndarray::s![ir, ip, ..])),
        ))
    }

    /// Centre of every cell, in cell index order
    pub fn cell_centres(&self) -> Vec<Point2<f64>> {
        let mut centres = Vec::with_capacity(self.num_cells());
        for ir in 0..self.radial_cells() {
            for ip in 0..self.poloidal_cells() {
                // always inside the grid here
                if let Some(centre) = self.cell_centre(ir, ip) {
                    centres.push(centre);
                }
            }
        }
        centres
    }

    /// Bounding box of every corner in the mesh
    pub fn extent(&self) -> Extent {
        let mut extent = Extent {
            r_min: f64::INFINITY,
            r_max: f64::NEG_INFINITY,
            z_min: f64::INFINITY,
            z_max: f64::NEG_INFINITY,
        };
        for vertex in &self.vertex_coords {
            extent.r_min = extent.r_min.min(vertex.x);
            extent.r_max = extent.r_max.max(vertex.x);
            extent.z_min = extent.z_min.min(vertex.y);
            extent.z_max = extent.z_max.max(vertex.y);
        }
        extent
    }
}

impl std::fmt::Display for SolpsMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let extent = self.extent();
        let mut s = f!(
            "SolpsMesh {}x{} ({} cells, {} triangles)\n",
            self.radial_cells(),
            self.poloidal_cells(),
            self.num_cells(),
            self.num_triangles()
        );
        s += &f!(
            "  r : {:>10} - {:>10} m\n",
            extent.r_min.sci(3, 2),
            extent.r_max.sci(3, 2)
        );
        s += &f!(
            "  z : {:>10} - {:>10} m",
            extent.z_min.sci(3, 2),
            extent.z_max.sci(3, 2)
        );
        write!(f, "{}", s)
    }
}

/// Axis-aligned bounds of a mesh in (r, z)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Minimum radial coordinate
    pub r_min: f64,
    /// Maximum radial coordinate
    pub r_max: f64,
    /// Minimum vertical coordinate
    pub z_min: f64,
    /// Maximum vertical coordinate
    pub z_max: f64,
}

/// Split every quad into two triangles
///
/// Shapes are assumed to be validated already.
#[allow(clippy::type_complexity)]
fn triangulate(
    cr_r: &Array3<f64>,
    cr_z: &Array3<f64>,
) -> (Vec<Point2<f64>>, Vec<[usize; 3]>, Vec<(usize, usize)>) {
    let (nr, np, _) = cr_r.dim();

    let mut vertices = Vec::with_capacity(nr * np * CORNERS);
    let mut triangles = Vec::with_capacity(2 * nr * np);
    let mut grid_map = Vec::with_capacity(2 * nr * np);

    for ir in 0..nr {
        for ip in 0..np {
            let first = vertices.len();
            for c in 0..CORNERS {
                vertices.push(Point2::new(cr_r[[ir, ip, c]], cr_z[[ir, ip, c]]));
            }
            triangles.push([first, first + 1, first + 3]);
            triangles.push([first, first + 3, first + 2]);
            grid_map.push((ir, ip));
            grid_map.push((ir, ip));
        }
    }

    (vertices, triangles, grid_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit squares, cell (ir, ip) spans r = ip..ip+1 and z = ir..ir+1
    fn square_grid(nr: usize, np: usize) -> (Array3<f64>, Array3<f64>, Array2<f64>) {
        let mut cr_r = Array3::zeros((nr, np, 4));
        let mut cr_z = Array3::zeros((nr, np, 4));
        for ir in 0..nr {
            for ip in 0..np {
                let corners = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
                for (c, (dr, dz)) in corners.iter().enumerate() {
                    cr_r[[ir, ip, c]] = ip as f64 + dr;
                    cr_z[[ir, ip, c]] = ir as f64 + dz;
                }
            }
        }
        (cr_r, cr_z, Array2::ones((nr, np)))
    }

    #[test]
    fn cell_counts() {
        let (r, z, v) = square_grid(2, 3);
        let mesh = SolpsMesh::new(r, z, v).unwrap();
        assert_eq!(mesh.radial_cells(), 2);
        assert_eq!(mesh.poloidal_cells(), 3);
        assert_eq!(mesh.num_cells(), 6);
        assert_eq!(mesh.num_triangles(), 12);
    }

    #[test]
    fn triangles_follow_cells() {
        let (r, z, v) = square_grid(2, 3);
        let mesh = SolpsMesh::new(r, z, v).unwrap();

        // second cell in the second radial row
        let cell = mesh.cell_index(1, 1);
        assert_eq!(cell, 4);
        assert_eq!(mesh.triangles()[2 * cell], [16, 17, 19]);
        assert_eq!(mesh.triangles()[2 * cell + 1], [16, 19, 18]);
        assert_eq!(mesh.triangle_to_grid_map()[2 * cell], (1, 1));
        assert_eq!(mesh.vertex_coords()[16], Point2::new(1.0, 1.0));
        assert_eq!(mesh.vertex_coords()[19], Point2::new(2.0, 2.0));
    }

    #[test]
    fn wrong_corner_count() {
        let result = SolpsMesh::new(
            Array3::zeros((2, 3, 3)),
            Array3::zeros((2, 3, 3)),
            Array2::ones((2, 3)),
        );
        assert_eq!(result, Err(Error::UnexpectedCornerCount { found: 3 }));
    }

    #[test]
    fn mismatched_corners() {
        let (r, _, v) = square_grid(2, 3);
        let result = SolpsMesh::new(r, Array3::zeros((3, 2, 4)), v);
        assert!(matches!(result, Err(Error::CornerShapeMismatch { .. })));
    }

    #[test]
    fn mismatched_volume() {
        let (r, z, _) = square_grid(2, 3);
        let result = SolpsMesh::new(r, z, Array2::ones((3, 2)));
        assert_eq!(
            result,
            Err(Error::VolumeShapeMismatch {
                expected: vec![2, 3],
                found: vec![3, 2]
            })
        );
    }

    #[test]
    fn empty_grid() {
        let result = SolpsMesh::new(
            Array3::zeros((0, 3, 4)),
            Array3::zeros((0, 3, 4)),
            Array2::ones((0, 3)),
        );
        assert_eq!(result, Err(Error::EmptyGrid));
    }

    #[test]
    fn centres_and_extent() {
        let (r, z, v) = square_grid(2, 3);
        let mesh = SolpsMesh::new(r, z, v).unwrap();

        assert_eq!(mesh.cell_centre(1, 2), Some(Point2::new(2.5, 1.5)));
        assert_eq!(mesh.cell_centre(2, 0), None);
        assert_eq!(mesh.cell_centres().len(), 6);
        assert_eq!(mesh.cell_centres()[0], Point2::new(0.5, 0.5));

        assert_eq!(
            mesh.extent(),
            Extent {
                r_min: 0.0,
                r_max: 3.0,
                z_min: 0.0,
                z_max: 2.0
            }
        );
    }
}
