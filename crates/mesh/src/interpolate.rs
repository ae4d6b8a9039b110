//! Piecewise-constant interpolation over a triangulated mesh

// crate modules
use crate::error::{Error, Result};
use crate::mesh::SolpsMesh;

// external crates
use nalgebra::Point2;

/// A scalar function of two variables
pub trait Function2D {
    /// Evaluate the function at (x, y)
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

/// Constant value per triangle, no extrapolation
///
/// Every triangle carries a single value. A point is looked up by finding the
/// triangle that contains it, with points exactly on an edge considered
/// inside.
///
/// Points outside of every triangle are never an error when evaluated through
/// [Function2D]. The `default_value` is returned instead, which is `0.0`
/// unless set otherwise. Use [find()](Discrete2DMesh::find) to distinguish
/// the two cases explicitly.
///
/// ```rust
/// # use edgetools_mesh::{Discrete2DMesh, Function2D};
/// # use nalgebra::Point2;
/// let vertices = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let interpolant = Discrete2DMesh::new(vertices, vec![[0, 1, 2]], vec![5.0]).unwrap();
///
/// assert_eq!(interpolant.evaluate(0.2, 0.2), 5.0);
/// assert_eq!(interpolant.evaluate(0.8, 0.8), 0.0);
/// assert_eq!(interpolant.find(0.8, 0.8), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Discrete2DMesh {
    vertices: Vec<Point2<f64>>,
    triangles: Vec<[usize; 3]>,
    data: Vec<f64>,
    bounds: Vec<[f64; 4]>,
    default_value: f64,
}

impl Discrete2DMesh {
    /// New interpolant with one value for each triangle
    pub fn new(
        vertices: Vec<Point2<f64>>,
        triangles: Vec<[usize; 3]>,
        data: Vec<f64>,
    ) -> Result<Self> {
        if data.len() != triangles.len() {
            return Err(Error::DataLengthMismatch {
                expected: triangles.len(),
                found: data.len(),
            });
        }

        if let Some(index) = triangles
            .iter()
            .position(|t| t.iter().any(|v| *v >= vertices.len()))
        {
            return Err(Error::InvalidTriangle {
                index,
                n_vertices: vertices.len(),
            });
        }

        let bounds = triangles
            .iter()
            .map(|[a, b, c]| {
                let (a, b, c) = (vertices[*a], vertices[*b], vertices[*c]);
                [
                    a.x.min(b.x).min(c.x),
                    a.x.max(b.x).max(c.x),
                    a.y.min(b.y).min(c.y),
                    a.y.max(b.y).max(c.y),
                ]
            })
            .collect();

        Ok(Self {
            vertices,
            triangles,
            data,
            bounds,
            default_value: 0.0,
        })
    }

    /// New interpolant over the triangulation of a [SolpsMesh]
    ///
    /// `data` must have one value per mesh triangle.
    pub fn from_mesh(mesh: &SolpsMesh, data: Vec<f64>) -> Result<Self> {
        Self::new(
            mesh.vertex_coords().to_vec(),
            mesh.triangles().to_vec(),
            data,
        )
    }

    /// Change the value returned for points outside the mesh
    pub fn with_default_value(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }

    /// Value returned for points outside the mesh
    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    /// Value of the first triangle containing (x, y), if any
    pub fn find(&self, x: f64, y: f64) -> Option<f64> {
        self.find_triangle(x, y).map(|index| self.data[index])
    }

    /// Index of the first triangle containing (x, y), if any
    pub fn find_triangle(&self, x: f64, y: f64) -> Option<usize> {
        let point = Point2::new(x, y);
        self.bounds
            .iter()
            .zip(self.triangles.iter())
            .position(|(b, t)| {
                x >= b[0] && x <= b[1] && y >= b[2] && y <= b[3] && self.contains(t, point)
            })
    }

    /// Inclusive point-in-triangle test, degenerate triangles contain nothing
    fn contains(&self, triangle: &[usize; 3], p: Point2<f64>) -> bool {
        let [a, b, c] = triangle.map(|i| self.vertices[i]);

        let area = (b - a).perp(&(c - a));
        if area == 0.0 {
            return false;
        }

        // edge tests flipped to a common orientation
        let d1 = (b - a).perp(&(p - a)) * area.signum();
        let d2 = (c - b).perp(&(p - b)) * area.signum();
        let d3 = (a - c).perp(&(p - c)) * area.signum();

        d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0
    }
}

impl Function2D for Discrete2DMesh {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.find(x, y).unwrap_or(self.default_value)
    }
}
