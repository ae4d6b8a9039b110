//! Axisymmetric evaluation of 2D functions

// crate modules
use crate::error::Result;
use crate::interpolate::{Discrete2DMesh, Function2D};
use crate::mesh::SolpsMesh;

/// A scalar function of three variables
pub trait Function3D {
    /// Evaluate the function at (x, y, z)
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Evaluates a function of (r, z) in cartesian space
///
/// The radius is taken as `r = sqrt(x^2 + y^2)`, so the toroidal angle is
/// ignored entirely.
///
/// ```rust
/// # use edgetools_mesh::{AxisymmetricMapper, Discrete2DMesh, Function3D};
/// # use nalgebra::Point2;
/// # let vertices = vec![Point2::new(1.0, 0.0), Point2::new(2.0, 0.0), Point2::new(1.0, 1.0)];
/// # let interpolant = Discrete2DMesh::new(vertices, vec![[0, 1, 2]], vec![1.0]).unwrap();
/// let mapper = AxisymmetricMapper::new(interpolant);
///
/// // same (r, z) at different toroidal angles
/// assert_eq!(mapper.evaluate(1.2, 0.0, 0.1), 1.0);
/// assert_eq!(mapper.evaluate(0.0, -1.2, 0.1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AxisymmetricMapper<F> {
    function: F,
}

impl<F: Function2D> AxisymmetricMapper<F> {
    /// Wrap a 2D function of (r, z)
    pub fn new(function: F) -> Self {
        Self { function }
    }

    /// The underlying function of (r, z)
    pub fn function(&self) -> &F {
        &self.function
    }
}

impl<F: Function2D> Function3D for AxisymmetricMapper<F> {
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        self.function.evaluate(x.hypot(y), z)
    }
}

/// Inside/outside indicator for a mesh
pub type InsideOutside = AxisymmetricMapper<Discrete2DMesh>;

/// Build the inside/outside indicator for a mesh
///
/// Every triangle is given a value of `1.0`, and anything outside of the mesh
/// evaluates to `0.0`. The result is independent of the mesh once built.
pub fn inside_outside(mesh: &SolpsMesh) -> Result<InsideOutside> {
    let ones = vec![1.0; mesh.num_triangles()];
    let interpolant = Discrete2DMesh::from_mesh(mesh, ones)?;
    Ok(AxisymmetricMapper::new(interpolant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    /// Row of `np` unit squares starting at r = 1
    fn strip(np: usize) -> SolpsMesh {
        let mut cr_r = Array3::zeros((1, np, 4));
        let mut cr_z = Array3::zeros((1, np, 4));
        for ip in 0..np {
            let corners = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
            for (c, (dr, dz)) in corners.iter().enumerate() {
                cr_r[[0, ip, c]] = 1.0 + ip as f64 + dr;
                cr_z[[0, ip, c]] = *dz;
            }
        }
        SolpsMesh::new(cr_r, cr_z, Array2::ones((1, np))).unwrap()
    }

    #[test]
    fn indicator_values() {
        let inside = inside_outside(&strip(3)).unwrap();

        // on the mesh at several toroidal angles
        assert_eq!(inside.evaluate(2.5, 0.0, 0.5), 1.0);
        assert_eq!(inside.evaluate(0.0, 2.5, 0.5), 1.0);
        assert_eq!(inside.evaluate(-1.5, -2.0, 0.5), 1.0);

        // inboard of the mesh, above it, and far outboard
        assert_eq!(inside.evaluate(0.5, 0.0, 0.5), 0.0);
        assert_eq!(inside.evaluate(2.5, 0.0, 1.5), 0.0);
        assert_eq!(inside.evaluate(10.0, 0.0, 0.5), 0.0);
    }

    #[test]
    fn custom_functions() {
        struct Radius;
        impl Function2D for Radius {
            fn evaluate(&self, x: f64, _: f64) -> f64 {
                x
            }
        }
        let mapper = AxisymmetricMapper::new(Radius);
        assert_eq!(mapper.evaluate(3.0, 4.0, 0.0), 5.0);
    }
}
