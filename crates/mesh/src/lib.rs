//! Structured quad mesh tools for plasma-edge grids
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod interpolate;
mod mapper;
mod mesh;

// inline important the mesh-related modules for a nice public API
#[doc(inline)]
pub use mesh::{Extent, SolpsMesh, CORNERS};

#[doc(inline)]
pub use interpolate::{Discrete2DMesh, Function2D};

#[doc(inline)]
pub use mapper::{inside_outside, AxisymmetricMapper, Function3D, InsideOutside};

#[doc(inline)]
pub use error::{Error, Result};
