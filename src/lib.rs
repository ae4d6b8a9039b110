//! `edgetools` is a small modular toolkit for loading plasma-edge simulation
//! outputs
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use edgetools_format as format;

#[cfg(feature = "species")]
#[cfg_attr(docsrs, doc(cfg(feature = "species")))]
#[doc(inline)]
pub use edgetools_species as species;

#[cfg(feature = "mesh")]
#[cfg_attr(docsrs, doc(cfg(feature = "mesh")))]
#[doc(inline)]
pub use edgetools_mesh as mesh;

#[cfg(feature = "solps")]
#[cfg_attr(docsrs, doc(cfg(feature = "solps")))]
#[doc(inline)]
pub use edgetools_solps as solps;
