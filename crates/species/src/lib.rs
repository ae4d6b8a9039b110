//! Species catalog and decoding for plasma-edge simulation outputs
//!
//! Simulation outputs describe each plasma species with a character code, an
//! atomic mass, and a charge state. This crate turns those into a typed
//! [Species] with a canonical [Element] identity and a label.
//!
//! ```rust
//! # use edgetools_species::{decode, DEUTERIUM};
//! // Decode the raw (code, mass, charge) triplet for a deuterium ion
//! let species = decode(" D+1", 2.0, 1.0).unwrap();
//!
//! assert_eq!(species.element, &DEUTERIUM);
//! assert_eq!(species.label(), "D1");
//! ```
//!
//! The label is what indexes the species axis of density arrays, so the
//! decoder never guesses. Unrecognised codes and (charge, mass) pairs missing
//! from the [CATALOG] are errors.

// Split into subfiles for development, but anything important is re-exported
mod catalog;
mod decode;
mod error;

#[doc(inline)]
pub use catalog::{
    lookup, Element, ARGON, BERYLLIUM, CARBON, CATALOG, DEUTERIUM, HELIUM, KRYPTON, NEON,
    NITROGEN, OXYGEN, XENON,
};

#[doc(inline)]
pub use decode::{decode, is_known_symbol, Species, SpeciesCode, SpeciesRecord};

#[doc(inline)]
pub use error::{Error, Result};
