//! Static catalog of known species
//!
//! Simulation outputs do not store element identities directly, only a
//! nuclear charge inferred from the species code and the atomic mass used in
//! the run. The catalog maps these pairs to a canonical [Element].
//!
//! Masses are compared **exactly**. The catalog must therefore hold the same
//! literal mass values that the simulation writes, including the odd
//! duplicate such as argon appearing as both 39.948 and 40.0.

// crate modules
use crate::error::{Error, Result};

/// Canonical chemical identity of an element or isotope
///
/// Instances are shared `'static` values, every decoded species that refers
/// to an element points at the same static.
#[derive(Debug, PartialEq)]
pub struct Element {
    /// Chemical symbol e.g. 'D', 'Ne'
    pub symbol: &'static str,
    /// Full name e.g. 'deuterium', 'neon'
    pub name: &'static str,
    /// Nuclear charge Z
    pub atomic_number: u32,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Deuterium, the hydrogen isotope used as main plasma species
pub static DEUTERIUM: Element = Element {
    symbol: "D",
    name: "deuterium",
    atomic_number: 1,
};

/// Helium
pub static HELIUM: Element = Element {
    symbol: "He",
    name: "helium",
    atomic_number: 2,
};

/// Beryllium
pub static BERYLLIUM: Element = Element {
    symbol: "Be",
    name: "beryllium",
    atomic_number: 4,
};

/// Carbon
pub static CARBON: Element = Element {
    symbol: "C",
    name: "carbon",
    atomic_number: 6,
};

/// Nitrogen
pub static NITROGEN: Element = Element {
    symbol: "N",
    name: "nitrogen",
    atomic_number: 7,
};

/// Oxygen
pub static OXYGEN: Element = Element {
    symbol: "O",
    name: "oxygen",
    atomic_number: 8,
};

/// Neon
pub static NEON: Element = Element {
    symbol: "Ne",
    name: "neon",
    atomic_number: 10,
};

/// Argon
pub static ARGON: Element = Element {
    symbol: "Ar",
    name: "argon",
    atomic_number: 18,
};

/// Krypton
pub static KRYPTON: Element = Element {
    symbol: "Kr",
    name: "krypton",
    atomic_number: 36,
};

/// Xenon
pub static XENON: Element = Element {
    symbol: "Xe",
    name: "xenon",
    atomic_number: 54,
};

/// Every (nuclear charge, atomic mass) key known to the catalog
///
/// | Z  | Atomic mass | Element   |
/// | -- | ----------- | --------- |
/// | 1  | 2.0         | deuterium |
/// | 2  | 4.003       | helium    |
/// | 4  | 9.012182    | beryllium |
/// | 6  | 12.0        | carbon    |
/// | 7  | 14.0        | nitrogen  |
/// | 8  | 15.9994     | oxygen    |
/// | 10 | 20.18       | neon      |
/// | 18 | 39.948      | argon     |
/// | 18 | 40.0        | argon     |
/// | 36 | 83.798      | krypton   |
/// | 54 | 131.293     | xenon     |
pub static CATALOG: [(u32, f64, &Element); 11] = [
    (1, 2.0, &DEUTERIUM),
    (2, 4.003, &HELIUM),
    (4, 9.012182, &BERYLLIUM),
    (6, 12.0, &CARBON),
    (7, 14.0, &NITROGEN),
    (8, 15.9994, &OXYGEN),
    (10, 20.180, &NEON),
    (18, 39.948, &ARGON),
    (18, 40.0, &ARGON),
    (36, 83.798, &KRYPTON),
    (54, 131.293, &XENON),
];

/// Find the [Element] for a (nuclear charge, atomic mass) pair
///
/// ```rust
/// # use edgetools_species::{lookup, NEON};
/// assert_eq!(lookup(10, 20.18).unwrap(), &NEON);
///
/// // masses must match exactly
/// assert!(lookup(10, 20.0).is_err());
/// ```
pub fn lookup(nuclear_charge: u32, atomic_mass: f64) -> Result<&'static Element> {
    CATALOG
        .iter()
        .find(|(z, mass, _)| *z == nuclear_charge && *mass == atomic_mass)
        .map(|(_, _, element)| *element)
        .ok_or(Error::UnknownSpecies {
            nuclear_charge,
            atomic_mass,
        })
}

/// Find the [Element] for a chemical symbol, ignoring mass
///
/// Used by the decoder to turn a species code into a nuclear charge.
pub(crate) fn element_from_symbol(symbol: &str) -> Option<&'static Element> {
    CATALOG
        .iter()
        .map(|(_, _, element)| *element)
        .find(|element| element.symbol == symbol)
}
