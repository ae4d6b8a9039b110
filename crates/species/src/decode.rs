//! Decoding of raw per-species records
//!
//! Every species in a simulation output is described by three parallel
//! arrays: a short character code (e.g. ` D0`, ` Ne+3`), the atomic mass used
//! in the run, and the charge state. Nothing stores the element directly.
//!
//! Decoding happens in three steps:
//! 1. The code is matched against an explicit decision table of chemical
//!    symbols to give a [SpeciesCode] and therefore a nuclear charge
//! 2. (nuclear charge, atomic mass) is looked up in the
//!    [CATALOG](crate::CATALOG)
//! 3. The label is rendered as symbol + charge state, e.g. `D0`, `Ne3`

// crate modules
use crate::catalog::{element_from_symbol, lookup, Element};
use crate::error::{Error, Result};

// edgetools modules
use edgetools_format::f;

// external crates
use log::trace;

/// Species code variants recognised by the decoder
///
/// The code written by the simulation starts with the chemical symbol, often
/// after a padding character. The symbol is the first upper case letter plus
/// an optional lower case letter, so `N` followed by `e` is neon while `N`
/// followed by anything else is nitrogen.
///
/// | Symbol | Variant   | Z  |
/// | ------ | --------- | -- |
/// | D      | Deuterium | 1  |
/// | He     | Helium    | 2  |
/// | Be     | Beryllium | 4  |
/// | C      | Carbon    | 6  |
/// | N      | Nitrogen  | 7  |
/// | O      | Oxygen    | 8  |
/// | Ne     | Neon      | 10 |
/// | Ar     | Argon     | 18 |
/// | Kr     | Krypton   | 36 |
/// | Xe     | Xenon     | 54 |
///
/// Anything else is an [Error::UnknownSpeciesCode]. There is no fallback.
///
/// ```rust
/// # use edgetools_species::SpeciesCode;
/// # use std::str::FromStr;
/// assert_eq!(SpeciesCode::from_str(" N+2").unwrap(), SpeciesCode::Nitrogen);
/// assert_eq!(SpeciesCode::from_str(" Ne+2").unwrap(), SpeciesCode::Neon);
/// assert!(SpeciesCode::from_str(" H0").is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpeciesCode {
    /// `D`
    Deuterium,
    /// `He`
    Helium,
    /// `Be`
    Beryllium,
    /// `C`
    Carbon,
    /// `N`
    Nitrogen,
    /// `O`
    Oxygen,
    /// `Ne`
    Neon,
    /// `Ar`
    Argon,
    /// `Kr`
    Krypton,
    /// `Xe`
    Xenon,
}

impl SpeciesCode {
    /// Nuclear charge Z implied by the code
    pub fn nuclear_charge(&self) -> u32 {
        match self {
            SpeciesCode::Deuterium => 1,
            SpeciesCode::Helium => 2,
            SpeciesCode::Beryllium => 4,
            SpeciesCode::Carbon => 6,
            SpeciesCode::Nitrogen => 7,
            SpeciesCode::Oxygen => 8,
            SpeciesCode::Neon => 10,
            SpeciesCode::Argon => 18,
            SpeciesCode::Krypton => 36,
            SpeciesCode::Xenon => 54,
        }
    }

    /// Chemical symbol matched by the code
    pub fn symbol(&self) -> &str {
        match self {
            SpeciesCode::Deuterium => "D",
            SpeciesCode::Helium => "He",
            SpeciesCode::Beryllium => "Be",
            SpeciesCode::Carbon => "C",
            SpeciesCode::Nitrogen => "N",
            SpeciesCode::Oxygen => "O",
            SpeciesCode::Neon => "Ne",
            SpeciesCode::Argon => "Ar",
            SpeciesCode::Krypton => "Kr",
            SpeciesCode::Xenon => "Xe",
        }
    }
}

impl std::str::FromStr for SpeciesCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match leading_symbol(s) {
            "D" => Ok(SpeciesCode::Deuterium),
            "He" => Ok(SpeciesCode::Helium),
            "Be" => Ok(SpeciesCode::Beryllium),
            "C" => Ok(SpeciesCode::Carbon),
            "N" => Ok(SpeciesCode::Nitrogen),
            "O" => Ok(SpeciesCode::Oxygen),
            "Ne" => Ok(SpeciesCode::Neon),
            "Ar" => Ok(SpeciesCode::Argon),
            "Kr" => Ok(SpeciesCode::Krypton),
            "Xe" => Ok(SpeciesCode::Xenon),
            _ => Err(Error::UnknownSpeciesCode {
                code: s.to_string(),
            }),
        }
    }
}

/// Chemical symbol at the start of a code, skipping any padding
fn leading_symbol(code: &str) -> &str {
    let code = code.trim_start_matches(|c: char| !c.is_ascii_alphabetic());
    let bytes = code.as_bytes();
    match bytes {
        [first, second, ..] if first.is_ascii_uppercase() && second.is_ascii_lowercase() => {
            &code[..2]
        }
        [first, ..] if first.is_ascii_uppercase() => &code[..1],
        _ => "",
    }
}

/// A raw species record with the nuclear charge resolved
///
/// The atomic mass is kept exactly as stored in the source data since it is
/// part of the catalog key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesRecord {
    /// Nuclear charge Z (>= 1)
    pub nuclear_charge: u32,
    /// Atomic mass as written by the simulation
    pub atomic_mass: f64,
    /// Charge state (0 for neutrals)
    pub ionisation: u32,
}

impl SpeciesRecord {
    /// Build a record from the raw (code, mass, charge) triplet
    ///
    /// The charge state is stored as a float in most outputs, so anything
    /// negative, non-finite, fractional, or beyond `u32` is rejected.
    pub fn from_raw(code: &str, atomic_mass: f64, charge: f64) -> Result<Self> {
        let species_code: SpeciesCode = code.parse()?;

        if !charge.is_finite() || charge < 0.0 || charge.fract() != 0.0 || charge > u32::MAX as f64 {
            return Err(Error::InvalidChargeState {
                code: code.to_string(),
                value: charge,
            });
        }

        Ok(Self {
            nuclear_charge: species_code.nuclear_charge(),
            atomic_mass,
            ionisation: charge as u32,
        })
    }

    /// Resolve the canonical identity through the catalog
    pub fn identify(&self) -> Result<Species> {
        let element = lookup(self.nuclear_charge, self.atomic_mass)?;
        Ok(Species {
            element,
            ionisation: self.ionisation,
        })
    }
}

/// A decoded species, i.e. an element in a given charge state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Species {
    /// Shared canonical identity
    pub element: &'static Element,
    /// Charge state (0 for neutrals)
    pub ionisation: u32,
}

impl Species {
    /// Label used to index species, symbol followed by the charge state
    ///
    /// ```rust
    /// # use edgetools_species::{Species, ARGON, DEUTERIUM};
    /// let species = Species { element: &ARGON, ionisation: 3 };
    /// assert_eq!(species.label(), "Ar3");
    ///
    /// let species = Species { element: &DEUTERIUM, ionisation: 0 };
    /// assert_eq!(species.label(), "D0");
    /// ```
    pub fn label(&self) -> String {
        f!("{}{}", self.element.symbol, self.ionisation)
    }

    /// True for the neutral charge state
    pub fn is_neutral(&self) -> bool {
        self.ionisation == 0
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Decode a raw species record straight into a [Species]
///
/// ```rust
/// # use edgetools_species::{decode, NEON};
/// let species = decode(" Ne+3", 20.18, 3.0).unwrap();
/// assert_eq!(species.element, &NEON);
/// assert_eq!(species.label(), "Ne3");
/// ```
pub fn decode(code: &str, atomic_mass: f64, charge: f64) -> Result<Species> {
    let species = SpeciesRecord::from_raw(code, atomic_mass, charge)?.identify()?;
    trace!("Decoded \"{code}\" as {}", species.label());
    Ok(species)
}

/// Symbol lookup that ignores the catalog masses
///
/// Handy for checking whether a symbol is known at all before loading data.
///
/// ```rust
/// # use edgetools_species::is_known_symbol;
/// assert!(is_known_symbol("Ne"));
/// assert!(!is_known_symbol("W"));
/// ```
pub fn is_known_symbol(symbol: &str) -> bool {
    element_from_symbol(symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CARBON, DEUTERIUM, NITROGEN};

    #[test]
    fn symbol_after_padding() {
        assert_eq!(leading_symbol(" D0"), "D");
        assert_eq!(leading_symbol("D+1"), "D");
        assert_eq!(leading_symbol(" Ne+10"), "Ne");
        assert_eq!(leading_symbol(" N+7"), "N");
        assert_eq!(leading_symbol("   "), "");
        assert_eq!(leading_symbol(" 12"), "");
    }

    #[test]
    fn second_letter_disambiguates() {
        assert_eq!(" N0".parse::<SpeciesCode>().unwrap(), SpeciesCode::Nitrogen);
        assert_eq!(" Ne0".parse::<SpeciesCode>().unwrap(), SpeciesCode::Neon);
        assert_eq!(" A".parse::<SpeciesCode>().ok(), None);
        assert_eq!(" Ar".parse::<SpeciesCode>().unwrap(), SpeciesCode::Argon);
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert_eq!(
            " W+1".parse::<SpeciesCode>(),
            Err(Error::UnknownSpeciesCode {
                code: " W+1".to_string()
            })
        );
    }

    #[test]
    fn record_from_raw() {
        let record = SpeciesRecord::from_raw(" C+6", 12.0, 6.0).unwrap();
        assert_eq!(record.nuclear_charge, 6);
        assert_eq!(record.ionisation, 6);
        assert_eq!(record.identify().unwrap().element, &CARBON);
    }

    #[test]
    fn bad_charge_states() {
        for charge in [-1.0, 0.5, f64::NAN, f64::INFINITY, 1e12] {
            assert!(matches!(
                SpeciesRecord::from_raw(" D0", 2.0, charge),
                Err(Error::InvalidChargeState { .. })
            ));
        }
    }

    #[test]
    fn huge_charge_does_not_saturate() {
        assert!(matches!(
            decode(" D+1", 2.0, 1e12),
            Err(Error::InvalidChargeState { .. })
        ));
    }

    #[test]
    fn labels() {
        assert_eq!(decode(" D0", 2.0, 0.0).unwrap().label(), "D0");
        assert_eq!(decode(" D+1", 2.0, 1.0).unwrap().label(), "D1");
        assert_eq!(decode(" N+4", 14.0, 4.0).unwrap().element, &NITROGEN);
        assert!(decode(" D0", 2.0, 0.0).unwrap().is_neutral());
        assert_eq!(decode(" D0", 2.0, 0.0).unwrap().element, &DEUTERIUM);
    }

    #[test]
    fn known_code_unknown_mass() {
        // hydrogen mass with a deuterium code
        assert_eq!(
            decode(" D0", 1.008, 0.0),
            Err(Error::UnknownSpecies {
                nuclear_charge: 1,
                atomic_mass: 1.008
            })
        );
    }
}
