//! Integration tests for decoding every catalog entry

use edgetools_species::{decode, Error, SpeciesRecord, CATALOG};
use rstest::rstest;

/// Padded code as written to balance files, e.g. " Ne+3"
fn raw_code(symbol: &str, charge: u32) -> String {
    if charge == 0 {
        format!(" {symbol}0")
    } else {
        format!(" {symbol}+{charge}")
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(10)]
fn every_catalog_pair_labels_as_symbol_and_charge(#[case] k: u32) {
    for (z, mass, element) in CATALOG.iter() {
        let species = decode(&raw_code(element.symbol, k), *mass, k as f64).unwrap();
        assert_eq!(species.element.atomic_number, *z);
        assert_eq!(species.label(), format!("{}{}", element.symbol, k));
    }
}

#[rstest]
#[case(1, 1.008)] // hydrogen mass, not in catalog
#[case(10, 20.0)] // neon with rounded mass
#[case(74, 183.84)] // tungsten
fn unknown_pairs_fail(#[case] z: u32, #[case] mass: f64) {
    let record = SpeciesRecord {
        nuclear_charge: z,
        atomic_mass: mass,
        ionisation: 0,
    };
    assert_eq!(
        record.identify(),
        Err(Error::UnknownSpecies {
            nuclear_charge: z,
            atomic_mass: mass
        })
    );
}

#[rstest]
#[case(" T0")]
#[case(" H+1")]
#[case("")]
#[case(" 0")]
fn unknown_codes_fail(#[case] code: &str) {
    assert!(matches!(
        decode(code, 2.0, 0.0),
        Err(Error::UnknownSpeciesCode { .. })
    ));
}
