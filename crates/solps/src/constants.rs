//! Physical constants and field names used by the loader

/// Elementary charge (C), also the J/eV conversion factor
pub const ELEMENTARY_CHARGE: f64 = 1.602e-19;

/// Hydrogen ionisation potential (eV)
pub const IONISATION_POTENTIAL: f64 = 13.6;

/// Label of the neutral deuterium species replaced by kinetic densities
pub const NEUTRAL_LABEL: &str = "D0";

/// Trailing poloidal padding columns on kinetic atom densities
pub const KINETIC_PADDING: usize = 2;

/// Names of the fields read from balance files
pub mod names {
    /// Corner radial coordinates (4, nr, np)
    pub const CRX: &str = "crx";
    /// Corner vertical coordinates (4, nr, np)
    pub const CRY: &str = "cry";
    /// Cell volumes (nr, np)
    pub const VOL: &str = "vol";
    /// Electron temperature in J (nr, np)
    pub const TE: &str = "te";
    /// Electron density (nr, np)
    pub const NE: &str = "ne";
    /// Species codes as characters (ns, nchar)
    pub const SPECIES: &str = "species";
    /// Species atomic masses (ns)
    pub const AM: &str = "am";
    /// Species charge states (ns)
    pub const ZA: &str = "za";
    /// Species densities (ns, nr, np)
    pub const NA: &str = "na";
    /// Kinetic atom densities (natm, nr, np + 2)
    pub const DAB2: &str = "dab2";
    /// Fluid electron energy loss
    pub const B2_ENERGY_LOSS: &str = "b2stel_she_bal";
    /// Fluid ionisation sources
    pub const B2_IONISATION: &str = "b2stel_sna_ion_bal";
    /// Kinetic electron energy loss
    pub const EIRENE_ENERGY_LOSS: &str = "eirene_mc_eael_she_bal";
    /// Kinetic particle sources
    pub const EIRENE_IONISATION: &str = "eirene_mc_papl_sna_bal";
}
