//! Common formatting helpers for `edgetools` types
//!
//! These are left public for convenience.
//!
//! Simulation summaries print a lot of physical quantities and array shapes,
//! so consistent scientific notation and shape strings are useful everywhere.

// standard library
use std::fmt::LowerExp;

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait NumFormat {
    /// Scientific number formatting with a fixed exponent width
    ///
    /// The default `{:e}` formatting drops the exponent sign and padding,
    /// which makes columns of values difficult to read.
    ///
    /// ```rust
    /// # use edgetools_format::NumFormat;
    /// assert_eq!(1.602e-19.sci(3, 2), "1.602e-19".to_string());
    /// assert_eq!((-13.6).sci(2, 2), "-1.36e+01".to_string());
    /// assert_eq!(0.0.sci(1, 3), "0.0e+000".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let raw = f!("{:.precision$e}", self, precision = precision);
        match raw.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                f!("{mantissa}e{sign}{digits:0>exp_pad$}")
            }
            // LowerExp always writes an exponent, but don't panic over it
            None => raw,
        }
    }
}

/// Extends array shapes for compact display
pub trait ShapeFormat {
    /// Join dimensions with an `x`, e.g. `36x96x4`
    ///
    /// ```rust
    /// # use edgetools_format::ShapeFormat;
    /// assert_eq!([36, 96, 4].shape_string(), "36x96x4");
    /// assert_eq!(vec![6].shape_string(), "6");
    /// assert_eq!(Vec::<usize>::new().shape_string(), "scalar");
    /// ```
    fn shape_string(&self) -> String;
}

impl<T: AsRef<[usize]>> ShapeFormat for T {
    fn shape_string(&self) -> String {
        let dims = self.as_ref();
        if dims.is_empty() {
            return "scalar".to_string();
        }
        dims.iter()
            .map(|d| d.to_string())
            .collect::<Vec<String>>()
            .join("x")
    }
}

/// Trim padding from fixed-width character data
///
/// Character arrays from Fortran and NetCDF outputs are padded with spaces or
/// null bytes. This strips both from either end.
///
/// ```rust
/// # use edgetools_format::trim_padding;
/// assert_eq!(trim_padding(b" D0\0\0"), "D0".to_string());
/// assert_eq!(trim_padding(b"   "), "".to_string());
/// ```
pub fn trim_padding(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .to_string()
}
