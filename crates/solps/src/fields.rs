//! Named raw arrays as read from a simulation output

// standard library
use std::collections::BTreeMap;

// crate modules
use crate::error::{Error, Result};

// external crates
use ndarray::{ArrayD, ArrayView, Dimension};

/// A single raw array from a simulation output
///
/// Character variables are kept as bytes, everything else is converted to
/// `f64` on reading.
#[derive(Debug, Clone, PartialEq)]
pub enum RawField {
    Numeric(ArrayD<f64>),
    Text(ArrayD<u8>),
}

impl RawField {
    /// Shape of the underlying array
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Numeric(array) => array.shape(),
            Self::Text(array) => array.shape(),
        }
    }

    /// Short name of the variant for error messages
    fn kind(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::Text(_) => "text",
        }
    }
}

impl From<ArrayD<f64>> for RawField {
    fn from(array: ArrayD<f64>) -> Self {
        Self::Numeric(array)
    }
}

impl From<ArrayD<u8>> for RawField {
    fn from(array: ArrayD<u8>) -> Self {
        Self::Text(array)
    }
}

/// Collection of raw arrays keyed by their variable name
///
/// This is the only thing a reader has to produce. Everything downstream
/// works from a [RawFieldSet], so alternative file formats just need to fill
/// one in.
///
/// ```rust
/// # use edgetools_solps::RawFieldSet;
/// # use ndarray::{ArrayD, IxDyn};
/// let mut fields = RawFieldSet::new();
/// fields.insert("vol", ArrayD::<f64>::ones(IxDyn(&[2, 3])));
///
/// assert!(fields.contains("vol"));
/// assert_eq!(fields.numeric("vol").unwrap().shape(), &[2, 3]);
/// assert!(fields.numeric("te").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFieldSet {
    fields: BTreeMap<String, RawField>,
}

impl RawFieldSet {
    /// New empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, returning any previous field of the same name
    pub fn insert(&mut self, name: impl Into<String>, field: impl Into<RawField>) -> Option<RawField> {
        self.fields.insert(name.into(), field.into())
    }

    /// Remove a field by name
    pub fn remove(&mut self, name: &str) -> Option<RawField> {
        self.fields.remove(name)
    }

    /// Check if a field of any type exists
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get a field of any type
    pub fn get(&self, name: &str) -> Option<&RawField> {
        self.fields.get(name)
    }

    /// Get a numeric field, failing if missing or not numeric
    pub fn numeric(&self, name: &str) -> Result<&ArrayD<f64>> {
        match self.require(name)? {
            RawField::Numeric(array) => Ok(array),
            _ => Err(Error::UnexpectedFieldType {
                name: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// Get a character field, failing if missing or not text
    pub fn text(&self, name: &str) -> Result<&ArrayD<u8>> {
        match self.require(name)? {
            RawField::Text(array) => Ok(array),
            _ => Err(Error::UnexpectedFieldType {
                name: name.to_string(),
                expected: "text",
            }),
        }
    }

    /// Numeric field viewed with a fixed number of dimensions
    pub fn view<D: Dimension>(&self, name: &str) -> Result<ArrayView<'_, f64, D>> {
        let array = self.numeric(name)?;
        array
            .view()
            .into_dimensionality::<D>()
            .map_err(|_| Error::UnexpectedRank {
                name: name.to_string(),
                expected: D::NDIM.unwrap_or(array.ndim()),
                found: array.ndim(),
            })
    }

    /// Iterator over all field names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if there are no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn require(&self, name: &str) -> Result<&RawField> {
        self.fields
            .get(name)
            .ok_or_else(|| Error::MissingField(name.to_string()))
    }
}

impl std::fmt::Display for RawFieldSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use edgetools_format::ShapeFormat;
        writeln!(f, "Fields ({}):", self.len())?;
        for (name, field) in &self.fields {
            writeln!(f, "  {:<24} {:<8} {}", name, field.kind(), field.shape().shape_string())?;
        }
        Ok(())
    }
}
