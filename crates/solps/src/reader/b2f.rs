//! Reader for b2f formatted text files
//!
//! The b2f format is a sequence of blocks, each with a `*cf:` header giving
//! the data type, number of values, and variable name.
//!
//! ```text
//!    VERSION03.001.000
//! *cf:    char       32  label
//! example label
//! *cf:    int         2  nx,ny
//!     96   36
//! *cf:    real    15096  crx
//!  -1.23456789E+00  1.23456789E+00 ...
//! ```
//!
//! Arrays are written in Fortran order with the poloidal index varying
//! fastest. Using the `nx,ny` dimensions, arrays with one value per cell
//! (guard cells included) become `(ny + 2, nx + 2)` and arrays with four
//! values per cell become `(4, ny + 2, nx + 2)`. This is the same storage
//! order as balance files, so the rest of the loader does not care where the
//! fields came from.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::fields::RawFieldSet;
use crate::geometry::GridGeometry;
use crate::reader::parsers::{self, BlockHeader, BlockKind};
use crate::reader::FieldReader;

// edgetools modules
use edgetools_mesh::CORNERS;

// external crates
use log::{debug, trace};
use ndarray::{ArrayD, IxDyn};

/// General information from a b2f file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct B2fHeader {
    /// Format version following the `VERSION` tag, if present
    pub version: Option<String>,
    /// Free text label block, if present
    pub label: Option<String>,
    /// Interior cell counts `(nx, ny)`, if present
    pub dimensions: Option<(usize, usize)>,
}

/// Contents of a b2f file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct B2fFile {
    pub header: B2fHeader,
    pub fields: RawFieldSet,
}

impl B2fFile {
    /// Corner coordinates and volumes in grid order
    pub fn geometry(&self) -> Result<GridGeometry> {
        GridGeometry::from_fields(&self.fields)
    }
}

/// Parser for b2f text files
///
/// ```rust
/// # use edgetools_solps::B2fReader;
/// let text = "\
/// *cf:    int         2  nx,ny
///     1    1
/// *cf:    real        9  vol
///  1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0
/// ";
/// let file = B2fReader.parse(text.as_bytes()).unwrap();
///
/// assert_eq!(file.header.dimensions, Some((1, 1)));
/// assert_eq!(file.fields.numeric("vol").unwrap().shape(), &[3, 3]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct B2fReader;

impl B2fReader {
    /// Read a b2f file at `path`
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<B2fFile> {
        let path = path.as_ref();
        debug!("Reading b2f file {}", path.display());
        let file = File::open(path)?;
        self.parse(BufReader::new(file))
    }

    /// Parse b2f formatted text from any buffered reader
    ///
    /// Lines are processed one at a time, only the values of the current
    /// block are held as text.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<B2fFile> {
        let mut header = B2fHeader::default();
        let mut blocks: Vec<(BlockHeader, Vec<f64>, String)> = Vec::new();

        for (n, line) in reader.lines().enumerate() {
            let line = line?;

            if n == 0 && parsers::is_version(&line) {
                let (_, version) = parsers::version(&line).map_err(|_| Error::ParseError(line.clone()))?;
                header.version = Some(version.to_string());
            } else if parsers::is_block_header(&line) {
                let (_, block) = parsers::block_header(&line).map_err(|_| Error::ParseError(line.clone()))?;
                trace!("Found {:?} block \"{}\" ({} values)", block.kind, block.name, block.count);
                blocks.push((block, Vec::new(), String::new()));
            } else if let Some((block, values, text)) = blocks.last_mut() {
                match block.kind {
                    BlockKind::Char => text.push_str(&line),
                    _ => values.extend(numbers(&line)?),
                }
            } else if !line.trim().is_empty() {
                return Err(Error::ParseError(line));
            }
        }

        let mut fields = RawFieldSet::new();
        let mut numeric = Vec::new();

        for (block, values, text) in blocks {
            match block.kind {
                BlockKind::Char => {
                    let text: String = text.chars().take(block.count).collect();
                    if block.name == "label" {
                        header.label = Some(text.trim().to_string());
                    }
                    let bytes = text.into_bytes();
                    let array = ArrayD::from_shape_vec(IxDyn(&[bytes.len()]), bytes)
                        .map_err(|_| Error::ParseError(block.name.clone()))?;
                    fields.insert(block.name, array);
                }
                _ => {
                    if values.len() != block.count {
                        return Err(Error::UnexpectedDimensions {
                            name: block.name,
                            expected: vec![block.count],
                            found: vec![values.len()],
                        });
                    }
                    numeric.extend(split_names(block, values));
                }
            }
        }

        header.dimensions = dimensions(&numeric)?;
        let grid = header.dimensions.map(grid_shape).transpose()?;
        for (name, values) in numeric {
            let array = arrange(&name, values, grid)?;
            fields.insert(name, array);
        }

        debug!("Parsed {} b2f fields", fields.len());
        Ok(B2fFile { header, fields })
    }
}

impl FieldReader for B2fReader {
    fn read_fields(&self, path: &Path) -> Result<RawFieldSet> {
        Ok(self.read(path)?.fields)
    }
}

/// All numbers on a line, anything left over is an error
fn numbers(line: &str) -> Result<Vec<f64>> {
    match parsers::vector_of_f64(line) {
        Ok((rest, values)) if rest.trim().is_empty() => Ok(values),
        _ => Err(Error::ParseError(line.to_string())),
    }
}

/// Integer blocks like `nx,ny` hold one value per name
fn split_names(block: BlockHeader, values: Vec<f64>) -> Vec<(String, Vec<f64>)> {
    let names: Vec<&str> = block.name.split(',').map(str::trim).collect();
    if block.kind == BlockKind::Int && names.len() > 1 && names.len() == values.len() {
        names
            .into_iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), vec![value]))
            .collect()
    } else {
        vec![(block.name, values)]
    }
}

/// Interior dimensions from the `nx` and `ny` blocks
fn dimensions(numeric: &[(String, Vec<f64>)]) -> Result<Option<(usize, usize)>> {
    let find = |target: &str| {
        numeric
            .iter()
            .find(|(name, _)| name == target)
            .and_then(|(_, values)| values.first().copied())
    };
    match (find("nx"), find("ny")) {
        (Some(nx), Some(ny)) => Ok(Some((cell_count("nx", nx)?, cell_count("ny", ny)?))),
        _ => Ok(None),
    }
}

/// Integer blocks are read as floats, so check they are whole cell counts
fn cell_count(name: &str, value: f64) -> Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(Error::ParseError(format!("{name} = {value} is not a cell count")));
    }
    Ok(value as usize)
}

/// Radial and poloidal sizes including guard cells
///
/// Also checks that a block of corner values for this grid fits in `usize`.
fn grid_shape((nx, ny): (usize, usize)) -> Result<(usize, usize)> {
    let too_large = || Error::ParseError(format!("grid of {nx} x {ny} cells is too large"));
    let nr = ny.checked_add(2).ok_or_else(too_large)?;
    let np = nx.checked_add(2).ok_or_else(too_large)?;
    nr.checked_mul(np)
        .and_then(|cells| cells.checked_mul(CORNERS))
        .ok_or_else(too_large)?;
    Ok((nr, np))
}

/// Shape a flat array of values from the guard cell grid
fn arrange(name: &str, values: Vec<f64>, grid: Option<(usize, usize)>) -> Result<ArrayD<f64>> {
    let shape = match grid {
        Some((nr, np)) if values.len() == CORNERS * nr * np => vec![CORNERS, nr, np],
        Some((nr, np)) if values.len() == nr * np => vec![nr, np],
        _ => vec![values.len()],
    };
    trace!("Arranging {name} into {shape:?}");
    ArrayD::from_shape_vec(IxDyn(&shape), values).map_err(|_| Error::ParseError(name.to_string()))
}
