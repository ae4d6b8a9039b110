//! Reader for NetCDF balance files

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::fields::{RawField, RawFieldSet};
use crate::reader::FieldReader;

// external crates
use ::netcdf::types::{FloatType, IntType, NcVariableType};
use ::netcdf::NcTypeDescriptor;
use ::netcdf::Variable;
use log::{debug, trace};
use ndarray::{ArrayD, IxDyn};

/// Reads every supported variable of a NetCDF file
///
/// Character variables become [RawField::Text], integer and floating point
/// variables are all converted to `f64`. Anything else (compound, string,
/// etc.) is skipped.
///
/// The file handle only lives for the duration of
/// [read_fields()](FieldReader::read_fields) and is always closed on return.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetcdfReader;

impl FieldReader for NetcdfReader {
    fn read_fields(&self, path: &Path) -> Result<RawFieldSet> {
        let file = ::netcdf::open(path)?;
        let mut fields = RawFieldSet::new();

        for variable in file.variables() {
            let name = variable.name();
            match read_variable(&variable)? {
                Some(field) => {
                    trace!("Read {name} {:?}", field.shape());
                    fields.insert(name, field);
                }
                None => debug!("Skipping unsupported variable {name}"),
            }
        }

        debug!("Read {} fields from {}", fields.len(), path.display());
        Ok(fields)
    }
}

fn read_variable(variable: &Variable) -> Result<Option<RawField>> {
    let shape: Vec<usize> = variable.dimensions().iter().map(|d| d.len()).collect();

    let field = match variable.vartype() {
        NcVariableType::Char => {
            let bytes = variable.get_raw_values(..)?;
            RawField::Text(shaped(variable, &shape, bytes)?)
        }
        NcVariableType::Float(FloatType::F64) => {
            let values = variable.get_values::<f64, _>(..)?;
            RawField::Numeric(shaped(variable, &shape, values)?)
        }
        NcVariableType::Float(FloatType::F32) => numeric::<f32>(variable, &shape)?,
        NcVariableType::Int(IntType::I32) => numeric::<i32>(variable, &shape)?,
        NcVariableType::Int(IntType::I16) => numeric::<i16>(variable, &shape)?,
        NcVariableType::Int(IntType::I8) => numeric::<i8>(variable, &shape)?,
        NcVariableType::Int(IntType::U8) => numeric::<u8>(variable, &shape)?,
        _ => return Ok(None),
    };
    Ok(Some(field))
}

/// Read values of any type that converts losslessly to f64
fn numeric<T>(variable: &Variable, shape: &[usize]) -> Result<RawField>
where
    T: NcTypeDescriptor + Copy,
    f64: From<T>,
{
    let values = variable
        .get_values::<T, _>(..)?
        .into_iter()
        .map(f64::from)
        .collect();
    Ok(RawField::Numeric(shaped(variable, shape, values)?))
}

/// Flat values in C order to an array of the variable shape
fn shaped<T>(variable: &Variable, shape: &[usize], values: Vec<T>) -> Result<ArrayD<T>> {
    let found = vec![values.len()];
    ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|_| Error::UnexpectedDimensions {
        name: variable.name(),
        expected: shape.to_vec(),
        found,
    })
}
