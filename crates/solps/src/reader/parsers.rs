//! Library of parser functions for b2f text files

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, not_line_ending, space0, space1};
use nom::combinator::{map, map_res, value};
use nom::multi::many0;
use nom::number::complete::double;
use nom::sequence::preceded;
use nom::IResult;

/// Type of data in a b2f block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    Char,
    Int,
    Real,
}

/// Block header, e.g. `*cf:    real    15096  crx`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlockHeader {
    pub kind: BlockKind,
    pub count: usize,
    pub name: String,
}

// ! Boolean checks
/// Check for the `VERSION` tag on the first line
pub(crate) fn is_version(i: &str) -> bool {
    i.trim_start().starts_with("VERSION")
}

/// Check for lines starting `*cf:`
pub(crate) fn is_block_header(i: &str) -> bool {
    i.trim_start().starts_with("*cf:")
}

// ! Parser combinators
/// Everything following the `VERSION` tag, trimmed
pub(crate) fn version(i: &str) -> IResult<&str, &str> {
    let (i, _) = tag("VERSION")(i.trim_start())?;
    map(not_line_ending, str::trim)(i)
}

/// Parse the type, number of values, and name of a block
pub(crate) fn block_header(i: &str) -> IResult<&str, BlockHeader> {
    let (i, _) = tag("*cf:")(i.trim_start())?;
    let (i, kind) = preceded(space1, block_kind)(i)?;
    let (i, count) = preceded(space1, map_res(digit1, str::parse::<usize>))(i)?;
    let (i, name) = preceded(space1, not_line_ending)(i)?;

    let header = BlockHeader {
        kind,
        count,
        name: name.trim().to_string(),
    };
    Ok((i, header))
}

fn block_kind(i: &str) -> IResult<&str, BlockKind> {
    alt((
        value(BlockKind::Char, tag("char")),
        value(BlockKind::Int, tag("int")),
        value(BlockKind::Real, tag("real")),
    ))(i)
}

/// Parse a line of whitespace separated numbers into a vector of f64 values
///
/// Fortran happily runs numbers together when the sign takes the place of a
/// separating space, so `1.0E+00-2.0E+00` is read as two values.
pub(crate) fn vector_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    many0(preceded(space0, double))(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers() {
        let (_, header) = block_header("*cf:    real    15096  crx   ").unwrap();
        assert_eq!(
            header,
            BlockHeader {
                kind: BlockKind::Real,
                count: 15096,
                name: "crx".to_string()
            }
        );

        let (_, header) = block_header("*cf:    int         2  nx,ny").unwrap();
        assert_eq!(header.kind, BlockKind::Int);
        assert_eq!(header.name, "nx,ny");

        assert!(block_header("*cf:    complex  2  z").is_err());
        assert!(is_block_header("  *cf:    char       32  label"));
    }

    #[test]
    fn version_line() {
        assert!(is_version("   VERSION03.001.000"));
        assert_eq!(version("   VERSION03.001.000  ").unwrap().1, "03.001.000");
    }

    #[test]
    fn numbers() {
        let (rest, values) = vector_of_f64("  -1.5E+00  2.0E-01   96").unwrap();
        assert_eq!(values, vec![-1.5, 0.2, 96.0]);
        assert_eq!(rest, "");

        let (_, values) = vector_of_f64(" 1.0E+00-2.0E+00").unwrap();
        assert_eq!(values, vec![1.0, -2.0]);

        let (rest, values) = vector_of_f64("   ").unwrap();
        assert!(values.is_empty());
        assert_eq!(rest.trim(), "");
    }
}
