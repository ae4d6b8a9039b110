//! Integration tests for b2f geometry files

use std::fmt::Write;
use std::path::PathBuf;

use edgetools_solps::{load_mesh_from_files, load_simulation, B2fReader, Error};
use rstest::{fixture, rstest};

/// Corner offsets (dx, dy) in storage order
const CORNER_OFFSETS: [(f64, f64); 4] = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];

/// Write `values` five to a line like the Fortran writer does
fn block(kind: &str, name: &str, values: &[f64]) -> String {
    let mut text = format!("*cf:    {kind:<4} {:>10}  {name}\n", values.len());
    for chunk in values.chunks(5) {
        for value in chunk {
            write!(text, " {value:>16.8E}").unwrap();
        }
        text.push('\n');
    }
    text
}

/// Geometry for nx = 2, ny = 1 interior cells of unit squares
///
/// Including guard cells the grid is 3 radial by 4 poloidal, with cell
/// (iy, ix) spanning x = ix..ix + 1 and y = iy..iy + 1.
#[fixture]
fn gmtry() -> String {
    let (nx, ny) = (2, 1);
    let (px, py) = (nx + 2, ny + 2);

    let mut crx = Vec::new();
    let mut cry = Vec::new();
    for (dx, dy) in CORNER_OFFSETS {
        for iy in 0..py {
            for ix in 0..px {
                crx.push(ix as f64 + dx);
                cry.push(iy as f64 + dy);
            }
        }
    }

    let mut text = "   VERSION03.001.000\n".to_string();
    text += "*cf:    char        9  label\nunit grid\n";
    text += &block("int", "nx,ny", &[nx as f64, ny as f64]);
    text += &block("real", "crx", &crx);
    text += &block("real", "cry", &cry);
    text += &block("real", "vol", &vec![1.0; px * py]);
    text += &block("real", "hx", &[0.5; 3]);
    text
}

/// Write a temporary file unique to each test
fn temp_file(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("edgetools-{}-{name}", std::process::id()));
    std::fs::write(&path, text).unwrap();
    path
}

#[rstest]
fn parse_header(gmtry: String) {
    let file = B2fReader.parse(gmtry.as_bytes()).unwrap();
    assert_eq!(file.header.version.as_deref(), Some("03.001.000"));
    assert_eq!(file.header.label.as_deref(), Some("unit grid"));
    assert_eq!(file.header.dimensions, Some((2, 1)));
}

#[rstest]
fn parse_shapes(gmtry: String) {
    let file = B2fReader.parse(gmtry.as_bytes()).unwrap();
    assert_eq!(file.fields.numeric("crx").unwrap().shape(), &[4, 3, 4]);
    assert_eq!(file.fields.numeric("vol").unwrap().shape(), &[3, 4]);
    assert_eq!(file.fields.numeric("hx").unwrap().shape(), &[3]);
    assert_eq!(file.fields.numeric("nx").unwrap().shape(), &[1]);
}

#[rstest]
fn geometry_in_grid_order(gmtry: String) {
    let geometry = B2fReader.parse(gmtry.as_bytes()).unwrap().geometry().unwrap();
    assert_eq!(geometry.cr_r.dim(), (3, 4, 4));
    assert_eq!(geometry.volume.dim(), (3, 4));

    // corners of cell (iy = 1, ix = 2)
    assert_eq!(geometry.cr_r[[1, 2, 0]], 2.0);
    assert_eq!(geometry.cr_r[[1, 2, 3]], 3.0);
    assert_eq!(geometry.cr_z[[1, 2, 0]], 1.0);
    assert_eq!(geometry.cr_z[[1, 2, 3]], 2.0);
}

#[rstest]
fn mesh_from_file(gmtry: String) {
    let path = temp_file("b2fgmtry", &gmtry);
    let mesh = load_mesh_from_files(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(mesh.radial_cells(), 3);
    assert_eq!(mesh.poloidal_cells(), 4);
    assert_eq!(mesh.num_cells(), 12);

    let centre = mesh.cell_centre(1, 2).unwrap();
    assert_eq!((centre.x, centre.y), (2.5, 1.5));
}

#[rstest]
fn missing_file() {
    let path = std::env::temp_dir().join("edgetools-missing").join("b2fgmtry");
    assert!(matches!(
        load_mesh_from_files(&path),
        Err(Error::SourceNotFound { .. })
    ));
}

#[rstest]
fn geometry_is_not_a_simulation(gmtry: String) {
    let path = temp_file("b2fgmtry-simulation", &gmtry);
    let result = load_simulation(&path, &B2fReader);
    std::fs::remove_file(&path).unwrap();

    // geometry files carry no plasma state
    assert!(matches!(result, Err(Error::MissingField(name)) if name == "te"));
}
