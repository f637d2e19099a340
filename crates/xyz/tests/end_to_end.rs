//! Full runs of the converter on a FEMTIC working directory

use std::fs;
use std::path::Path;

use femtools_xyz::{read_parameter_file, Converter, Error, RunConfig};
use rstest::{fixture, rstest};
use tempfile::TempDir;

const MESH: &str = "../mesh/data/two_elements.dat";
const BLOCKS: &str = "../resistivity/data/resistivity_block_iter3.dat";

const EXPECTED: [&str; 3] = [
    "2",
    "   1.000000e+00   2.000000e+00   0.000000e+00   1.000000e+00              0",
    "   1.000000e+00   3.000000e+00   0.000000e+00   2.000000e+00              1",
];

/// Working directory with the mesh, blocks, and parameter file in place
#[fixture]
fn run_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::copy(MESH, dir.path().join("mesh.dat")).unwrap();
    fs::copy(BLOCKS, dir.path().join("resistivity_block_iter3.dat")).unwrap();
    fs::write(dir.path().join("params.txt"), "3\n1.0 2.0 0.0\n0\n").unwrap();
    dir
}

fn converter(dir: &Path, config: RunConfig) -> Converter {
    let mut converter = Converter::new(config);
    converter.set_directory(dir);
    converter.disable_progress();
    converter
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[rstest]
fn writes_expected_file(run_dir: TempDir) {
    let config = read_parameter_file(run_dir.path().join("params.txt")).unwrap();
    let path = converter(run_dir.path(), config).run().unwrap();

    assert_eq!(path, run_dir.path().join("resistivity_xyz_iter3.dat"));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), EXPECTED);
    assert!(text.ends_with('\n'));
}

#[rstest]
fn no_temporary_files_remain(run_dir: TempDir) {
    let config = read_parameter_file(run_dir.path().join("params.txt")).unwrap();
    converter(run_dir.path(), config).run().unwrap();

    assert_eq!(
        files_in(run_dir.path()),
        vec![
            "mesh.dat",
            "params.txt",
            "resistivity_block_iter3.dat",
            "resistivity_xyz_iter3.dat",
        ]
    );
}

#[rstest]
fn existing_output_is_replaced(run_dir: TempDir) {
    let output = run_dir.path().join("resistivity_xyz_iter3.dat");
    fs::write(&output, "stale content that is much longer than the real output\n".repeat(10))
        .unwrap();

    let config = read_parameter_file(run_dir.path().join("params.txt")).unwrap();
    converter(run_dir.path(), config).run().unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), EXPECTED);
}

#[rstest]
fn applied_exclusions_change_the_count(run_dir: TempDir) {
    let mut config: RunConfig = "3\n1.0 2.0 0.0\n1\n0\n".parse().unwrap();
    config.apply_exclusions = true;
    let path = converter(run_dir.path(), config).run().unwrap();

    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), ["1", EXPECTED[2]]);
}

#[rstest]
fn missing_mesh_is_an_open_error(run_dir: TempDir) {
    fs::remove_file(run_dir.path().join("mesh.dat")).unwrap();
    let config = read_parameter_file(run_dir.path().join("params.txt")).unwrap();

    match converter(run_dir.path(), config).run() {
        Err(Error::FileOpen { path, .. }) => assert!(path.ends_with("mesh.dat")),
        other => panic!("unexpected result {other:?}"),
    }
    assert!(!run_dir.path().join("resistivity_xyz_iter3.dat").exists());
}

#[rstest]
fn missing_iteration_is_an_open_error(run_dir: TempDir) {
    let config: RunConfig = "4\n1.0 2.0 0.0\n0\n".parse().unwrap();

    match converter(run_dir.path(), config).run() {
        Err(Error::FileOpen { path, .. }) => {
            assert!(path.ends_with("resistivity_block_iter4.dat"))
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(!run_dir.path().join("resistivity_xyz_iter4.dat").exists());
}

#[rstest]
fn malformed_mesh_names_the_file(run_dir: TempDir) {
    fs::write(run_dir.path().join("mesh.dat"), "TETRA\n4\n").unwrap();
    let config = read_parameter_file(run_dir.path().join("params.txt")).unwrap();

    let error = converter(run_dir.path(), config).run().unwrap_err();
    assert!(matches!(error, Error::MeshFile { .. }));
    assert!(error.to_string().contains("mesh.dat"));
}

#[rstest]
fn unreadable_mesh_is_not_an_open_error(run_dir: TempDir) {
    fs::write(run_dir.path().join("mesh.dat"), b"DHEXA\n1\n0 \xff 0.0 0.0\n").unwrap();
    let config = read_parameter_file(run_dir.path().join("params.txt")).unwrap();

    match converter(run_dir.path(), config).run() {
        Err(Error::MeshFile {
            source: femtools_mesh::Error::IOError(e),
            ..
        }) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("unexpected result {other:?}"),
    }
}

#[rstest]
fn non_positive_resistivity_leaves_no_output(run_dir: TempDir) {
    let blocks = fs::read_to_string(BLOCKS)
        .unwrap()
        .replace("1.000000e+02", "0.000000e+00");
    fs::write(run_dir.path().join("resistivity_block_iter3.dat"), blocks).unwrap();
    let config = read_parameter_file(run_dir.path().join("params.txt")).unwrap();

    match converter(run_dir.path(), config).run() {
        Err(Error::NonPositiveResistivity { element, block, .. }) => {
            assert_eq!(element, 1);
            assert_eq!(block, 1);
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(!run_dir.path().join("resistivity_xyz_iter3.dat").exists());
}

#[rstest]
fn out_of_range_resistivity_is_a_file_error(run_dir: TempDir) {
    let blocks = fs::read_to_string(BLOCKS)
        .unwrap()
        .replace("1.000000e+02", "1e400");
    fs::write(run_dir.path().join("resistivity_block_iter3.dat"), blocks).unwrap();
    let config = read_parameter_file(run_dir.path().join("params.txt")).unwrap();

    match converter(run_dir.path(), config).run() {
        Err(Error::ResistivityFile { path, .. }) => {
            assert!(path.ends_with("resistivity_block_iter3.dat"))
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(!run_dir.path().join("resistivity_xyz_iter3.dat").exists());
}

#[rstest]
fn overflowing_origin_leaves_no_output(run_dir: TempDir) {
    fs::write(run_dir.path().join("params.txt"), "3\n1e306 2.0 0.0\n0\n").unwrap();
    let config = read_parameter_file(run_dir.path().join("params.txt")).unwrap();

    assert!(matches!(
        converter(run_dir.path(), config).run(),
        Err(Error::NonFiniteCoordinate { element: 0 })
    ));
    assert!(!run_dir.path().join("resistivity_xyz_iter3.dat").exists());
}

#[test]
fn missing_parameter_file_is_an_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("params.txt");

    match read_parameter_file(&path) {
        Err(Error::FileOpen { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected result {other:?}"),
    }
}
