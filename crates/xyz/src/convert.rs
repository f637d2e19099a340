//! Element by element conversion

// crate modules
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::provider::{GeometryProvider, ResistivityProvider};
use crate::record::{reproject_to_output_frame, OutputRecord};
use crate::writer::write_xyz;

// femtools modules
use femtools_format::f;
use femtools_mesh::reader::HexaMeshReader;
use femtools_resistivity::{block_file_name, read_resistivity_block_from, ResistivityBlock};

// standard library
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// external crates
use log::{debug, info};
use rayon::prelude::*;

/// Name of the mesh file in a FEMTIC working directory
pub const MESH_FILE_NAME: &str = "mesh.dat";

/// Name of the XYZ file written for an iteration
///
/// ```rust
/// # use femtools_xyz::output_file_name;
/// assert_eq!(output_file_name(3), "resistivity_xyz_iter3.dat");
/// ```
pub fn output_file_name(iteration: u32) -> String {
    f!("resistivity_xyz_iter{iteration}.dat")
}

/// Convert every element into an [OutputRecord]
///
/// Records are in ascending element order. Elements are processed in
/// parallel, but the result is identical to a sequential pass, including
/// which error is reported when several elements fail.
///
/// Elements of excluded blocks are only skipped if
/// [RunConfig::apply_exclusions] is set.
///
/// A resistivity that is not strictly positive and finite is an error, as is
/// a position that overflows once re-based on the origin, or any failed lookup
/// in either provider.
pub fn convert<G, R>(config: &RunConfig, geometry: &G, resistivity: &R) -> Result<Vec<OutputRecord>>
where
    G: GeometryProvider + ?Sized,
    R: ResistivityProvider + ?Sized,
{
    let n = geometry.number_of_elements();
    let excluded: HashSet<u32> = if config.apply_exclusions {
        config.excluded_blocks.iter().copied().collect()
    } else {
        HashSet::new()
    };

    let results: Vec<Result<Option<OutputRecord>>> = (0..n)
        .into_par_iter()
        .map(|i| element_record(config, geometry, resistivity, &excluded, i))
        .collect();

    // first error in element order wins
    let records = results
        .into_iter()
        .filter_map(Result::transpose)
        .collect::<Result<Vec<OutputRecord>>>()?;

    if records.len() < n {
        info!("Skipped {} elements of excluded blocks", n - records.len());
    }

    Ok(records)
}

/// Join geometry and resistivity for a single element
fn element_record<G, R>(
    config: &RunConfig,
    geometry: &G,
    resistivity: &R,
    excluded: &HashSet<u32>,
    element: usize,
) -> Result<Option<OutputRecord>>
where
    G: GeometryProvider + ?Sized,
    R: ResistivityProvider + ?Sized,
{
    let block = resistivity.block_id(element)?;
    if excluded.contains(&block) {
        return Ok(None);
    }

    let center = geometry.gravity_center(element)?;
    let value = resistivity.resistivity(block, config.iteration)?;

    if !(value.is_finite() && value > 0.0) {
        return Err(Error::NonPositiveResistivity {
            element,
            block,
            value,
        });
    }

    let position = reproject_to_output_frame(&center, &config.origin);
    if !position.iter().all(|v| v.is_finite()) {
        return Err(Error::NonFiniteCoordinate { element });
    }
    Ok(Some(OutputRecord::new(&position, value.log10(), block)))
}

/// File based conversion of a FEMTIC working directory
///
/// Reads `mesh.dat` and `resistivity_block_iter<N>.dat` from the directory
/// and writes `resistivity_xyz_iter<N>.dat` to it. The directory defaults to
/// the current working directory.
///
/// ```rust, no_run
/// # use femtools_xyz::{Converter, RunConfig};
/// let config: RunConfig = "3 0.0 0.0 0.0 0".parse().unwrap();
///
/// let mut converter = Converter::new(config);
/// converter.set_directory("/path/to/run");
/// converter.disable_progress();
///
/// let path = converter.run().unwrap();
/// ```
#[derive(Debug)]
pub struct Converter {
    /// Run parameters
    config: RunConfig,
    /// Directory for input and output files
    directory: PathBuf,
    /// Disable progress bar?
    disable_progress: bool,
}

impl Converter {
    /// Converter for the current working directory
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            directory: PathBuf::from("."),
            disable_progress: false,
        }
    }

    /// Run parameters in use
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Setter for the directory containing the FEMTIC files
    pub fn set_directory<P: AsRef<Path>>(&mut self, directory: P) {
        self.directory = directory.as_ref().to_path_buf();
    }

    /// Do not print progress indicators while reading the mesh
    pub fn disable_progress(&mut self) {
        self.disable_progress = true;
    }

    /// Read the inputs, convert, and write the output file
    ///
    /// Returns the path of the file written.
    pub fn run(&self) -> Result<PathBuf> {
        let mesh = self.load_mesh()?;
        let blocks = self.load_blocks()?;

        let records = convert(&self.config, &mesh, &blocks)?;

        let path = self.directory.join(output_file_name(self.config.iteration));
        write_xyz(&records, &path)?;
        info!("Wrote {} records to {}", records.len(), path.display());

        Ok(path)
    }

    fn load_mesh(&self) -> Result<femtools_mesh::HexaMesh> {
        let path = self.directory.join(MESH_FILE_NAME);
        let file = open_input(&path)?;

        let mut reader = HexaMeshReader::new();
        if self.disable_progress {
            reader.disable_progress();
        }

        info!("Reading {}", path.display());
        let mesh = reader
            .parse_reader(BufReader::new(file))
            .map_err(|source| Error::MeshFile {
                path: path.clone(),
                source,
            })?;

        debug!("Mesh has {} elements", mesh.number_of_elements());
        Ok(mesh)
    }

    fn load_blocks(&self) -> Result<ResistivityBlock> {
        let iteration = self.config.iteration;
        let path = self.directory.join(block_file_name(iteration));
        let file = open_input(&path)?;

        info!("Reading {}", path.display());
        read_resistivity_block_from(BufReader::new(file), iteration).map_err(|source| {
            Error::ResistivityFile {
                path: path.clone(),
                source,
            }
        })
    }
}

/// Open an input file, so that only failing to open it is a [Error::FileOpen]
fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}
