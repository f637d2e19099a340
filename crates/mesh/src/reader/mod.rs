//! Parsers and logic for reading FEMTIC mesh files
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! # Quickstart
//!
//! The simplest methods for reading a mesh are the convenience functions:
//!
//! ```rust, no_run
//! # use femtools_mesh::{read_mesh, HexaMesh};
//! // Read the mesh of a FEMTIC working directory
//! let mesh: HexaMesh = read_mesh("/path/to/mesh.dat").unwrap();
//! ```
//!
//! Under the hood these initialise the [HexaMeshReader]. This is made public
//! for fine control if needed, for example to show a progress bar for very
//! large meshes.
//!
//! ```rust, no_run
//! # use femtools_mesh::reader::HexaMeshReader;
//! # use std::path::Path;
//! let reader = HexaMeshReader::new();
//! let mesh = reader.parse(Path::new("/path/to/mesh.dat")).unwrap();
//! ```
//!
//! # File layout
//!
//! The `DHEXA` mesh file is a stream of whitespace separated tokens, line
//! breaks carry no meaning:
//!
//! ```text
//! DHEXA
//! <number of nodes>
//! <node id> <x> <y> <z>                 repeated for every node
//! <number of elements>
//! <element id> <node 0> ... <node 7>    repeated for every element, each
//! <count> <neighbour ids...>            followed by six face records
//! ...                                   boundary planes, ignored
//! ```
//!
//! Neighbour ids below zero are treated as "no neighbour".

// reader modules
mod dhexa;

// re-exports for clean API + documentation
#[doc(inline)]
pub use dhexa::HexaMeshReader;

// library imports
use crate::error::Result;
use crate::HexaMesh;
use std::path::Path;

/// Read a DHEXA mesh file
///
/// Returns a result containing the [HexaMesh] extracted from the file at
/// `path`.
///
/// - `path` - Path to the mesh file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust, no_run
/// # use femtools_mesh::{HexaMesh, read_mesh};
/// let mesh: HexaMesh = read_mesh("path/to/mesh.dat").unwrap();
/// ```
pub fn read_mesh<P: AsRef<Path>>(path: P) -> Result<HexaMesh> {
    let mut reader = HexaMeshReader::new();
    reader.disable_progress();
    reader.parse(path.as_ref())
}

/// Read a DHEXA mesh from text already in memory
///
/// ```rust
/// # use femtools_mesh::read_mesh_str;
/// let text = "DHEXA
///     8
///     0 0 0 0   1 2 0 0   2 2 2 0   3 0 2 0
///     4 0 0 2   5 2 0 2   6 2 2 2   7 0 2 2
///     1
///     0  0 1 2 3 4 5 6 7  0 0 0 0 0 0";
///
/// let mesh = read_mesh_str(text).unwrap();
/// assert_eq!(mesh.number_of_elements(), 1);
/// assert_eq!(mesh.gravity_center(0).unwrap().x, 1.0);
/// ```
pub fn read_mesh_str(text: &str) -> Result<HexaMesh> {
    let mut reader = HexaMeshReader::new();
    reader.disable_progress();
    reader.parse_str(text)
}
