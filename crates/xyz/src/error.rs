//! Result and Error types for femtools-xyz

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, xyz::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `femtools-xyz`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input file could not be opened
    #[error("file open error: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or moved into place
    #[error("file create error: {}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Malformed or incomplete parameter file
    #[error("invalid parameter file")]
    ParseError(#[from] femtools_utils::Error),

    /// Mesh file could not be read
    #[error("failed to read mesh {}", path.display())]
    MeshFile {
        path: PathBuf,
        #[source]
        source: femtools_mesh::Error,
    },

    /// Resistivity block file could not be read
    #[error("failed to read resistivity blocks {}", path.display())]
    ResistivityFile {
        path: PathBuf,
        #[source]
        source: femtools_resistivity::Error,
    },

    /// Geometry lookup failed
    #[error(transparent)]
    Mesh(#[from] femtools_mesh::Error),

    /// Block or resistivity lookup failed
    #[error(transparent)]
    Resistivity(#[from] femtools_resistivity::Error),

    /// The logarithm of the resistivity is undefined or infinite
    #[error("resistivity {value} in block {block} is not a positive finite number (element {element})")]
    NonPositiveResistivity { element: usize, block: u32, value: f64 },

    /// The re-based position does not fit in a floating point value
    #[error("position of element {element} is not finite after applying the origin")]
    NonFiniteCoordinate { element: usize },
}
