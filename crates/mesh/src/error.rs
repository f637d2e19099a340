//! Result and Error types for femtools-mesh

/// Type alias for Result<T, mesh::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `femtools-mesh` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("malformed mesh file: {0}")]
    ParseError(#[from] femtools_utils::Error),

    #[error("mesh type \"{0}\" is not supported, expected DHEXA")]
    UnsupportedMeshType(String),

    #[error("element {element} references node {node} but the mesh has {number_of_nodes} nodes")]
    NodeOutOfRange {
        element: usize,
        node: usize,
        number_of_nodes: usize,
    },

    #[error("element {index} out of range for a mesh of {number_of_elements} elements")]
    ElementOutOfRange {
        index: usize,
        number_of_elements: usize,
    },

    #[error("failed to initialise progress bar: {0}")]
    ProgressBar(String),
}
