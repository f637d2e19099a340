//! Result and Error types for femtools-resistivity

/// Type alias for `Result<T, resistivity::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `femtools-resistivity`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// A line could not be parsed
    #[error("line {line}: could not read {expected} from \"{found}\"")]
    ParseError {
        line: usize,
        expected: String,
        found: String,
    },

    /// The file ended before every element and block was read
    #[error("unexpected end of file, missing {0}")]
    UnexpectedEndOfFile(String),

    /// Block records must be listed in order of their id
    #[error("block record {expected} has id {found}")]
    UnexpectedBlockId { expected: u32, found: u32 },

    /// No block assignment for the element
    #[error("element {index} out of range for {number_of_elements} elements")]
    ElementOutOfRange {
        index: usize,
        number_of_elements: usize,
    },

    /// No resistivity for the block
    #[error("block {block} out of range for {number_of_blocks} blocks")]
    BlockOutOfRange { block: u32, number_of_blocks: usize },

    /// Resistivity values are only held for the iteration that was read
    #[error("resistivity for iteration {requested} requested, but iteration {loaded} is loaded")]
    IterationNotLoaded { requested: u32, loaded: u32 },
}
