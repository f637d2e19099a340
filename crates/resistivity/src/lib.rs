//! Resistivity block data for FEMTIC inversion iterations
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod block;
mod error;
mod parsers;
mod reader;

#[doc(inline)]
pub use block::{Block, ResistivityBlock};

#[doc(inline)]
pub use reader::{
    block_file_name, read_resistivity_block, read_resistivity_block_from,
    read_resistivity_block_str,
};

#[doc(inline)]
pub use error::{Error, Result};
