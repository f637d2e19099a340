//! Non-conforming hexahedral mesh tools and file parsing
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod mesh;

pub mod reader;

// inline important the mesh-related modules for a nice public API
#[doc(inline)]
pub use reader::{read_mesh, read_mesh_str};

#[doc(inline)]
pub use mesh::{Face, HexaElement, HexaMesh};

#[doc(inline)]
pub use error::{Error, Result};
