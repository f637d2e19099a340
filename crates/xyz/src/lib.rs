//! Conversion of FEMTIC resistivity models to XYZ point clouds
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod config;
mod convert;
mod error;
mod provider;
mod record;
mod writer;

#[doc(inline)]
pub use config::{read_parameter_file, RunConfig};

#[doc(inline)]
pub use convert::{convert, output_file_name, Converter, MESH_FILE_NAME};

#[doc(inline)]
pub use provider::{GeometryProvider, ResistivityProvider};

#[doc(inline)]
pub use record::{reproject_to_output_frame, OutputRecord};

#[doc(inline)]
pub use writer::{write_records, write_xyz};

#[doc(inline)]
pub use error::{Error, Result};
