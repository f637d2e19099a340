//! `femtools` is a small toolkit of libraries for post-processing FEMTIC
//! resistivity inversion models
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use femtools_format as format;

#[doc(inline)]
pub use femtools_utils as utils;

#[cfg(feature = "mesh")]
#[cfg_attr(docsrs, doc(cfg(feature = "mesh")))]
#[doc(inline)]
pub use femtools_mesh as mesh;

#[cfg(feature = "resistivity")]
#[cfg_attr(docsrs, doc(cfg(feature = "resistivity")))]
#[doc(inline)]
pub use femtools_resistivity as resistivity;

#[cfg(feature = "xyz")]
#[cfg_attr(docsrs, doc(cfg(feature = "xyz")))]
#[doc(inline)]
pub use femtools_xyz as xyz;
