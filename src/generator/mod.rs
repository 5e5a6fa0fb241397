//! Write adjusted constructions back to disk.
//!
//! - [`construction_xml`] – Patch widget positions into `geogebra.xml` text.
//! - [`archive`] – Read and write complete `.ggb` ZIP archives.

pub mod archive;
pub mod construction_xml;

pub use archive::{GgbArchive, GgbContent, GgbEntry};
pub use construction_xml::patch_construction_xml;
