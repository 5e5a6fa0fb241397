//! `.ggb` archive reading and writing.
//!
//! A `.ggb` file is a ZIP archive. The construction entry (`geogebra.xml`) is
//! parsed into a [`GeoDocument`]; all other entries (thumbnails, scripts,
//! macros, images) are kept as raw bytes. When writing, the construction XML
//! is patched from the model and everything else is written verbatim, in the
//! original entry order and with the original compression method.

use crate::generator::construction_xml;
use crate::model::GeoDocument;
use crate::parser::{self, CONSTRUCTION_ENTRY};
use anyhow::{Context, Result, anyhow};
use std::io::{Read, Seek, Write};

/// Content of one archive entry.
#[derive(Debug, Clone)]
pub enum GgbContent {
    Raw(Vec<u8>),
    /// The parsed construction plus the original XML text it came from.
    Construction { document: GeoDocument, xml: String },
}

#[derive(Debug, Clone)]
pub struct GgbEntry {
    pub path: String,
    pub content: GgbContent,
    pub compressed: bool,
}

/// An opened `.ggb` archive.
#[derive(Debug, Clone)]
pub struct GgbArchive {
    pub entries: Vec<GgbEntry>,
}

fn is_construction_entry(path: &str) -> bool {
    path.trim_start_matches("./").trim_start_matches('/') == CONSTRUCTION_ENTRY
}

impl GgbArchive {
    /// Read a `.ggb` file from a reader (ZIP format).
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut zip = zip::ZipArchive::new(reader).context("Failed to open .ggb ZIP")?;
        let mut entries = Vec::with_capacity(zip.len());

        for i in 0..zip.len() {
            let mut file = zip.by_index(i)?;
            let path = file.name().to_string();
            let compressed = file.compression() == zip::CompressionMethod::Deflated;

            let mut raw = Vec::new();
            file.read_to_end(&mut raw)
                .with_context(|| format!("Failed to read {} from archive", path))?;

            let content = if is_construction_entry(&path) {
                let xml = String::from_utf8(raw)
                    .with_context(|| format!("Non-UTF8 content in {}", path))?;
                let document = parser::parse_document(&xml)
                    .with_context(|| format!("Failed to parse {}", path))?;
                GgbContent::Construction { document, xml }
            } else {
                GgbContent::Raw(raw)
            };
            entries.push(GgbEntry {
                path,
                content,
                compressed,
            });
        }

        let archive = GgbArchive { entries };
        if archive.document().is_none() {
            return Err(anyhow!("No {} in archive", CONSTRUCTION_ENTRY));
        }
        Ok(archive)
    }

    /// Read a `.ggb` file from disk.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .with_context(|| format!("Failed to open {}", path.as_ref().display()))?;
        let reader = std::io::BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Write the archive to a writer in ZIP format.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = zip::ZipWriter::new(writer);

        for entry in &self.entries {
            let options = if entry.compressed {
                zip::write::FileOptions::default()
                    .compression_method(zip::CompressionMethod::Deflated)
            } else {
                zip::write::FileOptions::default()
                    .compression_method(zip::CompressionMethod::Stored)
            };

            zip.start_file(&entry.path, options)?;

            match &entry.content {
                GgbContent::Raw(data) => {
                    zip.write_all(data)?;
                }
                GgbContent::Construction { document, xml } => {
                    let patched =
                        construction_xml::patch_construction_xml(xml, &document.construction)
                            .with_context(|| format!("Failed to write {}", entry.path))?;
                    zip.write_all(patched.as_bytes())?;
                }
            }
        }

        zip.finish()?;
        Ok(())
    }

    /// Write the archive to a file on disk.
    pub fn write_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())
            .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;
        let writer = std::io::BufWriter::new(file);
        self.write_to(writer)
    }

    pub fn document(&self) -> Option<&GeoDocument> {
        self.entries.iter().find_map(|e| match &e.content {
            GgbContent::Construction { document, .. } => Some(document),
            GgbContent::Raw(_) => None,
        })
    }

    pub fn document_mut(&mut self) -> Option<&mut GeoDocument> {
        self.entries.iter_mut().find_map(|e| match &mut e.content {
            GgbContent::Construction { document, .. } => Some(document),
            GgbContent::Raw(_) => None,
        })
    }

    /// List all entry paths in the archive.
    pub fn entry_paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }
}
