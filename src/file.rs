//! Open and save either a `.ggb` archive or a bare `geogebra.xml`.

use crate::generator::{GgbArchive, patch_construction_xml};
use crate::model::GeoDocument;
use crate::parser::{FsSource, GgbParser};
use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use std::io::Write;
use tempfile::NamedTempFile;

pub enum GgbFile {
    Archive(GgbArchive),
    Xml { xml: String, document: GeoDocument },
}

/// `true` for paths the tool knows how to open.
pub fn is_supported(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("ggb") | Some("xml"))
}

impl GgbFile {
    pub fn open(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension() {
            Some("ggb") => Ok(GgbFile::Archive(
                GgbArchive::from_file(path.as_std_path())
                    .with_context(|| format!("Failed to load {}", path))?,
            )),
            Some("xml") => {
                let xml = std::fs::read_to_string(path.as_std_path())
                    .with_context(|| format!("Failed to read {}", path))?;
                let document = crate::parser::parse_document(&xml)
                    .with_context(|| format!("Failed to parse {}", path))?;
                Ok(GgbFile::Xml { xml, document })
            }
            _ => Err(anyhow!("Unsupported file type: {}", path)),
        }
    }

    /// Read only the document, without keeping the archive around.
    pub fn read_document(path: impl AsRef<Utf8Path>) -> Result<GeoDocument> {
        let path = path.as_ref();
        if path.extension() == Some("ggb") {
            let file = std::fs::File::open(path.as_std_path())
                .with_context(|| format!("Open {}", path))?;
            let reader = std::io::BufReader::new(file);
            let mut parser = GgbParser::new(crate::parser::ZipSource::new(reader)?);
            parser.parse_archive()
        } else {
            let mut parser = GgbParser::new(FsSource);
            parser.parse_document_file(path)
        }
    }

    pub fn document(&self) -> Result<&GeoDocument> {
        match self {
            GgbFile::Archive(a) => a.document().ok_or_else(|| anyhow!("Archive has no construction")),
            GgbFile::Xml { document, .. } => Ok(document),
        }
    }

    pub fn document_mut(&mut self) -> Result<&mut GeoDocument> {
        match self {
            GgbFile::Archive(a) => a
                .document_mut()
                .ok_or_else(|| anyhow!("Archive has no construction")),
            GgbFile::Xml { document, .. } => Ok(document),
        }
    }

    /// Write to `path` through a temporary file in the same directory, so a
    /// failed write never leaves a truncated file behind.
    pub fn save(&self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(p) if !p.as_str().is_empty() => p,
            _ => Utf8Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir.as_std_path())
            .with_context(|| format!("Failed to create temporary file in {}", dir))?;
        match self {
            GgbFile::Archive(a) => a.write_to(tmp.as_file_mut())?,
            GgbFile::Xml { xml, document } => {
                let patched = patch_construction_xml(xml, &document.construction)?;
                tmp.write_all(patched.as_bytes())
                    .with_context(|| format!("Failed to write {}", path))?;
            }
        }
        tmp.persist(path.as_std_path())
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {}", path))?;
        Ok(())
    }
}
