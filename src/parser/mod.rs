//! `geogebra.xml` parser.
//!
//! Provides [`GgbParser`] to load a construction from a bare XML file or from a
//! `.ggb` archive, and [`parse_document`] to parse XML text directly. Only the
//! parts the screen adjuster needs are modelled:
//!
//! - [`source`] – File I/O abstraction (filesystem vs. ZIP)
//! - [`helpers`] – Attribute parsing

pub mod helpers;
pub mod source;

pub use source::*;

use crate::model::*;
use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use helpers::{attr, attr_i32, child};
use log::warn;
use roxmltree::{Document, Node};

/// Name of the construction entry inside a `.ggb` archive.
pub const CONSTRUCTION_ENTRY: &str = "geogebra.xml";

/// Parser generic over [`ContentSource`] so it can read from the filesystem
/// ([`FsSource`]) or from a `.ggb` archive ([`ZipSource`]).
pub struct GgbParser<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> GgbParser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Parse the `geogebra.xml` found at `path` in the source.
    pub fn parse_document_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<GeoDocument> {
        let path = path.as_ref();
        let text = self.source.read_to_string(path)?;
        parse_document(&text).with_context(|| format!("Failed to parse {}", path))
    }

    /// Parse the construction entry of an archive source.
    pub fn parse_archive(&mut self) -> Result<GeoDocument> {
        self.parse_document_file(CONSTRUCTION_ENTRY)
    }
}

/// Parse `geogebra.xml` text.
pub fn parse_document(text: &str) -> Result<GeoDocument> {
    let doc = Document::parse(text).context("Failed to parse XML")?;
    let file_size = doc
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name("euclidianView"))
        .and_then(|ev| child(ev, "size"))
        .map(parse_view_size)
        .transpose()?;
    let cons_node = doc
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name("construction"))
        .ok_or_else(|| anyhow!("No <construction> in document"))?;
    let construction = parse_construction(cons_node);
    Ok(GeoDocument {
        file_size,
        construction,
    })
}

fn parse_view_size(node: Node) -> Result<ViewSize> {
    Ok(ViewSize {
        width: attr_i32(node, "width")?.unwrap_or(0),
        height: attr_i32(node, "height")?.unwrap_or(0),
    })
}

/// Build the element table. Elements without a label are skipped, and an
/// element whose widget attributes cannot be read is kept as
/// [`ElementKind::Other`].
pub fn parse_construction(node: Node) -> Construction {
    let mut construction = Construction::new();
    for el in node
        .descendants()
        .filter(|c| c.is_element() && c.has_tag_name("element"))
    {
        let Some(label) = el.attribute("label") else {
            continue;
        };
        let type_name = el.attribute("type").unwrap_or("");
        let kind = match parse_kind(el, type_name) {
            Ok(kind) => kind,
            Err(e) => {
                warn!("element {}: {:#}; treating as plain {}", label, e, type_name);
                ElementKind::Other {
                    type_name: type_name.to_string(),
                }
            }
        };
        let element = GeoElement {
            label: label.to_string(),
            kind,
        };
        if construction.insert(element).is_some() {
            warn!("duplicate label {}; keeping the last definition", label);
        }
    }
    construction
}

fn parse_kind(el: Node, type_name: &str) -> Result<ElementKind> {
    Ok(match type_name {
        // Angles are numerics too and can be shown as sliders.
        "numeric" | "angle" => ElementKind::Numeric {
            slider: child(el, "slider").map(parse_slider).transpose()?,
        },
        "button" => ElementKind::Button(parse_button(el)?),
        "textfield" => ElementKind::InputBox(parse_button(el)?),
        other => ElementKind::Other {
            type_name: other.to_string(),
        },
    })
}

fn parse_slider(node: Node) -> Result<Slider> {
    let x = attr::<f64>(node, "x")?.unwrap_or(0.0);
    let y = attr::<f64>(node, "y")?.unwrap_or(0.0);
    Ok(Slider {
        x,
        y,
        width: attr::<f64>(node, "width")?.unwrap_or(200.0),
        horizontal: attr::<bool>(node, "horizontal")?.unwrap_or(true),
        fixed: attr::<bool>(node, "fixed")?.unwrap_or(false),
    })
}

fn parse_button(el: Node) -> Result<Button> {
    let (x, y) = match child(el, "absoluteScreenLocation") {
        Some(loc) => (
            attr_i32(loc, "x")?.unwrap_or(0),
            attr_i32(loc, "y")?.unwrap_or(0),
        ),
        None => (0, 0),
    };
    let (width, height) = match child(el, "dimensions") {
        Some(dim) => (
            attr_i32(dim, "width")?.unwrap_or(0),
            attr_i32(dim, "height")?.unwrap_or(0),
        ),
        None => (0, 0),
    };
    Ok(Button::new(x, y, width, height))
}
