//! Attribute helpers for `geogebra.xml` nodes.

use anyhow::{Context, Result};
use roxmltree::Node;
use std::str::FromStr;

/// Parse an optional attribute. A missing attribute is `Ok(None)`; a present
/// but malformed one is an error.
pub fn attr<T>(node: Node, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match node.attribute(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Bad {}=\"{}\" on <{}>", name, raw, node.tag_name().name())),
    }
}

/// Screen positions are integers for buttons, but files written by older
/// versions sometimes carry a fractional part.
pub fn attr_i32(node: Node, name: &str) -> Result<Option<i32>> {
    Ok(attr::<f64>(node, name)?.map(|v| v.round() as i32))
}

pub fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.is_element() && c.has_tag_name(tag))
}
