//! Write adjusted widget positions back into `geogebra.xml` text.
//!
//! The document is streamed through `quick-xml` unchanged except for the `x`
//! and `y` attributes of `<slider>` and `<absoluteScreenLocation>` tags whose
//! element moved. Untouched tags are written from their original bytes.

use crate::model::*;
use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;
use std::io::Cursor;

/// Format a coordinate the way the saved files do: integral values without a
/// fractional part.
pub fn format_coord(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

fn local_name(e: &BytesStart) -> Vec<u8> {
    e.local_name().as_ref().to_vec()
}

fn attr_string(e: &BytesStart, key: &[u8]) -> Result<Option<String>> {
    for a in e.attributes() {
        let a = a?;
        if a.key.as_ref() == key {
            // labels like `&#945;` are stored unescaped in the model
            return Ok(Some(a.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn attr_f64(e: &BytesStart, key: &[u8]) -> Result<Option<f64>> {
    Ok(attr_string(e, key)?.and_then(|s| s.trim().parse::<f64>().ok()))
}

/// Rebuild a tag with new `x`/`y` values, keeping every other attribute in
/// its original order. Missing `x`/`y` attributes are appended.
fn with_xy(e: &BytesStart, x: &str, y: &str) -> Result<BytesStart<'static>> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut out = BytesStart::new(name);
    let (mut seen_x, mut seen_y) = (false, false);
    for a in e.attributes() {
        let a = a?;
        match a.key.as_ref() {
            b"x" => {
                out.push_attribute(("x", x));
                seen_x = true;
            }
            b"y" => {
                out.push_attribute(("y", y));
                seen_y = true;
            }
            _ => out.push_attribute(a),
        }
    }
    if !seen_x {
        out.push_attribute(("x", x));
    }
    if !seen_y {
        out.push_attribute(("y", y));
    }
    Ok(out)
}

/// Returns the replacement tag if `e` belongs to a widget of `current` whose
/// position differs from the one stored in the tag.
fn patched_tag(e: &BytesStart, current: Option<&GeoElement>) -> Result<Option<BytesStart<'static>>> {
    let Some(geo) = current else {
        return Ok(None);
    };
    let (x, y) = match (local_name(e).as_slice(), &geo.kind) {
        (b"slider", ElementKind::Numeric { slider: Some(s) }) => (s.x, s.y),
        (b"absoluteScreenLocation", ElementKind::Button(b)) => (b.x as f64, b.y as f64),
        _ => return Ok(None),
    };
    let old_x = attr_f64(e, b"x")?;
    let old_y = attr_f64(e, b"y")?;
    if old_x == Some(x) && old_y == Some(y) {
        return Ok(None);
    }
    Ok(Some(with_xy(e, &format_coord(x), &format_coord(y))?))
}

/// Stream `xml` and rewrite widget positions from `construction`.
pub fn patch_construction_xml(xml: &str, construction: &Construction) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(xml.len())));
    let mut in_construction = false;
    let mut current: Option<&GeoElement> = None;

    loop {
        let event = reader
            .read_event()
            .with_context(|| format!("XML error at byte {}", reader.buffer_position()))?;
        match event {
            Event::Eof => break,
            Event::Start(e) => {
                match local_name(&e).as_slice() {
                    b"construction" => in_construction = true,
                    b"element" if in_construction => {
                        current = attr_string(&e, b"label")?
                            .and_then(|label| construction.get(&label));
                    }
                    _ => {}
                }
                match patched_tag(&e, current)? {
                    Some(p) => writer.write_event(Event::Start(p))?,
                    None => writer.write_event(Event::Start(e))?,
                }
            }
            Event::Empty(e) => match patched_tag(&e, current)? {
                Some(p) => writer.write_event(Event::Empty(p))?,
                None => writer.write_event(Event::Empty(e))?,
            },
            Event::End(e) => {
                match e.local_name().as_ref() {
                    b"construction" => in_construction = false,
                    b"element" => current = None,
                    _ => {}
                }
                writer.write_event(Event::End(e))?;
            }
            other => writer.write_event(other)?,
        }
    }

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).context("Patched XML is not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<geogebra format="5.0">
<construction title="" author="" date="">
<element type="numeric" label="a">
	<value val="1"/>
	<slider min="-5" max="5" width="200" x="72" y="61" fixed="true" horizontal="true"/>
</element>
<element type="button" label="b1">
	<caption val="Go &amp; stop"/>
	<absoluteScreenLocation x="10" y="20"/>
	<dimensions width="80" height="30"/>
</element>
</construction>
</geogebra>
"#;

    #[test]
    fn unchanged_construction_is_byte_identical() {
        let doc = crate::parser::parse_document(XML).unwrap();
        let out = patch_construction_xml(XML, &doc.construction).unwrap();
        assert_eq!(out, XML);
    }

    #[test]
    fn rewrites_only_moved_coordinates() {
        let mut doc = crate::parser::parse_document(XML).unwrap();
        doc.construction
            .get_mut("a")
            .and_then(GeoElement::as_slider_mut)
            .unwrap()
            .set_location(72.0, 111.5);
        let out = patch_construction_xml(XML, &doc.construction).unwrap();
        assert!(out.contains(
            r#"<slider min="-5" max="5" width="200" x="72" y="111.5" fixed="true" horizontal="true"/>"#
        ));
        assert!(out.contains(r#"<absoluteScreenLocation x="10" y="20"/>"#));
        assert!(out.contains("Go &amp; stop"));
    }

    #[test]
    fn escaped_label_is_matched() {
        let xml = r#"<geogebra><construction>
<element type="numeric" label="&#945;&amp;1">
	<slider x="10" y="20" fixed="true"/>
</element>
</construction></geogebra>"#;
        let mut doc = crate::parser::parse_document(xml).unwrap();
        doc.construction
            .get_mut("α&1")
            .and_then(GeoElement::as_slider_mut)
            .unwrap()
            .set_location(10.0, 70.0);
        let out = patch_construction_xml(xml, &doc.construction).unwrap();
        assert!(out.contains(r#"<slider x="10" y="70" fixed="true"/>"#));
        assert!(out.contains(r#"label="&#945;&amp;1""#));
    }

    #[test]
    fn format_coord_drops_integral_fraction() {
        assert_eq!(format_coord(140.0), "140");
        assert_eq!(format_coord(-3.25), "-3.25");
    }
}
