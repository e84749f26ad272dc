//! Export sink: serializes the canvas into a standalone SVG 1.1 document.

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::canvas::{Canvas, CanvasNode};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// External identifier written into the document's doctype.
const DOCTYPE: &str = r#"svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd""#;

/// Suggested name for the saved file.
pub const FILE_NAME: &str = "loom.svg";
pub const MIME_TYPE: &str = "image/svg+xml";

/// Serialize the canvas into a self-contained vector document: XML
/// declaration, SVG 1.1 doctype, then the root element carrying the physical
/// inch dimensions and the full node list.
pub fn export_document(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", None, Some("yes"))))
        .context("write xml declaration")?;
    writer
        .write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))
        .context("write doctype")?;

    let width = format!("{}in", canvas.physical_width_in());
    let height = format!("{}in", canvas.physical_height_in());
    let view_box = format!("0 0 {} {}", canvas.width(), canvas.height());
    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    root.push_attribute(("viewBox", view_box.as_str()));
    writer.write_event(Event::Start(root)).context("write svg root")?;

    for node in canvas.nodes() {
        match node {
            CanvasNode::Style { css } => {
                writer
                    .write_event(Event::Start(BytesStart::new("style")))
                    .context("write style")?;
                writer
                    .write_event(Event::Text(BytesText::new(css)))
                    .context("write style body")?;
                writer
                    .write_event(Event::End(BytesEnd::new("style")))
                    .context("write style")?;
            }
            CanvasNode::Comment { text } => {
                writer
                    .write_event(Event::Comment(BytesText::new(text)))
                    .context("write comment")?;
            }
            CanvasNode::Path { d, .. } => {
                let mut path = BytesStart::new("path");
                path.push_attribute(("d", d.as_str()));
                writer
                    .write_event(Event::Empty(path))
                    .context("write path")?;
            }
            CanvasNode::Rect {
                x,
                y,
                width,
                height,
                stroke,
            } => {
                let (x, y) = (x.to_string(), y.to_string());
                let (width, height) = (width.to_string(), height.to_string());
                let mut rect = BytesStart::new("rect");
                rect.push_attribute(("x", x.as_str()));
                rect.push_attribute(("y", y.as_str()));
                rect.push_attribute(("width", width.as_str()));
                rect.push_attribute(("height", height.as_str()));
                rect.push_attribute(("stroke", stroke.as_str()));
                writer
                    .write_event(Event::Empty(rect))
                    .context("write rect")?;
            }
            CanvasNode::Text { id, x, y, content } => {
                let (x, y) = (x.to_string(), y.to_string());
                let svg_id = format!("{}_svg", id);
                let mut text = BytesStart::new("text");
                text.push_attribute(("x", x.as_str()));
                text.push_attribute(("y", y.as_str()));
                text.push_attribute(("id", svg_id.as_str()));
                writer
                    .write_event(Event::Start(text))
                    .context("write text")?;
                writer
                    .write_event(Event::Text(BytesText::new(content)))
                    .context("write text body")?;
                writer
                    .write_event(Event::End(BytesEnd::new("text")))
                    .context("write text")?;
            }
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .context("write svg root")?;

    Ok(writer.into_inner())
}

/// Collect the values of one attribute across every element with the given
/// tag name in a serialized document.
pub fn attribute_values(data: &[u8], tag: &str, attribute: &str) -> Result<Vec<String>> {
    let text = std::str::from_utf8(data).context("document is not utf-8")?;
    let mut reader = Reader::from_str(text);
    let mut values = Vec::new();
    loop {
        match reader.read_event().context("parse document")? {
            Event::Start(element) | Event::Empty(element) => {
                if element.name().as_ref() == tag.as_bytes() {
                    for attr in element.attributes() {
                        let attr = attr.context("parse attribute")?;
                        if attr.key.as_ref() == attribute.as_bytes() {
                            values.push(attr.unescape_value().context("attribute value")?.into_owned());
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(values)
}

/// The path `d`-strings of a serialized document, in document order.
pub fn path_data_strings(data: &[u8]) -> Result<Vec<String>> {
    attribute_values(data, "path", "d")
}
