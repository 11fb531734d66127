//! Shared XML writing helpers.

use std::io::Write;

use faire_model::{Attribute, FaireError, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Writes one event, reporting writer failures as structural errors.
fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|err| FaireError::Message(format!("failed to write XML: {err}")))
}

/// Indented writer over an in-memory buffer.
pub fn document_writer() -> Writer<Vec<u8>> {
    Writer::new_with_indent(Vec::new(), b' ', 2)
}

/// Writes the XML declaration.
pub fn write_declaration<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    emit(writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(())
}

/// Finishes a document: trailing newline, UTF-8 text.
pub fn finish_document(writer: Writer<Vec<u8>>) -> Result<String> {
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes)
        .map_err(|err| FaireError::Message(format!("generated XML is not UTF-8: {err}")))
}

/// Write a simple text element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write an element with attributes and no content.
pub fn write_empty_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> Result<()> {
    let mut element = BytesStart::new(name);
    for attribute in attributes {
        element.push_attribute(*attribute);
    }
    emit(writer, Event::Empty(element))?;
    Ok(())
}

pub fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    Ok(())
}

pub fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    emit(writer, Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Opens an `alias`/`center_name` record element.
pub fn start_record<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    alias: &str,
    center_name: &str,
) -> Result<()> {
    let mut element = BytesStart::new(name);
    element.push_attribute(("alias", alias));
    element.push_attribute(("center_name", center_name));
    emit(writer, Event::Start(element))?;
    Ok(())
}

/// Writes an attribute list, e.g. `SAMPLE_ATTRIBUTES/SAMPLE_ATTRIBUTE`.
/// Nothing is written for an empty list.
pub fn write_attribute_list<W: Write>(
    writer: &mut Writer<W>,
    container: &str,
    item: &str,
    attributes: &[Attribute],
) -> Result<()> {
    if attributes.is_empty() {
        return Ok(());
    }
    start(writer, container)?;
    for attribute in attributes {
        start(writer, item)?;
        write_text_element(writer, "TAG", &attribute.tag)?;
        write_text_element(writer, "VALUE", &attribute.value)?;
        if let Some(units) = &attribute.units {
            write_text_element(writer, "UNITS", units)?;
        }
        end(writer, item)?;
    }
    end(writer, container)
}
