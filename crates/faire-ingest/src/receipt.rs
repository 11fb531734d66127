//! Archive receipt parsing.
//!
//! ```xml
//! <RECEIPT success="true">
//!   <SAMPLE alias="S1" accession="ERS1" status="PRIVATE">
//!     <EXT_ID accession="SAMEA1" type="biosample"/>
//!   </SAMPLE>
//!   <MESSAGES><ERROR>...</ERROR></MESSAGES>
//! </RECEIPT>
//! ```

use std::path::Path;

use faire_model::{FaireError, Receipt, ReceiptEntry};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::error::{IngestError, Result};

fn attribute(
    element: &BytesStart<'_>,
    name: &str,
    reader: &Reader<&[u8]>,
) -> Result<Option<String>> {
    let Some(attr) = element
        .try_get_attribute(name)
        .map_err(FaireError::malformed_receipt)?
    else {
        return Ok(None);
    };
    let value = attr.decode_and_unescape_value(reader.decoder())?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn sample_entry(element: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Option<ReceiptEntry>> {
    let alias = attribute(element, "alias", reader)?;
    let accession = attribute(element, "accession", reader)?;
    match (alias, accession) {
        (Some(alias), Some(accession)) => Ok(Some(ReceiptEntry {
            alias,
            accession,
            biosample: None,
        })),
        (alias, _) => {
            debug!(alias = ?alias, "receipt sample without alias or accession ignored");
            Ok(None)
        }
    }
}

/// Parses a receipt document in one pass.
pub fn parse_receipt(xml: &str) -> Result<Receipt> {
    let mut reader = Reader::from_str(xml);

    let mut receipt = Receipt::default();
    let mut seen_root = false;
    // Index into `receipt.samples` of the open SAMPLE element.
    let mut open_sample: Option<usize> = None;
    let mut in_sample = false;
    let mut error_text: Option<String> = None;

    loop {
        let event = reader.read_event()?;
        let empty = matches!(event, Event::Empty(_));
        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                let name = element.name();
                let name = name.as_ref();
                if !seen_root {
                    if name != b"RECEIPT" {
                        return Err(FaireError::malformed_receipt(format!(
                            "root element is '{}', expected 'RECEIPT'",
                            String::from_utf8_lossy(name)
                        ))
                        .into());
                    }
                    seen_root = true;
                    receipt.success = attribute(element, "success", &reader)?
                        .is_none_or(|value| value.eq_ignore_ascii_case("true"));
                    continue;
                }
                match name {
                    b"SAMPLE" => {
                        open_sample = sample_entry(element, &reader)?.map(|entry| {
                            receipt.samples.push(entry);
                            receipt.samples.len() - 1
                        });
                        in_sample = !empty;
                    }
                    b"EXT_ID" if in_sample => {
                        if let Some(index) = open_sample {
                            let biosample = attribute(element, "accession", &reader)?;
                            if let Some(entry) = receipt.samples.get_mut(index) {
                                entry.biosample = entry.biosample.take().or(biosample);
                            }
                        }
                    }
                    b"ERROR" if !empty => error_text = Some(String::new()),
                    _ => {}
                }
            }
            Event::End(ref element) => match element.name().as_ref() {
                b"SAMPLE" => {
                    in_sample = false;
                    open_sample = None;
                }
                b"ERROR" => {
                    if let Some(text) = error_text.take() {
                        receipt.errors.push(text.trim().to_string());
                    }
                }
                _ => {}
            },
            Event::Text(ref text) => {
                if let Some(buffer) = error_text.as_mut() {
                    let decoded = text.decode().map_err(FaireError::malformed_receipt)?;
                    buffer.push_str(&decoded);
                }
            }
            Event::GeneralRef(ref reference) => {
                if let Some(buffer) = error_text.as_mut() {
                    if let Ok(Some(ch)) = reference.resolve_char_ref() {
                        buffer.push(ch);
                    } else {
                        let name = reference
                            .decode()
                            .map_err(FaireError::malformed_receipt)?;
                        if let Some(resolved) = resolve_predefined_entity(&name) {
                            buffer.push_str(resolved);
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(FaireError::malformed_receipt("document has no root element").into());
    }
    debug!(
        samples = receipt.samples.len(),
        success = receipt.success,
        "parsed receipt"
    );
    Ok(receipt)
}

pub fn read_receipt(path: &Path) -> Result<Receipt> {
    let text = std::fs::read_to_string(path).map_err(|err| IngestError::io(path, err))?;
    parse_receipt(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_samples_and_biosamples() {
        let receipt = parse_receipt(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<RECEIPT receiptDate="2024-05-01T10:00:00.000+01:00" success="true">
  <SAMPLE accession="ERS1" alias="A" status="PRIVATE">
    <EXT_ID accession="SAMEA1" type="biosample"/>
  </SAMPLE>
  <SAMPLE accession="ERS2" alias="B" status="PRIVATE"/>
  <SUBMISSION accession="ERA1" alias="sub"/>
  <MESSAGES><INFO>submission accepted</INFO></MESSAGES>
</RECEIPT>"#,
        )
        .expect("parse receipt");
        assert!(receipt.success);
        assert_eq!(receipt.samples.len(), 2);
        assert_eq!(receipt.samples[0].alias, "A");
        assert_eq!(receipt.samples[0].biosample.as_deref(), Some("SAMEA1"));
        assert_eq!(receipt.samples[1].accession, "ERS2");
        assert_eq!(receipt.samples[1].biosample, None);
        assert!(receipt.errors.is_empty());
    }

    #[test]
    fn collects_errors_of_failed_receipt() {
        let receipt = parse_receipt(
            r#"<RECEIPT success="false">
  <MESSAGES>
    <ERROR>alias "S1" already exists &amp; was not added</ERROR>
  </MESSAGES>
</RECEIPT>"#,
        )
        .expect("parse receipt");
        assert!(!receipt.success);
        assert_eq!(
            receipt.errors,
            vec![r#"alias "S1" already exists & was not added"#.to_string()]
        );
    }

    #[test]
    fn ignores_incomplete_samples() {
        let receipt = parse_receipt(
            r#"<RECEIPT success="true"><SAMPLE alias="A"/><SAMPLE accession="ERS9"/></RECEIPT>"#,
        )
        .expect("parse receipt");
        assert!(receipt.samples.is_empty());
    }

    #[test]
    fn rejects_foreign_root() {
        let err = parse_receipt("<SAMPLE_SET/>").unwrap_err();
        assert!(err.to_string().contains("RECEIPT"), "{err}");
    }
}
