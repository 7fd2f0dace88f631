use crate::error::LoadError;
use crate::model::{Record, UNKNOWN};
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const ITEM_TAG: &[u8] = b"item";

/// Reads the `item` elements directly under the document root.
///
/// Each item's `city`, `street`, `house` and `floor` attributes become a
/// [`Record`]; a missing attribute becomes [`UNKNOWN`]. Other attributes,
/// child content and nested `item` elements are ignored.
///
/// An item whose attributes cannot be decoded is logged and skipped; the
/// remaining items are still read.
///
/// # Errors
///
/// Returns [`LoadError::FileRead`] if the file cannot be read,
/// [`LoadError::Xml`] for syntax errors and [`LoadError::MalformedXml`] if
/// the document has no single, closed root element.
pub fn read_xml<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, LoadError> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|source| LoadError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let records = parse_items(Reader::from_reader(BufReader::new(file)), path_ref)?;
    log::debug!("read {} XML items from {}", records.len(), path_ref.display());
    Ok(records)
}

/// Walks the document event by event.
///
/// The reader picks the encoding from a BOM or the `<?xml ... encoding="..."?>`
/// declaration, and attribute values are decoded with it.
fn parse_items<R: BufRead>(mut reader: Reader<R>, path: &Path) -> Result<Vec<Record>, LoadError> {
    let malformed = |message: &str| LoadError::MalformedXml {
        path: path.to_path_buf(),
        message: message.to_string(),
    };

    let mut buf = Vec::new();
    let mut records = Vec::new();
    let mut depth: usize = 0;
    let mut seen_root = false;
    let mut item_index: usize = 0;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|source| LoadError::Xml {
            path: path.to_path_buf(),
            source,
        })?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if depth == 0 {
                    if seen_root {
                        return Err(malformed("content after the root element"));
                    }
                    seen_root = true;
                } else if depth == 1 && e.name().as_ref() == ITEM_TAG {
                    item_index += 1;
                    match extract_record(e, reader.decoder()) {
                        Ok(record) => records.push(record),
                        Err(message) => {
                            log::warn!(
                                "skipping item #{item_index} in {}: {message}",
                                path.display()
                            );
                        }
                    }
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(malformed("no root element found"));
    }
    if depth != 0 {
        return Err(malformed("root element is not closed"));
    }

    Ok(records)
}

/// Pulls the four address attributes out of one `item` element.
fn extract_record(element: &BytesStart<'_>, decoder: Decoder) -> Result<Record, String> {
    let mut record = Record::new(UNKNOWN, UNKNOWN, UNKNOWN, UNKNOWN);

    for attr in element.attributes() {
        let attr = attr.map_err(|e| format!("invalid attribute: {e}"))?;
        let slot = match attr.key.as_ref() {
            b"city" => &mut record.city,
            b"street" => &mut record.street,
            b"house" => &mut record.house,
            b"floor" => &mut record.floor,
            _ => continue,
        };
        *slot = attr
            .decode_and_unescape_value(decoder)
            .map_err(|e| format!("failed to decode attribute value: {e}"))?
            .into_owned();
    }

    Ok(record)
}
