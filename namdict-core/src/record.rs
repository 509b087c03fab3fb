//! Reader for the converted name list.
//!
//! The format is line-based:
//! ```text
//! # header line
//! # another header line
//! Name;Country:Gender:Rarity,Country:Gender:Rarity;description
//! ```
//!
//! A run of consecutive `#` lines forms the header that applies to every
//! record until the next run. The description field is optional and usually
//! empty.

use std::collections::HashSet;

use crate::error::RecordError;
use crate::origin::{OriginEntry, OriginParseError};

/// One name with its origins, as read back from a converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    pub name: String,
    pub origins: Vec<OriginEntry>,
    pub description: String,
    /// Header block in effect when the record was read, lines joined by `\n`.
    pub header: String,
}

/// Parse converted records from text.
///
/// Fails on the first line that does not have exactly three `;`-separated
/// fields, has an empty or whitespace-padded name, carries an unparseable
/// origin entry, or repeats a name seen earlier in the file.
pub fn parse_records(text: &str) -> Result<Vec<NameRecord>, RecordError> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();
    let mut header = String::new();
    let mut header_line = 0;

    for (index, line) in text.split('\n').enumerate() {
        let line_number = index + 1;

        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            if header_line + 1 == line_number && !header.is_empty() {
                header.push('\n');
                header.push_str(line);
            } else {
                header = line.to_string();
            }
            header_line = line_number;
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();
        let [name, origins, description] = fields.as_slice() else {
            return Err(RecordError::field_count(line_number, line));
        };

        if name.is_empty() || *name != name.trim() {
            return Err(RecordError::invalid_name(line_number, line));
        }

        let origins = parse_origins(origins).map_err(|source| RecordError::InvalidOrigin {
            line: line_number,
            source,
        })?;

        if !seen.insert(name.to_string()) {
            return Err(RecordError::DuplicateName {
                line: line_number,
                name: name.to_string(),
            });
        }

        records.push(NameRecord {
            name: name.to_string(),
            origins,
            description: description.trim().to_string(),
            header: header.clone(),
        });
    }

    Ok(records)
}

fn parse_origins(field: &str) -> Result<Vec<OriginEntry>, OriginParseError> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    field.split(',').map(str::parse::<OriginEntry>).collect()
}
