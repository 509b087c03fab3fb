use crate::origin::OriginParseError;

/// Errors that can occur while reading converted `name;origins;` records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Failed to parse line {line}: {excerpt}")]
    FieldCount { line: usize, excerpt: String },

    #[error("Invalid name in line {line}: {excerpt}")]
    InvalidName { line: usize, excerpt: String },

    #[error("Invalid origin in line {line}: {source}")]
    InvalidOrigin {
        line: usize,
        #[source]
        source: OriginParseError,
    },

    #[error("Duplicate name in line {line}: {name}")]
    DuplicateName { line: usize, name: String },
}

impl RecordError {
    pub fn field_count(line: usize, text: &str) -> Self {
        Self::FieldCount {
            line,
            excerpt: excerpt(text),
        }
    }

    pub fn invalid_name(line: usize, text: &str) -> Self {
        Self::InvalidName {
            line,
            excerpt: excerpt(text),
        }
    }
}

const EXCERPT_CHARS: usize = 32;

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
