use std::path::PathBuf;

/// Errors that abort a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "line {line}: compound name '{name}' must join two non-empty parts with one '{joiner}', found {count}"
    )]
    CompoundName {
        line: usize,
        name: String,
        joiner: char,
        count: usize,
    },
}

impl ConvertError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn compound_name(line: usize, name: impl Into<String>, joiner: char) -> Self {
        let name = name.into();
        let count = name.matches(joiner).count();
        Self::CompoundName {
            line,
            name,
            joiner,
            count,
        }
    }
}
