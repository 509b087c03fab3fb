use namdict_core::OriginEntry;

/// A non-fatal problem found while converting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The name field was empty after normalization; the line was skipped.
    EmptyName { line: usize, text: String },

    /// The line could not be split into its fields; it was skipped.
    MalformedLine {
        line: usize,
        reason: String,
        text: String,
    },

    /// A repeated name brought a different set of `country:gender` pairs.
    /// The entries were merged regardless.
    ConflictingOrigins {
        line: usize,
        name: String,
        existing: Vec<OriginEntry>,
        incoming: Vec<OriginEntry>,
    },
}

impl Warning {
    pub fn line(&self) -> usize {
        match self {
            Self::EmptyName { line, .. }
            | Self::MalformedLine { line, .. }
            | Self::ConflictingOrigins { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { line, text } => write!(f, "empty name in line {line}: {text}"),
            Self::MalformedLine { line, reason, text } => {
                write!(f, "malformed line {line} ({reason}): {text}")
            }
            Self::ConflictingOrigins {
                name,
                existing,
                incoming,
                ..
            } => write!(
                f,
                "conflicting origins for {name}: [{}] vs. [{}]",
                join_entries(existing),
                join_entries(incoming)
            ),
        }
    }
}

fn join_entries(entries: &[OriginEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Line counts and warnings collected over one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Every line of the input, including comments and blanks.
    pub lines: usize,
    pub comments: usize,
    pub blank: usize,
    /// Alternate sort entries skipped.
    pub continuations: usize,
    /// Data lines folded into either aggregate.
    pub records: usize,
    /// Distinct names written.
    pub names: usize,
    /// Short/long name equivalences read and set aside.
    pub references: usize,
    pub warnings: Vec<Warning>,
}

impl ConversionReport {
    /// Record a warning and log it.
    pub fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn conflicts(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, Warning::ConflictingOrigins { .. }))
            .count()
    }
}
