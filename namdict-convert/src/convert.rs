use std::path::{Path, PathBuf};

use crate::aggregate::NameAggregate;
use crate::error::ConvertError;
use crate::line::{ParseOutcome, SkipReason, parse_line};
use crate::normalize::decode_latin1;
use crate::options::ConvertOptions;
use crate::report::{ConversionReport, Warning};
use crate::serialize::render;

/// Result of converting one dataset: the aggregated names and what
/// happened along the way.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub aggregate: NameAggregate,
    pub report: ConversionReport,
}

impl Conversion {
    /// Render the output file contents.
    pub fn render(&self, options: &ConvertOptions) -> String {
        render(&options.header, self.aggregate.names())
    }
}

/// Convert already decoded dataset text.
///
/// Malformed lines, empty names and origin conflicts are logged, recorded in
/// the report and skipped over. Only a compound name with more than one
/// joiner stops the conversion.
pub fn convert_text(text: &str, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let mut aggregate = NameAggregate::new(options.joiner);
    let mut report = ConversionReport::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        report.lines += 1;

        match parse_line(line, options) {
            ParseOutcome::Record(parsed) => {
                for warning in aggregate.add(line_number, &parsed)? {
                    report.warn(warning);
                }
                report.records += 1;
            }
            ParseOutcome::Skipped(SkipReason::Blank) => report.blank += 1,
            ParseOutcome::Skipped(SkipReason::Comment) => report.comments += 1,
            ParseOutcome::Skipped(SkipReason::Continuation) => {
                log::debug!("Skipping continuation line {line_number}");
                report.continuations += 1;
            }
            ParseOutcome::Skipped(SkipReason::EmptyName) => report.warn(Warning::EmptyName {
                line: line_number,
                text: line.to_string(),
            }),
            ParseOutcome::Skipped(SkipReason::Malformed(reason)) => {
                report.warn(Warning::MalformedLine {
                    line: line_number,
                    reason,
                    text: line.to_string(),
                })
            }
        }
    }

    report.names = aggregate.len();
    report.references = aggregate.references().len();

    Ok(Conversion { aggregate, report })
}

/// Convert raw dataset bytes (Latin-1).
pub fn convert_bytes(bytes: &[u8], options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    convert_text(&decode_latin1(bytes), options)
}

/// Read `input`, convert it, and write the result to `output`.
///
/// The output is written in one go through a temporary file next to it, so
/// a failed run never leaves a truncated file behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let bytes = std::fs::read(input).map_err(|e| ConvertError::read(input, e))?;
    let conversion = convert_bytes(&bytes, options)?;

    let contents = conversion.render(options);
    write_atomically(output, contents.as_bytes()).map_err(|e| ConvertError::write(output, e))?;

    Ok(conversion.report)
}

fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path).inspect_err(|_| {
        let _ = std::fs::remove_file(&tmp);
    })
}

#[cfg(test)]
#[path = "tests/convert_tests.rs"]
mod tests;
