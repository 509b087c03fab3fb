use indexmap::IndexMap;
use namdict_core::OriginEntry;

/// Render one record: `name;origin,origin,...;`.
pub fn render_record(name: &str, origins: &[OriginEntry]) -> String {
    let origins = origins
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{name};{origins};")
}

/// Render the header banner followed by one record per name, in map order.
///
/// Lines are separated by `\n`. The header always ends with a newline; the
/// last record does not.
pub fn render(header: &[String], names: &IndexMap<String, Vec<OriginEntry>>) -> String {
    let mut out = header.join("\n");
    out.push('\n');

    let records = names
        .iter()
        .map(|(name, origins)| render_record(name, origins))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&records);
    out
}
