//! Fixed-width line parser.
//!
//! Layout of a data line (character offsets):
//! ```text
//! 0..3    gender code, space padded ("M  ", "1F ", "=  ")
//! 3..29   name, space padded, may contain escape sequences
//! 29      sort flag; the continuation marker repeats an earlier name
//! 30..85  one rarity digit per origin column, space if absent
//! ```

use namdict_core::{Gender, ORIGIN_COLUMNS, OriginEntry, Rarity};

use crate::normalize::normalize_name;
use crate::options::ConvertOptions;

const GENDER_WIDTH: usize = 3;
const NAME_WIDTH: usize = 26;
pub const SORT_FLAG_OFFSET: usize = GENDER_WIDTH + NAME_WIDTH;
pub const ORIGIN_OFFSET: usize = SORT_FLAG_OFFSET + 1;

/// A data line split into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub gender: Gender,
    /// Trimmed and normalized name. Never empty.
    pub name: String,
    pub sort_flag: char,
    /// Rarity per origin column, aligned with [`ORIGIN_COLUMNS`].
    pub rarities: Vec<Option<Rarity>>,
}

impl ParsedLine {
    /// Origin entries in column order, with group columns expanded to one
    /// entry per country.
    pub fn origin_entries(&self) -> Vec<OriginEntry> {
        let gender = self.gender;
        self.rarities
            .iter()
            .zip(ORIGIN_COLUMNS.iter())
            .filter_map(|(rarity, column)| rarity.map(|rarity| (rarity, column)))
            .flat_map(|(rarity, column)| {
                column
                    .countries()
                    .iter()
                    .map(move |&country| OriginEntry::new(country, gender, rarity))
            })
            .collect()
    }
}

/// Why a line produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Comment,
    /// Alternate sort entry for a name listed elsewhere.
    Continuation,
    /// The name field is empty after trimming and normalization.
    EmptyName,
    Malformed(String),
}

impl SkipReason {
    /// Skips that should be reported to the user.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyName | Self::Malformed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Record(ParsedLine),
    Skipped(SkipReason),
}

/// Parse one line of the dataset.
pub fn parse_line(line: &str, options: &ConvertOptions) -> ParseOutcome {
    use ParseOutcome::Skipped;

    if line.is_empty() {
        return Skipped(SkipReason::Blank);
    }
    if line.starts_with(options.comment_marker) {
        return Skipped(SkipReason::Comment);
    }

    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= SORT_FLAG_OFFSET {
        return Skipped(SkipReason::Malformed(format!(
            "line too short ({} characters)",
            chars.len()
        )));
    }

    let gender_field = collect_field(&chars[..GENDER_WIDTH]);
    let name = normalize_name(collect_field(&chars[GENDER_WIDTH..SORT_FLAG_OFFSET]).trim());
    let sort_flag = chars[SORT_FLAG_OFFSET];

    if sort_flag == options.continuation_marker {
        return Skipped(SkipReason::Continuation);
    }
    if name.is_empty() {
        return Skipped(SkipReason::EmptyName);
    }

    let gender: Gender = match gender_field.trim().parse() {
        Ok(gender) => gender,
        Err(e) => return Skipped(SkipReason::Malformed(e.to_string())),
    };

    let mut rarities = Vec::with_capacity(ORIGIN_COLUMNS.len());
    for (i, column) in ORIGIN_COLUMNS.iter().enumerate() {
        // Trailing columns are often cut off along with the padding.
        let rarity = match chars.get(ORIGIN_OFFSET + i) {
            None | Some(' ') => None,
            Some(&c) => match Rarity::from_hex_digit(c) {
                Some(rarity) => Some(rarity),
                None => {
                    return Skipped(SkipReason::Malformed(format!(
                        "invalid rarity '{c}' for {}",
                        column.label()
                    )));
                }
            },
        };
        rarities.push(rarity);
    }

    ParseOutcome::Record(ParsedLine {
        gender,
        name,
        sort_flag,
        rarities,
    })
}

/// Spellings a name is listed under.
///
/// A compound name like `Jun+Wei` stands for `Jun-Wei`, `Jun Wei` and
/// `JunWei`. Returns `None` unless the joiner separates exactly two
/// non-empty parts.
pub fn surface_forms(name: &str, joiner: char) -> Option<Vec<String>> {
    let Some((first, second)) = name.split_once(joiner) else {
        return Some(vec![name.to_string()]);
    };
    if first.is_empty() || second.is_empty() || second.contains(joiner) {
        return None;
    }
    Some(vec![
        format!("{first}-{second}"),
        format!("{first} {second}"),
        format!("{first}{second}"),
    ])
}

fn collect_field(chars: &[char]) -> String {
    chars.iter().collect()
}

#[cfg(test)]
#[path = "tests/line_tests.rs"]
mod tests;
