use std::collections::HashSet;

use indexmap::IndexMap;
use indexmap::map::Entry;
use namdict_core::OriginEntry;

use crate::error::ConvertError;
use crate::line::{ParsedLine, surface_forms};
use crate::report::Warning;

/// Origins accumulated per name, in the order names were first seen.
///
/// Lines with the `=` gender go to a separate reference map keyed by the raw
/// name field. References are kept for inspection only: they are neither
/// merged into the names nor written out.
#[derive(Debug, Clone)]
pub struct NameAggregate {
    names: IndexMap<String, Vec<OriginEntry>>,
    references: IndexMap<String, Vec<OriginEntry>>,
    joiner: char,
}

impl NameAggregate {
    pub fn new(joiner: char) -> Self {
        Self {
            names: IndexMap::new(),
            references: IndexMap::new(),
            joiner,
        }
    }

    /// Fold one parsed line into the aggregate.
    ///
    /// Every surface form of the name receives the line's origin entries.
    /// A form that already exists keeps its entries and gets the new ones
    /// appended; if the two sets of `country:gender` pairs differ, a
    /// [`Warning::ConflictingOrigins`] is returned for that form.
    pub fn add(&mut self, line: usize, parsed: &ParsedLine) -> Result<Vec<Warning>, ConvertError> {
        let origins = parsed.origin_entries();

        if parsed.gender.is_equivalence() {
            log::debug!("Setting aside reference entry '{}'", parsed.name);
            self.references.insert(parsed.name.clone(), origins);
            return Ok(Vec::new());
        }

        let forms = surface_forms(&parsed.name, self.joiner)
            .ok_or_else(|| ConvertError::compound_name(line, &parsed.name, self.joiner))?;

        let mut warnings = Vec::new();
        for form in forms {
            match self.names.entry(form) {
                Entry::Occupied(mut entry) => {
                    if !same_origin_keys(entry.get(), &origins) {
                        warnings.push(Warning::ConflictingOrigins {
                            line,
                            name: entry.key().clone(),
                            existing: entry.get().clone(),
                            incoming: origins.clone(),
                        });
                    }
                    entry.get_mut().extend(origins.iter().cloned());
                }
                Entry::Vacant(entry) => {
                    entry.insert(origins.clone());
                }
            }
        }

        Ok(warnings)
    }

    pub fn names(&self) -> &IndexMap<String, Vec<OriginEntry>> {
        &self.names
    }

    pub fn references(&self) -> &IndexMap<String, Vec<OriginEntry>> {
        &self.references
    }

    pub fn get(&self, name: &str) -> Option<&[OriginEntry]> {
        self.names.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn same_origin_keys(existing: &[OriginEntry], incoming: &[OriginEntry]) -> bool {
    let existing: HashSet<_> = existing.iter().map(OriginEntry::origin_key).collect();
    let incoming: HashSet<_> = incoming.iter().map(OriginEntry::origin_key).collect();
    existing == incoming
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
