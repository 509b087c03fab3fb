use super::*;
use namdict_core::{Gender, ORIGIN_COLUMNS, Rarity};

fn parsed(gender: Gender, name: &str, columns: &[(usize, u8)]) -> ParsedLine {
    let mut rarities = vec![None; ORIGIN_COLUMNS.len()];
    for &(index, value) in columns {
        rarities[index] = Some(Rarity::new(value));
    }
    ParsedLine {
        gender,
        name: name.to_string(),
        sort_flag: ' ',
        rarities,
    }
}

fn written(aggregate: &NameAggregate, name: &str) -> Vec<String> {
    aggregate
        .get(name)
        .unwrap_or_else(|| panic!("{name} missing"))
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn new_name_is_inserted() {
    let mut aggregate = NameAggregate::new('+');
    let warnings = aggregate
        .add(1, &parsed(Gender::Male, "John", &[(0, 1)]))
        .unwrap();
    assert!(warnings.is_empty());
    assert_eq!(written(&aggregate, "John"), vec!["Great Britain:M:1"]);
}

#[test]
fn compound_name_feeds_three_keys() {
    let mut aggregate = NameAggregate::new('+');
    aggregate
        .add(1, &parsed(Gender::Male, "Jun+Wei", &[(49, 5)]))
        .unwrap();

    let keys: Vec<&str> = aggregate.names().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Jun-Wei", "Jun Wei", "JunWei"]);
    for key in keys {
        assert_eq!(written(&aggregate, key), vec!["China:M:5"]);
    }
}

#[test]
fn compound_name_with_two_joiners_is_fatal() {
    let mut aggregate = NameAggregate::new('+');
    let err = aggregate
        .add(7, &parsed(Gender::Female, "A+B+C", &[(0, 1)]))
        .unwrap_err();
    match err {
        ConvertError::CompoundName {
            line, name, count, ..
        } => {
            assert_eq!(line, 7);
            assert_eq!(name, "A+B+C");
            assert_eq!(count, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn compound_name_with_empty_part_is_fatal() {
    let mut aggregate = NameAggregate::new('+');
    let err = aggregate
        .add(3, &parsed(Gender::Male, "Jun+", &[(49, 5)]))
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::CompoundName { line: 3, count: 1, .. }
    ));
    assert!(aggregate.get("").is_none());
    assert!(aggregate.is_empty());
}

#[test]
fn repeated_name_with_same_origins_merges_silently() {
    let mut aggregate = NameAggregate::new('+');
    aggregate
        .add(1, &parsed(Gender::Female, "Anna", &[(12, 9), (13, 8)]))
        .unwrap();
    let warnings = aggregate
        .add(2, &parsed(Gender::Female, "Anna", &[(12, 3), (13, 2)]))
        .unwrap();

    assert!(warnings.is_empty());
    assert_eq!(
        written(&aggregate, "Anna"),
        vec!["Germany:F:9", "Austria:F:8", "Germany:F:3", "Austria:F:2"]
    );
}

#[test]
fn repeated_name_with_different_origins_warns_and_merges() {
    let mut aggregate = NameAggregate::new('+');
    aggregate
        .add(1, &parsed(Gender::Male, "Andrea", &[(3, 10)]))
        .unwrap();
    let warnings = aggregate
        .add(2, &parsed(Gender::Female, "Andrea", &[(3, 4)]))
        .unwrap();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line(), 2);
    assert_eq!(
        warnings[0].to_string(),
        "conflicting origins for Andrea: [Italy:M:10] vs. [Italy:F:4]"
    );
    assert_eq!(written(&aggregate, "Andrea"), vec!["Italy:M:10", "Italy:F:4"]);
}

#[test]
fn conflict_check_ignores_rarity_and_order() {
    let mut aggregate = NameAggregate::new('+');
    aggregate
        .add(1, &parsed(Gender::Male, "Paul", &[(0, 9), (7, 8)]))
        .unwrap();
    let warnings = aggregate
        .add(2, &parsed(Gender::Male, "Paul", &[(7, 1), (0, 1)]))
        .unwrap();
    assert!(warnings.is_empty());
}

#[test]
fn equivalence_lines_go_to_references_only() {
    let mut aggregate = NameAggregate::new('+');
    let warnings = aggregate
        .add(1, &parsed(Gender::Equivalence, "Jo+Ann Joanna", &[(2, 3)]))
        .unwrap();

    assert!(warnings.is_empty());
    assert!(aggregate.is_empty());
    let refs: Vec<&str> = aggregate.references().keys().map(String::as_str).collect();
    assert_eq!(refs, vec!["Jo+Ann Joanna"]);
    assert_eq!(
        aggregate.references()["Jo+Ann Joanna"][0].to_string(),
        "U.S.A.:=:3"
    );
}

#[test]
fn insertion_order_is_preserved() {
    let mut aggregate = NameAggregate::new('+');
    for (line, name) in ["Zoe", "Adam", "Mia", "Adam"].iter().enumerate() {
        aggregate
            .add(line + 1, &parsed(Gender::Unisex, name, &[(0, 2)]))
            .unwrap();
    }
    let keys: Vec<&str> = aggregate.names().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Zoe", "Adam", "Mia"]);
    assert_eq!(aggregate.len(), 3);
}
