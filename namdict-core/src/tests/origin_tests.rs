use super::*;

// -- Column table --

#[test]
fn table_has_55_columns() {
    assert_eq!(ORIGIN_COLUMNS.len(), 55);
    assert_eq!(ORIGIN_COLUMNS[0].label(), "Great Britain");
    assert_eq!(ORIGIN_COLUMNS[54].label(), "other countries");
}

#[test]
fn only_two_columns_are_groups() {
    let groups: Vec<&str> = ORIGIN_COLUMNS
        .iter()
        .filter(|c| c.is_group())
        .map(|c| c.label())
        .collect();
    assert_eq!(groups, vec!["Kazakhstan/Uzbekistan,etc.", "India/Sri Lanka"]);
}

#[test]
fn central_asia_group_expands_to_five_countries() {
    assert_eq!(
        ORIGIN_COLUMNS[45].countries(),
        &[
            "Kazakhstan",
            "Kyrgyzstan",
            "Tajikistan",
            "Turkmenistan",
            "Uzbekistan"
        ]
    );
}

#[test]
fn india_group_expands_to_two_countries() {
    assert_eq!(ORIGIN_COLUMNS[50].countries(), &["India", "Sri Lanka"]);
}

#[test]
fn other_countries_is_emitted_as_other() {
    assert_eq!(ORIGIN_COLUMNS[54].countries(), &["other"]);
}

#[test]
fn plain_columns_emit_their_label() {
    assert_eq!(ORIGIN_COLUMNS[2].countries(), &["U.S.A."]);
    assert_eq!(ORIGIN_COLUMNS[10].countries(), &["the Netherlands"]);
}

// -- Rarity --

#[test]
fn rarity_accepts_any_hex_digit() {
    assert_eq!(Rarity::from_hex_digit('1'), Some(Rarity::new(1)));
    assert_eq!(Rarity::from_hex_digit('D'), Some(Rarity::new(13)));
    assert_eq!(Rarity::from_hex_digit('d'), Some(Rarity::new(13)));
    assert_eq!(Rarity::from_hex_digit('F'), Some(Rarity::new(15)));
    assert_eq!(Rarity::from_hex_digit('0'), Some(Rarity::new(0)));
}

#[test]
fn rarity_rejects_non_hex() {
    assert_eq!(Rarity::from_hex_digit('G'), None);
    assert_eq!(Rarity::from_hex_digit('$'), None);
    assert_eq!(Rarity::from_hex_digit(' '), None);
}

#[test]
fn rarity_frequency_bands() {
    assert_eq!(Rarity::new(13).frequency_percent(), 16.0);
    assert_eq!(Rarity::new(7).frequency_percent(), 0.25);
    assert_eq!(Rarity::new(1).frequency_percent(), 16.0 / 4096.0);
}

// -- Origin entries --

#[test]
fn entry_display_format() {
    let entry = OriginEntry::new("Great Britain", Gender::Male, Rarity::new(1));
    assert_eq!(entry.to_string(), "Great Britain:M:1");

    let entry = OriginEntry::new("Italy", Gender::MostlyFemale, Rarity::new(12));
    assert_eq!(entry.to_string(), "Italy:1F:12");
}

#[test]
fn entry_parses_written_form() {
    let entry: OriginEntry = "Sri Lanka:?:10".parse().unwrap();
    assert_eq!(entry.country, "Sri Lanka");
    assert_eq!(entry.gender, Gender::Unisex);
    assert_eq!(entry.rarity, Rarity::new(10));
}

#[test]
fn entry_rejects_wrong_shape() {
    assert!(matches!(
        "Italy:F".parse::<OriginEntry>(),
        Err(OriginParseError::Shape(_))
    ));
    assert!(matches!(
        " Italy:F:3".parse::<OriginEntry>(),
        Err(OriginParseError::Country(_))
    ));
    assert!(matches!(
        "Italy:F:x".parse::<OriginEntry>(),
        Err(OriginParseError::Rarity(_))
    ));
    assert!(matches!(
        "Italy:W:3".parse::<OriginEntry>(),
        Err(OriginParseError::Gender(_))
    ));
}

#[test]
fn origin_key_ignores_rarity() {
    let a = OriginEntry::new("Spain", Gender::Female, Rarity::new(3));
    let b = OriginEntry::new("Spain", Gender::Female, Rarity::new(9));
    assert_eq!(a.origin_key(), b.origin_key());
}
