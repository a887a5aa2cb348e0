use super::*;

#[test]
fn test_parse_record_line() {
    let record: Record = "16-05-18: Margot, Frank".parse().unwrap();
    assert_eq!(record.date, DateNotation::new(16, 5, 18));
    assert_eq!(
        record.entities.as_slice(),
        &[EntityId::from("Margot"), EntityId::from("Frank")]
    );
}

#[test]
fn test_parse_non_ascii_names() {
    let record: Record = "01-09-11: Bé, Łukasz, 田中".parse().unwrap();
    assert!(record.mentions("Bé"));
    assert!(record.mentions("Łukasz"));
    assert!(record.mentions("田中"));
    assert!(!record.mentions("Be"));
}

#[test]
fn test_parse_signed_and_wide_fields() {
    let record: Record = "-5--3-2007: Ann".parse().unwrap();
    assert_eq!(record.date, DateNotation::new(-5, -3, 2007));
}

#[test]
fn test_names_split_on_comma_space() {
    let record: Record = "01-02-03: Smith,John, Ann ,  Bob".parse().unwrap();
    let names: Vec<&str> = record.entities.iter().map(EntityId::as_str).collect();
    assert_eq!(names, vec!["Smith,John", "Ann", "Bob"]);

    let record: Record = "01-02-03: Ann,Bob".parse().unwrap();
    assert_eq!(record.entities.len(), 1);
    assert!(record.mentions("Ann,Bob"));
}

#[test]
fn test_duplicate_names_collapse() {
    let record: Record = "01-02-03: Ann, Bob, Ann".parse().unwrap();
    assert_eq!(record.entities.len(), 2);
    assert_eq!(record.entities[0].as_str(), "Ann");
    assert_eq!(record.entities[1].as_str(), "Bob");
}

#[test]
fn test_missing_separator() {
    let err = "01-02-03 Ann".parse::<Record>().unwrap_err();
    assert_eq!(err, ParseErrorKind::MissingSeparator);
}

#[test]
fn test_missing_field() {
    let err = "01-02: Ann".parse::<Record>().unwrap_err();
    assert_eq!(err, ParseErrorKind::MissingField { found: 2 });
}

#[test]
fn test_invalid_number() {
    let err = "01-xx-03: Ann".parse::<Record>().unwrap_err();
    assert_eq!(
        err,
        ParseErrorKind::InvalidNumber {
            field: "xx".to_string()
        }
    );
}

#[test]
fn test_empty_names() {
    assert_eq!(
        "01-02-03:   ".parse::<Record>().unwrap_err(),
        ParseErrorKind::EmptyEntityList
    );
    assert_eq!(
        "01-02-03: Ann, , Bob".parse::<Record>().unwrap_err(),
        ParseErrorKind::EmptyEntityName
    );
}

#[test]
fn test_corpus_skips_blank_lines() {
    let corpus = Corpus::parse("\n01-02-03: Ann\n   \n04-05-06: Bob, Ann\n\n").unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.entity_count(), 2);
    assert_eq!(corpus.records()[1].date, DateNotation::new(4, 5, 6));
}

#[test]
fn test_corpus_error_reports_line_number() {
    let err = Corpus::parse("01-02-03: Ann\n\n04-05: Bob\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, ParseErrorKind::MissingField { found: 2 });
    assert_eq!(err.to_string(), "line 3: expected 3 date fields, found 2");
}

#[test]
fn test_corpus_interns_names() {
    let corpus = Corpus::parse("01-02-03: Ann\n04-05-06: Ann\n").unwrap();
    let first = &corpus.records()[0].entities[0];
    let second = &corpus.records()[1].entities[0];
    assert_eq!(first, second);
    assert!(std::ptr::eq(first.as_str(), second.as_str()));
}

#[test]
fn test_entity_ordering_is_bytewise() {
    let mut names = vec![EntityId::from("Bé"), EntityId::from("A"), EntityId::from("Be")];
    names.sort();
    let sorted: Vec<&str> = names.iter().map(EntityId::as_str).collect();
    assert_eq!(sorted, vec!["A", "Be", "Bé"]);
}
