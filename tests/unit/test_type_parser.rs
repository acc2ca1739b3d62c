//! Unit tests for the Flink type signature parser.

use flink_catalog_types::types::{ParseError, ParsedType, TypeParser};

const FIXTURES: &[&str] = &[
    "INT",
    "BIGINT NOT NULL",
    "VARCHAR(2147483647) NULL 'free text'",
    "DECIMAL(10, 2)",
    "TIMESTAMP(3) WITH LOCAL TIME ZONE NULL",
    "INTERVAL DAY(2) TO SECOND(3) NOT NULL 'duration'",
    "ARRAY<INT NULL> NOT NULL",
    "ARRAY<ARRAY<STRING NULL> NULL> NULL 'matrix'",
    "ROW<`f1` INT NOT NULL, `f2` ARRAY<STRING> NULL 'a comment'> 'outer comment'",
    "ROW<`id` BIGINT, `address` ROW<`street` STRING, `zip` CHAR(5) NULL> NULL>",
    "MAP<STRING NOT NULL, INT NULL>",
    "MAP<STRING, ARRAY<ROW<`k` INT>>> NULL 'lookup'",
    "MULTISET<DECIMAL(38, 18) NULL> NULL",
    "RAW('java.lang.Object', 'AEBzcn''Jn')",
    "ROW<`it''s` INT 'it''s a ''quoted'' comment'>",
];

fn kind(parsed: &ParsedType) -> &'static str {
    parsed.keyword().unwrap_or("PRIMITIVE")
}

#[test]
fn test_canonical_text_reparses_to_equivalent_node() {
    for fixture in FIXTURES {
        let parsed = TypeParser::parse(fixture)
            .unwrap_or_else(|e| panic!("fixture '{}' failed to parse: {}", fixture, e));
        let canonical = parsed.to_string();
        let reparsed = TypeParser::parse(&canonical)
            .unwrap_or_else(|e| panic!("canonical '{}' failed to parse: {}", canonical, e));

        assert_eq!(kind(&parsed), kind(&reparsed), "kind differs for {}", fixture);
        assert_eq!(
            parsed.nullable(),
            reparsed.nullable(),
            "nullability differs for {}",
            fixture
        );
        assert_eq!(parsed, reparsed, "tree differs for {}", fixture);
    }
}

#[test]
fn test_canonical_text_is_stable() {
    let parsed = TypeParser::parse("row<`a`   int  not null,`b` map<string,int null>   null>").unwrap();
    assert_eq!(
        parsed.to_string(),
        "ROW<`a` int, `b` MAP<string, int NULL> NULL>"
    );
}

#[test]
fn test_array_nullability_is_independent_at_every_level() {
    let parsed = TypeParser::parse("ARRAY<ARRAY<INT NULL>> NOT NULL").unwrap();
    let ParsedType::Array {
        element: outer_element,
        nullable: outer_nullable,
        ..
    } = &parsed
    else {
        panic!("expected array");
    };
    assert!(!outer_nullable);
    assert!(!outer_element.nullable());

    let ParsedType::Array { element, .. } = outer_element.as_ref() else {
        panic!("expected nested array");
    };
    assert!(element.nullable());
}

#[test]
fn test_comment_follows_nullability_in_rows() {
    let parsed = TypeParser::parse("ROW<`a` INT NULL 'first', `b` INT 'second'> NOT NULL 'row'").unwrap();
    let ParsedType::Row {
        fields,
        nullable,
        comment,
    } = parsed
    else {
        panic!("expected row");
    };
    assert!(!nullable);
    assert_eq!(comment.as_deref(), Some("row"));
    assert!(fields[0].nullable);
    assert_eq!(fields[0].comment.as_deref(), Some("first"));
    assert!(!fields[1].nullable);
    assert_eq!(fields[1].comment.as_deref(), Some("second"));
}

#[test]
fn test_comment_before_nullability_is_rejected() {
    let result = TypeParser::parse("INT 'comment' NULL");
    assert!(matches!(result, Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn test_malformed_inputs_report_position() {
    let cases = [
        ("ROW<`f1` INT", 12),
        ("ARRAY<INT", 9),
        ("MAP<INT>", 7),
        ("INT 'unterminated", 4),
        ("ROW<f1 INT>", 4),
    ];
    for (input, position) in cases {
        let error = TypeParser::parse(input).unwrap_err();
        assert_eq!(error.position(), position, "wrong position for {}: {}", input, error);
    }
}

#[test]
fn test_error_messages_name_expected_token() {
    let error = TypeParser::parse("MAP<INT>").unwrap_err();
    assert_eq!(error.to_string(), "Expected ',' at position 7, found '>'");

    let error = TypeParser::parse("ARRAY<INT").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Unexpected end of input at position 9, expected '>'"
    );
}
