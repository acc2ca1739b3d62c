//! Integration tests for building a relation's column tree.

use flink_catalog_types::models::{Column, ColumnProps};
use flink_catalog_types::services::build_relation;

fn rows() -> Vec<ColumnProps> {
    let mut id = ColumnProps::new("payments", "id", "BIGINT NOT NULL");
    id.distribution_key_number = Some(1);

    let mut partition = ColumnProps::new("payments", "partition", "INT NOT NULL");
    partition.is_hidden = true;
    partition.metadata_key = Some("partition".to_string());

    let mut total = ColumnProps::new("payments", "total", "DECIMAL(10, 2)");
    total.is_generated = true;

    vec![
        id,
        ColumnProps::new(
            "payments",
            "payer",
            "ROW<`name` VARCHAR(2147483647), `cards` ARRAY<ROW<`last4` CHAR(4)>> NULL> NOT NULL",
        ),
        partition,
        total,
        ColumnProps::new("payments", "labels", "MAP<STRING, ARRAY<STRING NULL>>"),
    ]
}

#[test]
fn test_relation_tooltip_lists_visible_columns() {
    let relation = build_relation("payments", &rows());

    assert_eq!(relation.columns.len(), 5);
    assert_eq!(relation.visible_columns().len(), 4);
    assert_eq!(
        relation.tooltip(),
        [
            "payments",
            "id: BIGINT NOT NULL DISTKEY(1)",
            "payer: ROW NOT NULL",
            "total: DECIMAL(10, 2) NOT NULL GENERATED",
            "labels: MAP NOT NULL",
        ]
        .join("\n")
    );
}

#[test]
fn test_nested_ids_follow_relation_path() {
    let relation = build_relation("payments", &rows());

    let payer = relation.column("payer").unwrap();
    let cards = payer.child("cards").unwrap();
    assert!(cards.is_nullable());
    assert!(cards.info().is_array);
    assert_eq!(cards.id(), "payments.payer.cards");

    let last4 = cards.child("last4").unwrap();
    assert_eq!(last4.id(), "payments.payer.cards.last4");
    assert_eq!(last4.simple_data_type(), "CHAR(4)");

    let labels = relation.column("labels").unwrap();
    let Column::Map(map) = labels else {
        panic!("expected map column");
    };
    assert!(map.value.info().is_array);
    assert!(map.value.info().is_array_member_nullable);
    assert_eq!(map.value.simple_type_with_array(), "ARRAY<STRING>");
}
