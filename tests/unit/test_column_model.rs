#[cfg(test)]
mod tests {
    use flink_catalog_types::models::{Column, ColumnProps, CompositeColumn, ScalarColumn};
    use flink_catalog_types::services::build_column;

    #[test]
    fn test_scalar_column_creation() {
        let column = ScalarColumn::new(
            "users".to_string(),
            "name".to_string(),
            "VARCHAR(2147483647)".to_string(),
        );

        assert_eq!(column.id(), "users.name");
        assert_eq!(column.full_data_type, "VARCHAR(2147483647)");
        assert_eq!(column.simple_data_type(), "VARCHAR");
        assert!(!column.is_nullable);
        assert!(!column.is_array);
        assert_eq!(column.array_dimensions, 0);
    }

    #[test]
    fn test_composite_column_serialization() {
        let column = build_column(&ColumnProps::new(
            "users",
            "address",
            "ROW<`street` STRING, `zip` CHAR(5) NULL> 'postal'",
        ));

        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["kind"], "composite");
        assert_eq!(json["name"], "address");
        assert_eq!(json["comment"], "postal");
        assert_eq!(json["columns"][1]["name"], "zip");
        assert_eq!(json["columns"][1]["is_nullable"], true);
        assert_eq!(json["columns"][1]["relation_name"], "users.address");
    }

    #[test]
    fn test_column_deserialization() {
        let json = r#"{
            "kind": "composite",
            "relation_name": "users",
            "name": "address",
            "full_data_type": "ROW<`street` STRING>",
            "data_type": "ROW<`street` STRING>",
            "columns": [
                {
                    "kind": "scalar",
                    "relation_name": "users.address",
                    "name": "street",
                    "full_data_type": "STRING",
                    "data_type": "STRING"
                }
            ]
        }"#;

        let column: Column = serde_json::from_str(json).unwrap();
        let Column::Composite(CompositeColumn { column: info, columns }) = &column else {
            panic!("expected composite column");
        };
        assert_eq!(info.name, "address");
        assert!(!info.is_nullable);
        assert_eq!(columns.len(), 1);
        assert_eq!(column.child("street").unwrap().id(), "users.address.street");
    }

    #[test]
    fn test_tooltip_line_uses_array_type() {
        let column = build_column(&ColumnProps::new("events", "tags", "ARRAY<VARCHAR(2147483647)> NULL"));
        assert_eq!(column.tooltip_line(), "tags: ARRAY<VARCHAR> NULL");
    }

    #[test]
    fn test_tooltip_line_for_composite_types() {
        let column = build_column(&ColumnProps::new("events", "attrs", "MAP<STRING, STRING>"));
        assert_eq!(column.tooltip_line(), "attrs: MAP NOT NULL");

        let column = build_column(&ColumnProps::new("events", "points", "ARRAY<ROW<`x` INT>>"));
        assert_eq!(column.tooltip_line(), "points: ARRAY<ROW> NOT NULL");
    }

    #[test]
    fn test_children_of_scalar_are_empty() {
        let column = build_column(&ColumnProps::new("events", "id", "BIGINT"));
        assert!(column.children().is_empty());
        assert!(column.child("anything").is_none());
    }
}
