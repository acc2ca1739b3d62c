//! Column factory for turning catalog column rows into typed column models.
//!
//! The factory parses each row's type signature and materializes the parsed
//! tree as scalar, composite (`ROW`), map or multiset columns. A signature that
//! fails to parse never fails the listing: the column degrades to a flat scalar
//! carrying the original type text.

use crate::models::{
    Column, ColumnProps, CompositeColumn, MapColumn, MultiSetColumn, Relation, ScalarColumn,
};
use crate::types::{ParseError, ParsedType, TypeParser};
use tracing::{debug, warn};

/// Build a column, degrading to a flat scalar column if the type does not parse.
pub fn build_column(props: &ColumnProps) -> Column {
    match try_build_column(props) {
        Ok(column) => column,
        Err(e) => {
            warn!(
                relation = %props.relation_name,
                column = %props.name,
                "[ColumnFactory] Failed to parse type '{}': {}. Using unparsed type text.",
                props.full_data_type,
                e
            );
            degraded_column(props)
        }
    }
}

/// Build a column, returning the parse error instead of degrading.
pub fn try_build_column(props: &ColumnProps) -> Result<Column, ParseError> {
    let parsed = TypeParser::parse(&props.full_data_type)?;
    let column = materialize(props, &parsed);
    debug!(
        "[ColumnFactory] Built column '{}' as {} ({} children)",
        column.id(),
        column.simple_type_with_array(),
        column.children().len()
    );
    Ok(column)
}

/// Build every row into a column of one relation, keeping row order.
pub fn build_relation(name: &str, rows: &[ColumnProps]) -> Relation {
    let columns = rows.iter().map(build_column).collect();
    Relation::new(name.to_string(), columns)
}

fn degraded_column(props: &ColumnProps) -> Column {
    let mut column = base_column(props, props.full_data_type.clone());
    column.is_nullable = props.is_nullable.unwrap_or(false);
    column.comment = props.comment.clone();
    Column::Scalar(column)
}

fn base_column(props: &ColumnProps, data_type: String) -> ScalarColumn {
    let mut column = ScalarColumn::new(props.relation_name.clone(), props.name.clone(), data_type);
    column.full_data_type = props.full_data_type.clone();
    column.is_generated = props.is_generated;
    column.is_persisted = props.is_persisted;
    column.is_hidden = props.is_hidden;
    column.distribution_key_number = props.distribution_key_number;
    column.metadata_key = props.metadata_key.clone();
    column
}

fn materialize(props: &ColumnProps, parsed: &ParsedType) -> Column {
    // Arrays are unwrapped in place; members take the innermost element's nullability
    let mut dimensions = 0u32;
    let mut member_nullable = false;
    let mut inner = parsed;
    while let ParsedType::Array { element, .. } = inner {
        dimensions += 1;
        member_nullable = element.nullable();
        inner = element.as_ref();
    }

    let mut column = base_column(props, inner.type_text());
    column.is_nullable = props.is_nullable.unwrap_or_else(|| parsed.nullable());
    column.comment = props
        .comment
        .clone()
        .or_else(|| parsed.comment().map(str::to_string));
    column.is_array = dimensions > 0;
    column.array_dimensions = dimensions;
    column.is_array_member_nullable = member_nullable;

    let child_relation = format!("{}.{}", props.relation_name, props.name);
    match inner {
        ParsedType::Primitive { .. } | ParsedType::Array { .. } => Column::Scalar(column),
        ParsedType::Row { fields, .. } => {
            let columns = fields
                .iter()
                .map(|field| {
                    let mut field_props =
                        ColumnProps::new(&child_relation, &field.name, &field.type_text());
                    field_props.is_nullable = Some(field.nullable);
                    field_props.comment = field.comment.clone();
                    materialize(&field_props, &field.field_type)
                })
                .collect();
            Column::Composite(CompositeColumn { column, columns })
        }
        ParsedType::Map { key, value, .. } => Column::Map(MapColumn {
            key: Box::new(materialize_synthetic(&child_relation, "key", key)),
            value: Box::new(materialize_synthetic(&child_relation, "value", value)),
            column,
        }),
        ParsedType::MultiSet { element, .. } => Column::MultiSet(MultiSetColumn {
            element: Box::new(materialize_synthetic(&child_relation, "element", element)),
            column,
        }),
    }
}

/// Materialize an unnamed sub-type (map key/value, multiset element) under a fixed name.
fn materialize_synthetic(relation_name: &str, name: &str, parsed: &ParsedType) -> Column {
    let props = ColumnProps::new(relation_name, name, parsed.type_text());
    materialize(&props, parsed)
}
