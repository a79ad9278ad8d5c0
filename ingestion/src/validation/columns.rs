use crate::models::{ColumnDescriptor, ColumnField};
use std::collections::{BTreeMap, HashSet};

pub type RowErrors = BTreeMap<ColumnField, String>;
pub type ColumnErrors = BTreeMap<usize, RowErrors>;

const KEY_ORDERS: std::ops::RangeInclusive<i64> = 1..=5;

/// Running state of one validation pass over the column list.
///
/// The first row holding a mapped name or key order claims it; later rows
/// with the same value are flagged, earlier ones never are.
#[derive(Debug, Default)]
struct SeenValues {
    mapped_names: HashSet<String>,
    key_orders: HashSet<i64>,
}

pub fn validate_columns(columns: &[ColumnDescriptor]) -> ColumnErrors {
    let mut seen = SeenValues::default();
    let mut errors = ColumnErrors::new();

    for (index, column) in columns.iter().enumerate() {
        let row_errors = validate_row(column, &mut seen);
        if !row_errors.is_empty() {
            errors.insert(index, row_errors);
        }
    }

    errors
}

fn validate_row(column: &ColumnDescriptor, seen: &mut SeenValues) -> RowErrors {
    let mut errors = RowErrors::new();

    if column.column_name.trim().is_empty() {
        errors.insert(ColumnField::ColumnName, "Column Name is required".to_string());
    }

    let mapped = column.mapped_column_name.trim();
    if mapped.is_empty() {
        errors.insert(
            ColumnField::MappedColumnName,
            "Mapped Column Name is required".to_string(),
        );
    } else if !seen.mapped_names.insert(mapped.to_string()) {
        errors.insert(
            ColumnField::MappedColumnName,
            "Mapped Column Name must be unique".to_string(),
        );
    }

    if column.data_type.is_none() {
        errors.insert(ColumnField::DataType, "Data Type is required".to_string());
    }

    if column.allow_null.is_none() {
        errors.insert(ColumnField::AllowNull, "Allow Null is required".to_string());
    }

    if column.unique.is_none() {
        errors.insert(ColumnField::Unique, "Unique is required".to_string());
    }

    if let Some(message) = check_key_order(column, seen) {
        errors.insert(ColumnField::CompositeKeyOrder, message.to_string());
    }

    if column.is_date() {
        if column.date_validation.is_none() {
            errors.insert(
                ColumnField::DateValidation,
                "Date Validation is required for Date type".to_string(),
            );
        }
        if column.date_format.as_deref().is_none_or(|f| f.trim().is_empty()) {
            errors.insert(
                ColumnField::DateFormat,
                "Date Format is required for Date type".to_string(),
            );
        }
    }

    if column.is_string() && column.accepts_special_characters() {
        let chars_missing = column
            .special_character
            .as_ref()
            .is_none_or(|sc| sc.chars.is_empty());
        if chars_missing {
            errors.insert(
                ColumnField::SpecialCharacter,
                "Special Character is required when Accept Special Character is True".to_string(),
            );
        }
    }

    errors
}

fn check_key_order(column: &ColumnDescriptor, seen: &mut SeenValues) -> Option<&'static str> {
    let key = column.composite_key.as_ref().filter(|key| key.is_key)?;

    match key.order {
        None | Some(0) => Some("Composite Key Order is required when Composite Key is True"),
        Some(order) if !KEY_ORDERS.contains(&order) => {
            Some("Composite Key Order must be between 1 and 5")
        }
        Some(order) if !seen.key_orders.insert(order) => {
            Some("Composite Key Order must be unique")
        }
        Some(_) => None,
    }
}
