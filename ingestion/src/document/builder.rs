use super::id::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::models::{
    BasicMetadata, ColumnConfiguration, ColumnDescriptor, CompositeKey, ConfigurationDocument,
    DataType, FileConfiguration,
};
use chrono::SecondsFormat;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_CREATED_BY: &str = "System";

/// Turns a validated form snapshot into the document written to disk.
///
/// The builder does not re-validate. Invalid input still yields a
/// well-formed document, but its content is not meaningful.
#[derive(Clone)]
pub struct DocumentBuilder {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator), Arc::new(SystemClock))
    }
}

impl DocumentBuilder {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    pub fn build(
        &self,
        basic: &BasicMetadata,
        columns: &[ColumnDescriptor],
        created_by: Option<&str>,
    ) -> ConfigurationDocument {
        let document = ConfigurationDocument {
            id: self.ids.generate(),
            created_by: created_by
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(DEFAULT_CREATED_BY)
                .to_string(),
            created_date: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            file_configurations: vec![file_configuration(basic, columns)],
        };

        debug!(
            id = %document.id,
            columns = columns.len(),
            "Built configuration document"
        );

        document
    }
}

pub fn file_configuration(
    basic: &BasicMetadata,
    columns: &[ColumnDescriptor],
) -> FileConfiguration {
    let basic = basic.trimmed();
    FileConfiguration {
        dept_name: basic.dept_name,
        file_name: basic.file_name,
        project_name: basic.project_name,
        index_name: basic.index_name,
        composite_key_separator: basic.composite_key_separator,
        column_configurations: columns.iter().map(column_configuration).collect(),
    }
}

pub fn column_configuration(column: &ColumnDescriptor) -> ColumnConfiguration {
    let data_type = column.data_type.unwrap_or(DataType::String);

    // A stale order on a non-key column is dropped.
    let composite_key = match &column.composite_key {
        Some(key) if key.is_key => CompositeKey {
            is_key: true,
            order: key.order,
        },
        _ => CompositeKey::default(),
    };

    // Copied as stored, chars included, whatever `accept` says.
    let special_character = column.special_character.clone().unwrap_or_default();

    let (date_validation, date_format) = if data_type == DataType::Date {
        (
            column.date_validation,
            column
                .date_format
                .as_deref()
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        )
    } else {
        (None, None)
    };

    ColumnConfiguration {
        column_name: column.column_name.trim().to_string(),
        mapped_column_name: column.mapped_column_name.trim().to_string(),
        data_type,
        allow_null: column.allow_null.unwrap_or(false),
        unique: column.unique.unwrap_or(false),
        composite_key,
        special_character,
        date_validation,
        date_format,
    }
}
