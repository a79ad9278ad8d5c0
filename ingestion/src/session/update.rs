use crate::models::{
    BasicField, BasicMetadata, ColumnDescriptor, ColumnField, CompositeKey, DataType,
    SpecialCharacter,
};

/// An edit to one basic-metadata field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasicUpdate {
    DeptName(String),
    FileName(String),
    ProjectName(String),
    IndexName(String),
    CompositeKeySeparator(String),
}

impl BasicUpdate {
    pub fn field(&self) -> BasicField {
        match self {
            Self::DeptName(_) => BasicField::DeptName,
            Self::FileName(_) => BasicField::FileName,
            Self::ProjectName(_) => BasicField::ProjectName,
            Self::IndexName(_) => BasicField::IndexName,
            Self::CompositeKeySeparator(_) => BasicField::CompositeKeySeparator,
        }
    }

    pub fn apply(self, basic: &mut BasicMetadata) {
        match self {
            Self::DeptName(v) => basic.dept_name = v,
            Self::FileName(v) => basic.file_name = v,
            Self::ProjectName(v) => basic.project_name = v,
            Self::IndexName(v) => basic.index_name = v,
            Self::CompositeKeySeparator(v) => basic.composite_key_separator = v,
        }
    }
}

/// An edit to one cell of a column row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnUpdate {
    ColumnName(String),
    MappedColumnName(String),
    DataType(DataType),
    AllowNull(bool),
    Unique(bool),
    /// Toggles composite-key membership.
    CompositeKey(bool),
    /// Picking an order marks the column as a key.
    CompositeKeyOrder(Option<i64>),
    DateValidation(bool),
    DateFormat(String),
    AcceptSpecialCharacter(bool),
    /// Entering characters turns acceptance on.
    SpecialCharacters(Vec<char>),
}

impl ColumnUpdate {
    /// The error entry this edit supersedes.
    pub fn field(&self) -> ColumnField {
        match self {
            Self::ColumnName(_) => ColumnField::ColumnName,
            Self::MappedColumnName(_) => ColumnField::MappedColumnName,
            Self::DataType(_) => ColumnField::DataType,
            Self::AllowNull(_) => ColumnField::AllowNull,
            Self::Unique(_) => ColumnField::Unique,
            Self::CompositeKey(_) | Self::CompositeKeyOrder(_) => ColumnField::CompositeKeyOrder,
            Self::DateValidation(_) => ColumnField::DateValidation,
            Self::DateFormat(_) => ColumnField::DateFormat,
            Self::AcceptSpecialCharacter(_) | Self::SpecialCharacters(_) => {
                ColumnField::SpecialCharacter
            }
        }
    }

    /// Writes the value, then applies the resets the new state implies.
    pub fn apply(self, column: &mut ColumnDescriptor) {
        match self {
            Self::ColumnName(v) => column.column_name = v,
            Self::MappedColumnName(v) => column.mapped_column_name = v,
            Self::DataType(data_type) => {
                column.data_type = Some(data_type);
                reset_for_data_type(column, data_type);
            }
            Self::AllowNull(v) => column.allow_null = Some(v),
            Self::Unique(v) => column.unique = Some(v),
            Self::CompositeKey(is_key) => {
                let key = column.composite_key.get_or_insert_with(CompositeKey::default);
                key.is_key = is_key;
                if !is_key {
                    key.order = None;
                }
            }
            Self::CompositeKeyOrder(order) => {
                column.composite_key = Some(CompositeKey {
                    is_key: true,
                    order,
                });
            }
            Self::DateValidation(v) => column.date_validation = Some(v),
            Self::DateFormat(v) => column.date_format = Some(v),
            Self::AcceptSpecialCharacter(accept) => {
                let sc = column
                    .special_character
                    .get_or_insert_with(SpecialCharacter::default);
                sc.accept = accept;
                if !accept {
                    sc.chars.clear();
                }
            }
            Self::SpecialCharacters(chars) => {
                column.special_character = Some(SpecialCharacter {
                    accept: true,
                    chars,
                });
            }
        }
    }
}

/// Type-dependent fields that do not survive a change of data type.
fn reset_for_data_type(column: &mut ColumnDescriptor, data_type: DataType) {
    if data_type != DataType::Date {
        column.date_validation = None;
        column.date_format = None;
    }
    if data_type != DataType::String {
        column.special_character = Some(SpecialCharacter::default());
    }
}
