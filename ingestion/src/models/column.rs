use serde::{Deserialize, Serialize};
use std::fmt;

/// Target type of a mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    String,
    Integer,
    Date,
    Boolean,
    Keyword,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Date => "Date",
            Self::Boolean => "Boolean",
            Self::Keyword => "Keyword",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeKey {
    #[serde(default)]
    pub is_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialCharacter {
    pub accept: bool,
    pub chars: Vec<char>,
}

/// One row of the column mapping table as the host holds it.
///
/// Everything the operator picks from a True/False or type selector is an
/// `Option` here: an unanswered selector is a validation error, not `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    #[serde(default)]
    pub column_name: String,
    #[serde(default)]
    pub mapped_column_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_null: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_key: Option<CompositeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_character: Option<SpecialCharacter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_validation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl ColumnDescriptor {
    /// A freshly added row: String typed, both flags false, no key, no
    /// special characters.
    pub fn new_row() -> Self {
        Self {
            data_type: Some(DataType::String),
            allow_null: Some(false),
            unique: Some(false),
            composite_key: Some(CompositeKey::default()),
            special_character: Some(SpecialCharacter::default()),
            ..Default::default()
        }
    }

    pub fn is_date(&self) -> bool {
        self.data_type == Some(DataType::Date)
    }

    pub fn is_string(&self) -> bool {
        self.data_type == Some(DataType::String)
    }

    pub fn is_composite_key(&self) -> bool {
        self.composite_key.as_ref().is_some_and(|key| key.is_key)
    }

    pub fn accepts_special_characters(&self) -> bool {
        self.special_character.as_ref().is_some_and(|sc| sc.accept)
    }
}

/// Keys of a row's error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnField {
    ColumnName,
    MappedColumnName,
    DataType,
    AllowNull,
    Unique,
    CompositeKeyOrder,
    DateValidation,
    DateFormat,
    SpecialCharacter,
}
