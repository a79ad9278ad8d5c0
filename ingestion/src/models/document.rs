// document.rs
use super::column::{CompositeKey, DataType, SpecialCharacter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationDocument {
    pub id: String,
    pub created_by: String,
    pub created_date: String,
    pub file_configurations: Vec<FileConfiguration>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileConfiguration {
    pub dept_name: String,
    pub file_name: String,
    pub project_name: String,
    pub index_name: String,
    pub composite_key_separator: String,
    pub column_configurations: Vec<ColumnConfiguration>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfiguration {
    pub column_name: String,
    pub mapped_column_name: String,
    pub data_type: DataType,
    pub allow_null: bool,
    pub unique: bool,
    pub composite_key: CompositeKey,
    pub special_character: SpecialCharacter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_validation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}
