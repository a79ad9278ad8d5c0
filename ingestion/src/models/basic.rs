use serde::{Deserialize, Serialize};

/// File-level metadata entered on the basic panel of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicMetadata {
    pub dept_name: String,
    pub file_name: String,
    pub project_name: String,
    pub index_name: String,
    pub composite_key_separator: String,
}

/// Keys of the basic-metadata error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BasicField {
    DeptName,
    FileName,
    ProjectName,
    IndexName,
    CompositeKeySeparator,
}

impl BasicField {
    pub const ALL: [BasicField; 5] = [
        BasicField::DeptName,
        BasicField::FileName,
        BasicField::ProjectName,
        BasicField::IndexName,
        BasicField::CompositeKeySeparator,
    ];

    /// Human label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DeptName => "Department Name",
            Self::FileName => "File Name",
            Self::ProjectName => "Project Name",
            Self::IndexName => "Target Index Name",
            Self::CompositeKeySeparator => "Composite Key Separator",
        }
    }
}

impl BasicMetadata {
    pub fn get(&self, field: BasicField) -> &str {
        match field {
            BasicField::DeptName => &self.dept_name,
            BasicField::FileName => &self.file_name,
            BasicField::ProjectName => &self.project_name,
            BasicField::IndexName => &self.index_name,
            BasicField::CompositeKeySeparator => &self.composite_key_separator,
        }
    }

    /// Copy with every field trimmed, as written into the document.
    pub fn trimmed(&self) -> Self {
        Self {
            dept_name: self.dept_name.trim().to_string(),
            file_name: self.file_name.trim().to_string(),
            project_name: self.project_name.trim().to_string(),
            index_name: self.index_name.trim().to_string(),
            composite_key_separator: self.composite_key_separator.trim().to_string(),
        }
    }
}
