mod basic;
mod column;
mod document;

pub use basic::{BasicField, BasicMetadata};
pub use column::{ColumnDescriptor, ColumnField, CompositeKey, DataType, SpecialCharacter};
pub use document::{ColumnConfiguration, ConfigurationDocument, FileConfiguration};

use serde::{Deserialize, Serialize};

/// Snapshot of the whole form, as handed from the host to the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub basic: BasicMetadata,
    pub columns: Vec<ColumnDescriptor>,
}
