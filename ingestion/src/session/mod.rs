mod update;

pub use update::{BasicUpdate, ColumnUpdate};

use crate::document::DocumentBuilder;
use crate::models::{BasicMetadata, ColumnDescriptor, ConfigurationDocument, FormState};
use crate::utils::paths::{artifact_name, draft_artifact_name};
use crate::validation::{self, BasicErrors, ColumnErrors, ValidationReport};
use common::{Error, Result};
use serde::Serialize;
use tracing::{info, warn};

pub const INVALID_FORM_MESSAGE: &str = "Please fix all validation errors before saving.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message for the operator after a form action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.to_string(),
        }
    }

    pub fn from_error(err: &Error) -> Self {
        if err.is_user_facing() {
            Self::error(&err.to_string())
        } else {
            Self::error("Failed to generate configuration. Please try again.")
        }
    }
}

/// A built document together with the file name it should be emitted under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub name: String,
    pub document: ConfigurationDocument,
    #[serde(skip)]
    pub notice: Notice,
}

/// Mutable form state owned by the host, plus the errors of the last save.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    basic: BasicMetadata,
    columns: Vec<ColumnDescriptor>,
    basic_errors: BasicErrors,
    column_errors: ColumnErrors,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: FormState) -> Self {
        Self {
            basic: state.basic,
            columns: state.columns,
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> FormState {
        FormState {
            basic: self.basic.clone(),
            columns: self.columns.clone(),
        }
    }

    pub fn basic(&self) -> &BasicMetadata {
        &self.basic
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn basic_errors(&self) -> &BasicErrors {
        &self.basic_errors
    }

    pub fn column_errors(&self) -> &ColumnErrors {
        &self.column_errors
    }

    pub fn update_basic(&mut self, update: BasicUpdate) {
        self.basic_errors.remove(&update.field());
        update.apply(&mut self.basic);
    }

    /// Appends a default row and returns its index.
    pub fn add_column(&mut self) -> usize {
        self.columns.push(ColumnDescriptor::new_row());
        self.columns.len() - 1
    }

    pub fn update_column(&mut self, index: usize, update: ColumnUpdate) -> Result<()> {
        let column = self.columns.get_mut(index).ok_or_else(|| row_out_of_range(index))?;

        let field = update.field();
        update.apply(column);

        if let Some(row_errors) = self.column_errors.get_mut(&index) {
            row_errors.remove(&field);
            if row_errors.is_empty() {
                self.column_errors.remove(&index);
            }
        }

        Ok(())
    }

    /// Removes a row. Errors of later rows move up with them.
    pub fn delete_column(&mut self, index: usize) -> Result<ColumnDescriptor> {
        if index >= self.columns.len() {
            return Err(row_out_of_range(index));
        }
        let removed = self.columns.remove(index);

        self.column_errors = std::mem::take(&mut self.column_errors)
            .into_iter()
            .filter(|(row, _)| *row != index)
            .map(|(row, errors)| if row > index { (row - 1, errors) } else { (row, errors) })
            .collect();

        Ok(removed)
    }

    /// Runs the validator over the current state and keeps the result.
    pub fn validate(&mut self) -> ValidationReport {
        let report = validation::validate(&self.basic, &self.columns);
        self.basic_errors = report.basic_errors.clone();
        self.column_errors = report.column_errors.clone();
        report
    }

    pub fn save(&mut self, builder: &DocumentBuilder, created_by: Option<&str>) -> Result<Artifact> {
        let report = self.validate();
        if !report.is_valid() {
            warn!(errors = report.error_count(), "Save rejected: form has validation errors");
            return Err(Error::Validation(INVALID_FORM_MESSAGE.to_string()));
        }

        if self.columns.is_empty() {
            warn!("Save rejected: no column configurations");
            return Err(Error::EmptyConfiguration);
        }

        let document = builder.build(&self.basic, &self.columns, created_by);
        let name = artifact_name(&self.basic.file_name);
        info!(artifact = %name, id = %document.id, "Configuration saved");

        Ok(Artifact {
            name,
            document,
            notice: Notice::success("Configuration saved successfully!"),
        })
    }

    /// Builds whatever is in the form, valid or not.
    pub fn save_draft(&self, builder: &DocumentBuilder, created_by: Option<&str>) -> Artifact {
        let document = builder.build(&self.basic, &self.columns, created_by);
        let name = draft_artifact_name(&self.basic.file_name);
        info!(artifact = %name, id = %document.id, "Draft saved");

        Artifact {
            name,
            document,
            notice: Notice::success("Draft saved successfully!"),
        }
    }

    /// Drops every edit and error.
    pub fn discard(&mut self) -> Notice {
        *self = Self::default();
        Notice::success("Changes discarded.")
    }
}

fn row_out_of_range(index: usize) -> Error {
    Error::InvalidInput(format!("No column row at index {}", index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColumnField, DataType};

    fn filled_session() -> FormSession {
        let mut session = FormSession::new();
        session.update_basic(BasicUpdate::DeptName("Finance".to_string()));
        session.update_basic(BasicUpdate::FileName("trades.csv".to_string()));
        session.update_basic(BasicUpdate::ProjectName("Proj1".to_string()));
        session.update_basic(BasicUpdate::IndexName("trades_idx".to_string()));
        session.update_basic(BasicUpdate::CompositeKeySeparator("|".to_string()));
        session
    }

    fn add_named(session: &mut FormSession, name: &str, mapped: &str) -> usize {
        let index = session.add_column();
        session
            .update_column(index, ColumnUpdate::ColumnName(name.to_string()))
            .unwrap();
        session
            .update_column(index, ColumnUpdate::MappedColumnName(mapped.to_string()))
            .unwrap();
        index
    }

    #[test]
    fn test_save_rejects_empty_column_list() {
        let mut session = filled_session();
        let err = session.save(&DocumentBuilder::default(), None).unwrap_err();

        assert!(matches!(err, Error::EmptyConfiguration));
        assert_eq!(
            Notice::from_error(&err).message,
            "Please add at least one column configuration."
        );
    }

    #[test]
    fn test_save_rejects_invalid_form_and_keeps_errors() {
        let mut session = filled_session();
        add_named(&mut session, "a", "id");
        add_named(&mut session, "b", "id");

        let err = session.save(&DocumentBuilder::default(), None).unwrap_err();
        assert_eq!(err.to_string(), INVALID_FORM_MESSAGE);
        assert!(session.column_errors()[&1].contains_key(&ColumnField::MappedColumnName));
    }

    #[test]
    fn test_save_names_artifact_after_file() {
        let mut session = filled_session();
        add_named(&mut session, "acct_id", "account_id");

        let artifact = session.save(&DocumentBuilder::default(), Some("ops")).unwrap();
        assert_eq!(artifact.name, "trades_config.json");
        assert_eq!(artifact.document.created_by, "ops");
        assert_eq!(artifact.notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_draft_skips_validation() {
        let session = FormSession::new();
        let artifact = session.save_draft(&DocumentBuilder::default(), None);

        assert_eq!(artifact.name, "draft_config.json");
        assert!(artifact.document.file_configurations[0].column_configurations.is_empty());
    }

    #[test]
    fn test_draft_keeps_full_file_name() {
        let session = filled_session();
        let artifact = session.save_draft(&DocumentBuilder::default(), None);
        assert_eq!(artifact.name, "trades.csv_config.json");
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut session = FormSession::new();
        session.validate();
        assert!(session.basic_errors().contains_key(&crate::models::BasicField::DeptName));

        session.update_basic(BasicUpdate::DeptName("Finance".to_string()));
        assert!(!session.basic_errors().contains_key(&crate::models::BasicField::DeptName));
        assert!(session.basic_errors().contains_key(&crate::models::BasicField::FileName));
    }

    #[test]
    fn test_editing_last_row_error_drops_row_entry() {
        let mut session = filled_session();
        add_named(&mut session, "a", "id");
        add_named(&mut session, "b", "id");
        session.validate();
        assert!(session.column_errors().contains_key(&1));

        session
            .update_column(1, ColumnUpdate::MappedColumnName("other".to_string()))
            .unwrap();
        assert!(!session.column_errors().contains_key(&1));
    }

    #[test]
    fn test_delete_reindexes_later_errors() {
        let mut session = filled_session();
        session.add_column();
        add_named(&mut session, "b", "b");
        session.add_column();
        session.validate();
        assert_eq!(session.column_errors().keys().copied().collect::<Vec<_>>(), vec![0, 2]);

        session.delete_column(0).unwrap();
        assert_eq!(session.columns().len(), 2);
        assert_eq!(session.column_errors().keys().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_out_of_range_row() {
        let mut session = FormSession::new();
        assert!(matches!(
            session.update_column(0, ColumnUpdate::Unique(true)),
            Err(Error::InvalidInput(_))
        ));
        assert!(session.delete_column(3).is_err());
    }

    #[test]
    fn test_type_switch_resets_dependent_fields() {
        let mut session = filled_session();
        let index = add_named(&mut session, "d", "d");
        session
            .update_column(index, ColumnUpdate::DataType(DataType::Date))
            .unwrap();
        session
            .update_column(index, ColumnUpdate::DateFormat("%d/%m/%Y".to_string()))
            .unwrap();
        session
            .update_column(index, ColumnUpdate::DataType(DataType::Integer))
            .unwrap();

        let column = &session.columns()[index];
        assert!(column.date_format.is_none());
        assert!(!column.accepts_special_characters());
    }

    #[test]
    fn test_discard_resets_everything() {
        let mut session = filled_session();
        session.add_column();
        session.validate();

        let notice = session.discard();
        assert_eq!(notice.message, "Changes discarded.");
        assert_eq!(session.snapshot(), FormState::default());
        assert!(session.column_errors().is_empty());
    }
}
