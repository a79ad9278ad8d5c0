pub mod document;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;
pub mod validation;

use common::config::Settings;
use common::Result;
use document::DocumentBuilder;
use services::{load_form_state, write_artifact};
use session::{FormSession, Notice};
use std::path::PathBuf;
use validation::ValidationReport;

/// Validates a form snapshot file without writing anything.
pub fn run_validate(form_path: &str) -> Result<ValidationReport> {
    let state = load_form_state(form_path)?;
    Ok(validation::validate(&state.basic, &state.columns))
}

/// Where a saved document landed and what to tell the operator.
#[derive(Debug, Clone)]
pub struct SavedDocument {
    pub path: PathBuf,
    pub notice: Notice,
}

/// Loads a form snapshot, saves it (or a draft) and writes the document.
pub fn run_save(settings: &Settings, form_path: &str, draft: bool) -> Result<SavedDocument> {
    let state = load_form_state(form_path)?;
    let mut session = FormSession::from_state(state);
    let builder = DocumentBuilder::default();
    let created_by = settings.created_by.as_deref();

    let artifact = if draft {
        session.save_draft(&builder, created_by)
    } else {
        session.save(&builder, created_by)?
    };

    let path = write_artifact(&settings.output_dir, &artifact)?;

    Ok(SavedDocument {
        path,
        notice: artifact.notice,
    })
}
