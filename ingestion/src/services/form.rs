use crate::models::FormState;
use common::Result;
use std::fs;
use tracing::debug;

/// Reads a form snapshot (`{"basic": {...}, "columns": [...]}`) from disk.
pub fn load_form_state(path: &str) -> Result<FormState> {
    let raw = fs::read_to_string(path)?;
    let state: FormState = serde_json::from_str(&raw)?;

    debug!(path, columns = state.columns.len(), "Loaded form state");
    Ok(state)
}
