//! JSON Schema of the report document.
//!
//! Generated from [`ReportDocument`] with [`schemars::schema_for!`] and
//! validated with `jsonschema`.

use schemars::schema_for;

use crate::error::ReportError;
use crate::json::ReportDocument;

/// The report document schema as a JSON value.
///
/// # Errors
///
/// Returns [`ReportError::Serialize`] if the generated schema cannot be
/// converted to JSON.
pub fn report_schema() -> Result<serde_json::Value, ReportError> {
    Ok(serde_json::to_value(schema_for!(ReportDocument))?)
}

/// Validate a JSON value against the report schema.
///
/// # Errors
///
/// Returns [`ReportError::Schema`] if the schema does not compile, or
/// [`ReportError::ValidationFailed`] listing every violation.
pub fn validate_report(instance: &serde_json::Value) -> Result<(), ReportError> {
    let schema = report_schema()?;
    let validator =
        jsonschema::validator_for(&schema).map_err(|e| ReportError::Schema(e.to_string()))?;

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ReportError::ValidationFailed { errors })
    }
}
