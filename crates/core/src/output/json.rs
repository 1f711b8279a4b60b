//! JSON output formatter

use super::FormatError;
use crate::models::OrganizedModel;

/// Format an organized model as pretty-printed JSON
pub fn to_json(model: &OrganizedModel) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(model)?)
}

/// Format an organized model as compact JSON
pub fn to_json_compact(model: &OrganizedModel) -> Result<String, FormatError> {
    Ok(serde_json::to_string(model)?)
}
