//! Output formatting
//!
//! Formatters for organized models: JSON and YAML for programmatic use, an
//! ANSI-colored group listing for terminals, and a plain text summary.

pub mod ansi;
mod json;
mod yaml;

pub use ansi::format_ansi;
pub use json::{to_json, to_json_compact};
pub use yaml::to_yaml;

use crate::models::OrganizedModel;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
    /// ANSI-colored group listing
    Ansi,
    /// Plain text summary
    Summary,
}

/// Format an organized model in the specified format
pub fn format_output(model: &OrganizedModel, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => to_json(model),
        OutputFormat::Yaml => to_yaml(model),
        OutputFormat::Ansi => Ok(format_ansi(model)),
        OutputFormat::Summary => Ok(format_summary(model)),
    }
}

/// Format a human-readable run summary
pub fn format_summary(model: &OrganizedModel) -> String {
    let mut output = String::new();

    output.push_str("Organize Results\n");
    output.push_str("================\n\n");

    output.push_str(&format!("Project: {}\n", model.project.name));
    output.push_str(&format!("Entities Visited: {}\n", model.stats.entities_visited));
    output.push_str(&format!(
        "Containers Grouped: {}\n",
        model.stats.containers_grouped
    ));
    output.push_str(&format!("Groups Created: {}\n", model.stats.groups_created));
    output.push_str(&format!(
        "Categories Created: {}\n",
        model.stats.categories_created
    ));
    output.push_str(&format!(
        "Tags Consumed: {} group, {} category\n",
        model.stats.group_tags_consumed, model.stats.category_tags_consumed
    ));
    output.push_str(&format!("Sort Passes: {}\n", model.stats.sort_passes));

    if !model.project.groups.is_empty() {
        output.push_str("\nTop-Level Groups:\n");
        for group in &model.project.groups {
            output.push_str(&format!(
                "  {} ({} members)",
                group.name,
                group.members.len()
            ));
            let mut marks = Vec::new();
            if group.all_children_are_inherited {
                marks.push("inherited");
            }
            if group.all_children_are_private {
                marks.push("private");
            } else if group.all_children_are_protected_or_private {
                marks.push("protected");
            }
            if group.all_children_are_external {
                marks.push("external");
            }
            if !marks.is_empty() {
                output.push_str(&format!(" [{}]", marks.join(", ")));
            }
            output.push('\n');
        }
    }

    output.push_str(&format!(
        "\nOrganize Duration: {}ms\n",
        model.metadata.organize_duration_ms
    ));
    output.push_str(&format!(
        "Processing Speed: {:.2} entities/sec\n",
        model.metadata.entities_per_second
    ));

    output
}
