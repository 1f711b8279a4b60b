//! Configuration for organizing runs

use crate::sort::{SortStrategy, Sorter};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Options controlling one organizing run
#[derive(Debug, Clone)]
pub struct OrganizeConfig {
    /// Ordered sort strategy list applied to container children
    pub sort: Vec<SortStrategy>,
    /// Group name order; unlisted names take the "*" position
    pub group_order: Vec<String>,
    /// Category name order; unlisted names take the "*" position
    pub category_order: Vec<String>,
    /// Category assigned to entities without "@category" tags; empty
    /// disables the fallback
    pub default_category: String,
    /// Attach categories to each group instead of the container
    pub categorize_by_group: bool,
    /// Sort containers whose children are all entry-point modules
    pub sort_entry_points: bool,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            sort: Sorter::default_strategies(),
            group_order: Vec::new(),
            category_order: Vec::new(),
            default_category: "Other".to_string(),
            categorize_by_group: true,
            sort_entry_points: true,
        }
    }
}

impl OrganizeConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort strategy list (builder pattern)
    pub fn with_sort(mut self, sort: Vec<SortStrategy>) -> Self {
        self.sort = sort;
        self
    }

    /// Set the group order list (builder pattern)
    pub fn with_group_order(mut self, order: Vec<String>) -> Self {
        self.group_order = order;
        self
    }

    /// Set the category order list (builder pattern)
    pub fn with_category_order(mut self, order: Vec<String>) -> Self {
        self.category_order = order;
        self
    }

    /// Set the default category name (builder pattern)
    pub fn with_default_category(mut self, name: impl Into<String>) -> Self {
        self.default_category = name.into();
        self
    }

    /// Set category placement (builder pattern)
    pub fn with_categorize_by_group(mut self, by_group: bool) -> Self {
        self.categorize_by_group = by_group;
        self
    }

    /// Set entry-point sorting (builder pattern)
    pub fn with_sort_entry_points(mut self, sort: bool) -> Self {
        self.sort_entry_points = sort;
        self
    }

    /// Load options from a TOML file, filling unset keys with defaults
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&text)?;
        Ok(file.into_config())
    }
}

/// Serde view of the options file; every key is optional
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    sort: Option<Vec<SortStrategy>>,
    group_order: Option<Vec<String>>,
    category_order: Option<Vec<String>>,
    default_category: Option<String>,
    categorize_by_group: Option<bool>,
    sort_entry_points: Option<bool>,
}

impl ConfigFile {
    fn into_config(self) -> OrganizeConfig {
        let defaults = OrganizeConfig::default();
        OrganizeConfig {
            sort: self.sort.unwrap_or(defaults.sort),
            group_order: self.group_order.unwrap_or(defaults.group_order),
            category_order: self.category_order.unwrap_or(defaults.category_order),
            default_category: self.default_category.unwrap_or(defaults.default_category),
            categorize_by_group: self
                .categorize_by_group
                .unwrap_or(defaults.categorize_by_group),
            sort_entry_points: self.sort_entry_points.unwrap_or(defaults.sort_entry_points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = OrganizeConfig::default();
        assert_eq!(config.sort, Sorter::default_strategies());
        assert!(config.group_order.is_empty());
        assert_eq!(config.default_category, "Other");
        assert!(config.categorize_by_group);
        assert!(config.sort_entry_points);
    }

    #[test]
    fn test_builder_methods() {
        let config = OrganizeConfig::new()
            .with_sort(vec![SortStrategy::Alphabetical])
            .with_group_order(vec!["Errors".to_string(), "*".to_string()])
            .with_default_category("General")
            .with_categorize_by_group(false)
            .with_sort_entry_points(false);

        assert_eq!(config.sort, vec![SortStrategy::Alphabetical]);
        assert_eq!(config.group_order, vec!["Errors", "*"]);
        assert_eq!(config.default_category, "General");
        assert!(!config.categorize_by_group);
        assert!(!config.sort_entry_points);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docgroup.toml");
        fs::write(
            &path,
            r#"
sort = ["alphabetical", "kind"]
group_order = ["Utilities", "*"]
default_category = "General"
categorize_by_group = false
"#,
        )
        .unwrap();

        let config = OrganizeConfig::from_toml_file(&path).unwrap();
        assert_eq!(
            config.sort,
            vec![SortStrategy::Alphabetical, SortStrategy::Kind]
        );
        assert_eq!(config.group_order, vec!["Utilities", "*"]);
        assert_eq!(config.default_category, "General");
        assert!(!config.categorize_by_group);
        // unset keys keep defaults
        assert!(config.sort_entry_points);
        assert!(config.category_order.is_empty());
    }

    #[test]
    fn test_from_toml_file_missing() {
        let result = OrganizeConfig::from_toml_file(Path::new("/nonexistent/docgroup.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_from_toml_file_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "sort = [not valid").unwrap();

        let result = OrganizeConfig::from_toml_file(&path);
        assert!(matches!(result, Err(ConfigError::TomlError(_))));
    }
}
