//! docgroup_core - Core library for documentation model organization
//!
//! Takes an entity tree produced by an external builder phase and prepares
//! it for rendering: sorts each container's children, partitions them into
//! named groups driven by "@group" tags with kind-label fallbacks, buckets
//! them into categories driven by "@category" tags, and reduces member
//! flags into per-group aggregates a renderer can use to collapse or badge
//! whole sections.
//!
//! # Features
//!
//! - Guarded, idempotent resolution driver with two entry points
//! - Twelve chainable sort strategies with a stable tiebreak
//! - Marker-tag extraction that consumes tags out of rendered comments
//! - Group and category ordering with "*" wildcard placement
//! - JSON, YAML, ANSI, and summary output formats
//!
//! # Example
//!
//! ```rust
//! use docgroup_core::{organize_model, Entity, EntityKind, OrganizeConfig};
//!
//! let mut project = Entity::new("demo", EntityKind::Project);
//! project.children.push(Entity::new("Widget", EntityKind::Class));
//! project.children.push(Entity::new("render", EntityKind::Function));
//!
//! let organized = organize_model(project, OrganizeConfig::default());
//! assert_eq!(organized.project.groups.len(), 2);
//! assert_eq!(organized.project.groups[0].name, "Classes");
//! ```

pub mod categories;
pub mod config;
pub mod driver;
pub mod groups;
pub mod kinds;
pub mod models;
pub mod output;
pub mod sort;
pub mod tags;

// Re-export main types for convenience
pub use config::{ConfigError, OrganizeConfig};
pub use driver::{organize_model, Resolver};
pub use kinds::KindNamer;
pub use models::{
    BlockTag, Category, Comment, Entity, EntityFlags, EntityKind, EntityVariant, Group,
    ModelError, OrganizeMetadata, OrganizeStats, OrganizedModel, SourceRef,
};
pub use output::{format_output, format_summary, FormatError, OutputFormat};
pub use sort::{SortStrategy, Sorter};
pub use tags::{CATEGORY_TAG, GROUP_TAG};
