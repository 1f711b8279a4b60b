//! Data models for documentation organization
//!
//! Defines the entity tree handed over by an external builder phase, the
//! group and category structures computed during organization, and the
//! stats/metadata envelope emitted with results.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a documentation model
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Syntactic category of a documented entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Module,
    Namespace,
    Enum,
    EnumMember,
    Variable,
    Function,
    Class,
    Interface,
    Constructor,
    Property,
    Method,
    CallSignature,
    IndexSignature,
    ConstructorSignature,
    GetSignature,
    SetSignature,
    Parameter,
    TypeLiteral,
    TypeParameter,
    Accessor,
    ObjectLiteral,
    TypeAlias,
    Reference,
    /// Kind strings this enumeration does not know collapse here
    #[serde(other)]
    Unknown,
}

impl EntityKind {
    /// Symbolic camel-case name of the kind, the base for label derivation
    pub fn symbol(&self) -> &'static str {
        match self {
            EntityKind::Project => "Project",
            EntityKind::Module => "Module",
            EntityKind::Namespace => "Namespace",
            EntityKind::Enum => "Enum",
            EntityKind::EnumMember => "EnumMember",
            EntityKind::Variable => "Variable",
            EntityKind::Function => "Function",
            EntityKind::Class => "Class",
            EntityKind::Interface => "Interface",
            EntityKind::Constructor => "Constructor",
            EntityKind::Property => "Property",
            EntityKind::Method => "Method",
            EntityKind::CallSignature => "CallSignature",
            EntityKind::IndexSignature => "IndexSignature",
            EntityKind::ConstructorSignature => "ConstructorSignature",
            EntityKind::GetSignature => "GetSignature",
            EntityKind::SetSignature => "SetSignature",
            EntityKind::Parameter => "Parameter",
            EntityKind::TypeLiteral => "TypeLiteral",
            EntityKind::TypeParameter => "TypeParameter",
            EntityKind::Accessor => "Accessor",
            EntityKind::ObjectLiteral => "ObjectLiteral",
            EntityKind::TypeAlias => "TypeAlias",
            EntityKind::Reference => "Reference",
            EntityKind::Unknown => "Unknown",
        }
    }

    /// Check whether this kind is a module-level entry point
    pub fn is_entry_point(&self) -> bool {
        matches!(self, EntityKind::Project | EntityKind::Module)
    }
}

/// Shape of an entity within the tree
///
/// Only declarations carry an inheritance back-reference that counts for
/// group aggregation; the other shapes never count as inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityVariant {
    #[default]
    Declaration,
    Signature,
    Parameter,
    TypeParameter,
}

/// Modifier flags attached to an entity by the builder phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFlags {
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_protected: bool,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_optional: bool,
}

impl EntityFlags {
    /// Rank used by the visibility sort strategy: public, protected, private
    pub fn visibility_rank(&self) -> u8 {
        if self.is_private {
            2
        } else if self.is_protected {
            1
        } else {
            0
        }
    }
}

/// A single block tag inside a structured doc comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTag {
    /// Tag name including the marker, e.g. "@group"
    pub tag: String,
    /// Rendered text content of the tag
    #[serde(default)]
    pub content: String,
}

impl BlockTag {
    /// Create a block tag from a name and its content
    pub fn new(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: content.into(),
        }
    }
}

/// Structured doc comment attached to an entity or signature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Rendered summary text
    #[serde(default)]
    pub summary: String,
    /// Block tags in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub block_tags: Vec<BlockTag>,
}

impl Comment {
    /// Create a comment holding only block tags
    pub fn from_tags(block_tags: Vec<BlockTag>) -> Self {
        Self {
            summary: String::new(),
            block_tags,
        }
    }

    /// Check whether a tag with the given name is present
    pub fn has_tag(&self, name: &str) -> bool {
        self.block_tags.iter().any(|tag| tag.tag == name)
    }
}

/// Source position recorded by the builder phase
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceRef {
    pub file: PathBuf,
    pub line: usize,
    #[serde(default)]
    pub character: usize,
}

/// A documented program element
///
/// Entities form a tree: containers own children, function-like entities
/// carry signatures, and object/function types appear as a nested type
/// declaration. The `kind_label`, `groups`, and `categories` fields start
/// empty and are filled in by the resolution driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name as it appears in documentation
    pub name: String,
    /// Syntactic category
    pub kind: EntityKind,
    /// Shape of the entity within the tree
    #[serde(default)]
    pub variant: EntityVariant,
    /// Modifier flags
    #[serde(default)]
    pub flags: EntityFlags,
    /// Name of the defining parent when this entity is inherited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<String>,
    /// Structured doc comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    /// Call, construct, index, and accessor signatures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<Entity>,
    /// Parameters of a signature entity
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Entity>,
    /// Synthesized declaration when the entity's type is an object or
    /// function type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_declaration: Option<Box<Entity>>,
    /// Child entities owned by this container
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entity>,
    /// Literal default value, carried by enum members and parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Source position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceRef>,
    /// Human-readable singular kind label, assigned during resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_label: Option<String>,
    /// Named member groups, computed once per container
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
    /// Member categories, computed at container level in flat mode
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

impl Entity {
    /// Create a bare entity with the given name and kind
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            variant: EntityVariant::Declaration,
            flags: EntityFlags::default(),
            inherited_from: None,
            comment: None,
            signatures: Vec::new(),
            parameters: Vec::new(),
            type_declaration: None,
            children: Vec::new(),
            default_value: None,
            source: None,
            kind_label: None,
            groups: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Check whether this entity owns child entities
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }

    /// Signatures that are not index signatures
    ///
    /// Index signatures never contribute marker tags.
    pub fn non_index_signatures(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.signatures
            .iter()
            .filter(|signature| signature.kind != EntityKind::IndexSignature)
    }

    /// Count this entity and every nested entity below it
    pub fn total_entities(&self) -> usize {
        let mut count = 1;
        count += self
            .children
            .iter()
            .map(|child| child.total_entities())
            .sum::<usize>();
        count += self
            .signatures
            .iter()
            .map(|signature| signature.total_entities())
            .sum::<usize>();
        count += self
            .parameters
            .iter()
            .map(|parameter| parameter.total_entities())
            .sum::<usize>();
        if let Some(declaration) = &self.type_declaration {
            count += declaration.total_entities();
        }
        count
    }

    /// Parse a model from a JSON string
    pub fn from_json_str(text: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a model from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// A named, ordered bucket of members within one container
///
/// Members are indices into the owning container's children, assigned after
/// sorting. One child may belong to several groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Group name, unique within the container
    pub name: String,
    /// Indices of member entities in the container's children
    pub members: Vec<usize>,
    /// Every member is an inherited declaration
    pub all_children_are_inherited: bool,
    /// Every member is private
    pub all_children_are_private: bool,
    /// Every member is protected or private
    pub all_children_are_protected_or_private: bool,
    /// Every member comes from an external source
    pub all_children_are_external: bool,
    /// Categories of this group's members, populated in per-group mode
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

impl Group {
    /// Create a named group with no members yet
    ///
    /// Callers must append at least one member before publishing the group.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            all_children_are_inherited: true,
            all_children_are_private: true,
            all_children_are_protected_or_private: true,
            all_children_are_external: true,
            categories: Vec::new(),
        }
    }
}

/// A named category of members, the parallel pass to groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name
    pub name: String,
    /// Indices of member entities in the container's children
    pub members: Vec<usize>,
}

/// Counters accumulated across one organizing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeStats {
    /// Entities visited during resolution
    pub entities_visited: usize,
    /// Containers whose children were grouped
    pub containers_grouped: usize,
    /// Groups created across all containers
    pub groups_created: usize,
    /// Categories created across all containers
    pub categories_created: usize,
    /// Group marker tags removed from comments
    pub group_tags_consumed: usize,
    /// Category marker tags removed from comments
    pub category_tags_consumed: usize,
    /// Sort passes executed; stays flat on repeated runs
    pub sort_passes: usize,
}

/// Metadata about the organizing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizeMetadata {
    /// Run duration in milliseconds
    pub organize_duration_ms: u64,
    /// Entities visited per second
    pub entities_per_second: f64,
    /// Timestamp of the run
    pub timestamp: String,
    /// Version of the tool
    pub tool_version: String,
}

impl Default for OrganizeMetadata {
    fn default() -> Self {
        Self {
            organize_duration_ms: 0,
            entities_per_second: 0.0,
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// An organized documentation model with run statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizedModel {
    /// The organized entity tree
    pub project: Entity,
    /// Counters from the organizing run
    pub stats: OrganizeStats,
    /// Metadata about the run
    pub metadata: OrganizeMetadata,
}
