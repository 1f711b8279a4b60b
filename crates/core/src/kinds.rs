//! Kind naming
//!
//! Maps entity kinds to human-readable singular and plural labels. Irregular
//! names come from two override tables; every other label is derived from
//! the kind's symbolic name by splitting camel-case words.

use crate::models::EntityKind;
use regex::Regex;
use std::collections::HashMap;

/// Maps entity kinds to display labels
pub struct KindNamer {
    singular_overrides: HashMap<EntityKind, &'static str>,
    plural_overrides: HashMap<EntityKind, &'static str>,
    camel_boundary: Regex,
}

impl KindNamer {
    /// Create a namer with the irregular-label tables populated
    pub fn new() -> Self {
        let mut singular_overrides = HashMap::new();
        singular_overrides.insert(EntityKind::Enum, "Enumeration");
        singular_overrides.insert(EntityKind::EnumMember, "Enumeration member");

        let mut plural_overrides = HashMap::new();
        plural_overrides.insert(EntityKind::Class, "Classes");
        plural_overrides.insert(EntityKind::Property, "Properties");
        plural_overrides.insert(EntityKind::Enum, "Enumerations");
        plural_overrides.insert(EntityKind::EnumMember, "Enumeration members");
        plural_overrides.insert(EntityKind::TypeAlias, "Type aliases");

        Self {
            singular_overrides,
            plural_overrides,
            camel_boundary: Regex::new(r"(.)([A-Z])").expect("static pattern"),
        }
    }

    /// Singular label for a kind, e.g. "Enumeration" or "Type alias"
    pub fn singular(&self, kind: EntityKind) -> String {
        match self.singular_overrides.get(&kind) {
            Some(label) => (*label).to_string(),
            None => self.derive_label(kind),
        }
    }

    /// Plural label for a kind, e.g. "Enumerations" or "Type aliases"
    ///
    /// Falls back to the singular label with an "s" appended.
    pub fn plural(&self, kind: EntityKind) -> String {
        match self.plural_overrides.get(&kind) {
            Some(label) => (*label).to_string(),
            None => format!("{}s", self.singular(kind)),
        }
    }

    /// Derive a label by inserting a space before each internal capital and
    /// lowercasing it
    fn derive_label(&self, kind: EntityKind) -> String {
        self.camel_boundary
            .replace_all(kind.symbol(), |caps: &regex::Captures| {
                format!("{} {}", &caps[1], caps[2].to_lowercase())
            })
            .into_owned()
    }
}

impl Default for KindNamer {
    fn default() -> Self {
        Self::new()
    }
}
