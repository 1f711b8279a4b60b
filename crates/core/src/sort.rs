//! Sort strategies
//!
//! The grouper requires container children pre-sorted by a configurable
//! list of named strategies. Strategies are chained: the first one with an
//! opinion decides, later ones break ties, and the underlying sort is
//! stable so fully tied pairs keep builder order.

use crate::models::{Entity, EntityKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Fixed ordering of kinds used by the `kind` strategy
const KIND_SORT_ORDER: &[EntityKind] = &[
    EntityKind::Reference,
    EntityKind::Project,
    EntityKind::Module,
    EntityKind::Namespace,
    EntityKind::Enum,
    EntityKind::EnumMember,
    EntityKind::Class,
    EntityKind::Interface,
    EntityKind::TypeAlias,
    EntityKind::Constructor,
    EntityKind::Property,
    EntityKind::Variable,
    EntityKind::Function,
    EntityKind::Accessor,
    EntityKind::Method,
    EntityKind::ObjectLiteral,
    EntityKind::Parameter,
    EntityKind::TypeParameter,
    EntityKind::TypeLiteral,
    EntityKind::CallSignature,
    EntityKind::ConstructorSignature,
    EntityKind::IndexSignature,
    EntityKind::GetSignature,
    EntityKind::SetSignature,
    EntityKind::Unknown,
];

/// A single named comparison strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortStrategy {
    /// Position in the original source, when both entities have one
    SourceOrder,
    /// Name, case sensitive
    Alphabetical,
    /// Name, case insensitive
    AlphabeticalIgnoringCase,
    /// Numeric enum member value, smallest first
    EnumValueAscending,
    /// Numeric enum member value, largest first
    EnumValueDescending,
    /// Source order, but only between two enum members
    EnumMemberSourceOrder,
    /// Static members before instance members
    StaticFirst,
    /// Instance members before static members
    InstanceFirst,
    /// Public, then protected, then private
    Visibility,
    /// Required members before optional members
    RequiredFirst,
    /// Fixed kind table order
    Kind,
    /// Everything before external members
    ExternalLast,
}

impl SortStrategy {
    /// Compare two entities under this strategy; `Equal` means no opinion
    pub fn compare(&self, a: &Entity, b: &Entity) -> Ordering {
        match self {
            SortStrategy::SourceOrder => compare_sources(a, b),
            SortStrategy::Alphabetical => a.name.cmp(&b.name),
            SortStrategy::AlphabeticalIgnoringCase => {
                a.name.to_lowercase().cmp(&b.name.to_lowercase())
            }
            SortStrategy::EnumValueAscending => compare_enum_values(a, b),
            SortStrategy::EnumValueDescending => compare_enum_values(b, a),
            SortStrategy::EnumMemberSourceOrder => {
                if a.kind == EntityKind::EnumMember && b.kind == EntityKind::EnumMember {
                    compare_sources(a, b)
                } else {
                    Ordering::Equal
                }
            }
            SortStrategy::StaticFirst => {
                (!a.flags.is_static).cmp(&!b.flags.is_static)
            }
            SortStrategy::InstanceFirst => a.flags.is_static.cmp(&b.flags.is_static),
            SortStrategy::Visibility => {
                a.flags.visibility_rank().cmp(&b.flags.visibility_rank())
            }
            SortStrategy::RequiredFirst => a.flags.is_optional.cmp(&b.flags.is_optional),
            SortStrategy::Kind => kind_weight(a.kind).cmp(&kind_weight(b.kind)),
            SortStrategy::ExternalLast => a.flags.is_external.cmp(&b.flags.is_external),
        }
    }
}

fn kind_weight(kind: EntityKind) -> usize {
    KIND_SORT_ORDER
        .iter()
        .position(|entry| *entry == kind)
        .unwrap_or(KIND_SORT_ORDER.len())
}

/// Compare by source position; entities without one stay undecided
fn compare_sources(a: &Entity, b: &Entity) -> Ordering {
    match (&a.source, &b.source) {
        (Some(left), Some(right)) => left.cmp(right),
        _ => Ordering::Equal,
    }
}

/// Compare two enum members by the numeric value of their defaults
///
/// Undecided for anything that is not a pair of enum members; values that
/// do not parse as numbers count as zero.
fn compare_enum_values(a: &Entity, b: &Entity) -> Ordering {
    if a.kind != EntityKind::EnumMember || b.kind != EntityKind::EnumMember {
        return Ordering::Equal;
    }
    numeric_value(a)
        .partial_cmp(&numeric_value(b))
        .unwrap_or(Ordering::Equal)
}

fn numeric_value(entity: &Entity) -> f64 {
    entity
        .default_value
        .as_deref()
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Applies an ordered strategy list with a stable sort
#[derive(Debug, Clone)]
pub struct Sorter {
    strategies: Vec<SortStrategy>,
}

impl Sorter {
    /// Default strategy list: kind, then instance-first, then alphabetical
    pub fn default_strategies() -> Vec<SortStrategy> {
        vec![
            SortStrategy::Kind,
            SortStrategy::InstanceFirst,
            SortStrategy::Alphabetical,
        ]
    }

    /// Create a sorter over the given strategy list
    pub fn new(strategies: Vec<SortStrategy>) -> Self {
        Self { strategies }
    }

    /// Compare two entities by the first strategy with an opinion
    pub fn compare(&self, a: &Entity, b: &Entity) -> Ordering {
        for strategy in &self.strategies {
            let ordering = strategy.compare(a, b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Stable in-place sort of the given entities
    pub fn sort(&self, entities: &mut [Entity]) {
        entities.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new(Self::default_strategies())
    }
}
