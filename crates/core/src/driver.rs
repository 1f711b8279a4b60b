//! Resolution driver
//!
//! Drives the organizing pass over an entity tree. The driver has two entry
//! points: one fired per entity as it is resolved, and one fired when
//! resolution ends. Both funnel into the same guarded grouping step, so a
//! container is sorted and grouped at most once no matter how often the
//! entry points fire.

use crate::categories::{categorize_children, categorize_groups};
use crate::config::OrganizeConfig;
use crate::groups::{apply_group_order, build_groups};
use crate::kinds::KindNamer;
use crate::models::{Entity, OrganizeMetadata, OrganizeStats, OrganizedModel};
use crate::sort::Sorter;
use std::time::Instant;

/// Orchestrates sorting, grouping, categorization, and kind labelling
pub struct Resolver {
    config: OrganizeConfig,
    namer: KindNamer,
    sorter: Sorter,
    stats: OrganizeStats,
}

impl Resolver {
    /// Create a resolver for the given configuration
    pub fn new(config: OrganizeConfig) -> Self {
        let sorter = Sorter::new(config.sort.clone());
        Self {
            config,
            namer: KindNamer::new(),
            sorter,
            stats: OrganizeStats::default(),
        }
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> &OrganizeStats {
        &self.stats
    }

    /// Per-entity entry point
    ///
    /// Assigns the singular kind label and, when the entity is a container,
    /// sorts and groups its children.
    pub fn entity_resolved(&mut self, entity: &mut Entity) {
        self.stats.entities_visited += 1;
        entity.kind_label = Some(self.namer.singular(entity.kind));
        self.group_container(entity);
    }

    /// End-of-resolution entry point
    ///
    /// Groups the root container. The guard makes this a no-op for roots
    /// already grouped through [`Resolver::entity_resolved`].
    pub fn resolution_ended(&mut self, root: &mut Entity) {
        self.group_container(root);
    }

    /// Run the full pass over a tree
    ///
    /// Fires [`Resolver::entity_resolved`] once per entity in traversal
    /// order, then [`Resolver::resolution_ended`] on the root.
    pub fn organize(&mut self, root: &mut Entity) {
        self.walk(root);
        self.resolution_ended(root);
    }

    fn walk(&mut self, entity: &mut Entity) {
        self.entity_resolved(entity);
        for child in &mut entity.children {
            self.walk(child);
        }
        for signature in &mut entity.signatures {
            self.walk(signature);
        }
        for parameter in &mut entity.parameters {
            self.walk(parameter);
        }
        if let Some(declaration) = &mut entity.type_declaration {
            self.walk(declaration);
        }
    }

    /// Guarded grouping step for one container
    ///
    /// Skips entities without children and containers whose groups are
    /// already populated, which keeps the whole pass idempotent.
    fn group_container(&mut self, entity: &mut Entity) {
        if !entity.is_container() || !entity.groups.is_empty() {
            return;
        }

        if self.should_sort(entity) {
            self.sorter.sort(&mut entity.children);
            self.stats.sort_passes += 1;
        }

        let (mut groups, consumed) = build_groups(&mut entity.children, &self.namer);
        self.stats.group_tags_consumed += consumed;
        self.stats.groups_created += groups.len();

        if self.config.categorize_by_group {
            let (consumed, created) = categorize_groups(
                &mut entity.children,
                &mut groups,
                &self.config.default_category,
                &self.config.category_order,
            );
            self.stats.category_tags_consumed += consumed;
            self.stats.categories_created += created;
        } else {
            let (categories, consumed) = categorize_children(
                &mut entity.children,
                &self.config.default_category,
                &self.config.category_order,
            );
            self.stats.category_tags_consumed += consumed;
            self.stats.categories_created += categories.len();
            entity.categories = categories;
        }

        apply_group_order(&mut groups, &self.config.group_order);
        entity.groups = groups;
        self.stats.containers_grouped += 1;
    }

    /// A container keeps builder order only when entry-point sorting is
    /// disabled and every child is a project or module
    fn should_sort(&self, entity: &Entity) -> bool {
        if self.config.sort_entry_points {
            return true;
        }
        !entity
            .children
            .iter()
            .all(|child| child.kind.is_entry_point())
    }
}

/// Organize a model in one shot, stamping stats and timing metadata
pub fn organize_model(mut project: Entity, config: OrganizeConfig) -> OrganizedModel {
    let start = Instant::now();

    let mut resolver = Resolver::new(config);
    resolver.organize(&mut project);

    let duration = start.elapsed();
    let stats = resolver.stats().clone();
    let entities_per_second = if duration.as_secs_f64() > 0.0 {
        stats.entities_visited as f64 / duration.as_secs_f64()
    } else {
        stats.entities_visited as f64
    };

    OrganizedModel {
        project,
        stats,
        metadata: OrganizeMetadata {
            organize_duration_ms: duration.as_millis() as u64,
            entities_per_second,
            ..OrganizeMetadata::default()
        },
    }
}
