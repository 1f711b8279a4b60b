//! Grouping
//!
//! Partitions a container's sorted children into named groups and reduces
//! per-member flags into group-level aggregates. Group names come from
//! explicit "@group" tags, falling back to the plural kind label, so every
//! child lands in at least one group.

use crate::kinds::KindNamer;
use crate::models::{Entity, EntityVariant, Group};
use crate::tags::{collect_marker_names, consume_marker_tags, GROUP_TAG};

/// Names of the groups an entity belongs to
///
/// The entity's "@group" tags when it has any, otherwise the plural label
/// of its kind. Never empty.
pub fn entity_group_names(entity: &Entity, namer: &KindNamer) -> Vec<String> {
    let names = collect_marker_names(entity, GROUP_TAG);
    if names.is_empty() {
        vec![namer.plural(entity.kind)]
    } else {
        names
    }
}

/// Partition children into groups, consuming their "@group" tags
///
/// Children must already be sorted. Groups appear in the order their names
/// are first encountered, and each child joins every group it names, in
/// declaration order. Returns the group list and the number of tags
/// consumed.
pub fn build_groups(children: &mut [Entity], namer: &KindNamer) -> (Vec<Group>, usize) {
    let mut groups: Vec<Group> = Vec::new();
    let mut consumed = 0;

    for (index, child) in children.iter_mut().enumerate() {
        let names = entity_group_names(child, namer);
        consumed += consume_marker_tags(child, GROUP_TAG);
        for name in names {
            match groups.iter_mut().find(|group| group.name == name) {
                Some(group) => group.members.push(index),
                None => {
                    let mut group = Group::new(name);
                    group.members.push(index);
                    groups.push(group);
                }
            }
        }
    }

    for group in &mut groups {
        compute_aggregates(group, children);
    }

    (groups, consumed)
}

/// AND-reduce the four aggregate flags across a group's members
///
/// Only declaration entities can count as inherited; any other variant
/// forces the inherited aggregate to false.
pub fn compute_aggregates(group: &mut Group, children: &[Entity]) {
    let mut all_inherited = true;
    let mut all_private = true;
    let mut all_protected_or_private = true;
    let mut all_external = true;

    for &index in &group.members {
        let child = &children[index];
        all_private = all_private && child.flags.is_private;
        all_protected_or_private =
            all_protected_or_private && (child.flags.is_private || child.flags.is_protected);
        all_external = all_external && child.flags.is_external;
        all_inherited = all_inherited
            && child.variant == EntityVariant::Declaration
            && child.inherited_from.is_some();
    }

    group.all_children_are_inherited = all_inherited;
    group.all_children_are_private = all_private;
    group.all_children_are_protected_or_private = all_protected_or_private;
    group.all_children_are_external = all_external;
}

/// Weight of a name in an order list
///
/// Unlisted names take the position of the "*" wildcard, or the end of the
/// list when no wildcard is present.
pub(crate) fn order_weight(order: &[String], name: &str) -> usize {
    match order.iter().position(|entry| entry == name) {
        Some(position) => position,
        None => order
            .iter()
            .position(|entry| entry == "*")
            .unwrap_or(order.len()),
    }
}

/// Stable reorder of groups by their weight in `group_order`
///
/// An empty order list keeps first-encounter order untouched.
pub fn apply_group_order(groups: &mut [Group], group_order: &[String]) {
    if group_order.is_empty() {
        return;
    }
    groups.sort_by_key(|group| order_weight(group_order, &group.name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockTag, Comment, EntityKind};

    fn tagged(name: &str, kind: EntityKind, group: &str) -> Entity {
        let mut entity = Entity::new(name, kind);
        entity.comment = Some(Comment::from_tags(vec![BlockTag::new("@group", group)]));
        entity
    }

    fn group_names(groups: &[Group]) -> Vec<&str> {
        groups.iter().map(|group| group.name.as_str()).collect()
    }

    #[test]
    fn test_entity_group_names_falls_back_to_kind_plural() {
        let namer = KindNamer::new();
        let class = Entity::new("Widget", EntityKind::Class);
        assert_eq!(entity_group_names(&class, &namer), vec!["Classes"]);

        let tagged = tagged("helper", EntityKind::Function, "Utilities");
        assert_eq!(entity_group_names(&tagged, &namer), vec!["Utilities"]);
    }

    #[test]
    fn test_build_groups_first_encounter_order() {
        let namer = KindNamer::new();
        let mut children = vec![
            Entity::new("Alpha", EntityKind::Class),
            Entity::new("Beta", EntityKind::Class),
            tagged("apply", EntityKind::Property, "Utilities"),
            Entity::new("velocity", EntityKind::Property),
            Entity::new("weight", EntityKind::Property),
        ];

        let (groups, consumed) = build_groups(&mut children, &namer);
        assert_eq!(group_names(&groups), vec!["Classes", "Utilities", "Properties"]);
        assert_eq!(groups[0].members, vec![0, 1]);
        assert_eq!(groups[1].members, vec![2]);
        assert_eq!(groups[2].members, vec![3, 4]);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_build_groups_multi_membership() {
        let namer = KindNamer::new();
        let mut shared = Entity::new("shared", EntityKind::Function);
        shared.comment = Some(Comment::from_tags(vec![
            BlockTag::new("@group", "Core"),
            BlockTag::new("@group", "Extras"),
        ]));
        let mut children = vec![shared, tagged("other", EntityKind::Function, "Extras")];

        let (groups, consumed) = build_groups(&mut children, &namer);
        assert_eq!(group_names(&groups), vec!["Core", "Extras"]);
        assert_eq!(groups[0].members, vec![0]);
        assert_eq!(groups[1].members, vec![0, 1]);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_build_groups_consumes_tags() {
        let namer = KindNamer::new();
        let mut entity = Entity::new("value", EntityKind::Variable);
        entity.comment = Some(Comment::from_tags(vec![
            BlockTag::new("@group", "A"),
            BlockTag::new("@since", "1.0"),
        ]));
        let mut children = vec![entity];

        let (groups, _) = build_groups(&mut children, &namer);
        assert_eq!(group_names(&groups), vec!["A"]);

        let residual = &children[0].comment.as_ref().unwrap().block_tags;
        assert_eq!(residual.len(), 1);
        assert_eq!(residual[0].tag, "@since");
    }

    #[test]
    fn test_aggregates_all_true_and_broken_by_one_member() {
        let namer = KindNamer::new();
        let mut private_a = Entity::new("a", EntityKind::Property);
        private_a.flags.is_private = true;
        let mut private_b = Entity::new("b", EntityKind::Property);
        private_b.flags.is_private = true;
        let mut children = vec![private_a, private_b];

        let (groups, _) = build_groups(&mut children, &namer);
        assert!(groups[0].all_children_are_private);
        assert!(groups[0].all_children_are_protected_or_private);
        assert!(!groups[0].all_children_are_external);

        // one public member breaks the reduction
        children.push(Entity::new("c", EntityKind::Property));
        let (groups, _) = build_groups(&mut children, &namer);
        assert!(!groups[0].all_children_are_private);
        assert!(!groups[0].all_children_are_protected_or_private);
    }

    #[test]
    fn test_aggregate_protected_or_private_mixes() {
        let namer = KindNamer::new();
        let mut protected = Entity::new("a", EntityKind::Method);
        protected.flags.is_protected = true;
        let mut private = Entity::new("b", EntityKind::Method);
        private.flags.is_private = true;
        let mut children = vec![protected, private];

        let (groups, _) = build_groups(&mut children, &namer);
        assert!(!groups[0].all_children_are_private);
        assert!(groups[0].all_children_are_protected_or_private);
    }

    #[test]
    fn test_aggregate_inherited_requires_declarations() {
        let namer = KindNamer::new();
        let mut inherited = Entity::new("base", EntityKind::Method);
        inherited.inherited_from = Some("Base.base".to_string());
        let mut children = vec![inherited.clone()];

        let (groups, _) = build_groups(&mut children, &namer);
        assert!(groups[0].all_children_are_inherited);

        // a non-declaration member can never count as inherited
        let mut signature = inherited;
        signature.variant = EntityVariant::Signature;
        let mut children = vec![signature];
        let (groups, _) = build_groups(&mut children, &namer);
        assert!(!groups[0].all_children_are_inherited);
    }

    #[test]
    fn test_aggregate_inherited_broken_by_uninherited_member() {
        let namer = KindNamer::new();
        let mut base_a = Entity::new("a", EntityKind::Method);
        base_a.inherited_from = Some("Base.a".to_string());
        let mut base_b = Entity::new("b", EntityKind::Method);
        base_b.inherited_from = Some("Base.b".to_string());
        let mut children = vec![base_a, base_b, Entity::new("c", EntityKind::Method)];

        let (groups, _) = build_groups(&mut children, &namer);
        assert_eq!(group_names(&groups), vec!["Methods"]);
        assert_eq!(groups[0].members, vec![0, 1, 2]);
        assert!(!groups[0].all_children_are_inherited);
    }

    #[test]
    fn test_order_weight_wildcard() {
        let order = vec![
            "Errors".to_string(),
            "*".to_string(),
            "Deprecated".to_string(),
        ];
        assert_eq!(order_weight(&order, "Errors"), 0);
        assert_eq!(order_weight(&order, "Anything"), 1);
        assert_eq!(order_weight(&order, "Deprecated"), 2);

        let no_wildcard = vec!["Errors".to_string()];
        assert_eq!(order_weight(&no_wildcard, "Anything"), 1);
    }

    fn sample_children() -> Vec<Entity> {
        vec![
            Entity::new("Widget", EntityKind::Class),
            tagged("fail", EntityKind::Function, "Errors"),
            Entity::new("helper", EntityKind::Function),
        ]
    }

    #[test]
    fn test_apply_group_order_stable_reorder() {
        let namer = KindNamer::new();
        let mut children = sample_children();
        let (mut groups, _) = build_groups(&mut children, &namer);
        assert_eq!(group_names(&groups), vec!["Classes", "Errors", "Functions"]);

        let order = vec!["Errors".to_string(), "*".to_string()];
        apply_group_order(&mut groups, &order);
        assert_eq!(group_names(&groups), vec!["Errors", "Classes", "Functions"]);

        // empty order keeps first-encounter order
        let mut children = sample_children();
        let (mut groups, _) = build_groups(&mut children, &namer);
        apply_group_order(&mut groups, &[]);
        assert_eq!(group_names(&groups), vec!["Classes", "Errors", "Functions"]);
    }
}
