//! Categorization
//!
//! The parallel pass to grouping: "@category" tags with a configurable
//! default name instead of the kind-label fallback. Categories either
//! decorate each group or sit on the container itself, and are ordered by a
//! weight list, then alphabetically.

use crate::groups::order_weight;
use crate::models::{Category, Entity, Group};
use crate::tags::{collect_marker_names, consume_marker_tags, CATEGORY_TAG};

/// Names of the categories an entity declares
///
/// Falls back to `default_category` when none are declared. An empty
/// default disables the fallback, so the result may be empty.
pub fn entity_category_names(entity: &Entity, default_category: &str) -> Vec<String> {
    let names = collect_marker_names(entity, CATEGORY_TAG);
    if names.is_empty() && !default_category.is_empty() {
        return vec![default_category.to_string()];
    }
    names
}

/// Bucket member indices into categories
///
/// Names are taken from the per-child lists so that a child appearing in
/// several groups is bucketed consistently in each one.
fn bucket_members(members: &[usize], names_per_child: &[Vec<String>]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for &index in members {
        for name in &names_per_child[index] {
            match categories
                .iter_mut()
                .find(|category| category.name == *name)
            {
                Some(category) => category.members.push(index),
                None => categories.push(Category {
                    name: name.clone(),
                    members: vec![index],
                }),
            }
        }
    }
    categories
}

/// Sort categories by their weight in `category_order`, then by name
pub fn sort_categories(categories: &mut [Category], category_order: &[String]) {
    categories.sort_by(|a, b| {
        order_weight(category_order, &a.name)
            .cmp(&order_weight(category_order, &b.name))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Categorize a container's children, consuming their "@category" tags
///
/// Used in flat mode, where categories live on the container instead of on
/// each group. Returns the category list and the number of tags consumed.
pub fn categorize_children(
    children: &mut [Entity],
    default_category: &str,
    category_order: &[String],
) -> (Vec<Category>, usize) {
    let names: Vec<Vec<String>> = children
        .iter()
        .map(|child| entity_category_names(child, default_category))
        .collect();
    let consumed = children
        .iter_mut()
        .map(|child| consume_marker_tags(child, CATEGORY_TAG))
        .sum();

    let all: Vec<usize> = (0..children.len()).collect();
    let mut categories = bucket_members(&all, &names);
    sort_categories(&mut categories, category_order);
    (categories, consumed)
}

/// Categorize each group's members, consuming "@category" tags once per
/// child even when the child belongs to several groups
///
/// Returns the number of tags consumed and the number of categories
/// created.
pub fn categorize_groups(
    children: &mut [Entity],
    groups: &mut [Group],
    default_category: &str,
    category_order: &[String],
) -> (usize, usize) {
    let names: Vec<Vec<String>> = children
        .iter()
        .map(|child| entity_category_names(child, default_category))
        .collect();
    let consumed = children
        .iter_mut()
        .map(|child| consume_marker_tags(child, CATEGORY_TAG))
        .sum();

    let mut created = 0;
    for group in groups.iter_mut() {
        let mut categories = bucket_members(&group.members, &names);
        sort_categories(&mut categories, category_order);
        created += categories.len();
        group.categories = categories;
    }
    (consumed, created)
}
