//! Marker-tag extraction
//!
//! Group and category membership is declared with reserved block tags in doc
//! comments. Extraction is two-phase: a pure collection pass gathers the
//! declared names, and a separate consume pass removes the matched tags so
//! they never reach rendered output.

use crate::models::{BlockTag, Comment, Entity, EntityKind};

/// Reserved tag that assigns an entity to a named group
pub const GROUP_TAG: &str = "@group";

/// Reserved tag that assigns an entity to a named category
pub const CATEGORY_TAG: &str = "@category";

/// Split a tag list into names declared by `marker` and the residual tags
///
/// Returned names are trimmed but not deduplicated. The residual list keeps
/// the remaining tags in their original order.
pub fn split_marker_tags(tags: &[BlockTag], marker: &str) -> (Vec<String>, Vec<BlockTag>) {
    let mut names = Vec::new();
    let mut residual = Vec::new();
    for tag in tags {
        if tag.tag == marker {
            names.push(tag.content.trim().to_string());
        } else {
            residual.push(tag.clone());
        }
    }
    (names, residual)
}

/// Visit every comment that contributes marker tags to an entity: its own,
/// those of its non-index signatures, and one level into the nested type
/// declaration and that declaration's non-index signatures.
fn visit_comments(entity: &Entity, visit: &mut impl FnMut(&Comment)) {
    if let Some(comment) = &entity.comment {
        visit(comment);
    }
    for signature in entity.non_index_signatures() {
        if let Some(comment) = &signature.comment {
            visit(comment);
        }
    }
    if let Some(declaration) = &entity.type_declaration {
        if let Some(comment) = &declaration.comment {
            visit(comment);
        }
        for signature in declaration.non_index_signatures() {
            if let Some(comment) = &signature.comment {
                visit(comment);
            }
        }
    }
}

/// Collect the names an entity declares via `marker`
///
/// Names appear in first-occurrence order, without duplicates and without
/// empty entries. Pure: the entity is not modified.
pub fn collect_marker_names(entity: &Entity, marker: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    visit_comments(entity, &mut |comment| {
        let (found, _) = split_marker_tags(&comment.block_tags, marker);
        for name in found {
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
    });
    names
}

/// Remove every `marker` tag from the entity's comments
///
/// Commits the residual lists computed by [`split_marker_tags`] and returns
/// the number of tags removed.
pub fn consume_marker_tags(entity: &mut Entity, marker: &str) -> usize {
    let mut consumed = 0;
    {
        let mut commit = |comment: &mut Comment| {
            let (found, residual) = split_marker_tags(&comment.block_tags, marker);
            consumed += found.len();
            comment.block_tags = residual;
        };

        if let Some(comment) = &mut entity.comment {
            commit(comment);
        }
        for signature in entity
            .signatures
            .iter_mut()
            .filter(|signature| signature.kind != EntityKind::IndexSignature)
        {
            if let Some(comment) = &mut signature.comment {
                commit(comment);
            }
        }
        if let Some(declaration) = &mut entity.type_declaration {
            if let Some(comment) = &mut declaration.comment {
                commit(comment);
            }
            for signature in declaration
                .signatures
                .iter_mut()
                .filter(|signature| signature.kind != EntityKind::IndexSignature)
            {
                if let Some(comment) = &mut signature.comment {
                    commit(comment);
                }
            }
        }
    }
    consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityKind;

    fn tagged(name: &str, kind: EntityKind, tags: Vec<BlockTag>) -> Entity {
        let mut entity = Entity::new(name, kind);
        entity.comment = Some(Comment::from_tags(tags));
        entity
    }

    #[test]
    fn test_split_marker_tags_preserves_residual_order() {
        let tags = vec![
            BlockTag::new("@group", "A"),
            BlockTag::new("@since", "1.0"),
            BlockTag::new("@group", "B"),
            BlockTag::new("@deprecated", ""),
        ];

        let (names, residual) = split_marker_tags(&tags, "@group");
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(residual.len(), 2);
        assert_eq!(residual[0].tag, "@since");
        assert_eq!(residual[1].tag, "@deprecated");
    }

    #[test]
    fn test_split_marker_tags_trims_content() {
        let tags = vec![BlockTag::new("@group", "  Advanced Topics  ")];
        let (names, _) = split_marker_tags(&tags, "@group");
        assert_eq!(names, vec!["Advanced Topics"]);
    }

    #[test]
    fn test_collect_dedupes_and_drops_empty() {
        let entity = tagged(
            "value",
            EntityKind::Variable,
            vec![
                BlockTag::new("@group", "Core"),
                BlockTag::new("@group", "  "),
                BlockTag::new("@group", "Core"),
                BlockTag::new("@group", "Extras"),
            ],
        );

        let names = collect_marker_names(&entity, "@group");
        assert_eq!(names, vec!["Core", "Extras"]);
    }

    #[test]
    fn test_collect_walks_signatures_skipping_index() {
        let mut method = Entity::new("fetch", EntityKind::Method);
        method.signatures.push(tagged(
            "fetch",
            EntityKind::CallSignature,
            vec![BlockTag::new("@group", "Networking")],
        ));
        method.signatures.push(tagged(
            "fetch",
            EntityKind::IndexSignature,
            vec![BlockTag::new("@group", "Hidden")],
        ));

        let names = collect_marker_names(&method, "@group");
        assert_eq!(names, vec!["Networking"]);
    }

    #[test]
    fn test_collect_walks_type_declaration_one_level() {
        let mut inner = Entity::new("__type", EntityKind::TypeLiteral);
        inner.comment = Some(Comment::from_tags(vec![BlockTag::new("@group", "Shapes")]));
        inner.signatures.push(tagged(
            "__call",
            EntityKind::CallSignature,
            vec![BlockTag::new("@group", "Callable")],
        ));

        // a nested declaration below the first level must not contribute
        let mut deep = Entity::new("__type", EntityKind::TypeLiteral);
        deep.comment = Some(Comment::from_tags(vec![BlockTag::new("@group", "TooDeep")]));
        inner.type_declaration = Some(Box::new(deep));

        let mut property = Entity::new("shape", EntityKind::Property);
        property.type_declaration = Some(Box::new(inner));

        let names = collect_marker_names(&property, "@group");
        assert_eq!(names, vec!["Shapes", "Callable"]);
    }

    #[test]
    fn test_collect_is_pure() {
        let entity = tagged(
            "value",
            EntityKind::Variable,
            vec![BlockTag::new("@group", "Core")],
        );
        let before = entity.clone();
        let _ = collect_marker_names(&entity, "@group");
        assert_eq!(entity, before);
    }

    #[test]
    fn test_consume_removes_only_marker_tags() {
        let mut entity = tagged(
            "value",
            EntityKind::Variable,
            vec![
                BlockTag::new("@group", "A"),
                BlockTag::new("@since", "1.0"),
            ],
        );

        let consumed = consume_marker_tags(&mut entity, "@group");
        assert_eq!(consumed, 1);

        let residual = &entity.comment.as_ref().unwrap().block_tags;
        assert_eq!(residual.len(), 1);
        assert_eq!(residual[0].tag, "@since");
        assert_eq!(residual[0].content, "1.0");
    }

    #[test]
    fn test_consume_covers_signatures_and_type_declaration() {
        let mut inner = Entity::new("__type", EntityKind::TypeLiteral);
        inner.comment = Some(Comment::from_tags(vec![BlockTag::new("@group", "Shapes")]));

        let mut property = tagged(
            "shape",
            EntityKind::Property,
            vec![BlockTag::new("@group", "Core")],
        );
        property.signatures.push(tagged(
            "shape",
            EntityKind::GetSignature,
            vec![BlockTag::new("@group", "Accessors")],
        ));
        property.type_declaration = Some(Box::new(inner));

        let consumed = consume_marker_tags(&mut property, "@group");
        assert_eq!(consumed, 3);
        assert!(collect_marker_names(&property, "@group").is_empty());
    }

    #[test]
    fn test_consume_leaves_other_marker_untouched() {
        let mut entity = tagged(
            "value",
            EntityKind::Variable,
            vec![
                BlockTag::new("@group", "A"),
                BlockTag::new("@category", "B"),
            ],
        );

        consume_marker_tags(&mut entity, "@group");
        assert_eq!(collect_marker_names(&entity, "@category"), vec!["B"]);
    }
}
