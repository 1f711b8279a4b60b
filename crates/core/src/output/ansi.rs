//! ANSI colored output formatter
//!
//! Renders the organized tree as an indented group listing with colors for
//! terminal display.

use crate::models::{Entity, EntityKind, OrganizedModel};

// ANSI escape codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";

const BRIGHT_GREEN: &str = "\x1b[92m";
const BRIGHT_YELLOW: &str = "\x1b[93m";
const BRIGHT_BLUE: &str = "\x1b[94m";
const BRIGHT_CYAN: &str = "\x1b[96m";
const BRIGHT_WHITE: &str = "\x1b[97m";

/// Get color for an entity kind
fn kind_color(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Project | EntityKind::Module => BRIGHT_WHITE,
        EntityKind::Namespace => BRIGHT_BLUE,
        EntityKind::Class => BRIGHT_YELLOW,
        EntityKind::Interface => BRIGHT_GREEN,
        EntityKind::Enum | EntityKind::EnumMember => YELLOW,
        EntityKind::Function | EntityKind::Method | EntityKind::Constructor => BRIGHT_CYAN,
        EntityKind::Accessor | EntityKind::GetSignature | EntityKind::SetSignature => MAGENTA,
        EntityKind::Property | EntityKind::Variable => BLUE,
        EntityKind::TypeAlias | EntityKind::TypeLiteral | EntityKind::TypeParameter => GREEN,
        _ => CYAN,
    }
}

/// Format an organized model as an ANSI-colored group listing
pub fn format_ansi(model: &OrganizedModel) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}{}{}{}\n",
        BOLD, BRIGHT_WHITE, model.project.name, RESET
    ));
    render_container(&model.project, 1, &mut output);
    output.push_str(&format!(
        "\n{}{} entities, {} groups, {} categories{}\n",
        DIM,
        model.stats.entities_visited,
        model.stats.groups_created,
        model.stats.categories_created,
        RESET
    ));
    output
}

fn render_container(entity: &Entity, depth: usize, output: &mut String) {
    let indent = "  ".repeat(depth);

    for group in &entity.groups {
        output.push_str(&format!(
            "{}{}{}{} {}({}){}\n",
            indent,
            BOLD,
            group.name,
            RESET,
            DIM,
            group.members.len(),
            RESET
        ));
        // pre-grouped input carries unvalidated member indices
        for child in group.members.iter().filter_map(|&index| entity.children.get(index)) {
            let label = child
                .kind_label
                .as_deref()
                .unwrap_or(child.kind.symbol());
            output.push_str(&format!(
                "{}  {}{}{} {}{}{}\n",
                indent,
                kind_color(child.kind),
                child.name,
                RESET,
                DIM,
                label,
                RESET
            ));
        }
    }

    for child in &entity.children {
        if !child.groups.is_empty() {
            output.push_str(&format!(
                "{}{}{}{}{}\n",
                indent,
                BOLD,
                kind_color(child.kind),
                child.name,
                RESET
            ));
            render_container(child, depth + 1, output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrganizeConfig;
    use crate::driver::organize_model;

    #[test]
    fn test_format_ansi_renders_groups_and_members() {
        let mut project = Entity::new("demo", EntityKind::Project);
        project
            .children
            .push(Entity::new("Widget", EntityKind::Class));
        let model = organize_model(project, OrganizeConfig::default());

        let output = format_ansi(&model);
        assert!(output.contains("demo"));
        assert!(output.contains("Classes"));
        assert!(output.contains("Widget"));
        assert!(output.contains(RESET));
    }

    #[test]
    fn test_format_ansi_recurses_into_nested_containers() {
        let mut namespace = Entity::new("ns", EntityKind::Namespace);
        namespace
            .children
            .push(Entity::new("inner", EntityKind::Variable));
        let mut project = Entity::new("demo", EntityKind::Project);
        project.children.push(namespace);
        let model = organize_model(project, OrganizeConfig::default());

        let output = format_ansi(&model);
        assert!(output.contains("Namespaces"));
        assert!(output.contains("Variables"));
        assert!(output.contains("inner"));
    }

    #[test]
    fn test_format_ansi_skips_out_of_range_members() {
        // an already-grouped model loaded from disk keeps its groups as-is
        let json = r#"{
            "name": "demo",
            "kind": "project",
            "children": [{"name": "Widget", "kind": "class"}],
            "groups": [{
                "name": "Classes",
                "members": [0, 5],
                "all_children_are_inherited": false,
                "all_children_are_private": false,
                "all_children_are_protected_or_private": false,
                "all_children_are_external": false
            }]
        }"#;
        let project = Entity::from_json_str(json).unwrap();
        let model = organize_model(project, OrganizeConfig::default());

        let output = format_ansi(&model);
        assert!(output.contains("Classes"));
        assert!(output.contains("Widget"));
    }

    #[test]
    fn test_kind_colors_differ() {
        assert_ne!(
            kind_color(EntityKind::Class),
            kind_color(EntityKind::Function)
        );
    }
}
