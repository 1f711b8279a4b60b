//! YAML output formatter

use super::FormatError;
use crate::models::OrganizedModel;

/// Format an organized model as YAML
pub fn to_yaml(model: &OrganizedModel) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(model)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrganizeConfig;
    use crate::driver::organize_model;
    use crate::models::{Entity, EntityKind};

    #[test]
    fn test_to_yaml_includes_groups() {
        let mut project = Entity::new("demo", EntityKind::Project);
        project
            .children
            .push(Entity::new("Widget", EntityKind::Class));
        let model = organize_model(project, OrganizeConfig::default());

        let yaml = to_yaml(&model).unwrap();
        assert!(yaml.contains("project:"));
        assert!(yaml.contains("name: Classes"));
        assert!(yaml.contains("stats:"));
    }
}
