use crate::app::NodePath;
use crate::environment::Environment;
use crate::tags::Tag;
use serde_json::{json, Value};

/// A deployable unit of resources managed as one atomic group
///
/// Holds the CFN template assembled by a stack builder, the environment the
/// stack is bound to, and the tags attached by the tagging routine. The stack
/// never provisions anything itself.
#[derive(Debug, Clone)]
pub struct Stack {
    path: NodePath,
    name: String,
    env: Environment,
    tags: Vec<Tag>,
    template: Value,
}

/// A single named resource in the CFN template
#[derive(Debug, Clone)]
pub struct CfnResource {
    pub name: String,
    pub resource: Value,
}

impl Stack {
    pub fn new(path: NodePath, name: &str, env: Environment) -> Self {
        Stack {
            path,
            name: name.to_string(),
            env,
            tags: Vec::new(),
            template: json!({"Resources": {}}),
        }
    }

    /// Add a resource to the CFN template
    pub fn add_resource(&mut self, CfnResource { name, resource }: CfnResource) {
        self.template
            .get_mut("Resources")
            .unwrap()
            .as_object_mut()
            .unwrap()
            .insert(name, resource);
    }

    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }

    pub fn env(&self) -> Environment {
        self.env
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The full CFN template of the stack
    pub fn synth(&self) -> Value {
        self.template.clone()
    }

    /// Logical names of all resources in the template
    pub fn resource_names(&self) -> Vec<String> {
        self.template
            .get("Resources")
            .and_then(Value::as_object)
            .map(|resources| resources.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::existing::igvf_dev;

    #[test]
    fn starts_with_an_empty_resources_object() {
        let stack = Stack::new(NodePath::root("Stack"), "Stack", igvf_dev::US_WEST_2);
        assert_eq!(stack.synth(), json!({"Resources": {}}));
        assert!(stack.resource_names().is_empty());
    }

    #[test]
    fn added_resources_land_in_the_template() {
        let mut stack = Stack::new(NodePath::root("Stack"), "Stack", igvf_dev::US_WEST_2);

        stack.add_resource(CfnResource {
            name: "Bucket".into(),
            resource: json!({"Type": "AWS::S3::Bucket"}),
        });

        assert_eq!(stack.resource_names(), ["Bucket"]);
        assert_eq!(
            stack.synth()["Resources"]["Bucket"]["Type"],
            "AWS::S3::Bucket"
        );
    }
}
