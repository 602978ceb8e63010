use crate::config::Config;
use crate::stack::Stack;
use serde::{Deserialize, Serialize};

/// A key/value pair attached to every resource of a stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: &str, value: &str) -> Self {
        Tag {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Attach standard and config-defined tags to a stack
///
/// Standard tags identify the project and branch the stack was built from.
/// Tags listed in the config are appended as is, in order.
pub fn add_tags_to_stack(stack: &mut Stack, config: &Config) {
    stack.add_tag(Tag::new("project", &config.name));
    stack.add_tag(Tag::new("branch", &config.branch));

    for tag in &config.tags {
        stack.add_tag(tag.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NodePath;
    use crate::existing::igvf_dev;

    fn stack() -> Stack {
        Stack::new(
            NodePath::root("Stage").child("FrontendStack"),
            "FrontendStack",
            igvf_dev::US_WEST_2,
        )
    }

    #[test]
    fn standard_tags_come_first() {
        let mut stack = stack();
        let config = Config {
            name: "igvf-ui".into(),
            branch: "dev".into(),
            tags: vec![Tag::new("env", "demo")],
            ..Config::default()
        };

        add_tags_to_stack(&mut stack, &config);

        assert_eq!(
            stack.tags(),
            [
                Tag::new("project", "igvf-ui"),
                Tag::new("branch", "dev"),
                Tag::new("env", "demo"),
            ]
        );
    }

    #[test]
    fn empty_config_tags_still_produce_standard_tags() {
        let mut stack = stack();
        let config = Config {
            name: "igvf-ui".into(),
            branch: "main".into(),
            ..Config::default()
        };

        add_tags_to_stack(&mut stack, &config);
        assert_eq!(stack.tags().len(), 2);
    }
}
