use crate::app::{App, NodePath};
use crate::config::Config;
use crate::existing::igvf_dev;
use crate::frontend::FrontendStack;
use crate::stack::Stack;
use crate::tags::add_tags_to_stack;
use eyre::OptionExt;

/// Demo deployment of the frontend into the shared igvf-dev account
///
/// A named grouping that composes exactly one FrontendStack bound to
/// us-west-2 and tags it from the config. Construction is a single
/// synchronous transition, there are no intermediate states.
pub struct DemoStage {
    path: NodePath,

    /// The single stack created and owned by the stage
    pub frontend_stack: Stack,
}

impl DemoStage {
    pub fn builder() -> DemoStageBuilder {
        DemoStageBuilder::default()
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }
}

#[derive(Default)]
pub struct DemoStageBuilder {
    construct_id: Option<String>,
    config: Option<Config>,
}

impl DemoStageBuilder {
    pub fn construct_id(mut self, construct_id: &str) -> Self {
        self.construct_id = Some(construct_id.to_string());
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Compose the stage under the app
    ///
    /// Fails before any stack is constructed when the config or the construct
    /// id is missing, and when the construct id is already taken.
    pub fn build(self, app: &mut App) -> eyre::Result<DemoStage> {
        let config = self.config.ok_or_eyre("No config provided to the stage")?;

        let construct_id = self
            .construct_id
            .ok_or_eyre("No construct id provided to the stage")?;

        let path = app.register(NodePath::root(&construct_id))?;

        let mut frontend_stack = FrontendStack::build(
            app,
            &path,
            "FrontendStack",
            &config,
            &igvf_dev::resources(),
            igvf_dev::US_WEST_2,
        )?;

        add_tags_to_stack(&mut frontend_stack, &config);

        Ok(DemoStage {
            path,
            frontend_stack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::Tag;

    fn config() -> Config {
        Config {
            name: "igvf-ui".into(),
            branch: "dev".into(),
            url_prefix: "demo".into(),
            tags: vec![Tag::new("env", "demo")],
            ..Config::default()
        }
    }

    fn stage(app: &mut App, construct_id: &str) -> DemoStage {
        DemoStage::builder()
            .construct_id(construct_id)
            .config(config())
            .build(app)
            .unwrap()
    }

    #[test]
    fn composes_exactly_one_frontend_stack() {
        let mut app = App::new();
        let stage = stage(&mut app, "DemoDeployStage");

        assert_eq!(stage.frontend_stack.name(), "FrontendStack");
        assert_eq!(
            stage.frontend_stack.path().as_str(),
            "DemoDeployStage/FrontendStack"
        );
    }

    #[test]
    fn stack_is_bound_to_the_fixed_environment() {
        let mut app = App::new();
        let stage = stage(&mut app, "DemoDeployStage");

        assert_eq!(stage.frontend_stack.env(), igvf_dev::US_WEST_2);
        assert_eq!(stage.frontend_stack.env().region, "us-west-2");
    }

    #[test]
    fn tags_are_applied_from_the_config() {
        let mut app = App::new();
        let stage = stage(&mut app, "DemoDeployStage");

        assert_eq!(
            stage.frontend_stack.tags(),
            [
                Tag::new("project", "igvf-ui"),
                Tag::new("branch", "dev"),
                Tag::new("env", "demo"),
            ]
        );
    }

    #[test]
    fn duplicate_construct_id_fails() {
        let mut app = App::new();
        stage(&mut app, "DemoDeployStage");

        let duplicate = DemoStage::builder()
            .construct_id("DemoDeployStage")
            .config(config())
            .build(&mut app);

        assert!(duplicate.is_err());
    }

    #[test]
    fn missing_config_fails_before_anything_is_registered() {
        let mut app = App::new();

        let result = DemoStage::builder()
            .construct_id("DemoDeployStage")
            .build(&mut app);

        assert!(result.is_err());
        assert!(!app.contains(&NodePath::root("DemoDeployStage")));
    }

    #[test]
    fn identical_inputs_synthesize_identical_stacks() {
        let mut app = App::new();
        let first = stage(&mut app, "DemoDeployStage");
        let second = stage(&mut app, "AnotherDemoDeployStage");

        assert_eq!(first.frontend_stack.synth(), second.frontend_stack.synth());
        assert_eq!(first.frontend_stack.tags(), second.frontend_stack.tags());
    }
}
