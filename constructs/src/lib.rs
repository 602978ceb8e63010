pub mod app;
pub mod config;
pub mod environment;
pub mod existing;
pub mod frontend;
pub mod stack;
pub mod stage;
pub mod tags;

pub use app::{App, NodePath};
pub use config::Config;
pub use environment::Environment;
pub use existing::ExistingResources;
pub use stack::Stack;
pub use stage::DemoStage;
pub use tags::Tag;
