use std::collections::HashSet;

/// Root of the construct tree
///
/// Every stage and stack registers its path here before it is built. The tree
/// is assembled synchronously through `&mut` access, one construct at a time.
#[derive(Debug, Default)]
pub struct App {
    paths: HashSet<NodePath>,
}

/// Slash-joined path of construct ids from the root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(String);

impl NodePath {
    pub fn root(id: &str) -> Self {
        NodePath(id.to_string())
    }

    pub fn child(&self, id: &str) -> Self {
        NodePath(format!("{}/{}", self.0, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl App {
    pub fn new() -> Self {
        App::default()
    }

    /// Register a construct path in the tree
    ///
    /// Fails when the path is already taken, which is how two siblings with
    /// the same construct id are rejected.
    pub fn register(&mut self, path: NodePath) -> eyre::Result<NodePath> {
        if !self.paths.insert(path.clone()) {
            return Err(eyre::eyre!("Construct id is already in use: {path}"));
        }

        Ok(path)
    }

    pub fn contains(&self, path: &NodePath) -> bool {
        self.paths.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_distinct_paths() {
        let mut app = App::new();
        let stage = app.register(NodePath::root("Stage")).unwrap();
        app.register(stage.child("Stack")).unwrap();

        assert!(app.contains(&NodePath::root("Stage")));
        assert!(app.contains(&NodePath::root("Stage").child("Stack")));
    }

    #[test]
    fn rejects_duplicate_path() {
        let mut app = App::new();
        app.register(NodePath::root("Stage")).unwrap();

        let duplicate = app.register(NodePath::root("Stage"));
        assert!(duplicate.is_err());
    }

    #[test]
    fn same_id_under_different_parents_is_allowed() {
        let mut app = App::new();
        let a = app.register(NodePath::root("A")).unwrap();
        let b = app.register(NodePath::root("B")).unwrap();

        app.register(a.child("Stack")).unwrap();
        app.register(b.child("Stack")).unwrap();
    }
}
