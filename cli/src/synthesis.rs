use eyre::Context;
use igvf_constructs::Stack;
use std::path::{Path, PathBuf};

/// Write the stack template into the output directory
///
/// Returns the path of the written template file.
pub(crate) fn write_stack(out: &Path, stack: &Stack) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(out)
        .wrap_err_with(|| format!("Failed to create output directory {}", out.display()))?;

    let path = out.join(format!("{}.template.json", stack.name()));
    let template = serde_json::to_string_pretty(&stack.synth())?;

    std::fs::write(&path, template)
        .wrap_err_with(|| format!("Failed to write template to {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use igvf_constructs::existing::igvf_dev;
    use igvf_constructs::NodePath;

    #[test]
    fn writes_the_template_file() {
        let out = tempfile::tempdir().unwrap();

        let stack = Stack::new(
            NodePath::root("Stage").child("FrontendStack"),
            "FrontendStack",
            igvf_dev::US_WEST_2,
        );

        let path = write_stack(out.path(), &stack).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "FrontendStack.template.json"
        );

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, stack.synth());
    }
}
