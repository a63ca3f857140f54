use std::path::Path;

use anyhow::Result;

use golosus_core::catalog::{self, RenderedFolder, ROOT_FOLDER};
use golosus_core::config::GeneratorConfig;
use golosus_core::project::ProjectSpec;

use crate::output;

/// Show what `golosus new` would generate, without touching the filesystem.
pub fn run(name: &str, author: Option<String>, config: &GeneratorConfig) -> Result<()> {
    let author = super::new::resolve_author(author, config)
        .ok_or_else(|| anyhow::anyhow!("author is required; pass --author or set it in the config file"))?;
    let spec = ProjectSpec::new(name, &author)?;
    let folders = catalog::render(&spec)?;

    output::print_header(&format!("golosus plan: {}", spec.name()));
    output::print_key_value("Module", &spec.module_path());
    println!();
    for line in plan_lines(Path::new(spec.name()), &folders) {
        println!("  {line}");
    }
    println!();

    let total: usize = folders.iter().map(|f| f.files.len()).sum();
    output::print_success(&format!(
        "{} directories, {} files (nothing written)",
        folders.len(),
        total
    ));
    Ok(())
}

/// One line per folder and file, in the order they would be created.
fn plan_lines(root: &Path, folders: &[RenderedFolder]) -> Vec<String> {
    let mut lines = Vec::new();
    for folder in folders {
        if folder.folder != ROOT_FOLDER {
            let suffix = if is_empty_leaf(folder, folders) { "  (empty)" } else { "" };
            lines.push(format!("{}/{suffix}", root.join(folder.folder).display()));
        }
        for file in &folder.files {
            lines.push(format!(
                "{}  ({} bytes)",
                root.join(folder.file_path(file)).display(),
                file.content.len()
            ));
        }
    }
    lines
}

/// A folder stays empty when it has no files and no other folder nests inside it.
fn is_empty_leaf(folder: &RenderedFolder, folders: &[RenderedFolder]) -> bool {
    let prefix = format!("{}/", folder.folder);
    folder.files.is_empty() && !folders.iter().any(|f| f.folder.starts_with(&prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_lists_every_entry() {
        let spec = ProjectSpec::new("demo", "octocat").unwrap();
        let folders = catalog::render(&spec).unwrap();
        let lines = plan_lines(Path::new("demo"), &folders);

        // every folder except the root, plus every file
        assert_eq!(
            lines.len(),
            catalog::FOLDERS.len() - 1 + catalog::TEMPLATES.len()
        );
        assert_eq!(lines[0], "demo/assets/");
        assert!(lines.contains(&"demo/assets/jscode/  (empty)".to_string()));
        assert!(lines.contains(&"demo/assets/bundled/  (empty)".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("demo/go.mod  (")));
    }

    #[test]
    fn test_parent_folders_not_marked_empty() {
        let spec = ProjectSpec::new("demo", "octocat").unwrap();
        let folders = catalog::render(&spec).unwrap();
        let lines = plan_lines(Path::new("demo"), &folders);

        assert!(lines.contains(&"demo/view/".to_string()));
        let empty: Vec<_> = lines.iter().filter(|l| l.ends_with("(empty)")).collect();
        assert_eq!(empty, ["demo/assets/jscode/  (empty)", "demo/assets/bundled/  (empty)"]);
    }

    #[test]
    fn test_plan_requires_author() {
        let err = run("demo", None, &GeneratorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("author is required"));
    }
}
