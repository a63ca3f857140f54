use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::Input;

use golosus_core::catalog;
use golosus_core::config::GeneratorConfig;
use golosus_core::materializer;
use golosus_core::project::{self, ProjectSpec};

use crate::output;

/// Generate a new project.
///
/// Missing values are taken from the config file, then prompted for when a
/// terminal is attached. The tree is written under `<output_dir>/<name>/`;
/// an existing tree is updated in place, overwriting the generated files.
pub fn run(
    name: Option<String>,
    author: Option<String>,
    output_dir: Option<PathBuf>,
    config: &GeneratorConfig,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => prompt("Project name", project::validate_name)?,
    };
    let author = match resolve_author(author, config) {
        Some(a) => a,
        None => prompt("GitHub profile (author)", project::validate_author)?,
    };
    let spec = ProjectSpec::new(&name, &author)?;
    let parent = resolve_output_dir(output_dir, config);

    output::print_header(&format!("golosus new: {}", spec.name()));
    output::print_key_value("Module", &spec.module_path());

    output::print_step(1, 2, "Rendering templates");
    let folders = catalog::render(&spec)?;

    let root = parent.join(spec.name());
    output::print_step(2, 2, &format!("Writing project tree: {}/", root.display()));
    let report = materializer::write_tree(&root, &folders)?;

    if report.root_existed {
        output::print_warning(&format!(
            "{} already existed; generated files were overwritten, other files left untouched",
            root.display()
        ));
    }
    output::print_success(&format!(
        "Project '{}' created ({} directories, {} files)",
        spec.name(),
        report.directories.len(),
        report.files.len()
    ));
    println!();
    println!("  Next steps:");
    println!("    cd {}", root.display());
    println!("    make init");
    println!("    make run");
    println!();

    Ok(())
}

/// Command-line author first, then the config file.
pub fn resolve_author(flag: Option<String>, config: &GeneratorConfig) -> Option<String> {
    flag.or_else(|| config.author.clone())
}

/// Command-line directory first, then the config file, then the working directory.
pub fn resolve_output_dir(flag: Option<PathBuf>, config: &GeneratorConfig) -> PathBuf {
    flag.or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| Path::new(".").to_path_buf())
}

/// Ask for a value on the terminal, re-prompting until `validate` accepts it.
fn prompt(label: &str, validate: fn(&str) -> golosus_core::error::Result<()>) -> Result<String> {
    if !console::user_attended() {
        anyhow::bail!("{label} is required; pass it on the command line");
    }
    let value: String = Input::new()
        .with_prompt(label)
        .validate_with(|input: &String| validate(input.trim()).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_config() {
        let config = GeneratorConfig {
            author: Some("from-config".into()),
            output_dir: Some(PathBuf::from("cfg-dir")),
        };
        assert_eq!(
            resolve_author(Some("flag".into()), &config).as_deref(),
            Some("flag")
        );
        assert_eq!(
            resolve_output_dir(Some(PathBuf::from("flag-dir")), &config),
            PathBuf::from("flag-dir")
        );
    }

    #[test]
    fn test_config_fallback() {
        let config = GeneratorConfig {
            author: Some("octocat".into()),
            output_dir: Some(PathBuf::from("projects")),
        };
        assert_eq!(resolve_author(None, &config).as_deref(), Some("octocat"));
        assert_eq!(resolve_output_dir(None, &config), PathBuf::from("projects"));
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert!(resolve_author(None, &config).is_none());
        assert_eq!(resolve_output_dir(None, &config), PathBuf::from("."));
    }

    #[test]
    fn test_run_generates_project() {
        let dir = tempfile::tempdir().unwrap();
        run(
            Some("demo".into()),
            Some("octocat".into()),
            Some(dir.path().to_path_buf()),
            &GeneratorConfig::default(),
        )
        .unwrap();

        let main = std::fs::read_to_string(dir.path().join("demo/cmd/main.go")).unwrap();
        assert!(main.contains("github.com/octocat/demo/handler"));
        assert!(dir.path().join("demo/assets/bundled").is_dir());
    }

    #[test]
    fn test_run_rejects_invalid_name_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            Some("../escape".into()),
            Some("octocat".into()),
            Some(dir.path().to_path_buf()),
            &GeneratorConfig::default(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("invalid project name"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
