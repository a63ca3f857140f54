//! Writes a rendered catalog to disk.
//!
//! Generation runs in two phases, strictly in catalog order:
//!
//! 1. **Directories**: every folder of [`catalog::FOLDERS`] is created recursively.
//!    Existing directories are not an error.
//! 2. **Files**: for each folder in order, each of its files is created (or
//!    truncated) and then written in full.
//!
//! The first failure aborts the run. Nothing is rolled back: a failed run can
//! leave a partially populated tree, and re-running after fixing the cause is
//! safe because directory creation is idempotent and files are overwritten.
//! Two runs against the same root at the same time race; callers must not do
//! that.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::{self, RenderedFolder, ROOT_FOLDER};
use crate::error::{GolosusError, Result};
use crate::project::ProjectSpec;

/// What a successful run created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Project root (`<parent>/<name>`).
    pub root: PathBuf,
    /// Whether the root already existed before the run; its files were overwritten.
    pub root_existed: bool,
    /// Directories ensured, in creation order.
    pub directories: Vec<PathBuf>,
    /// Files written, in write order.
    pub files: Vec<PathBuf>,
}

/// Render the catalog for `spec` and write it under `<parent>/<name>/`.
pub fn materialize(parent: &Path, spec: &ProjectSpec) -> Result<Report> {
    let folders = catalog::render(spec)?;
    write_tree(&parent.join(spec.name()), &folders)
}

/// Write already-rendered folders under `root`.
pub fn write_tree(root: &Path, folders: &[RenderedFolder]) -> Result<Report> {
    let root_existed = root.exists();
    if root_existed {
        tracing::warn!(root = %root.display(), "project directory exists, overwriting generated files");
    }

    tracing::info!(root = %root.display(), count = folders.len(), "creating directories");
    let directories = create_dirs(root, folders)?;

    tracing::info!(root = %root.display(), "writing files");
    let files = write_files(root, folders)?;

    Ok(Report {
        root: root.to_path_buf(),
        root_existed,
        directories,
        files,
    })
}

/// Phase 1: create every folder under `root`. Safe to call repeatedly.
pub fn create_dirs(root: &Path, folders: &[RenderedFolder]) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(folders.len());
    for folder in folders {
        let path = folder_path(root, folder.folder);
        std::fs::create_dir_all(&path).map_err(|source| GolosusError::DirectoryCreation {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "directory ready");
        created.push(path);
    }
    Ok(created)
}

/// Phase 2: write every file under `root`, stopping at the first failure.
pub fn write_files(root: &Path, folders: &[RenderedFolder]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for folder in folders {
        for file in &folder.files {
            let path = root.join(folder.file_path(file));
            write_file(&path, &file.content)?;
            tracing::debug!(path = %path.display(), bytes = file.content.len(), "file written");
            written.push(path);
        }
    }
    Ok(written)
}

/// Create or truncate `path`, then write `content` to it.
fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|source| GolosusError::FileCreation {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(content.as_bytes())
        .map_err(|source| GolosusError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
}

fn folder_path(root: &Path, folder: &str) -> PathBuf {
    if folder == ROOT_FOLDER {
        root.to_path_buf()
    } else {
        root.join(folder)
    }
}
