//! The static table of folders and files that make up a generated project.
//!
//! [`FOLDERS`] declares every directory of the project in creation order, and
//! [`TEMPLATES`] declares every file as a `(folder, file name, template)` record.
//! [`render`] turns both tables into the ordered, fully rendered file set for one
//! [`ProjectSpec`]. Rendering is pure: no I/O, no clock, no randomness, so the
//! same spec always yields byte-identical output.
//!
//! ## Generated layout
//!
//! ```text
//! <name>/
//! ├── go.mod  Makefile  .air.toml
//! ├── cmd/main.go                   # echo server and routes
//! ├── handler/{util,example}.go     # render helper, GET/POST handlers
//! ├── model/example.go
//! ├── view/layout/base.templ        # page shell with CDN scripts
//! ├── view/example/example.templ
//! ├── view/components/input.templ
//! ├── typescript/{tsconfig.json,index.ts,scripts.ts,package.json}
//! └── assets/{jscode,bundled}/      # empty until `make run`
//! ```

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::error::Result;
use crate::project::ProjectSpec;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Go toolchain version written to `go.mod`.
pub const GO_VERSION: &str = "1.22.0";
/// `github.com/a-h/templ` version written to `go.mod`.
pub const TEMPL_VERSION: &str = "0.2.543";
/// `github.com/labstack/echo/v4` version written to `go.mod`.
pub const ECHO_VERSION: &str = "4.11.4";
/// htmx release loaded from the CDN by the base layout.
pub const HTMX_VERSION: &str = "1.9.10";

/// Folder used for files placed directly in the project root.
pub const ROOT_FOLDER: &str = ".";

/// Every project folder, relative to the project root, in creation order.
///
/// Folders are independent of each other; the only ordering requirement is that
/// all of them exist before the first file is written.
pub const FOLDERS: &[&str] = &[
    "assets",
    "assets/jscode",
    "assets/bundled",
    "cmd",
    "view",
    "model",
    "handler",
    "view/components",
    "view/layout",
    "view/example",
    "typescript",
    ROOT_FOLDER,
];

/// One generated file: where it goes and which template produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDef {
    /// Folder relative to the project root; must appear in [`FOLDERS`].
    pub folder: &'static str,
    pub file_name: &'static str,
    /// Handlebars source, rendered against the context built by [`context`].
    pub template: &'static str,
}

const fn def(folder: &'static str, file_name: &'static str, template: &'static str) -> TemplateDef {
    TemplateDef {
        folder,
        file_name,
        template,
    }
}

/// Every project file. Within a folder, files are written in this order.
pub const TEMPLATES: &[TemplateDef] = &[
    def("cmd", "main.go", embedded::MAIN_GO),
    def("view/layout", "base.templ", embedded::LAYOUT_BASE_TEMPL),
    def("view/example", "example.templ", embedded::VIEW_EXAMPLE_TEMPL),
    def("view/components", "input.templ", embedded::COMPONENT_INPUT_TEMPL),
    def("handler", "util.go", embedded::HANDLER_UTIL_GO),
    def("handler", "example.go", embedded::HANDLER_EXAMPLE_GO),
    def("model", "example.go", embedded::MODEL_EXAMPLE_GO),
    def(ROOT_FOLDER, "go.mod", embedded::GO_MOD),
    def(ROOT_FOLDER, "Makefile", embedded::MAKEFILE),
    def(ROOT_FOLDER, ".air.toml", embedded::AIR_TOML),
    def("typescript", "tsconfig.json", embedded::TSCONFIG_JSON),
    def("typescript", "index.ts", embedded::INDEX_TS),
    def("typescript", "scripts.ts", embedded::SCRIPTS_TS),
    def("typescript", "package.json", embedded::PACKAGE_JSON),
];

/// A rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: &'static str,
    pub content: String,
}

/// A folder together with its rendered files, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFolder {
    pub folder: &'static str,
    pub files: Vec<RenderedFile>,
}

impl RenderedFolder {
    /// Path of `file` relative to the project root (`go.mod`, not `./go.mod`).
    pub fn file_path(&self, file: &RenderedFile) -> PathBuf {
        relative_path(self.folder, file.file_name)
    }
}

/// Join a catalog folder and file name into a project-relative path.
pub fn relative_path(folder: &str, file_name: &str) -> PathBuf {
    if folder == ROOT_FOLDER {
        PathBuf::from(file_name)
    } else {
        Path::new(folder).join(file_name)
    }
}

/// Templates declared for `folder`, in declaration order.
pub fn templates_in(folder: &str) -> impl Iterator<Item = &'static TemplateDef> + '_ {
    TEMPLATES.iter().filter(move |t| t.folder == folder)
}

/// Build the data context shared by every template.
pub fn context(spec: &ProjectSpec) -> Value {
    json!({
        "name": spec.name(),
        "author": spec.author(),
        "module_path": spec.module_path(),
        "package_name": spec.name().to_ascii_lowercase(),
        "go_version": GO_VERSION,
        "templ_version": TEMPL_VERSION,
        "echo_version": ECHO_VERSION,
        "htmx_version": HTMX_VERSION,
    })
}

/// Render the whole catalog for `spec`.
///
/// Returns every folder of [`FOLDERS`] in order, each with its files in
/// [`TEMPLATES`] order; folders without files are included with an empty list.
/// An error is only possible if an embedded template references a variable that
/// [`context`] does not supply.
pub fn render(spec: &ProjectSpec) -> Result<Vec<RenderedFolder>> {
    let renderer = TemplateRenderer::new();
    let data = context(spec);

    FOLDERS
        .iter()
        .map(|&folder| -> Result<RenderedFolder> {
            let files = templates_in(folder)
                .map(|t| -> Result<RenderedFile> {
                    Ok(RenderedFile {
                        file_name: t.file_name,
                        content: renderer.render(t.template, &data)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(RenderedFolder { folder, files })
        })
        .collect()
}
