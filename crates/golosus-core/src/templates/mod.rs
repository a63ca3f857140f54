//! Template system for golosus project scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Every template is rendered against the same data context:
//! - `{{name}}` — project name (directory, page title, npm package name)
//! - `{{author}}` — author identifier
//! - `{{module_path}}` — Go module path, `github.com/<author>/<name>`
//! - `{{package_name}}` — npm package name (the project name lowercased)
//! - `{{go_version}}`, `{{templ_version}}`, `{{echo_version}}`, `{{htmx_version}}` — version pins
//!
//! **Warning**: Template files in `templates/scaffold/` and constants in [`embedded`] must
//! stay in sync. The `include_str!` paths are relative to that file and checked at compile-time.

pub mod embedded;
pub mod renderer;
