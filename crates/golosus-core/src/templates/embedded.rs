//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a file from `templates/scaffold/` via [`include_str!`]. The
//! paths are relative to this source file (`crates/golosus-core/src/templates/embedded.rs`).
//! Files ending in `.tmpl` contain Handlebars variables; the others are copied verbatim
//! but still pass through the renderer, so they must not contain `{{`.
//!
//! ## Adding a new template
//!
//! 1. Place the file under `templates/scaffold/`
//! 2. Add a `pub const` here with `include_str!("../../../../templates/scaffold/<path>")`
//! 3. Register it in [`crate::catalog::TEMPLATES`]

// -------------------------------------------------------
// Go sources
// -------------------------------------------------------

pub const MAIN_GO: &str = include_str!("../../../../templates/scaffold/cmd/main.go.tmpl");
pub const HANDLER_UTIL_GO: &str = include_str!("../../../../templates/scaffold/handler/util.go");
pub const HANDLER_EXAMPLE_GO: &str = include_str!("../../../../templates/scaffold/handler/example.go.tmpl");
pub const MODEL_EXAMPLE_GO: &str = include_str!("../../../../templates/scaffold/model/example.go");

// -------------------------------------------------------
// templ views
// -------------------------------------------------------

pub const LAYOUT_BASE_TEMPL: &str = include_str!("../../../../templates/scaffold/view/layout/base.templ.tmpl");
pub const VIEW_EXAMPLE_TEMPL: &str = include_str!("../../../../templates/scaffold/view/example/example.templ.tmpl");
pub const COMPONENT_INPUT_TEMPL: &str = include_str!("../../../../templates/scaffold/view/components/input.templ");

// -------------------------------------------------------
// Build and tooling files
// -------------------------------------------------------

pub const GO_MOD: &str = include_str!("../../../../templates/scaffold/root/go.mod.tmpl");
pub const MAKEFILE: &str = include_str!("../../../../templates/scaffold/root/Makefile");
pub const AIR_TOML: &str = include_str!("../../../../templates/scaffold/root/air.toml");

// -------------------------------------------------------
// Front-end
// -------------------------------------------------------

pub const TSCONFIG_JSON: &str = include_str!("../../../../templates/scaffold/typescript/tsconfig.json");
pub const INDEX_TS: &str = include_str!("../../../../templates/scaffold/typescript/index.ts");
pub const SCRIPTS_TS: &str = include_str!("../../../../templates/scaffold/typescript/scripts.ts");
pub const PACKAGE_JSON: &str = include_str!("../../../../templates/scaffold/typescript/package.json.tmpl");
