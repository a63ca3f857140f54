//! Core library for the golosus project generator.
//!
//! Maps a validated [`project::ProjectSpec`] (project name and author) to a fixed,
//! ordered set of files and writes them to disk:
//!
//! - [`catalog`] — the static folder and template tables, rendered purely in memory
//! - [`materializer`] — creates the folders, then writes the files, failing fast
//! - [`templates`] — embedded template sources and the Handlebars renderer
//!
//! The crate never prompts, prints or exits; how the name and author are obtained
//! is up to the caller.

pub mod catalog;
pub mod config;
pub mod error;
pub mod materializer;
pub mod project;
pub mod templates;
