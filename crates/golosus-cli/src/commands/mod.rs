//! CLI command implementations for golosus.
//!
//! `new` and `plan` correspond to subcommands; `menu` runs when none is given.

pub mod menu;
pub mod new;
pub mod plan;
