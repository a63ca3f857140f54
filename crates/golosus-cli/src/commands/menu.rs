use anyhow::Result;
use dialoguer::Select;

use golosus_core::config::GeneratorConfig;

use crate::output;

const MENU_ITEMS: &[&str] = &["Create a new project", "Exit"];

/// Interactive entry point used when no subcommand is given.
pub fn run(config: &GeneratorConfig) -> Result<()> {
    if !console::user_attended() {
        anyhow::bail!("no terminal attached; use `golosus new <NAME> --author <AUTHOR>`");
    }

    output::print_header("Welcome to golosus");
    let selection = Select::new()
        .with_prompt("Please select an option")
        .items(MENU_ITEMS)
        .default(0)
        .interact()?;

    match selection {
        0 => super::new::run(None, None, None, config),
        _ => {
            println!("Exiting golosus");
            Ok(())
        }
    }
}
