//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::catalogue::Demo;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::structural::composite;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::List) => list(),
        Some(Commands::Run { demos, all }) => {
            let settings = Settings::load(cli.config.as_deref())?;
            run(&settings, demos, *all)
        }
        Some(Commands::Tree) => tree(),
        Some(Commands::Config) => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given, try --help".to_string(),
        )),
    }
}

fn list() -> CliResult<()> {
    for demo in Demo::all() {
        output::action(&demo.id(), demo.title());
        output::detail(&demo.family());
    }
    Ok(())
}

#[instrument(skip(settings))]
fn run(settings: &Settings, demos: &[Demo], all: bool) -> CliResult<()> {
    let selected: &[Demo] = if all { Demo::all() } else { demos };
    debug!("selected: {:?}", selected);
    for (i, demo) in selected.iter().enumerate() {
        if i > 0 {
            output::info("");
        }
        let transcript = demo.run(settings)?;
        output::header(&format!("== {} ({}) ==", demo.title(), demo.family()));
        for line in transcript.lines() {
            output::info(line);
        }
    }
    Ok(())
}

fn tree() -> CliResult<()> {
    let (tree, root) = composite::reference_tree()?;
    output::info(&tree.render(root)?);
    output::action("operation", &tree.operation(root)?);
    Ok(())
}
