use anyhow::Context;
use clap::Parser;
use std::io;
use tracing::info;
use vclass_classroom::ClassroomRegistry;
use vclass_console::args::Cli;
use vclass_console::{Console, init_logging};
use vclass_kernel::config::load_config;
use vclass_kernel::domain::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: AppConfig = load_config(cli.config.as_deref())?;
    cli.apply(&mut config.logging);
    let _logger = init_logging(&config.logging).context("Failed to initialize logging")?;

    let registry = ClassroomRegistry::new();
    let exit = Console::new(&registry, io::stdin().lock(), io::stdout().lock()).run()?;

    info!(?exit, classrooms = registry.len(), "Console session ended");
    Ok(())
}
