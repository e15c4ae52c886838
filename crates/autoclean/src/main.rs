mod cli;

use std::path::Path;
use std::sync::Arc;

use clap::Parser as ClapParser;
use colored::*;
use autoclean_config::{AutocleanConfig, DumpKind};
use autoclean_driver::{DriverError, compile_file, load_config};

use cli::{Cli, ExpandCommand, SubCommand};

const DEFAULT_CONFIG_FILE: &str = "autoclean.toml";

fn parse_cli_to_config(cli: &Cli) -> Result<Arc<AutocleanConfig>, DriverError> {
  let mut config = AutocleanConfig::new_basic(
    cli.debug,
    cli.debug_trace.iter().copied().map(Into::into).collect(),
    cli.quiet,
    cli.verbose,
  );

  config.dump = cli.dump.iter().copied().map(Into::into).collect();
  if config.dump.is_empty() {
    config.dump.push(DumpKind::Tree);
  }

  match &cli.subcommand {
    SubCommand::Expand(expand) => {
      if let Some(options) = cleanup_options(expand)? {
        config.cleanup = options;
      }

      if expand.no_usage_check {
        config.cleanup.check_usage = false;
      }
    },
  }

  Ok(Arc::new(config))
}

/// An explicit `--config` must exist; the default file is optional.
fn cleanup_options(expand: &ExpandCommand) -> Result<Option<autoclean_config::CleanupOptions>, DriverError> {
  match &expand.config {
    Some(path) => load_config(Path::new(path)).map(Some),
    None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_config(Path::new(DEFAULT_CONFIG_FILE)).map(Some),
    None => Ok(None),
  }
}

fn run(cli: &Cli) -> Result<(), DriverError> {
  let config = parse_cli_to_config(cli)?;

  match &cli.subcommand {
    SubCommand::Expand(expand) => compile_file(config, &expand.file_path).map(|_| ()),
  }
}

fn main() {
  let cli = Cli::parse();

  if let Err(err) = run(&cli) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    std::process::exit(1);
  }
}
