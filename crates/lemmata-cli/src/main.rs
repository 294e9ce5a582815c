//! `lemmata` command line entry point

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lemmata::{LemmataConfig, LemmataService};

use crate::cli::{Args, Input};

/// Environment variable holding the `EnvFilter` directives
const ENV_LOG: &str = "LEMMATA_LOG";

fn main() -> ExitCode {
  let args = Args::parse();

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("fatal error: {err:#}");
      ExitCode::FAILURE
    }
  }
}

/// Logs go to stderr so stdout only carries lemmas.
/// `LEMMATA_LOG` directives win over the configured level.
fn init_logging(config: &LemmataConfig) {
  let level = config.log_level();
  let filter =
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
  let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
  tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

fn run(args: &Args) -> anyhow::Result<()> {
  let config = args.lemmata_config()?;
  init_logging(&config);

  let input = Input::collect(&args.text, io::stdin().lock())?;
  let service = LemmataService::init(&config)?;

  let analysis = service.analyze_with_language(input.text(), args.language.as_deref())?;

  if args.show_language {
    eprintln!("language: {}", analysis.language);
  }

  let mut stdout = io::stdout().lock();
  stdout.write_all(input.render(&analysis.lemmas).as_bytes()).context("failed to write output")?;
  stdout.flush().context("failed to write output")?;

  Ok(())
}
