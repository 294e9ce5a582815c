//! Command line arguments, input collection and output rendering

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use lemmata::LemmataConfig;
use lemmata::config::{ENV_LEMMA_FALLBACK, ENV_MODEL_DIR, LemmaFallback, LogLevel, LoggingConfig};

/// Prints the lemmas of the content words of a Portuguese or English text, one per line.
///
/// Without TEXT the input is read from standard input.
#[derive(Debug, Parser)]
#[command(name = "lemmata", version)]
pub struct Args {
  /// Text to lemmatize (words are joined with single spaces)
  #[arg(value_name = "TEXT", trailing_var_arg = true, allow_hyphen_values = true)]
  pub text: Vec<String>,

  /// Directory holding `<code>/lemma_lookup.json` tables
  #[arg(long, value_name = "DIR", env = ENV_MODEL_DIR)]
  pub model_dir: Option<PathBuf>,

  /// Language code to use instead of detection (unsupported codes use the default language)
  #[arg(long, value_name = "CODE")]
  pub language: Option<String>,

  /// Lemma for words missing from the table (surface or stem)
  #[arg(long, value_name = "MODE", env = ENV_LEMMA_FALLBACK, value_parser = parse_fallback)]
  pub fallback: Option<LemmaFallback>,

  /// Print the language used to standard error
  #[arg(long)]
  pub show_language: bool,
}

fn parse_fallback(value: &str) -> Result<LemmaFallback, String> {
  value.parse().map_err(|e: lemmata::errors::ConfigError| e.to_string())
}

impl Args {
  /// Library configuration: CLI defaults (`warn` logging), `LEMMATA_*` environment
  /// variables, then command line flags
  ///
  /// # Errors
  /// Returns an error if an environment variable holds an invalid value
  pub fn lemmata_config(&self) -> anyhow::Result<LemmataConfig> {
    self.lemmata_config_with(|key| std::env::var(key).ok())
  }

  /// Like [`lemmata_config`](Self::lemmata_config), reading variables through `lookup`
  ///
  /// # Errors
  /// Returns an error if a variable holds an invalid value
  pub fn lemmata_config_with<F>(&self, lookup: F) -> anyhow::Result<LemmataConfig>
  where
    F: Fn(&str) -> Option<String>,
  {
    let base =
      LemmataConfig { logging: LoggingConfig { level: LogLevel::Warn }, ..Default::default() };
    let mut config = base.with_env(lookup).context("invalid LEMMATA_* environment variable")?;

    if let Some(dir) = &self.model_dir {
      config.model.model_dir = Some(dir.clone());
    }
    if let Some(fallback) = self.fallback {
      config.model.fallback = fallback;
    }

    Ok(config)
  }
}

/// Where the text came from; decides the output convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
  /// Joined positional arguments
  Args(String),
  /// Standard input with trailing whitespace removed
  Stdin(String),
}

impl Input {
  /// Builds the input from positional arguments, or from `reader` when there are none
  ///
  /// # Errors
  /// Returns an error if `reader` cannot be read
  pub fn collect<R: Read>(args: &[String], mut reader: R) -> anyhow::Result<Self> {
    if !args.is_empty() {
      return Ok(Input::Args(args.join(" ")));
    }

    let mut buffer = String::new();
    reader.read_to_string(&mut buffer).context("failed to read standard input")?;
    Ok(Input::Stdin(buffer.trim_end().to_string()))
  }

  /// Input text
  pub fn text(&self) -> &str {
    match self {
      Input::Args(text) | Input::Stdin(text) => text,
    }
  }

  /// Lemmas joined by newlines. Argument mode ends with a newline, stdin mode does not.
  pub fn render(&self, lemmas: &[String]) -> String {
    let body = lemmas.join("\n");
    match self {
      Input::Args(_) => body + "\n",
      Input::Stdin(_) => body,
    }
  }
}
