use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::model::Mode;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Mortgage repayment calculator.
///
/// Runs an interactive terminal form by default; `calc` computes the same
/// figures from flags and prints them.
#[derive(Debug, Parser)]
#[command(name = "mortgage-calc", version)]
pub struct Cli {
    /// Log filter: a bare level ("info", "debug", ...) or a full
    /// `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    #[arg(long, global = true, env = "MORTGAGE_CALC_LOG", default_value = "info")]
    pub log_level: String,

    /// Append log records to this file. Without it the interactive form
    /// discards logs so they cannot draw over the screen.
    #[arg(long, global = true, env = "MORTGAGE_CALC_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Open the interactive form (default).
    Tui,
    /// Calculate once from flags and print the result.
    Calc(CalcArgs),
}

/// Flags for the headless calculation. Omitted flags count as blank fields.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct CalcArgs {
    /// Loan principal in pounds.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Term in years.
    #[arg(long, allow_hyphen_values = true)]
    pub term: Option<String>,

    /// Annual interest rate in percent.
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    #[arg(long, value_enum, default_value_t = Mode::Repayment)]
    pub mode: Mode,

    /// Print the raw figures as JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

// ─── resolved settings ───────────────────────────────────────────────────────

/// Settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
    pub command: Command,
}

impl Config {
    /// Validates the CLI and fills in defaults.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let log_filter = cli.log_level.trim().to_ascii_lowercase();
        EnvFilter::try_new(&log_filter).map_err(|e| ConfigError::InvalidLogFilter {
            directive: cli.log_level.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            log_filter,
            log_file: cli.log_file,
            command: cli.command.unwrap_or(Command::Tui),
        })
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.command, Command::Tui)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(args: &[&str]) -> Config {
        let cli = Cli::try_parse_from(args).unwrap();
        Config::from_cli(cli).unwrap()
    }

    #[test]
    fn defaults_to_interactive_form() {
        let config = config(&["mortgage-calc"]);

        assert_eq!(config.command, Command::Tui);
        assert!(config.is_interactive());
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn parses_calc_flags() {
        let config = config(&[
            "mortgage-calc",
            "calc",
            "--amount",
            "200000",
            "--term",
            "25",
            "--rate",
            "5",
            "--mode",
            "interest-only",
            "--json",
        ]);

        assert_eq!(
            config.command,
            Command::Calc(CalcArgs {
                amount: Some("200000".into()),
                term: Some("25".into()),
                rate: Some("5".into()),
                mode: Mode::InterestOnly,
                json: true,
            })
        );
        assert!(!config.is_interactive());
    }

    #[test]
    fn calc_mode_defaults_to_repayment() {
        let config = config(&["mortgage-calc", "calc", "--amount", "1"]);

        let Command::Calc(args) = config.command else {
            panic!("expected calc command");
        };
        assert_eq!(args.mode, Mode::Repayment);
        assert_eq!(args.term, None);
    }

    #[test]
    fn log_level_is_normalised() {
        let config = config(&["mortgage-calc", "--log-level", " DEBUG "]);

        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn rejects_bad_log_filter() {
        let cli =
            Cli::try_parse_from(["mortgage-calc", "--log-level", "mortgage_calc=loud"]).unwrap();

        let err = Config::from_cli(cli).unwrap_err();

        assert!(err.to_string().starts_with("invalid log filter"));
    }
}
