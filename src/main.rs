//! Pace & Time Calculator - Entry Point

use clap::{Parser, Subcommand};
use pacetime::model::{AppError, Calculation, LogKind};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Pace & Time Calculator - running arithmetic on times and distances
#[derive(Parser, Debug)]
#[command(name = "pacetime")]
#[command(version)]
#[command(about = "Add and subtract times, and derive pace, time or distance")]
pub struct Args {
    /// Calculate once and print the result instead of starting the TUI
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Start with the calculation log hidden
    #[arg(long)]
    pub hide_log: bool,
}

/// One-shot calculations.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add two times: LEFT + RIGHT
    Add {
        /// Timestamp (SS, MM:SS or HH:MM:SS)
        left: String,
        /// Timestamp (SS, MM:SS or HH:MM:SS)
        right: String,
    },

    /// Subtract two times: LEFT - RIGHT
    #[command(alias = "subtract")]
    Sub {
        /// Timestamp (SS, MM:SS or HH:MM:SS)
        left: String,
        /// Timestamp (SS, MM:SS or HH:MM:SS)
        right: String,
    },

    /// Pace per unit of distance from an overall time and distance
    Pace {
        /// Overall time
        time: String,
        /// Overall distance
        distance: String,
    },

    /// Overall time from a pace and distance
    Time {
        /// Pace per unit of distance
        pace: String,
        /// Overall distance
        distance: String,
    },

    /// Overall distance from a time and pace
    Distance {
        /// Overall time
        time: String,
        /// Pace per unit of distance
        pace: String,
    },
}

impl Command {
    /// The calculation this command asks for.
    pub fn calculation(&self) -> Calculation<'_> {
        match self {
            Command::Add { left, right } => Calculation::new(LogKind::Add, left, right),
            Command::Sub { left, right } => Calculation::new(LogKind::Subtract, left, right),
            Command::Pace { time, distance } => Calculation::new(LogKind::Pace, time, distance),
            Command::Time { pace, distance } => Calculation::new(LogKind::Time, pace, distance),
            Command::Distance { time, pace } => Calculation::new(LogKind::Distance, time, pace),
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    // One-shot mode never touches the terminal, config or log file
    if let Some(command) = &args.command {
        return Ok(match command.calculation().evaluate() {
            Ok(result) => {
                println!("{result}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        });
    }

    start_tui(&args)?;
    Ok(ExitCode::SUCCESS)
}

fn start_tui(args: &Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pacetime::config::load_config_with_precedence(args.config.clone())?;
        let merged = pacetime::config::merge_config(config_file);
        let with_env = pacetime::config::apply_env_overrides(merged);

        // Only an explicit --hide-log overrides the file
        let show_log_override = if args.hide_log { Some(false) } else { None };
        pacetime::config::apply_cli_overrides(with_env, show_log_override)
    };

    pacetime::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let colors = pacetime::view::ColorConfig::from_env_and_args(args.no_color);
    let cli_args = pacetime::view::CliArgs::new(config.show_log, colors);

    pacetime::view::run(cli_args)?;

    info!("Exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["pacetime", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["pacetime", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["pacetime"]);
        assert_eq!(args.command, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
        assert!(!args.hide_log);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "pacetime",
            "--no-color",
            "--hide-log",
            "--config",
            "/custom/config.toml",
        ]);
        assert!(args.no_color);
        assert!(args.hide_log);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_add_subcommand() {
        let args = Args::parse_from(["pacetime", "add", "1:00:00", "30:00"]);
        assert_eq!(
            args.command,
            Some(Command::Add {
                left: "1:00:00".to_string(),
                right: "30:00".to_string(),
            })
        );
    }

    #[test]
    fn test_subtract_alias() {
        let args = Args::parse_from(["pacetime", "subtract", "10", "5"]);
        assert!(matches!(args.command, Some(Command::Sub { .. })));
    }

    #[test]
    fn test_subcommand_requires_two_values() {
        let result = Args::try_parse_from(["pacetime", "pace", "1:00:00"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_commands_map_to_calculations() {
        let cases = [
            (vec!["pacetime", "add", "1:00", "30"], "0:1:30"),
            (vec!["pacetime", "sub", "1:00", "30"], "0:0:30"),
            (vec!["pacetime", "pace", "10800", "42.195"], "0:4:16"),
            (vec!["pacetime", "time", "5:00", "10"], "0:50:0"),
            (vec!["pacetime", "distance", "15", "8"], "1.88"),
        ];
        for (argv, expected) in cases {
            let args = Args::parse_from(argv.clone());
            let command = args.command.expect("subcommand given");
            assert_eq!(command.calculation().evaluate().as_deref(), Ok(expected), "{argv:?}");
        }
    }

    #[test]
    fn test_failed_calculation_reports_user_message() {
        let args = Args::parse_from(["pacetime", "sub", "5", "10"]);
        let command = args.command.expect("subcommand given");
        let err = command.calculation().evaluate().unwrap_err();
        assert_eq!(err.to_string(), "Left < Right");
    }
}
