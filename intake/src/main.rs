//! Console input validation drills.
//!
//! Each subcommand is an independent prompt-and-validate program. `students`
//! runs the menu-driven student management session; the rest ask for a single
//! value.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use intake::drills;
use intake::exit_codes;
use intake::io::config::{DEFAULT_CONFIG_FILE, IntakeConfig, load_config, write_config};
use intake::io::console::{self, InputClosed};
use intake::logging;
use intake::students::run_students;

#[derive(Parser)]
#[command(name = "intake", version, about = "Console input validation drills")]
struct Cli {
    /// Config file (defaults to `intake.toml` in the current directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask for a positive integer until one is entered.
    Positive,
    /// Ask for a student grade until it is inside the configured range.
    Grade,
    /// Ask for an age until it is neither negative nor unrealistic.
    Age,
    /// Ask for a number; an empty line selects the default.
    Number {
        /// Override the configured default.
        #[arg(long)]
        default: Option<f64>,
    },
    /// Read an age once and log a warning if it is not a number.
    LogAge,
    /// Run the student management menu.
    Students,
    /// Write the default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            if err.is::<InputClosed>() {
                exit_codes::INPUT_CLOSED
            } else {
                exit_codes::INVALID
            }
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let load = || load_config(&config_path).context("load config");
    let mut console = console::stdio();
    match cli.command {
        Command::Positive => drills::get_positive_integer(&mut console).map(drop),
        Command::Grade => {
            let cfg = load()?;
            drills::get_student_grade(&mut console, cfg.student.grade_bounds()).map(drop)
        }
        Command::Age => {
            let cfg = load()?;
            drills::get_age(&mut console, cfg.age.max).map(drop)
        }
        Command::Number { default } => {
            let default = match default {
                Some(value) => value,
                None => load()?.number.default,
            };
            drills::get_number(&mut console, default).map(drop)
        }
        Command::LogAge => drills::log_age(&mut console).map(drop),
        Command::Students => {
            let cfg = load()?;
            run_students(&mut console, &cfg.student).map(drop)
        }
        Command::InitConfig { force } => cmd_init_config(&config_path, force),
    }
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &IntakeConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_students() {
        let cli = Cli::parse_from(["intake", "students"]);
        assert!(matches!(cli.command, Command::Students));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_number_default_override() {
        let cli = Cli::parse_from(["intake", "number", "--default", "2.5"]);
        assert!(matches!(
            cli.command,
            Command::Number { default: Some(d) } if d == 2.5
        ));
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["intake", "grade", "--config", "x.toml"]);
        assert!(matches!(cli.command, Command::Grade));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn parse_init_config_force() {
        let cli = Cli::parse_from(["intake", "init-config", "--force"]);
        assert!(matches!(cli.command, Command::InitConfig { force: true }));
    }

    #[test]
    fn init_config_refuses_to_overwrite() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("intake.toml");
        cmd_init_config(&path, false).expect("first write");
        let err = cmd_init_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        cmd_init_config(&path, true).expect("forced write");
        assert_eq!(load_config(&path).expect("load"), IntakeConfig::default());
    }
}
