//! Process configuration, read from the environment and command line.
//!
//! - `--dataset <path>` / `FODA_DATASET`: path of the score CSV (default `ideas_foda_3.csv`).
//! - `--debug[=<bool>]` / `FODA_DEBUG` (`1`, `true`, `yes`, `on`): verbose logging.
//!
//! Command-line values win over the environment.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use tracing::warn;

pub const DATASET_ENV: &str = "FODA_DATASET";
pub const DEBUG_ENV: &str = "FODA_DEBUG";
pub const DEFAULT_DATASET_PATH: &str = "ideas_foda_3.csv";

#[derive(Parser, Debug)]
#[command(
    name = "foda-web",
    about = "FODA business idea dashboard",
    args_override_self = true
)]
struct Args {
    /// Score CSV with the columns "Idea de Negocio", "Factor" and "Puntaje".
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// Raise the log level to DEBUG.
    #[arg(
        long,
        short = 'd',
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    debug: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            debug: false,
        }
    }
}

impl From<Args> for DashboardConfig {
    fn from(args: Args) -> Self {
        Self {
            dataset_path: args.dataset,
            debug: args.debug,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_sources(|key| std::env::var(key).ok(), std::env::args_os().skip(1))
    }

    /// Build from an environment lookup and the process arguments (without argv[0]).
    ///
    /// Environment values are fed to the parser ahead of the real arguments so
    /// both go through the same validation. Arguments the parser rejects (for
    /// instance ones injected by a dev server) fall back to the environment
    /// alone, then to the defaults.
    pub fn from_sources<F, I, S>(lookup: F, args: I) -> Self
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut env_args: Vec<OsString> = vec!["foda-web".into()];
        if let Some(path) = lookup(DATASET_ENV).filter(|value| !value.trim().is_empty()) {
            env_args.push(format!("--dataset={}", path.trim()).into());
        }
        if let Some(flag) = lookup(DEBUG_ENV) {
            env_args.push(format!("--debug={}", flag.trim()).into());
        }

        let full = env_args
            .iter()
            .cloned()
            .chain(args.into_iter().map(Into::into));
        match Args::try_parse_from(full) {
            Ok(parsed) => parsed.into(),
            Err(err) => {
                warn!("ignoring command line: {}", err.kind());
                Args::try_parse_from(&env_args)
                    .map(Self::from)
                    .unwrap_or_else(|err| {
                        warn!("ignoring {DATASET_ENV}/{DEBUG_ENV}: {}", err.kind());
                        Self::default()
                    })
            }
        }
    }
}
