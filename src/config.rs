use crate::menu::Operation;
use clap::Parser;
use std::path::PathBuf;

/// Answer questions about a CSV file of students, one menu choice at a time.
#[derive(Debug, Parser)]
#[command(version)]
pub(crate) struct Cli {
    /// Students file to load
    #[arg(long, default_value = "data.csv")]
    pub data: PathBuf,
    /// Directory receiving one CSV report per query
    #[arg(long, default_value = "reports")]
    pub reports: PathBuf,
}

/// Settings for a session, built once in `main` and handed to the menu.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub data_path: PathBuf,
    pub reports_dir: PathBuf,
    pub menu: Vec<Operation>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: "data.csv".into(),
            reports_dir: "reports".into(),
            menu: Operation::ALL.to_vec(),
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            data_path: cli.data,
            reports_dir: cli.reports,
            ..Self::default()
        }
    }
}
