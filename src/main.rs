use clap::Parser;
use config::{AppConfig, Cli};
use menu::Menu;
use read::load;

mod compute;
mod config;
mod data;
mod menu;
mod read;
mod write;

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = AppConfig::from(Cli::parse());
    let students = load(&config.data_path)?;
    let stdin = std::io::stdin();
    Menu::new(&config).run(&students, stdin.lock(), std::io::stdout().lock())?;
    Ok(())
}
