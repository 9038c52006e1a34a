use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).map_err(|e| AppError::Config(e.to_string()))?
            );
        }

        // ---- PRINT PATH ----
        if *path {
            println!("{}", Config::config_file().display());
        }
    }

    Ok(())
}
