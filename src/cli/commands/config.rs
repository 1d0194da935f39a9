use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let rendered =
                serde_yaml::to_string(&cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{rendered}");
        }

        if *check {
            if !path.exists() {
                println!("⚠️  Config file not found: {}", path.display());
                println!("   Run `itinera init` to create it.");
                return Ok(());
            }

            println!("🔍 Checking configuration file…");

            if cfg.database.is_empty() {
                println!("❌ `database` is missing or empty");
            } else {
                println!("✅ database         : {}", cfg.database);
            }

            println!("✅ default_currency : {}", cfg.default_currency);

            match cfg.week_start_day() {
                Ok(day) => println!("✅ week_start       : {} ({:?})", cfg.week_start, day),
                Err(_) => println!("❌ `week_start` is not a valid weekday: {}", cfg.week_start),
            }

            println!("✅ separator_char   : {}", cfg.separator_char);
        }
    }

    Ok(())
}
