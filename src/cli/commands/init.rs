use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the JSON data file (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    // Config::init_all crea:
    //   ~/.workhours/
    //   ~/.workhours/workhours.conf
    // e il data file JSON configurato.
    //
    if let Some(custom) = &cli.file {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();

    println!("⚙️  Initializing workhours…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Data file  : {}", &cfg.data_file);
    println!("🎉 workhours initialization completed!");

    Ok(())
}
