use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty response log
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing surveykiosk…");

    if let Some(custom) = &cli.log_file {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    println!("🎉 surveykiosk initialization completed!");
    Ok(())
}
