use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::share::ShareLogic;
use crate::errors::AppResult;
use crate::store::ResponseLog;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Share {
        file,
        compress,
        force,
    } = cmd
    {
        let store = ResponseLog::new(&cfg.log_file);
        ShareLogic::share(&store, file, *compress, *force)?;
    }

    Ok(())
}
