use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::ResponseLog;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = ResponseLog::new(&cfg.log_file);
        ExportLogic::export(&store, format.clone(), file, *force)?;
    }

    Ok(())
}
