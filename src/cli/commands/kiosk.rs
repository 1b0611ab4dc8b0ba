use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::kiosk::KioskLogic;
use crate::errors::AppResult;
use crate::store::ResponseLog;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Kiosk { cooldown } = cmd {
        let store = ResponseLog::new(&cfg.log_file);
        let delay = Duration::from_secs(cooldown.unwrap_or(cfg.cooldown_secs));

        KioskLogic::run(&store, delay, &cfg.banner)?;
    }

    Ok(())
}
