use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::errors::{AppError, AppResult};
use crate::models::group::Group;
use crate::store::ResponseLog;
use crate::ui::messages::success;

/// Record a single rating submission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { rating, group } = cmd {
        let group = match group {
            Some(g) => {
                Some(Group::from_input(g).ok_or_else(|| AppError::InvalidGroup(g.to_string()))?)
            }
            None => None,
        };

        let store = ResponseLog::new(&cfg.log_file);
        let response =
            SubmitLogic::apply(&store, group, rating, chrono::Local::now().naive_local())?;

        success(format!("Recorded: {}", response.to_line()));
    }

    Ok(())
}
