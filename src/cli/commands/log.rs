use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ResponseLog;
use crate::ui::messages::{header, info};

/// Print the raw log entries, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { limit } = cmd {
        let store = ResponseLog::new(&cfg.log_file);
        let entries = store.read_all()?;

        if entries.is_empty() {
            info("No responses recorded yet.");
            return Ok(());
        }

        header("Survey responses");
        let shown = limit.unwrap_or(entries.len());
        for entry in entries.iter().take(shown) {
            println!("{entry}");
        }

        if shown < entries.len() {
            info(format!("… and {} older entries", entries.len() - shown));
        }
    }

    Ok(())
}
