use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ResponseLog;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

/// Delete the whole response log after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { force } = cmd {
        let store = ResponseLog::new(&cfg.log_file);

        if !*force {
            warning("This deletes the whole response log. All history is lost.");
            print!("Proceed? [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            let ans = answer.trim().to_ascii_lowercase();
            if !(ans == "y" || ans == "yes") {
                info("Clear cancelled.");
                return Ok(());
            }
        }

        if store.clear()? {
            success("Response log deleted.");
        } else {
            info("No response log found, nothing to delete.");
        }
    }

    Ok(())
}
