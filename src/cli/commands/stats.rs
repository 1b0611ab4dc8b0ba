use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats;
use crate::errors::{AppError, AppResult};
use crate::models::locale::Locale;
use crate::store::ResponseLog;
use crate::ui::chart;
use crate::ui::messages::header;
use crate::utils::date;

/// Render the weekly response chart and the satisfaction breakdown.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        by_group,
        locale,
        today,
    } = cmd
    {
        let store = ResponseLog::new(&cfg.log_file);
        let lines = store.read_all()?;

        let today = match today {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let locale = match locale {
            Some(code) => Locale::from_code(code)
                .ok_or_else(|| AppError::InvalidLocale(code.to_string()))?,
            // a broken config value degrades to the default display locale
            None => Locale::from_code(&cfg.locale).unwrap_or(Locale::Ja),
        };

        let series = stats::daily_series(&lines, today);
        println!("{}", chart::render_daily_series(&series));

        if *by_group {
            for (group, counts) in stats::breakdown_by_group(&lines) {
                header(group.label(locale));
                println!("{}", chart::render_breakdown(&counts, locale));
            }
        } else {
            header("Satisfaction");
            println!("{}", chart::render_breakdown(&stats::breakdown(&lines), locale));
        }
    }

    Ok(())
}
