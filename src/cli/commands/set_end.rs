use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date::parse_date;

use super::session::with_chain;

/// Handle `set-end`: move one segment's end date. The next segment's
/// start follows automatically.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::SetEnd {
        booking,
        ordinal,
        date,
    } = cmd
    {
        let new_end = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let segments = with_chain(cfg, *booking, |chain| chain.set_end(*ordinal, new_end))?;

        let pool = DbPool::new(&cfg.database)?;
        log::audit(
            &pool.conn,
            "set_end",
            &format!("booking {booking}"),
            &format!("Segment {ordinal} end moved to {new_end}"),
        )?;

        let cascaded = *ordinal + 1 < segments.len();
        if cascaded {
            messages::success(format!(
                "Segment {ordinal} of booking [{booking}] now ends {new_end}; segment {} now starts there.",
                *ordinal + 1
            ));
        } else {
            messages::success(format!(
                "Segment {ordinal} of booking [{booking}] now ends {new_end}."
            ));
        }
    }

    Ok(())
}
