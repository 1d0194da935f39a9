use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date::parse_date;

use super::session::with_chain;

/// Handle `split`: cut one segment in two at `--at`. The original leg
/// keeps `[start, at)`, the new leg covers `[at, old end)`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Split { booking, after, at } = cmd {
        let boundary = parse_date(at).ok_or_else(|| AppError::InvalidDate(at.clone()))?;

        let segments = with_chain(cfg, *booking, |chain| {
            chain.append_after(*after)?;
            let old_end = chain.segments()[*after].end;

            chain.set_end(*after, boundary)?;
            if let Some(old_end) = old_end {
                // the new leg ends where the split one used to;
                // an open tail simply stays open
                chain.set_end(*after + 1, old_end)?;
            }
            Ok(())
        })?;

        let pool = DbPool::new(&cfg.database)?;
        log::audit(
            &pool.conn,
            "split",
            &format!("booking {booking}"),
            &format!("Segment {after} split at {boundary}"),
        )?;

        messages::success(format!(
            "Segment {after} of booking [{booking}] split at {boundary} ({} segments now).",
            segments.len()
        ));
    }

    Ok(())
}
