use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assign::{assign_guide, clear_guide};
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle `assign`: annotate one segment with a guide, or clear the
/// annotation. No availability check is performed; the same guide may
/// appear on overlapping segments.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assign {
        booking,
        ordinal,
        guide,
        clear,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let mut segments = queries::load_chain(&mut pool, *booking)?;
        let seg = segments
            .get_mut(*ordinal)
            .ok_or(AppError::OutOfRangeOrdinal(*ordinal))?;

        if *clear {
            clear_guide(seg);
            queries::record_assignment(&pool.conn, seg.id, None)?;

            log::audit(
                &pool.conn,
                "assign",
                &format!("booking {booking}"),
                &format!("Guide cleared on segment {ordinal}"),
            )?;

            messages::success(format!(
                "Guide cleared on segment {ordinal} of booking [{booking}]."
            ));
        } else if let Some(guide_id) = guide {
            let g = queries::resolve_guide(&pool.conn, *guide_id)?;

            assign_guide(seg, *guide_id);
            queries::record_assignment(&pool.conn, seg.id, Some(*guide_id))?;

            log::audit(
                &pool.conn,
                "assign",
                &format!("booking {booking}"),
                &format!("Guide {} assigned to segment {ordinal}", g.name),
            )?;

            messages::success(format!(
                "Guide {} assigned to segment {ordinal} of booking [{booking}].",
                g.name
            ));
        } else {
            messages::warning("Nothing to do: pass --guide <ID> or --clear.");
        }
    }

    Ok(())
}
