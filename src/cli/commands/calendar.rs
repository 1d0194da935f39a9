use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{project, visible_days, week_window};
use crate::core::chain::Chain;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::segment::Segment;
use crate::ui::grid::{GridCell, GridRow, render_week};
use crate::utils::date::{parse_date, today};
use chrono::Duration;

/// Handle `calendar`: project every booking onto a 7-day window and
/// draw the aligned grid.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { date, next, prev } = cmd {
        let mut pivot = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => today(),
        };
        if *next {
            pivot = pivot + Duration::days(7);
        } else if *prev {
            pivot = pivot - Duration::days(7);
        }

        let window = week_window(pivot, cfg.week_start_day()?);

        let mut pool = DbPool::new(&cfg.database)?;

        let mut chains = Vec::new();
        for b in queries::list_bookings(&pool.conn)? {
            let segments = queries::load_chain(&mut pool, b.id)?;
            if segments.is_empty() {
                continue;
            }
            chains.push((b.id, Chain::from_segments(segments)?));
        }

        let placements = project(&window, &chains);

        println!(
            "📅 Week {} -> {}\n",
            window.start.format("%Y-%m-%d"),
            (window.end - Duration::days(1)).format("%Y-%m-%d")
        );

        if placements.is_empty() {
            println!("No bookings fall inside this week.");
            return Ok(());
        }

        let mut rows = Vec::new();
        for p in &placements {
            let booking = queries::get_booking(&pool.conn, p.booking_id)?;
            let city = queries::resolve_city(&pool.conn, booking.city_id)?;
            let label = format!("#{} {} / {}", booking.id, booking.client, city.name);

            let mut cells = Vec::new();
            for seg in &p.segments {
                cells.push(GridCell {
                    text: cell_text(&pool, seg)?,
                    span: visible_days(&window, seg) as u32,
                });
            }

            rows.push(GridRow {
                label,
                leading_pad: p.leading_pad,
                cells,
                trailing_pad: p.trailing_pad,
            });
        }

        print!("{}", render_week(&window, &rows, &cfg.separator_char));
    }

    Ok(())
}

/// One-line content of a segment cell: hotel names when present,
/// otherwise the meal plan, otherwise the segment ordinal.
fn cell_text(pool: &DbPool, seg: &Segment) -> AppResult<String> {
    if !seg.hotels.is_empty() {
        let mut names = Vec::new();
        for hid in &seg.hotels {
            names.push(queries::resolve_hotel(&pool.conn, *hid)?.name);
        }
        return Ok(names.join("+"));
    }
    if let Some(meal) = &seg.meal {
        return Ok(meal.clone());
    }
    Ok(format!("leg {}", seg.ordinal))
}
