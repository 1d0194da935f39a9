use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chain;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::segment::Segment;
use crate::ui::messages;
use crate::utils::colors::{GREY, RESET, color_for_row, colorize_optional};
use crate::utils::currency::normalize_currency;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

fn parse_opt_date(value: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.clone())),
    }
}

/// Handle `add`: create a booking together with its first segment.
pub fn handle_add(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        client,
        city,
        from,
        to,
        currency,
    } = cmd
    {
        let start = parse_opt_date(from)?;
        let end = parse_opt_date(to)?;

        if let (Some(s), Some(e)) = (start, end)
            && s >= e
        {
            return Err(AppError::InvalidDateOrder(format!(
                "arrival {s} must precede departure {e}"
            )));
        }

        let currency = match currency {
            Some(c) => normalize_currency(c)?,
            None => cfg.default_currency.clone(),
        };

        let mut pool = DbPool::new(&cfg.database)?;

        let booking_id = queries::insert_booking(&pool.conn, client, *city)?;

        let first = Segment::new(booking_id, 0, start, end, *city, &currency);
        chain::validate(std::slice::from_ref(&first))?;

        queries::persist_chain(&mut pool, booking_id, std::slice::from_ref(&first))?;

        log::audit(
            &pool.conn,
            "booking_add",
            &format!("booking {booking_id}"),
            &format!(
                "Booking created for {} ({} -> {})",
                client,
                first.start_str(),
                first.end_str()
            ),
        )?;

        println!(
            "✅ Booking [{booking_id}] created for {client}: {} -> {} ({currency})",
            first.start_str(),
            first.end_str()
        );
    }

    Ok(())
}

/// Handle `list`: print bookings with their segment chains.
pub fn handle_list(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { booking } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let bookings = match booking {
            Some(id) => vec![queries::get_booking(&pool.conn, *id)?],
            None => queries::list_bookings(&pool.conn)?,
        };

        if bookings.is_empty() {
            println!("⚠️  No bookings yet.");
            return Ok(());
        }

        for (i, b) in bookings.iter().enumerate() {
            let city = queries::resolve_city(&pool.conn, b.city_id)?;
            let color = color_for_row(i);
            println!(
                "{color}📋 [{}] {} / {}, {}{RESET}",
                b.id, b.client, city.name, city.country
            );

            let segments = queries::load_chain(&mut pool, b.id)?;
            for seg in &segments {
                print_segment(&pool, seg)?;
            }
            println!();
        }
    }

    Ok(())
}

fn print_segment(pool: &DbPool, seg: &Segment) -> AppResult<()> {
    let mut hotel_names = Vec::new();
    for hid in &seg.hotels {
        hotel_names.push(queries::resolve_hotel(&pool.conn, *hid)?.name);
    }
    let hotels = if hotel_names.is_empty() {
        format!("{GREY}-{RESET}")
    } else {
        hotel_names.join(", ")
    };

    let meal = colorize_optional(seg.meal.as_deref().unwrap_or("-"));
    let price = match seg.target_price {
        Some(p) => format!("{p:.2} {}", seg.currency),
        None => format!("{GREY}-{RESET}"),
    };
    let guide = match seg.guide_id {
        Some(gid) => queries::resolve_guide(&pool.conn, gid)?.name,
        None => format!("{GREY}-{RESET}"),
    };
    let nights = match seg.nights() {
        Some(n) => format!("{n} night(s)"),
        None => "open".to_string(),
    };

    println!(
        "    #{:<2} {} -> {}  [{nights}]  🏨 {hotels}  🍽 {meal}  💰 {price}  🧭 {guide}",
        seg.ordinal,
        seg.start_str(),
        seg.end_str()
    );
    Ok(())
}

/// Handle `del`: remove a booking after an interactive confirmation.
pub fn handle_del(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { booking } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let b = queries::get_booking(&pool.conn, *booking)?;

        if !messages::confirm(&format!(
            "Delete booking [{}] for {} and all its segments?",
            b.id, b.client
        ))? {
            messages::warning("Deletion cancelled.");
            return Ok(());
        }

        let removed = queries::delete_booking(&mut pool, *booking)?;

        log::audit(
            &pool.conn,
            "booking_del",
            &format!("booking {booking}"),
            &format!("Booking deleted ({removed} segment(s) removed)"),
        )?;

        messages::success(format!(
            "Booking [{booking}] deleted ({removed} segment(s) removed)."
        ));
    }

    Ok(())
}
