use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SegmentExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use rusqlite::Row;
use std::io;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export itinerary segments, one row per segment.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or `YYYY[-MM[-DD]][:...]` expressions
    /// - `booking`: restrict to one booking
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        booking: Option<i64>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !crate::utils::path::is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_segments(pool, booking, date_bounds)?;

        if rows.is_empty() {
            warning("No segments found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

fn load_segments(
    pool: &mut DbPool,
    booking: Option<i64>,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<SegmentExport>> {
    let conn = &mut pool.conn;

    let sql = "SELECT s.id, s.booking_id, b.client, s.ordinal, s.start_date, s.end_date,
                      c.name, s.meal, s.currency, s.target_price, g.name
               FROM segments s
               JOIN bookings b ON b.id = s.booking_id
               JOIN cities c   ON c.id = s.city_id
               LEFT JOIN guides g ON g.id = s.guide_id
               ORDER BY s.booking_id ASC, s.ordinal ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        let (segment_id, mut item) = r?;

        if let Some(wanted) = booking
            && item.booking_id != wanted
        {
            continue;
        }

        if let Some((from, to)) = bounds
            && !overlaps(&item, from, to)
        {
            continue;
        }

        item.hotels = hotel_names(conn, segment_id)?;
        out.push(item);
    }

    Ok(out)
}

/// Segment/day-range overlap with open bounds: a missing start reaches
/// back indefinitely, a missing end reaches forward indefinitely.
fn overlaps(item: &SegmentExport, from: NaiveDate, to: NaiveDate) -> bool {
    let starts_in_time = match &item.start_date {
        Some(s) => matches!(NaiveDate::parse_from_str(s, "%Y-%m-%d"), Ok(d) if d <= to),
        None => true,
    };
    let ends_in_time = match &item.end_date {
        Some(e) => matches!(NaiveDate::parse_from_str(e, "%Y-%m-%d"), Ok(d) if d > from),
        None => true,
    };
    starts_in_time && ends_in_time
}

fn hotel_names(conn: &rusqlite::Connection, segment_id: i64) -> AppResult<String> {
    let mut stmt = conn.prepare_cached(
        "SELECT h.name FROM segment_hotels sh
         JOIN hotels h ON h.id = sh.hotel_id
         WHERE sh.segment_id = ?1
         ORDER BY h.name ASC",
    )?;
    let rows = stmt.query_map([segment_id], |row| row.get::<_, String>(0))?;

    let mut names = Vec::new();
    for r in rows {
        names.push(r?);
    }
    Ok(names.join(";"))
}

/// Mapping DB → (segment id, SegmentExport); hotels are joined later.
fn map_row(row: &Row<'_>) -> rusqlite::Result<(i64, SegmentExport)> {
    Ok((
        row.get(0)?,
        SegmentExport {
            booking_id: row.get(1)?,
            client: row.get(2)?,
            ordinal: row.get(3)?,
            start_date: row.get(4)?,
            end_date: row.get(5)?,
            city: row.get(6)?,
            hotels: String::new(),
            meal: row.get(7)?,
            currency: row.get(8)?,
            target_price: row.get(9)?,
            guide: row.get(10)?,
        },
    ))
}
