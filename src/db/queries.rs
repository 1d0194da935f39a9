use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::city::City;
use crate::models::guide::Guide;
use crate::models::hotel::Hotel;
use crate::models::segment::Segment;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};
use std::collections::BTreeSet;

fn parse_db_date(value: Option<String>) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDate(s)),
                )
            }),
    }
}

fn date_to_db(value: Option<NaiveDate>) -> Option<String> {
    value.map(|d| d.format("%Y-%m-%d").to_string())
}

pub fn map_segment_row(row: &Row) -> Result<Segment> {
    let start = parse_db_date(row.get("start_date")?)?;
    let end = parse_db_date(row.get("end_date")?)?;
    let ordinal: i64 = row.get("ordinal")?;

    Ok(Segment {
        id: row.get("id")?,
        booking_id: row.get("booking_id")?,
        ordinal: ordinal as usize,
        start,
        end,
        city_id: row.get("city_id")?,
        hotels: BTreeSet::new(), // filled by the caller
        meal: row.get("meal")?,
        currency: row.get("currency")?,
        target_price: row.get("target_price")?,
        guide_id: row.get("guide_id")?,
    })
}

fn load_segment_hotels(conn: &Connection, segment_id: i64) -> AppResult<BTreeSet<i64>> {
    let mut stmt =
        conn.prepare_cached("SELECT hotel_id FROM segment_hotels WHERE segment_id = ?1")?;
    let rows = stmt.query_map([segment_id], |row| row.get::<_, i64>(0))?;

    let mut out = BTreeSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

/// Load the full segment list of one booking, ordinal-ordered, with
/// hotel references attached.
pub fn load_chain(pool: &mut DbPool, booking_id: i64) -> AppResult<Vec<Segment>> {
    let conn = &pool.conn;

    let exists: bool = conn
        .prepare("SELECT 1 FROM bookings WHERE id = ?1")?
        .exists([booking_id])?;
    if !exists {
        return Err(AppError::NotFound(format!("booking {booking_id}")));
    }

    let mut stmt = conn.prepare(
        "SELECT * FROM segments
         WHERE booking_id = ?1
         ORDER BY ordinal ASC",
    )?;

    let rows = stmt.query_map([booking_id], map_segment_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    for seg in &mut out {
        seg.hotels = load_segment_hotels(conn, seg.id)?;
    }

    Ok(out)
}

/// Replace the stored segment list of one booking with `segments`, in
/// a single transaction. Either the whole list lands or nothing does.
pub fn persist_chain(pool: &mut DbPool, booking_id: i64, segments: &[Segment]) -> AppResult<()> {
    let tx = pool.conn.transaction()?;

    tx.execute(
        "DELETE FROM segment_hotels
         WHERE segment_id IN (SELECT id FROM segments WHERE booking_id = ?1)",
        [booking_id],
    )?;
    tx.execute("DELETE FROM segments WHERE booking_id = ?1", [booking_id])?;

    for (i, seg) in segments.iter().enumerate() {
        tx.execute(
            "INSERT INTO segments
                (booking_id, ordinal, start_date, end_date, city_id,
                 meal, currency, target_price, guide_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                booking_id,
                i as i64,
                date_to_db(seg.start),
                date_to_db(seg.end),
                seg.city_id,
                seg.meal,
                seg.currency,
                seg.target_price,
                seg.guide_id,
                Local::now().to_rfc3339(),
            ],
        )?;
        let segment_id = tx.last_insert_rowid();

        for hotel_id in &seg.hotels {
            tx.execute(
                "INSERT INTO segment_hotels (segment_id, hotel_id) VALUES (?1, ?2)",
                params![segment_id, hotel_id],
            )?;
        }
    }

    tx.commit()?;
    Ok(())
}

/// Persist one guide assignment (or its removal, with `None`).
/// Idempotent: repeating the same call rewrites the same value.
pub fn record_assignment(
    conn: &Connection,
    segment_id: i64,
    guide_id: Option<i64>,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE segments SET guide_id = ?1 WHERE id = ?2",
        params![guide_id, segment_id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(format!("segment {segment_id}")));
    }
    Ok(())
}

// ---------------------------
// Reference data lookups
// ---------------------------

pub fn resolve_city(conn: &Connection, id: i64) -> AppResult<City> {
    conn.query_row(
        "SELECT id, name, country FROM cities WHERE id = ?1",
        [id],
        |row| {
            Ok(City {
                id: row.get(0)?,
                name: row.get(1)?,
                country: row.get(2)?,
            })
        },
    )
    .map_err(|_| AppError::UnresolvedReference(format!("city {id}")))
}

pub fn resolve_hotel(conn: &Connection, id: i64) -> AppResult<Hotel> {
    conn.query_row(
        "SELECT id, city_id, name FROM hotels WHERE id = ?1",
        [id],
        |row| {
            Ok(Hotel {
                id: row.get(0)?,
                city_id: row.get(1)?,
                name: row.get(2)?,
            })
        },
    )
    .map_err(|_| AppError::UnresolvedReference(format!("hotel {id}")))
}

pub fn resolve_guide(conn: &Connection, id: i64) -> AppResult<Guide> {
    conn.query_row("SELECT id, name FROM guides WHERE id = ?1", [id], |row| {
        Ok(Guide {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })
    .map_err(|_| AppError::UnresolvedReference(format!("guide {id}")))
}

// ---------------------------
// Catalog CRUD
// ---------------------------

pub fn insert_city(conn: &Connection, name: &str, country: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO cities (name, country) VALUES (?1, ?2)",
        params![name, country],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_cities(conn: &Connection) -> AppResult<Vec<City>> {
    let mut stmt = conn.prepare("SELECT id, name, country FROM cities ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(City {
            id: row.get(0)?,
            name: row.get(1)?,
            country: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_hotel(conn: &Connection, city_id: i64, name: &str) -> AppResult<i64> {
    // reject dangling city references up front
    resolve_city(conn, city_id)?;
    conn.execute(
        "INSERT INTO hotels (city_id, name) VALUES (?1, ?2)",
        params![city_id, name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_hotels(conn: &Connection, city_id: Option<i64>) -> AppResult<Vec<Hotel>> {
    let mut out = Vec::new();

    match city_id {
        Some(city) => {
            let mut stmt = conn
                .prepare("SELECT id, city_id, name FROM hotels WHERE city_id = ?1 ORDER BY name")?;
            let rows = stmt.query_map([city], |row| {
                Ok(Hotel {
                    id: row.get(0)?,
                    city_id: row.get(1)?,
                    name: row.get(2)?,
                })
            })?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare("SELECT id, city_id, name FROM hotels ORDER BY name")?;
            let rows = stmt.query_map([], |row| {
                Ok(Hotel {
                    id: row.get(0)?,
                    city_id: row.get(1)?,
                    name: row.get(2)?,
                })
            })?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_guide(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO guides (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}

pub fn list_guides(conn: &Connection) -> AppResult<Vec<Guide>> {
    let mut stmt = conn.prepare("SELECT id, name FROM guides ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Guide {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Bookings
// ---------------------------

pub fn insert_booking(conn: &Connection, client: &str, city_id: i64) -> AppResult<i64> {
    resolve_city(conn, city_id)?;
    conn.execute(
        "INSERT INTO bookings (client, city_id, created_at) VALUES (?1, ?2, ?3)",
        params![client, city_id, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_bookings(conn: &Connection) -> AppResult<Vec<Booking>> {
    let mut stmt =
        conn.prepare("SELECT id, client, city_id, created_at FROM bookings ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Booking {
            id: row.get(0)?,
            client: row.get(1)?,
            city_id: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_booking(conn: &Connection, id: i64) -> AppResult<Booking> {
    conn.query_row(
        "SELECT id, client, city_id, created_at FROM bookings WHERE id = ?1",
        [id],
        |row| {
            Ok(Booking {
                id: row.get(0)?,
                client: row.get(1)?,
                city_id: row.get(2)?,
                created_at: row.get(3)?,
            })
        },
    )
    .map_err(|_| AppError::NotFound(format!("booking {id}")))
}

/// Delete one booking together with its segments and hotel links.
/// Returns the number of deleted segments.
pub fn delete_booking(pool: &mut DbPool, booking_id: i64) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;

    tx.execute(
        "DELETE FROM segment_hotels
         WHERE segment_id IN (SELECT id FROM segments WHERE booking_id = ?1)",
        [booking_id],
    )?;
    let segments = tx.execute("DELETE FROM segments WHERE booking_id = ?1", [booking_id])?;
    tx.execute("DELETE FROM bookings WHERE id = ?1", [booking_id])?;

    tx.commit()?;
    Ok(segments)
}
