use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the reference-catalog tables (cities, hotels, guides).
fn create_catalog_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS cities (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL UNIQUE,
            country TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS hotels (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            city_id INTEGER NOT NULL REFERENCES cities(id),
            name    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS guides (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );
        "#,
    )?;
    Ok(())
}

/// Create the `bookings` and `segments` tables with the modern schema
/// (including `guide_id`).
fn create_booking_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            client     TEXT NOT NULL,
            city_id    INTEGER NOT NULL REFERENCES cities(id),
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS segments (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            booking_id   INTEGER NOT NULL REFERENCES bookings(id),
            ordinal      INTEGER NOT NULL,
            start_date   TEXT,
            end_date     TEXT,
            city_id      INTEGER NOT NULL REFERENCES cities(id),
            meal         TEXT,
            currency     TEXT NOT NULL DEFAULT 'EUR',
            target_price REAL,
            guide_id     INTEGER REFERENCES guides(id),
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS segment_hotels (
            segment_id INTEGER NOT NULL REFERENCES segments(id),
            hotel_id   INTEGER NOT NULL REFERENCES hotels(id),
            PRIMARY KEY (segment_id, hotel_id)
        );

        CREATE INDEX IF NOT EXISTS idx_segments_booking ON segments(booking_id, ordinal);
        CREATE INDEX IF NOT EXISTS idx_segments_dates ON segments(start_date, end_date);
        "#,
    )?;
    Ok(())
}

/// Migrate an old `segments` table to include the `guide_id` column.
/// Schema versions before 0.3 stored guide assignments in a side file.
fn migrate_add_guide_to_segments(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "segments")? {
        return Ok(()); // no table → nothing to migrate
    }

    if column_exists(conn, "segments", "guide_id")? {
        return Ok(()); // already present → OK
    }

    warning("Adding 'guide_id' column to segments table...");

    conn.execute_batch(
        r#"
        BEGIN;
        ALTER TABLE segments ADD COLUMN guide_id INTEGER REFERENCES guides(id);
        COMMIT;
        "#,
    )?;

    let _ = crate::db::log::audit(
        conn,
        "migration_applied",
        "segments",
        "Added guide_id column",
    );

    Ok(())
}

/// Run every pending schema migration, in order. Safe to call on a
/// fresh database and on every startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_catalog_tables(conn)?;
    create_booking_tables(conn)?;
    migrate_add_guide_to_segments(conn)?;
    Ok(())
}

/// `PRAGMA integrity_check` plus presence of every expected table.
pub fn check_integrity(conn: &Connection) -> Result<bool> {
    let ok: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    if ok != "ok" {
        return Ok(false);
    }

    for table in [
        "cities",
        "hotels",
        "guides",
        "bookings",
        "segments",
        "segment_hotels",
        "log",
    ] {
        if !table_exists(conn, table)? {
            return Ok(false);
        }
    }
    Ok(true)
}
