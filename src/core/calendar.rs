//! Fixed 7-day calendar window and the projection of itinerary chains
//! onto it.
//!
//! Projection is read-only: it borrows chains, computes per chain the
//! number of empty grid columns before and after its visible segments,
//! and leaves per-day expansion and clipping to the renderer.

use crate::core::chain::Chain;
use crate::models::segment::Segment;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const WINDOW_DAYS: i64 = 7;

/// A 7-day date range, `start` inclusive and `end` exclusive, anchored
/// on the configured first day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CalendarWindow {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..WINDOW_DAYS).map(|i| self.start + Duration::days(i))
    }
}

/// Window whose start is the most recent occurrence of `week_start` at
/// or before `pivot`. Pure: repeated calls with the same pivot yield
/// the same window, and week navigation is just `pivot ± 7 days`.
pub fn week_window(pivot: NaiveDate, week_start: Weekday) -> CalendarWindow {
    let back = (pivot.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    let start = pivot - Duration::days(back as i64);
    CalendarWindow {
        start,
        end: start + Duration::days(WINDOW_DAYS),
    }
}

/// Layout of one chain inside one window: empty columns before and
/// after the chain's segments. Pads are column counts, not dates; the
/// renderer draws that many empty cells so rows align across chains
/// sharing the window.
#[derive(Debug, Clone)]
pub struct Placement {
    pub booking_id: i64,
    pub leading_pad: u32,
    pub segments: Vec<Segment>,
    pub trailing_pad: u32,
}

/// Project a set of independent chains onto one window. Chains lying
/// fully before or after the window are excluded from the result.
pub fn project(window: &CalendarWindow, chains: &[(i64, Chain)]) -> Vec<Placement> {
    chains
        .iter()
        .filter_map(|(booking_id, chain)| place(window, *booking_id, chain))
        .collect()
}

fn place(window: &CalendarWindow, booking_id: i64, chain: &Chain) -> Option<Placement> {
    let mut segments = chain.segments().to_vec();
    // Option<NaiveDate> orders None first, which matches the reading
    // of a missing start as negative infinity.
    segments.sort_by_key(|s| s.start);

    // A missing end reads as positive infinity.
    let earliest = segments.first().and_then(|s| s.start);
    let latest = segments.last().and_then(|s| s.end);

    // Fully before the window (ends are exclusive, so a chain ending
    // exactly at window.start occupies no visible day).
    if let Some(latest) = latest
        && latest <= window.start
    {
        return None;
    }
    // Fully after the window.
    if let Some(earliest) = earliest
        && earliest >= window.end
    {
        return None;
    }

    let leading_pad = match earliest {
        Some(d) => (d - window.start).num_days().clamp(0, WINDOW_DAYS) as u32,
        None => 0,
    };
    let trailing_pad = match latest {
        Some(d) => (window.end - d).num_days().clamp(0, WINDOW_DAYS) as u32,
        None => 0,
    };

    Some(Placement {
        booking_id,
        leading_pad,
        segments,
        trailing_pad,
    })
}

/// Number of window columns a single segment occupies, after clipping
/// it to the window. Used by the renderer only; the projection itself
/// never drops interior segments.
pub fn visible_days(window: &CalendarWindow, segment: &Segment) -> i64 {
    let s = segment.start.map_or(window.start, |d| d.max(window.start));
    let e = segment.end.map_or(window.end, |d| d.min(window.end));
    (e - s).num_days().max(0)
}
