use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// One contiguous, date-bounded leg of a traveler's stay.
///
/// `start` is inclusive, `end` exclusive. A `None` start means the stay
/// continues from a period not represented in the chain (legal only on
/// the first segment); a `None` end means open-ended (legal only on the
/// last segment).
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub id: i64,
    pub booking_id: i64,      // ⇔ segments.booking_id
    pub ordinal: usize,       // ⇔ segments.ordinal (zero-based position)
    pub start: Option<NaiveDate>, // ⇔ segments.start_date (TEXT "YYYY-MM-DD", NULL)
    pub end: Option<NaiveDate>,   // ⇔ segments.end_date (TEXT "YYYY-MM-DD", NULL)
    pub city_id: i64,         // ⇔ segments.city_id (one destination per chain)
    pub hotels: BTreeSet<i64>, // ⇔ segment_hotels rows
    pub meal: Option<String>, // ⇔ segments.meal ('BB', 'HB', 'FB', ...)
    pub currency: String,     // ⇔ segments.currency (ISO-4217)
    pub target_price: Option<f64>, // ⇔ segments.target_price
    pub guide_id: Option<i64>, // ⇔ segments.guide_id
}

impl Segment {
    /// High-level constructor for segments created from the CLI.
    /// The id is 0 until the row is inserted; ordinals are recomputed
    /// by the chain engine on every structural edit.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        booking_id: i64,
        ordinal: usize,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        city_id: i64,
        currency: &str,
    ) -> Self {
        Self {
            id: 0,
            booking_id,
            ordinal,
            start,
            end,
            city_id,
            hotels: BTreeSet::new(),
            meal: None,
            currency: currency.to_string(),
            target_price: None,
            guide_id: None,
        }
    }

    pub fn start_str(&self) -> String {
        match self.start {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "...".to_string(),
        }
    }

    pub fn end_str(&self) -> String {
        match self.end {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "...".to_string(),
        }
    }

    /// Number of nights covered by this segment, when both bounds are known.
    pub fn nights(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((e - s).num_days()),
            _ => None,
        }
    }
}
