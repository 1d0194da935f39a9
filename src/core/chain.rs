//! In-memory editing of an itinerary chain: an ordered sequence of
//! contiguous, non-overlapping segments for one booking.
//!
//! The chain owns its segments for the duration of an edit session.
//! Every operation validates before mutating, so a failed call leaves
//! the chain exactly as it was. The only externally visible effect is
//! `commit`, which splices the edited segments back into the parent
//! list.

use crate::errors::{AppError, AppResult};
use crate::models::segment::Segment;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Partial update of the non-date fields of one segment.
/// `None` leaves the field untouched; the nested options carry
/// explicit "clear this field" requests.
#[derive(Debug, Clone, Default)]
pub struct SegmentPatch {
    pub hotels: Option<BTreeSet<i64>>,
    pub meal: Option<Option<String>>,
    pub currency: Option<String>,
    pub target_price: Option<Option<f64>>,
}

#[derive(Debug, Clone)]
pub struct Chain {
    segments: Vec<Segment>,
    // Length of the slice this chain was initialized from; commit
    // replaces exactly that many segments in the parent list.
    loaded_len: usize,
}

impl Chain {
    /// Build a chain from an ordinal-ordered slice of segments, e.g.
    /// one reservation range pulled out of a larger list. The caller
    /// is expected to supply a valid slice; this guards against
    /// corrupt upstream data.
    pub fn from_segments(segments: Vec<Segment>) -> AppResult<Self> {
        validate(&segments)?;
        let loaded_len = segments.len();
        Ok(Self {
            segments,
            loaded_len,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn check_ordinal(&self, ordinal: usize) -> AppResult<()> {
        if ordinal >= self.segments.len() {
            return Err(AppError::OutOfRangeOrdinal(ordinal));
        }
        Ok(())
    }

    /// Insert a new segment immediately after `ordinal`.
    ///
    /// The new segment is seeded with `start = previous segment's end`
    /// so continuity holds by construction. When appended at the tail
    /// it also inherits the old terminal end (open or not): a
    /// follow-up `set_end` on the previous ordinal then moves the
    /// boundary between the two legs, which is the usual way of
    /// splitting a trailing stay. Elsewhere the new end stays unset
    /// until the caller provides it. Existing date data is never
    /// discarded.
    pub fn append_after(&mut self, ordinal: usize) -> AppResult<()> {
        self.check_ordinal(ordinal)?;

        let prev = &self.segments[ordinal];
        let at_tail = ordinal + 1 == self.segments.len();

        let mut seg = Segment::new(
            prev.booking_id,
            0, // renumbered below
            prev.end,
            if at_tail { prev.end } else { None },
            prev.city_id,
            &prev.currency,
        );
        seg.meal = prev.meal.clone();

        self.segments.insert(ordinal + 1, seg);
        self.renumber();
        Ok(())
    }

    /// Set the (exclusive) end of one segment and cascade the new
    /// boundary into the following segment's start, preserving
    /// continuity. Changing where one stay ends always changes where
    /// the next one begins; there is no separate confirmation step.
    pub fn set_end(&mut self, ordinal: usize, new_end: NaiveDate) -> AppResult<()> {
        self.check_ordinal(ordinal)?;

        if let Some(start) = self.segments[ordinal].start
            && new_end <= start
        {
            return Err(AppError::InvalidDateOrder(format!(
                "end {new_end} must fall after segment start {start}"
            )));
        }

        // The cascaded start must stay strictly before the following
        // segment's own end, when that boundary is already fixed.
        if let Some(next) = self.segments.get(ordinal + 1)
            && let Some(next_end) = next.end
            && new_end >= next_end
        {
            return Err(AppError::InvalidDateOrder(format!(
                "end {new_end} must fall before the next segment's end {next_end}"
            )));
        }

        self.segments[ordinal].end = Some(new_end);
        if let Some(next) = self.segments.get_mut(ordinal + 1) {
            next.start = Some(new_end);
        }
        Ok(())
    }

    /// Partial update of the non-date fields of one segment. No
    /// cross-segment invariant is involved, so this only fails on a
    /// bad ordinal.
    pub fn update_fields(&mut self, ordinal: usize, patch: SegmentPatch) -> AppResult<()> {
        self.check_ordinal(ordinal)?;

        let seg = &mut self.segments[ordinal];
        if let Some(hotels) = patch.hotels {
            seg.hotels = hotels;
        }
        if let Some(meal) = patch.meal {
            seg.meal = meal;
        }
        if let Some(currency) = patch.currency {
            seg.currency = currency;
        }
        if let Some(target_price) = patch.target_price {
            seg.target_price = target_price;
        }
        Ok(())
    }

    /// Add or remove one hotel reference on a segment. Idempotent:
    /// re-adding a present hotel or removing an absent one is a no-op.
    pub fn toggle_hotel(&mut self, ordinal: usize, hotel_id: i64, included: bool) -> AppResult<()> {
        self.check_ordinal(ordinal)?;

        let seg = &mut self.segments[ordinal];
        if included {
            seg.hotels.insert(hotel_id);
        } else {
            seg.hotels.remove(&hotel_id);
        }
        Ok(())
    }

    /// Atomically replace the contiguous sub-range of `parent` starting
    /// at `at` (the range this chain was loaded from) with the edited
    /// segments, renumbering everything after it. The whole resulting
    /// list is re-validated; on failure `parent` is left untouched so
    /// the operator can reconcile the boundary and retry.
    pub fn commit(self, parent: &mut Vec<Segment>, at: usize) -> AppResult<()> {
        if at > parent.len() || at + self.loaded_len > parent.len() {
            return Err(AppError::OutOfRangeOrdinal(at));
        }

        let mut candidate = parent.clone();
        candidate.splice(at..at + self.loaded_len, self.segments);
        for (i, seg) in candidate.iter_mut().enumerate() {
            seg.ordinal = i;
        }

        validate(&candidate)?;
        *parent = candidate;
        Ok(())
    }

    fn renumber(&mut self) {
        for (i, seg) in self.segments.iter_mut().enumerate() {
            seg.ordinal = i;
        }
    }
}

/// Structural validation of a segment list:
/// continuity (adjacent end == start), date monotonicity
/// (start < end when both present, open bounds only at the chain
/// ends), ordinal contiguity, and a single destination city.
pub fn validate(segments: &[Segment]) -> AppResult<()> {
    if segments.is_empty() {
        return Err(AppError::InvalidChain(
            "chain must contain at least one segment".to_string(),
        ));
    }

    let last = segments.len() - 1;
    let city_id = segments[0].city_id;

    for (i, seg) in segments.iter().enumerate() {
        if seg.ordinal != i {
            return Err(AppError::InvalidChain(format!(
                "ordinal {} at position {} (ordinals must be contiguous)",
                seg.ordinal, i
            )));
        }

        if seg.city_id != city_id {
            return Err(AppError::InvalidChain(
                "all segments of a chain must share one destination city".to_string(),
            ));
        }

        if seg.start.is_none() && i != 0 {
            return Err(AppError::InvalidChain(format!(
                "segment {} has no start date but is not the first segment",
                i
            )));
        }

        if seg.end.is_none() && i != last {
            return Err(AppError::InvalidChain(format!(
                "segment {} has no end date but is not the last segment",
                i
            )));
        }

        // A stay with no determinable bounds at all is rejected.
        if seg.start.is_none() && seg.end.is_none() {
            return Err(AppError::InvalidChain(format!(
                "segment {} has neither start nor end date",
                i
            )));
        }

        if let (Some(s), Some(e)) = (seg.start, seg.end)
            && s >= e
        {
            return Err(AppError::InvalidChain(format!(
                "segment {} start {} is not before end {}",
                i, s, e
            )));
        }
    }

    for (i, pair) in segments.windows(2).enumerate() {
        if let (Some(e), Some(s)) = (pair[0].end, pair[1].start)
            && e != s
        {
            return Err(AppError::InvalidChain(format!(
                "segment {} ends {} but segment {} starts {}",
                i,
                e,
                i + 1,
                s
            )));
        }
    }

    Ok(())
}
