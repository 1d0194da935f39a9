use serde::Serialize;

/// Flat, serialization-friendly view of one itinerary segment, joined
/// with its booking and reference names. One row per segment.
#[derive(Debug, Serialize)]
pub struct SegmentExport {
    pub booking_id: i64,
    pub client: String,
    pub ordinal: i64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub city: String,
    pub hotels: String, // ';'-joined hotel names
    pub meal: Option<String>,
    pub currency: String,
    pub target_price: Option<f64>,
    pub guide: Option<String>,
}
