use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i64,
    pub client: String,     // ⇔ bookings.client
    pub city_id: i64,       // ⇔ bookings.city_id (destination region)
    pub created_at: String, // ⇔ bookings.created_at (TEXT, ISO8601)
}
