use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct City {
    pub id: i64,
    pub name: String,    // ⇔ cities.name (UNIQUE)
    pub country: String, // ⇔ cities.country (TEXT, default '')
}
