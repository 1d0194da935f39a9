use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    pub id: i64,
    pub city_id: i64, // ⇔ hotels.city_id
    pub name: String, // ⇔ hotels.name
}
