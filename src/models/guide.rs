use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Guide {
    pub id: i64,
    pub name: String, // ⇔ guides.name (UNIQUE)
}
