use serde::{Deserialize, Serialize};

/// Patient identity record. DOB stays an opaque `YYYY-MM-DD` string —
/// matching compares it for exact equality, never parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub mobile: Option<String>,
    pub postcode: Option<String>,
    pub created_at: String,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
