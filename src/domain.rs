pub use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
pub use uuid::Uuid;

/// An immutable contact record. Only the registry constructs these,
/// so a `Contact` always carries non-blank first and last names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub(crate) fn new(first_name: String, last_name: String, phone: String) -> Self {
        Contact {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            phone,
            created_at: Utc::now(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
