//! Department records as served by `GET /api/department`.

use serde::{Deserialize, Serialize};

/// A selectable organisational department.
///
/// The backend keys documents by `_id` and may send extra fields; only the
/// identifier and display name are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl Department {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
