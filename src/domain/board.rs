use serde::{Deserialize, Serialize};

/// A board on the backend, addressed by numeric id for queries and by
/// name in storage keys and URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub name: String,
}

impl Board {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One row of a board index listing, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Backend filename, unique within the board.
    pub filename: String,
    pub title: String,
    pub owner: String,
    pub date: String,
    pub recommend_count: i32,
}
