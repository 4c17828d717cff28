use serde::{Deserialize, Serialize};

/// A playable question (business view, also the wire shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

/// Input for creating a question; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

/// A question category: numeric id plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}
