use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,                 // Stable id; reactions address reviews by it
    pub text: String,             // Body of the review
    pub rating: u8,               // Star rating, 0-5
    pub image: Option<String>,    // Transient display URL of an attached picture
    pub posted_at: DateTime<Utc>, // Submission time
    pub likes: u32,
    pub dislikes: u32,
}

/// The two reaction buttons shown under every review.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
}
