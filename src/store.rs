use chrono::Utc;
use uuid::Uuid;

use crate::models::review::{Reaction, Review};

/// In-memory review board for one product view. Reviews live exactly as long
/// as the mounted view; nothing is sent to a server or persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
}

impl ReviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reviews in display order, newest first.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Adds a review at the front of the list and returns `true`. A submission
    /// whose trimmed text is empty is rejected and changes nothing.
    pub fn submit(&mut self, text: &str, rating: u8, image: Option<String>) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.reviews.insert(
            0,
            Review {
                id: Uuid::new_v4(),
                text: text.to_string(),
                rating: rating.min(5),
                image,
                posted_at: Utc::now(),
                likes: 0,
                dislikes: 0,
            },
        );
        true
    }

    /// Bumps one reaction counter on the addressed review by 1, leaving every
    /// other review and field untouched. Unknown ids are ignored.
    pub fn react(&mut self, id: Uuid, reaction: Reaction) -> bool {
        match self.reviews.iter_mut().find(|review| review.id == id) {
            Some(review) => {
                match reaction {
                    Reaction::Like => review.likes += 1,
                    Reaction::Dislike => review.dislikes += 1,
                }
                true
            }
            None => false,
        }
    }
}
