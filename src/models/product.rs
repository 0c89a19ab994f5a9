use serde::{Deserialize, Serialize};

/// Aggregate rating shipped with the product by the store API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rating {
    pub rate: f64,  // Average rating, 0.0 - 5.0
    pub count: u32, // Number of opinions behind the average
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String, // Category tag as reported by the store
    pub image: String,    // URL of the product picture
    pub rating: Rating,
}
