//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::api::{Product, Rating};

/// Build a minimal product with no rating, description, or image.
pub fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        category: category.to_string(),
        description: String::new(),
        image: String::new(),
        rating: None,
    }
}

/// The two-product catalog used by the pipeline scenarios.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "Red Shoe".to_string(),
            price: 20.0,
            category: "Shoes".to_string(),
            description: "A bright red shoe for everyday wear.".to_string(),
            image: "https://example.com/red-shoe.png".to_string(),
            rating: Some(Rating {
                rate: 4.5,
                count: 120,
            }),
        },
        Product {
            id: 2,
            title: "Blue Hat".to_string(),
            price: 10.0,
            category: "Hats".to_string(),
            description: "A blue hat.".to_string(),
            image: "https://example.com/blue-hat.png".to_string(),
            rating: None,
        },
    ]
}
