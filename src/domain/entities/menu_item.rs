//! Menu item entity.

use serde::{Deserialize, Serialize};

use crate::domain::search::Searchable;

/// A dish or drink sold by a [`Business`](super::Business).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub description: String,
    /// Unit price in cents
    pub price_cents: i64,
    pub category: String,
    pub rating: f32,
    pub image_url: Option<String>,
    pub available: bool,
}

impl Searchable for MenuItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}
