//! Business (restaurant) entity.

use serde::{Deserialize, Serialize};

use crate::domain::search::Searchable;

/// A food business customers can order from.
///
/// Seeded from the static catalog; the cuisine doubles as its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Stable slug, e.g. `"al-nakheel-grill"`
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    /// Average rating, 0.0 to 5.0
    pub rating: f32,
    pub delivery_fee_cents: i64,
    /// Subtotal an order must reach before it is accepted
    pub min_order_cents: i64,
    pub is_open: bool,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

impl Searchable for Business {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.cuisine.as_str(),
            self.description.as_str(),
            self.address.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(&self.cuisine)
    }
}
