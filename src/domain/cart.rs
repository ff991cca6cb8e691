//! Cart arithmetic.
//!
//! Mirrors the quantity counters of the ordering screen so the server
//! prices an order exactly the way the client displayed it.

use serde::{Deserialize, Serialize};

use super::entities::MenuItem;

/// Upper bound for the quantity of a single line
pub const MAX_LINE_QUANTITY: u32 = 99;

/// One menu item and how many of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents.saturating_mul(i64::from(self.quantity))
    }
}

/// Cart errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("Quantity for {item} must be between 1 and {max}", max = MAX_LINE_QUANTITY)]
    QuantityOutOfRange { item: String },

    #[error("Item {0} is not in the cart")]
    NotInCart(String),
}

/// Ordered collection of cart lines, one per menu item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item`, merging into an existing line.
    pub fn add(&mut self, item: &MenuItem, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::QuantityOutOfRange {
                item: item.id.clone(),
            });
        }

        match self.position(&item.id) {
            Some(index) => {
                let merged = self.lines[index].quantity.saturating_add(quantity);
                Self::check_quantity(&item.id, merged)?;
                self.lines[index].quantity = merged;
            }
            None => {
                Self::check_quantity(&item.id, quantity)?;
                self.lines.push(CartLine {
                    menu_item_id: item.id.clone(),
                    name: item.name.clone(),
                    unit_price_cents: item.price_cents,
                    quantity,
                });
            }
        }
        Ok(())
    }

    pub fn increment(&mut self, menu_item_id: &str) -> Result<u32, CartError> {
        let index = self
            .position(menu_item_id)
            .ok_or_else(|| CartError::NotInCart(menu_item_id.to_string()))?;
        let next = self.lines[index].quantity + 1;
        Self::check_quantity(menu_item_id, next)?;
        self.lines[index].quantity = next;
        Ok(next)
    }

    /// Decrease by one; the line disappears when it reaches zero.
    pub fn decrement(&mut self, menu_item_id: &str) -> Result<u32, CartError> {
        let index = self
            .position(menu_item_id)
            .ok_or_else(|| CartError::NotInCart(menu_item_id.to_string()))?;
        let next = self.lines[index].quantity - 1;
        if next == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = next;
        }
        Ok(next)
    }

    /// Set an absolute quantity; zero removes the line.
    pub fn set_quantity(&mut self, menu_item_id: &str, quantity: u32) -> Result<(), CartError> {
        let index = self
            .position(menu_item_id)
            .ok_or_else(|| CartError::NotInCart(menu_item_id.to_string()))?;
        if quantity == 0 {
            self.lines.remove(index);
            return Ok(());
        }
        Self::check_quantity(menu_item_id, quantity)?;
        self.lines[index].quantity = quantity;
        Ok(())
    }

    pub fn remove(&mut self, menu_item_id: &str) -> Option<CartLine> {
        self.position(menu_item_id).map(|index| self.lines.remove(index))
    }

    pub fn quantity_of(&self, menu_item_id: &str) -> u32 {
        self.position(menu_item_id)
            .map(|index| self.lines[index].quantity)
            .unwrap_or(0)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal_cents(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.line_total_cents()))
    }

    fn position(&self, menu_item_id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.menu_item_id == menu_item_id)
    }

    fn check_quantity(menu_item_id: &str, quantity: u32) -> Result<(), CartError> {
        if (1..=MAX_LINE_QUANTITY).contains(&quantity) {
            Ok(())
        } else {
            Err(CartError::QuantityOutOfRange {
                item: menu_item_id.to_string(),
            })
        }
    }
}
