//! Static Catalog
//!
//! In-memory catalogs seeded at startup. Read-only for the life of the
//! process, so lookups need no locking.

mod seed;

use std::collections::BTreeSet;

use crate::domain::{Business, DirectoryContact, MenuItem, ServiceGuide, TransportHub};

/// All read-only catalogs behind the app's screens
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub businesses: Vec<Business>,
    pub menu_items: Vec<MenuItem>,
    pub transport_hubs: Vec<TransportHub>,
    pub service_guides: Vec<ServiceGuide>,
    pub contacts: Vec<DirectoryContact>,
}

impl Catalog {
    /// Catalog with the built-in municipal dataset.
    pub fn seeded() -> Self {
        let catalog = Self {
            businesses: seed::businesses(),
            menu_items: seed::menu_items(),
            transport_hubs: seed::transport_hubs(),
            service_guides: seed::service_guides(),
            contacts: seed::contacts(),
        };
        tracing::debug!(
            businesses = catalog.businesses.len(),
            menu_items = catalog.menu_items.len(),
            transport_hubs = catalog.transport_hubs.len(),
            service_guides = catalog.service_guides.len(),
            contacts = catalog.contacts.len(),
            "Catalog seeded"
        );
        catalog
    }

    pub fn business(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|m| m.id == id)
    }

    /// Menu of one business, in catalog order
    pub fn menu_for_business(&self, business_id: &str) -> Vec<MenuItem> {
        self.menu_items
            .iter()
            .filter(|m| m.business_id == business_id)
            .cloned()
            .collect()
    }

    /// Distinct menu categories, sorted
    pub fn menu_categories(&self) -> Vec<String> {
        self.menu_items
            .iter()
            .map(|m| m.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn transport_hub(&self, id: &str) -> Option<&TransportHub> {
        self.transport_hubs.iter().find(|h| h.id == id)
    }

    pub fn service_guide(&self, id: &str) -> Option<&ServiceGuide> {
        self.service_guides.iter().find(|g| g.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_is_populated() {
        let catalog = Catalog::seeded();
        assert!(!catalog.businesses.is_empty());
        assert!(!catalog.menu_items.is_empty());
        assert!(!catalog.transport_hubs.is_empty());
        assert!(!catalog.service_guides.is_empty());
        assert!(!catalog.contacts.is_empty());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = Catalog::seeded();
        let ids: HashSet<_> = catalog.menu_items.iter().map(|m| &m.id).collect();
        assert_eq!(ids.len(), catalog.menu_items.len());
        let ids: HashSet<_> = catalog.businesses.iter().map(|b| &b.id).collect();
        assert_eq!(ids.len(), catalog.businesses.len());
    }

    #[test]
    fn test_every_menu_item_has_a_business() {
        let catalog = Catalog::seeded();
        for item in &catalog.menu_items {
            assert!(
                catalog.business(&item.business_id).is_some(),
                "{} points at unknown business {}",
                item.id,
                item.business_id
            );
            assert!(item.price_cents > 0);
        }
    }

    #[test]
    fn test_menu_categories_sorted_and_distinct() {
        let catalog = Catalog::seeded();
        let categories = catalog.menu_categories();
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn test_menu_for_business() {
        let catalog = Catalog::seeded();
        let menu = catalog.menu_for_business("al-nakheel-grill");
        assert!(!menu.is_empty());
        assert!(menu.iter().all(|m| m.business_id == "al-nakheel-grill"));
        assert!(catalog.menu_for_business("nope").is_empty());
    }
}
