//! Catalog Service
//!
//! Read-only queries over the static catalogs.

use std::sync::Arc;

use crate::domain::{
    Business, CatalogQuery, DirectoryContact, MenuItem, ServiceGuide, TransportHub,
};
use crate::infrastructure::catalog::Catalog;
use crate::shared::error::AppError;

/// Catalog service errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
}

impl CatalogError {
    fn not_found(kind: &'static str, id: &str) -> Self {
        CatalogError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

/// Business with its menu, as shown on the restaurant screen
#[derive(Debug, Clone)]
pub struct BusinessDetail {
    pub business: Business,
    pub menu: Vec<MenuItem>,
}

#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn list_businesses(&self, query: &CatalogQuery) -> Vec<Business> {
        query
            .filter(&self.catalog.businesses)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_business(&self, id: &str) -> Result<BusinessDetail, CatalogError> {
        let business = self
            .catalog
            .business(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Business", id))?;
        let menu = self.catalog.menu_for_business(id);
        Ok(BusinessDetail { business, menu })
    }

    /// Menu of one business narrowed by `query`.
    pub fn business_menu(
        &self,
        business_id: &str,
        query: &CatalogQuery,
    ) -> Result<Vec<MenuItem>, CatalogError> {
        if self.catalog.business(business_id).is_none() {
            return Err(CatalogError::not_found("Business", business_id));
        }
        let menu = self.catalog.menu_for_business(business_id);
        Ok(query.filter(&menu).into_iter().cloned().collect())
    }

    /// All menu items, optionally narrowed to one business.
    pub fn list_menu(&self, query: &CatalogQuery, business_id: Option<&str>) -> Vec<MenuItem> {
        query
            .filter(&self.catalog.menu_items)
            .into_iter()
            .filter(|item| business_id.map_or(true, |b| item.business_id == b))
            .cloned()
            .collect()
    }

    pub fn get_menu_item(&self, id: &str) -> Result<MenuItem, CatalogError> {
        self.catalog
            .menu_item(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Menu item", id))
    }

    pub fn menu_categories(&self) -> Vec<String> {
        self.catalog.menu_categories()
    }

    pub fn list_transport_hubs(&self, query: &CatalogQuery) -> Vec<TransportHub> {
        query
            .filter(&self.catalog.transport_hubs)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_transport_hub(&self, id: &str) -> Result<TransportHub, CatalogError> {
        self.catalog
            .transport_hub(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Transport hub", id))
    }

    pub fn list_service_guides(&self, query: &CatalogQuery) -> Vec<ServiceGuide> {
        query
            .filter(&self.catalog.service_guides)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_service_guide(&self, id: &str) -> Result<ServiceGuide, CatalogError> {
        self.catalog
            .service_guide(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Service guide", id))
    }

    pub fn list_contacts(&self, query: &CatalogQuery) -> Vec<DirectoryContact> {
        query
            .filter(&self.catalog.contacts)
            .into_iter()
            .cloned()
            .collect()
    }
}
