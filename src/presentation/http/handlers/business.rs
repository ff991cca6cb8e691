//! Business Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::application::dto::response::{BusinessDetailResponse, ListResponse};
use crate::application::services::CatalogService;
use crate::domain::{Business, CatalogQuery, MenuItem};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List businesses, filtered by `?q=` and `?category=` (cuisine)
pub async fn list_businesses(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<ListResponse<Business>> {
    let catalog = CatalogService::new(state.catalog.clone());
    Json(catalog.list_businesses(&query).into())
}

/// Get business by ID, with its menu
pub async fn get_business(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
) -> Result<Json<BusinessDetailResponse>, AppError> {
    let catalog = CatalogService::new(state.catalog.clone());
    let detail = catalog.get_business(&business_id)?;
    Ok(Json(detail.into()))
}

/// Menu of one business
pub async fn get_business_menu(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ListResponse<MenuItem>>, AppError> {
    let catalog = CatalogService::new(state.catalog.clone());
    let menu = catalog.business_menu(&business_id, &query)?;
    Ok(Json(menu.into()))
}
