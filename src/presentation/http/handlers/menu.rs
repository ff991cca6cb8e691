//! Menu Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::application::dto::request::MenuQuery;
use crate::application::dto::response::ListResponse;
use crate::application::services::CatalogService;
use crate::domain::MenuItem;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Search all menu items, optionally within one business
pub async fn list_menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Json<ListResponse<MenuItem>> {
    let catalog = CatalogService::new(state.catalog.clone());
    let items = catalog.list_menu(&query.catalog_query(), query.business_id.as_deref());
    Json(items.into())
}

/// Distinct menu categories, sorted
pub async fn list_categories(State(state): State<AppState>) -> Json<ListResponse<String>> {
    let catalog = CatalogService::new(state.catalog.clone());
    Json(catalog.menu_categories().into())
}

pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<MenuItem>, AppError> {
    let catalog = CatalogService::new(state.catalog.clone());
    Ok(Json(catalog.get_menu_item(&item_id)?))
}
