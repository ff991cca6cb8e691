//! Staff Directory Handlers

use axum::{
    extract::{Query, State},
    Json,
};

use crate::application::dto::request::DirectoryQuery;
use crate::application::dto::response::ListResponse;
use crate::application::services::CatalogService;
use crate::domain::DirectoryContact;
use crate::startup::AppState;

/// Search contacts by `?q=` and `?department=` (signed-in residents only)
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Json<ListResponse<DirectoryContact>> {
    let catalog = CatalogService::new(state.catalog.clone());
    Json(catalog.list_contacts(&query.into()).into())
}
