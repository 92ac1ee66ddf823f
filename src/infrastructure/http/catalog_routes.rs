//! Catalog routes

use axum::Json;

use crate::application::services::catalog::{catalog, Catalog};

/// Option lists and writing aids for request forms
pub async fn get_catalog() -> Json<Catalog> {
    Json(catalog())
}
