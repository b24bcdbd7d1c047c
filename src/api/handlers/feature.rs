use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::UpdateFeatureRequest;
use crate::domain::models::feature::FeatureFlag;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::warn;

pub async fn list_features(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.feature_repo.list().await?))
}

pub async fn get_feature(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let flag = state.feature_repo.find(&slug).await?
        .ok_or(AppError::NotFound(format!("Feature {} not found", slug)))?;
    Ok(Json(flag))
}

pub async fn update_feature(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateFeatureRequest>,
) -> Result<impl IntoResponse, AppError> {
    let flag = FeatureFlag::new(slug, payload.enabled, payload.description);
    let saved = state.feature_repo.upsert(&flag).await?;
    warn!("Feature {} is now {}", saved.slug, if saved.enabled { "enabled" } else { "disabled" });
    Ok(Json(saved))
}
