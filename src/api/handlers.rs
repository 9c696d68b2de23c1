use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{Category, OutfitRecommendation, RecommendationContext, WardrobeItem};
use crate::services::{
    categorize,
    recommendations::{self, MAX_OUTFIT_COUNT},
};

use super::AppState;

// Request/Response types

/// Assigns a fresh id to items submitted without one
fn with_assigned_id(mut item: WardrobeItem) -> WardrobeItem {
    if item.id.trim().is_empty() {
        item.id = Uuid::new_v4().to_string();
    }
    item
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    #[serde(flatten)]
    pub item: WardrobeItem,
    /// Category derived from the item text
    pub derived_category: Category,
}

impl From<WardrobeItem> for ItemResponse {
    fn from(item: WardrobeItem) -> Self {
        let derived_category = categorize(&item);
        Self {
            item,
            derived_category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct OutfitCountQuery {
    pub count: Option<usize>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List the wardrobe with derived categories
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<ItemResponse>>> {
    let items = state.catalog.list_items().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Add an item to the wardrobe
pub async fn create_item(
    State(state): State<AppState>,
    Json(item): Json<WardrobeItem>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    let item = with_assigned_id(item);
    if item.name.trim().is_empty() {
        return Err(AppError::InvalidInput("Item name must not be empty".to_string()));
    }

    state.catalog.add_item(item.clone()).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// Classify an item without storing it
pub async fn categorize_item(Json(item): Json<WardrobeItem>) -> Json<CategoryResponse> {
    Json(CategoryResponse {
        category: categorize(&item),
    })
}

/// Best single outfit for the given context
pub async fn recommend_outfit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(context): Json<RecommendationContext>,
) -> AppResult<Json<OutfitRecommendation>> {
    tracing::info!(request_id = %request_id, "Processing outfit request");

    let outfit = recommendations::recommend_outfit(
        state.catalog.as_ref(),
        &context,
        state.settings,
        state.seed,
    )
    .await?;

    outfit.map(Json).ok_or_else(|| {
        AppError::NotFound(
            "No outfit could be assembled; add more items or loosen the context".to_string(),
        )
    })
}

/// Several diverse outfits for the given context
pub async fn recommend_outfits(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<OutfitCountQuery>,
    Json(context): Json<RecommendationContext>,
) -> AppResult<Json<Vec<OutfitRecommendation>>> {
    let count = query.count.unwrap_or(state.settings.default_outfit_count);
    if count == 0 || count > MAX_OUTFIT_COUNT {
        tracing::warn!(request_id = %request_id, count, "Rejected outfit count");
        return Err(AppError::InvalidInput(format!(
            "count must be between 1 and {}",
            MAX_OUTFIT_COUNT
        )));
    }

    tracing::info!(request_id = %request_id, count, "Processing multiple outfit request");

    let outfits = recommendations::recommend_outfits(
        state.catalog.as_ref(),
        &context,
        count,
        state.settings,
        state.seed,
    )
    .await?;

    Ok(Json(outfits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_id_is_generated() {
        let item: WardrobeItem =
            serde_json::from_str(r#"{"name":"Black Heels","color":"black"}"#).unwrap();
        let item = with_assigned_id(item);
        assert!(Uuid::parse_str(&item.id).is_ok());
        assert_eq!(item.color.as_deref(), Some("black"));
    }

    #[test]
    fn test_given_id_is_kept() {
        let item: WardrobeItem =
            serde_json::from_str(r#"{"id":"abc","name":"Tee","wear_count":2}"#).unwrap();
        let item = with_assigned_id(item);
        assert_eq!(item.id, "abc");
        assert_eq!(item.wear_count, Some(2));
    }

    #[test]
    fn test_blank_id_is_replaced() {
        let item = with_assigned_id(WardrobeItem::new("  ", "Tee"));
        assert!(Uuid::parse_str(&item.id).is_ok());
    }

    #[test]
    fn test_item_response_carries_category() {
        let response = ItemResponse::from(WardrobeItem::new("1", "Rain Boot Jacket"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["derived_category"], "Shoes");
        assert_eq!(json["name"], "Rain Boot Jacket");
    }
}
