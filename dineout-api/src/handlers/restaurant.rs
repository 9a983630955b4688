use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json,
    routing::get,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::filter::RestaurantFilter;
use crate::models::*;
use crate::query::{Direction, SelectQuery, SqlValue};

use super::AppState;

const RESTAURANTS: &str = "restaurants";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/details/{id}", get(get_restaurant))
        .route("/restaurants/cuisine/{cuisine}", get(list_restaurants_by_cuisine))
        .route("/restaurants/filter", get(filter_restaurants))
        .route("/restaurants/sort-by-rating", get(list_restaurants_by_rating))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants", body = RestaurantsResponse),
        (status = 500, description = "Store error", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<RestaurantsResponse>, ApiError> {
    let restaurants = state
        .store
        .fetch_all(&SelectQuery::table(RESTAURANTS))
        .await?;

    Ok(Json(RestaurantsResponse { restaurants }))
}

#[utoipa::path(
    get,
    path = "/restaurants/details/{id}",
    responses(
        (status = 200, description = "Restaurant details, null when absent", body = RestaurantResponse),
        (status = 500, description = "Store error", body = ApiErrorResponse),
    ),
    params(
        ("id" = String, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RestaurantResponse>, ApiError> {
    let query = SelectQuery::table(RESTAURANTS).filter_eq("id", SqlValue::Text(id));
    let restaurant = state.store.fetch_optional(&query).await?;

    Ok(Json(RestaurantResponse { restaurant }))
}

#[utoipa::path(
    get,
    path = "/restaurants/cuisine/{cuisine}",
    responses(
        (status = 200, description = "Restaurants serving the cuisine", body = RestaurantsResponse),
        (status = 500, description = "Store error", body = ApiErrorResponse),
    ),
    params(
        ("cuisine" = String, Path, description = "Exact cuisine label")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants_by_cuisine(
    State(state): State<AppState>,
    Path(cuisine): Path<String>,
) -> Result<Json<RestaurantsResponse>, ApiError> {
    let query = SelectQuery::table(RESTAURANTS).filter_eq("cuisine", SqlValue::Text(cuisine));
    let restaurants = state.store.fetch_all(&query).await?;

    Ok(Json(RestaurantsResponse { restaurants }))
}

#[utoipa::path(
    get,
    path = "/restaurants/filter",
    responses(
        (status = 200, description = "Restaurants matching every supplied flag", body = RestaurantsResponse),
        (status = 500, description = "Store error", body = ApiErrorResponse),
    ),
    params(RestaurantFilter),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn filter_restaurants(
    State(state): State<AppState>,
    Query(filter): Query<RestaurantFilter>,
) -> Result<Json<RestaurantsResponse>, ApiError> {
    let query = filter.apply(SelectQuery::table(RESTAURANTS));
    let restaurants = state.store.fetch_all(&query).await?;

    Ok(Json(RestaurantsResponse { restaurants }))
}

#[utoipa::path(
    get,
    path = "/restaurants/sort-by-rating",
    responses(
        (status = 200, description = "Restaurants, highest rating first", body = RestaurantsResponse),
        (status = 500, description = "Store error", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants_by_rating(
    State(state): State<AppState>,
) -> Result<Json<RestaurantsResponse>, ApiError> {
    let query = SelectQuery::table(RESTAURANTS).order_by("rating", Direction::Desc);
    let restaurants = state.store.fetch_all(&query).await?;

    Ok(Json(RestaurantsResponse { restaurants }))
}
