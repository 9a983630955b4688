use axum::{
    Router,
    extract::{Path, Query, State},
    response::Json,
    routing::get,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::filter::DishFilter;
use crate::models::*;
use crate::query::{Direction, SelectQuery, SqlValue};

use super::AppState;

const DISHES: &str = "dishes";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dishes", get(list_dishes))
        .route("/dishes/details/{id}", get(get_dish))
        .route("/dishes/filter", get(filter_dishes))
        .route("/dishes/sort-by-price", get(list_dishes_by_price))
}

#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "All dishes", body = DishesResponse),
        (status = 500, description = "Store error", body = ApiErrorResponse),
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn list_dishes(State(state): State<AppState>) -> Result<Json<DishesResponse>, ApiError> {
    let dishes = state.store.fetch_all(&SelectQuery::table(DISHES)).await?;

    Ok(Json(DishesResponse { dishes }))
}

#[utoipa::path(
    get,
    path = "/dishes/details/{id}",
    responses(
        (status = 200, description = "Dish details, null when absent", body = DishResponse),
        (status = 500, description = "Store error", body = ApiErrorResponse),
    ),
    params(
        ("id" = String, Path, description = "Dish ID")
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn get_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DishResponse>, ApiError> {
    let query = SelectQuery::table(DISHES).filter_eq("id", SqlValue::Text(id));
    let dish = state.store.fetch_optional(&query).await?;

    Ok(Json(DishResponse { dish }))
}

#[utoipa::path(
    get,
    path = "/dishes/filter",
    responses(
        (status = 200, description = "Dishes matching the vegetarian flag", body = DishesResponse),
        (status = 500, description = "Store error", body = ApiErrorResponse),
    ),
    params(DishFilter),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn filter_dishes(
    State(state): State<AppState>,
    Query(filter): Query<DishFilter>,
) -> Result<Json<DishesResponse>, ApiError> {
    let query = filter.apply(SelectQuery::table(DISHES));
    let dishes = state.store.fetch_all(&query).await?;

    Ok(Json(DishesResponse { dishes }))
}

#[utoipa::path(
    get,
    path = "/dishes/sort-by-price",
    responses(
        (status = 200, description = "Dishes, cheapest first", body = DishesResponse),
        (status = 500, description = "Store error", body = ApiErrorResponse),
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn list_dishes_by_price(
    State(state): State<AppState>,
) -> Result<Json<DishesResponse>, ApiError> {
    let query = SelectQuery::table(DISHES).order_by("price", Direction::Asc);
    let dishes = state.store.fetch_all(&query).await?;

    Ok(Json(DishesResponse { dishes }))
}
