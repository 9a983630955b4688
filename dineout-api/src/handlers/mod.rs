pub mod dish;
pub mod restaurant;

pub use dish::router as dish_router;
pub use restaurant::router as restaurant_router;

use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// The full HTTP surface: catalog routes, API docs and a permissive CORS policy.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(restaurant_router())
        .merge(dish_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::list_restaurants_by_cuisine,
        restaurant::filter_restaurants,
        restaurant::list_restaurants_by_rating,
        dish::list_dishes,
        dish::get_dish,
        dish::filter_dishes,
        dish::list_dishes_by_price,
    ),
    components(
        schemas(
            crate::models::RestaurantsResponse,
            crate::models::RestaurantResponse,
            crate::models::DishesResponse,
            crate::models::DishResponse,
            crate::models::ApiErrorResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant catalog endpoints"),
        (name = "dishes", description = "Dish catalog endpoints")
    ),
    info(
        title = "DineOut API",
        description = "Read-only restaurant and dish catalog",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
pub(crate) async fn test_app(setup: &str) -> Router {
    let store = crate::store::memory_store(setup).await;
    app(AppState { store })
}

#[cfg(test)]
pub(crate) async fn get_json(
    app: &Router,
    uri: &str,
) -> (axum::http::StatusCode, serde_json::Value) {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
