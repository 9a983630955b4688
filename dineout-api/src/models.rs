use serde::Serialize;
use utoipa::ToSchema;

use crate::store::Record;

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantsResponse {
    /// Restaurant rows with every stored column
    #[schema(value_type = Vec<Object>)]
    pub restaurants: Vec<Record>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantResponse {
    /// Matching restaurant row, or null when the id is unknown
    #[schema(value_type = Option<Object>)]
    pub restaurant: Option<Record>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishesResponse {
    /// Dish rows with every stored column
    #[schema(value_type = Vec<Object>)]
    pub dishes: Vec<Record>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishResponse {
    /// Matching dish row, or null when the id is unknown
    #[schema(value_type = Option<Object>)]
    pub dish: Option<Record>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}
