use serde::Deserialize;
use utoipa::IntoParams;

use crate::query::{SelectQuery, SqlValue};

/// Query-string flags accepted by `GET /restaurants/filter`.
///
/// A flag that is not supplied (or supplied empty) adds no constraint. A
/// supplied `0` is a real constraint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RestaurantFilter {
    /// Vegetarian flag (`1`/`0`)
    pub is_veg: Option<String>,
    /// Outdoor seating flag (`1`/`0`)
    pub has_outdoor_seating: Option<String>,
    /// Luxury flag (`1`/`0`)
    pub is_luxury: Option<String>,
}

impl RestaurantFilter {
    pub fn apply(&self, query: SelectQuery) -> SelectQuery {
        query
            .filter_eq_opt("isVeg", parse_flag(self.is_veg.as_deref()))
            .filter_eq_opt(
                "hasOutdoorSeating",
                parse_flag(self.has_outdoor_seating.as_deref()),
            )
            .filter_eq_opt("isLuxury", parse_flag(self.is_luxury.as_deref()))
    }
}

/// Query-string flags accepted by `GET /dishes/filter`.
///
/// The `isVeg` condition is always present; a missing flag binds NULL and so
/// matches no rows.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DishFilter {
    /// Vegetarian flag, compared as supplied (`1`/`0`)
    pub is_veg: Option<String>,
}

impl DishFilter {
    pub fn apply(&self, query: SelectQuery) -> SelectQuery {
        let is_veg = self
            .is_veg
            .clone()
            .map_or(SqlValue::Null, SqlValue::Text);

        query.filter_eq("isVeg", is_veg)
    }
}

/// A supplied, non-empty flag is bound verbatim; column affinity converts
/// `1`/`0` for INTEGER columns.
pub fn parse_flag(raw: Option<&str>) -> Option<SqlValue> {
    match raw {
        Some(raw) if !raw.is_empty() => Some(SqlValue::Text(raw.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SqlValue {
        SqlValue::Text(s.to_string())
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(None), None);
        assert_eq!(parse_flag(Some("")), None);
        assert_eq!(parse_flag(Some("0")), Some(text("0")));
        assert_eq!(parse_flag(Some("1")), Some(text("1")));
        assert_eq!(parse_flag(Some("true")), Some(text("true")));
        assert_eq!(parse_flag(Some("false")), Some(text("false")));
        assert_eq!(parse_flag(Some(" ")), Some(text(" ")));
    }

    #[test]
    fn test_restaurant_filter_fixed_order() {
        // Supplied out of order on purpose; rendering order never changes.
        let filter: RestaurantFilter =
            serde_json::from_str(r#"{"isLuxury":"1","isVeg":"true","hasOutdoorSeating":"0"}"#)
                .unwrap();

        let statement = filter.apply(SelectQuery::table("restaurants")).build();

        assert_eq!(
            statement.sql,
            "SELECT * FROM restaurants WHERE 1=1 AND isVeg = ? AND hasOutdoorSeating = ? AND isLuxury = ?"
        );
        assert_eq!(statement.args, vec![text("true"), text("0"), text("1")]);
    }

    #[test]
    fn test_restaurant_filter_ignores_unknown_and_absent() {
        let filter: RestaurantFilter =
            serde_json::from_str(r#"{"cuisine":"Italian","isLuxury":""}"#).unwrap();

        let statement = filter.apply(SelectQuery::table("restaurants")).build();

        assert_eq!(statement.sql, "SELECT * FROM restaurants WHERE 1=1");
        assert!(statement.args.is_empty());
    }

    #[test]
    fn test_dish_filter_zero_is_a_constraint() {
        let filter = DishFilter {
            is_veg: Some("0".to_string()),
        };

        let statement = filter.apply(SelectQuery::table("dishes")).build();

        assert_eq!(statement.sql, "SELECT * FROM dishes WHERE 1=1 AND isVeg = ?");
        assert_eq!(statement.args, vec![text("0")]);
    }

    #[test]
    fn test_dish_filter_missing_flag_binds_null() {
        let statement = DishFilter::default()
            .apply(SelectQuery::table("dishes"))
            .build();

        assert_eq!(statement.sql, "SELECT * FROM dishes WHERE 1=1 AND isVeg = ?");
        assert_eq!(statement.args, vec![SqlValue::Null]);
    }
}
