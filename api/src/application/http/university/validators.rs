use std::borrow::Cow;

use serde::Deserialize;
use uniportal_core::domain::university::value_objects::{SortField, SortOrder};
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SearchUniversitiesParams {
    /// Full-text query across the whole record.
    #[validate(length(max = 100, message = "Search query too long (max 100 characters)"))]
    pub search: Option<String>,

    #[validate(length(max = 50, message = "Country query too long (max 50 characters)"))]
    pub country: Option<String>,

    #[validate(length(max = 50, message = "City query too long (max 50 characters)"))]
    pub city: Option<String>,

    /// Matched against both the full and the short institution name.
    #[validate(length(max = 100, message = "Name query too long (max 100 characters)"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(max = 50, message = "Type query too long (max 50 characters)"))]
    pub kind: Option<String>,

    #[validate(length(max = 50, message = "Status query too long (max 50 characters)"))]
    pub status: Option<String>,

    #[validate(range(min = 1, message = "Invalid page number"))]
    pub page: Option<u64>,

    #[validate(range(min = 1, max = 100, message = "Invalid limit (must be between 1 and 100)"))]
    pub limit: Option<u64>,

    #[serde(rename = "sortBy")]
    #[validate(custom(function = validate_sort_by))]
    pub sort_by: Option<String>,

    #[serde(rename = "sortOrder")]
    #[validate(custom(function = validate_sort_order))]
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SuggestUniversitiesParams {
    /// Name prefix or fragment; fewer than two characters yields no matches.
    #[validate(length(max = 100, message = "Search query too long (max 100 characters)"))]
    pub q: Option<String>,

    /// Result cap, silently clamped to at most 20.
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct CitiesParams {
    /// Restrict the city list to one country (substring match).
    #[validate(length(max = 50, message = "Country query too long (max 50 characters)"))]
    pub country: Option<String>,
}

fn validate_sort_by(value: &str) -> Result<(), ValidationError> {
    if SortField::VALID_FIELDS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("sort_by").with_message(Cow::Owned(format!(
            "Invalid sort field. Valid options: {}",
            SortField::VALID_FIELDS.join(", ")
        ))))
    }
}

fn validate_sort_order(value: &str) -> Result<(), ValidationError> {
    value.parse::<SortOrder>().map(|_| ()).map_err(|_| {
        ValidationError::new("sort_order")
            .with_message(Cow::Borrowed("Invalid sort order (must be asc or desc)"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> SearchUniversitiesParams {
        SearchUniversitiesParams {
            search: None,
            country: None,
            city: None,
            name: None,
            kind: None,
            status: None,
            page: None,
            limit: None,
            sort_by: None,
            sort_order: None,
        }
    }

    #[test]
    fn empty_params_are_valid() {
        assert!(base_params().validate().is_ok());
    }

    #[test]
    fn overlong_search_is_rejected() {
        let params = SearchUniversitiesParams {
            search: Some("x".repeat(101)),
            ..base_params()
        };
        let errors = params.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("search"));
    }

    #[test]
    fn search_at_the_limit_is_accepted() {
        let params = SearchUniversitiesParams {
            search: Some("x".repeat(100)),
            country: Some("y".repeat(50)),
            ..base_params()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn page_zero_is_rejected() {
        let params = SearchUniversitiesParams {
            page: Some(0),
            ..base_params()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn limit_out_of_range_is_rejected() {
        for limit in [0, 101] {
            let params = SearchUniversitiesParams {
                limit: Some(limit),
                ..base_params()
            };
            assert!(params.validate().is_err(), "limit {limit} should fail");
        }
    }

    #[test]
    fn unknown_sort_field_names_the_valid_options() {
        let params = SearchUniversitiesParams {
            sort_by: Some("rank".to_string()),
            ..base_params()
        };
        let errors = params.validate().unwrap_err();
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap();
        assert!(message.contains("Valid options"));
        assert!(message.contains("established"));
    }

    #[test]
    fn sort_order_is_case_insensitive() {
        for order in ["asc", "DESC", "Asc"] {
            let params = SearchUniversitiesParams {
                sort_order: Some(order.to_string()),
                ..base_params()
            };
            assert!(params.validate().is_ok(), "{order} should be accepted");
        }

        let params = SearchUniversitiesParams {
            sort_order: Some("upward".to_string()),
            ..base_params()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn all_declared_sort_fields_pass() {
        for field in SortField::VALID_FIELDS {
            let params = SearchUniversitiesParams {
                sort_by: Some(field.to_string()),
                ..base_params()
            };
            assert!(params.validate().is_ok(), "{field} should be accepted");
        }
    }
}
