//! Query parameters shared by the resource endpoints

use std::time::Duration;

use serde::Deserialize;
use validator::Validate;

use crate::domain::{PageRequest, SortOrder};

/// Default cache duration for point lookups, in seconds
pub const DEFAULT_CACHE_DURATION_SECS: u64 = 3600;

/// Query parameters accepted by list endpoints
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListParams {
    #[validate(range(min = 1, message = "The limit must be at least 1."))]
    pub limit: Option<u32>,
    #[validate(range(min = 1, message = "The page must be at least 1."))]
    pub page: Option<u32>,
    pub order: Option<SortOrder>,
}

impl ListParams {
    /// Builds the page request, applying defaults for omitted parameters
    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();

        PageRequest::new(
            self.order.unwrap_or(defaults.order),
            self.limit.unwrap_or(defaults.limit),
            self.page.unwrap_or(defaults.page),
        )
    }
}

/// Query parameters accepted by show endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowParams {
    pub cache_duration: Option<u64>,
}

impl ShowParams {
    /// Requested cache TTL, defaulting to one hour. Zero disables caching
    /// for this request.
    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration.unwrap_or(DEFAULT_CACHE_DURATION_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let params = ListParams::default();
        let request = params.page_request();

        assert_eq!(request.order, SortOrder::Desc);
        assert_eq!(request.limit, 10);
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_list_params_overrides() {
        let params = ListParams {
            limit: Some(25),
            page: Some(3),
            order: Some(SortOrder::Asc),
        };
        let request = params.page_request();

        assert_eq!(request.order, SortOrder::Asc);
        assert_eq!(request.limit, 25);
        assert_eq!(request.page, 3);
    }

    #[test]
    fn test_list_params_rejects_zero_limit() {
        let params = ListParams {
            limit: Some(0),
            ..Default::default()
        };

        assert!(params.validate().is_err());
    }

    #[test]
    fn test_list_params_rejects_zero_page() {
        let params = ListParams {
            page: Some(0),
            ..Default::default()
        };

        assert!(params.validate().is_err());
    }

    #[test]
    fn test_order_deserializes_uppercase_only() {
        let params: ListParams = serde_json::from_str(r#"{"order": "ASC"}"#).unwrap();
        assert_eq!(params.order, Some(SortOrder::Asc));

        assert!(serde_json::from_str::<ListParams>(r#"{"order": "asc"}"#).is_err());
    }

    #[test]
    fn test_show_params_default_duration() {
        let params = ShowParams::default();
        assert_eq!(params.cache_duration(), Duration::from_secs(3600));
    }

    #[test]
    fn test_show_params_zero_disables_caching() {
        let params = ShowParams {
            cache_duration: Some(0),
        };
        assert!(params.cache_duration().is_zero());
    }
}
