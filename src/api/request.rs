//! Page request parameters and their query-string encoding.

use crate::models::{QueryState, Resource, SortDirection};

/// Everything needed to issue one page GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub resource: Resource,
    pub limit: usize,
    pub skip: usize,
    /// Trimmed, non-empty search text. Selects the `/search` endpoint.
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<SortDirection>,
}

impl PageRequest {
    /// Request for the page `query` currently points at.
    pub fn from_query(resource: Resource, query: &QueryState) -> Self {
        let search = query
            .is_search()
            .then(|| query.search_text.trim().to_string());
        let order = query
            .sort_field
            .as_ref()
            .map(|_| query.sort_direction.unwrap_or_default());

        Self {
            resource,
            limit: query.page_size,
            skip: query.offset(),
            search,
            sort_by: query.sort_field.clone(),
            order,
        }
    }

    /// Same request at a different offset (Append mode).
    pub fn at_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Path relative to the base URL.
    pub fn endpoint(&self) -> String {
        match self.search {
            Some(_) => format!("{}/search", self.resource.path()),
            None => self.resource.path().to_string(),
        }
    }

    /// Ordered query parameters. Search and list endpoints receive the same
    /// select and sort parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("skip", self.skip.to_string()),
            ("select", self.resource.select_param()),
        ];
        if let Some(q) = &self.search {
            pairs.push(("q", q.clone()));
        }
        if let Some(field) = &self.sort_by {
            pairs.push(("sortBy", field.clone()));
            pairs.push(("order", self.order.unwrap_or_default().as_param().to_string()));
        }
        pairs
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_and_limit_follow_page() {
        for page_size in [1, 5, 10, 15, 20] {
            for page in [0, 1, 2, 7] {
                let mut query = QueryState::new(page_size);
                query.page = page;
                let req = PageRequest::from_query(Resource::Users, &query);
                assert_eq!(req.limit, page_size);
                assert_eq!(req.skip, page * page_size);
            }
        }
    }

    #[test]
    fn test_plain_list_query_string() {
        let query = QueryState::new(5);
        let req = PageRequest::from_query(Resource::Users, &query);
        assert_eq!(req.endpoint(), "users");
        assert_eq!(
            req.query_string(),
            "limit=5&skip=0&select=firstName%2ClastName%2Cemail%2Cphone%2CbirthDate%2Cage%2Cgender"
        );
    }

    #[test]
    fn test_search_uses_search_endpoint_with_same_params() {
        let mut query = QueryState::new(10);
        query.search_text = "  john doe ".to_string();
        query.sort_field = Some("age".to_string());
        query.sort_direction = Some(SortDirection::Desc);
        let req = PageRequest::from_query(Resource::Users, &query);

        assert_eq!(req.endpoint(), "users/search");
        let keys: Vec<_> = req.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["limit", "skip", "select", "q", "sortBy", "order"]);
        assert!(req.query_string().contains("q=john%20doe"));
        assert!(req.query_string().ends_with("sortBy=age&order=desc"));
    }

    #[test]
    fn test_sort_without_direction_defaults_to_asc() {
        let mut query = QueryState::new(5);
        query.sort_field = Some("email".to_string());
        let req = PageRequest::from_query(Resource::Users, &query);
        assert_eq!(req.order, Some(SortDirection::Asc));
        assert!(req.query_string().ends_with("sortBy=email&order=asc"));
    }

    #[test]
    fn test_direction_without_field_is_ignored() {
        let mut query = QueryState::new(5);
        query.sort_direction = Some(SortDirection::Desc);
        let req = PageRequest::from_query(Resource::Products, &query);
        assert_eq!(req.order, None);
        assert!(!req.query_string().contains("order"));
    }

    #[test]
    fn test_at_skip() {
        let req = PageRequest::from_query(Resource::Products, &QueryState::new(20)).at_skip(40);
        assert_eq!(req.skip, 40);
        assert_eq!(req.limit, 20);
    }
}
