//! Decoding of page responses.
//!
//! The array holding the records is named after the resource
//! (`{"users": [...], "total": 208, "skip": 0, "limit": 5}`).

use serde_json::Value;

use crate::error::ApiError;
use crate::models::{Record, Resource};

#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub items: Vec<Record>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

impl PageResponse {
    /// Decode a page body. `items` and `total` are required; a missing
    /// `skip`/`limit` falls back to what was requested.
    pub fn decode(
        resource: Resource,
        body: &[u8],
        requested_skip: usize,
        requested_limit: usize,
    ) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body)?;
        let object = value.as_object().ok_or_else(|| ApiError::InvalidResponse {
            message: "expected a JSON object".to_string(),
        })?;

        let field = resource.items_field();
        let items = object
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| ApiError::InvalidResponse {
                message: format!("missing '{}' array", field),
            })?
            .iter()
            .cloned()
            .map(Record::from)
            .collect();

        let total = read_count(object.get("total")).ok_or_else(|| ApiError::InvalidResponse {
            message: "missing 'total'".to_string(),
        })?;
        let skip = read_count(object.get("skip")).unwrap_or(requested_skip);
        let limit = read_count(object.get("limit")).unwrap_or(requested_limit);

        Ok(Self {
            items,
            total,
            skip,
            limit,
        })
    }

    /// Offset of the page after this one.
    pub fn next_skip(&self) -> usize {
        self.skip + self.limit.max(self.items.len())
    }

    /// True when no records remain past this page.
    pub fn is_last(&self) -> bool {
        self.items.is_empty() || self.next_skip() >= self.total
    }
}

fn read_count(value: Option<&Value>) -> Option<usize> {
    value.and_then(Value::as_u64).map(|n| n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: serde_json::Value) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    #[test]
    fn test_decode_users_page() {
        let page = PageResponse::decode(
            Resource::Users,
            &body(json!({
                "users": [{"id": 1, "firstName": "Emily"}, {"id": 2, "firstName": "Michael"}],
                "total": 208,
                "skip": 0,
                "limit": 2
            })),
            0,
            2,
        )
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].display("firstName"), "Michael");
        assert_eq!(page.total, 208);
        assert_eq!(page.next_skip(), 2);
        assert!(!page.is_last());
    }

    #[test]
    fn test_decode_missing_items_array() {
        let err = PageResponse::decode(
            Resource::Products,
            &body(json!({"users": [], "total": 0})),
            0,
            20,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { message } if message.contains("products")));
    }

    #[test]
    fn test_decode_missing_total() {
        let err = PageResponse::decode(Resource::Users, &body(json!({"users": []})), 0, 5).unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { .. }));
    }

    #[test]
    fn test_decode_not_json() {
        let err = PageResponse::decode(Resource::Users, b"<html>", 0, 5).unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { .. }));
    }

    #[test]
    fn test_skip_and_limit_default_to_request() {
        let page = PageResponse::decode(
            Resource::Users,
            &body(json!({"users": [{"id": 1}], "total": 9})),
            5,
            5,
        )
        .unwrap();
        assert_eq!(page.skip, 5);
        assert_eq!(page.limit, 5);
    }

    #[test]
    fn test_last_page_detection() {
        let tail = PageResponse {
            items: vec![Record::default(); 5],
            total: 45,
            skip: 40,
            limit: 5,
        };
        assert!(tail.is_last());

        let empty = PageResponse {
            items: Vec::new(),
            total: 45,
            skip: 20,
            limit: 20,
        };
        assert!(empty.is_last());
    }
}
