//! Pagination envelope and query parameters shared by every list endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Query parameters accepted by list endpoints.
///
/// `None` fields are omitted from the query string so the backend applies
/// its own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_all: Option<bool>,
}

impl PageQuery {
    pub fn page(page: u64) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn all() -> Self {
        Self {
            query_all: Some(true),
            ..Self::default()
        }
    }

    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// One page of results.
///
/// `has_prev` always agrees with `prev_num`: there is a previous page
/// exactly when its number is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    pub page: u64,
    #[serde(default)]
    pub prev_num: Option<u64>,
    pub has_prev: bool,
    pub has_next: bool,
    #[serde(default)]
    pub total: u64,
    // The backend sends `items: null` for empty pages.
    #[serde(default, deserialize_with = "items_or_empty")]
    pub items: Vec<T>,
}

fn items_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            prev_num: self.prev_num,
            has_prev: self.has_prev,
            has_next: self.has_next,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_unset_fields() {
        let query = PageQuery::page(2).with_per_page(25);
        let raw = serde_json::to_string(&query).unwrap();
        assert_eq!(raw, r#"{"page":2,"perPage":25}"#);
    }

    #[test]
    fn query_all_serializes_alone() {
        let raw = serde_json::to_string(&PageQuery::all()).unwrap();
        assert_eq!(raw, r#"{"queryAll":true}"#);
    }

    #[test]
    fn page_parses_wire_shape() {
        let raw = r#"{
            "page": 2,
            "prevNum": 1,
            "hasPrev": true,
            "hasNext": false,
            "total": 12,
            "items": ["a", "b"]
        }"#;
        let page: Page<String> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.prev_num, Some(1));
        assert_eq!(page.has_prev, page.prev_num.is_some());
        assert_eq!(page.items, vec!["a", "b"]);
    }

    #[test]
    fn first_page_has_no_prev() {
        let raw = r#"{"page":1,"prevNum":null,"hasPrev":false,"hasNext":true,"total":40,"items":[]}"#;
        let page: Page<String> = serde_json::from_str(raw).unwrap();
        assert!(!page.has_prev);
        assert_eq!(page.has_prev, page.prev_num.is_some());
        assert!(page.is_empty());
    }

    #[test]
    fn null_items_become_empty() {
        let raw = r#"{"page":1,"prevNum":null,"hasPrev":false,"hasNext":false,"total":0,"items":null}"#;
        let page: Page<String> = serde_json::from_str(raw).unwrap();
        assert!(page.is_empty());
    }
}
