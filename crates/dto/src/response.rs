use serde::Deserialize;
use serde::Serialize;
use trails_records::Trail;

/// One page of `GET /trails` results with the resolved pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page: i64,
    pub limit: i64,
    pub results: Vec<Trail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_serialize_as_list() {
        let page = Page {
            page: 1,
            limit: 10,
            results: vec![],
        };
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"page":1,"limit":10,"results":[]}"#
        );
    }
}
