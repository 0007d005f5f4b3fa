use serde::{Deserialize, Serialize};

/// Paging block attached to the admin list endpoints. Only `pages` is
/// guaranteed; the rest varies by endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Query parameters the admin list endpoints accept
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageQuery {
    pub status: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    /// Flattens the set parameters into query-string pairs
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_set_parameters_are_sent() {
        let query = PageQuery {
            status: Some("active".to_string()),
            page: Some(2),
            limit: None,
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("status".to_string(), "active".to_string()),
                ("page".to_string(), "2".to_string())
            ]
        );
        assert!(PageQuery::default().to_pairs().is_empty());
    }
}
