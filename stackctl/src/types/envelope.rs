//! The wrapper every API answer comes in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub response: T,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    /// Page to request after this one, if any.
    pub fn next_page(&self) -> Option<u32> {
        self.pagination.as_ref().and_then(Pagination::next_page)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    #[serde(default)]
    pub previous: Option<u32>,
    #[serde(default)]
    pub next: Option<u32>,
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub pages: u32,
}

impl Pagination {
    pub fn next_page(&self) -> Option<u32> {
        match self.next {
            Some(next) if next > self.current => Some(next),
            Some(_) => None,
            None if self.current < self.pages => Some(self.current + 1),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_pagination_has_no_next_page() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"response": [1, 2, 3], "count": 3}"#).unwrap();
        assert_eq!(envelope.response, vec![1, 2, 3]);
        assert_eq!(envelope.next_page(), None);
    }

    #[test]
    fn next_page_follows_pagination() {
        let middle: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"response": [], "pagination": {"previous": 1, "next": 3, "current": 2, "per_page": 30, "count": 75, "pages": 3}}"#,
        )
        .unwrap();
        assert_eq!(middle.next_page(), Some(3));

        let last = Pagination {
            previous: Some(2),
            next: None,
            current: 3,
            per_page: 30,
            count: 75,
            pages: 3,
        };
        assert_eq!(last.next_page(), None);

        let implicit = Pagination {
            current: 1,
            pages: 2,
            ..Default::default()
        };
        assert_eq!(implicit.next_page(), Some(2));
    }
}
