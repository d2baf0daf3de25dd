use serde::{Deserialize, Deserializer};

/// One page of the paginated listing.
///
/// `next` and `previous` are backend URLs; only their presence is used. A
/// backend without pagination answers with a bare array, which decodes as a
/// single page with no cursors.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub count: u64,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageBody<T> {
    Paged {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        #[serde(default)]
        count: u64,
    },
    Flat(Vec<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match PageBody::deserialize(deserializer)? {
            PageBody::Paged {
                results,
                next,
                previous,
                count,
            } => Page {
                results,
                next,
                previous,
                count,
            },
            PageBody::Flat(results) => Page {
                count: results.len() as u64,
                results,
                next: None,
                previous: None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_body() {
        let page: Page<u32> = serde_json::from_str(
            r#"{
                "count": 23,
                "next": "http://localhost:8000/api/announcements/?page=3",
                "previous": "http://localhost:8000/api/announcements/?page=1",
                "results": [1, 2, 3]
            }"#,
        )
        .unwrap();
        assert_eq!(page.results, vec![1, 2, 3]);
        assert_eq!(page.count, 23);
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"count": 2, "next": null, "previous": null, "results": [5, 6]}"#)
                .unwrap();
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_bare_array_is_single_page() {
        let page: Page<u32> = serde_json::from_str("[4, 5]").unwrap();
        assert_eq!(page.results, vec![4, 5]);
        assert_eq!(page.count, 2);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_missing_results_is_empty() {
        let page: Page<u32> = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(page.results.is_empty());
    }
}
