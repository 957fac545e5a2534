//! Navigable, bookmarkable view locations.
//!
//! Search text and the selected store travel as query parameters, so a view
//! reconstructs its state from the route it is mounted with.

use crate::ids::StoreName;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters escaped in query values and path segments: everything except
/// RFC 3986 unreserved characters.
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A location in the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products {
        query: Option<String>,
        category: Option<String>,
    },
    Deals,
    Stores {
        store: Option<StoreName>,
    },
    About,
    NotFound(String),
}

impl Route {
    /// Route a submitted search navigates to.
    pub fn search(query: impl Into<String>) -> Self {
        let query = query.into();
        let query = query.trim();
        Route::Products {
            query: (!query.is_empty()).then(|| query.to_string()),
            category: None,
        }
    }

    /// Parse a path with an optional query string, e.g. `/search?query=milk`.
    pub fn parse(path_and_query: &str) -> Self {
        let (path, query_string) = match path_and_query.split_once('?') {
            Some((p, q)) => (p, q),
            None => (path_and_query, ""),
        };
        let params = parse_query(query_string);
        let param = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let path = path.trim_end_matches('/');
        match path {
            "" => Route::Home,
            "/products" | "/search" => Route::Products {
                query: param("query"),
                category: param("category"),
            },
            "/deals" => Route::Deals,
            "/stores" => Route::Stores {
                store: param("store").map(StoreName::from),
            },
            "/about" => Route::About,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Render the route as a path with query string.
    pub fn to_href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products { query, category } => {
                let mut pairs = Vec::new();
                if let Some(q) = query {
                    pairs.push(("query", q.as_str()));
                }
                if let Some(c) = category {
                    pairs.push(("category", c.as_str()));
                }
                with_query("/products", &pairs)
            }
            Route::Deals => "/deals".to_string(),
            Route::Stores { store } => match store {
                Some(s) => with_query("/stores", &[("store", s.as_str())]),
                None => "/stores".to_string(),
            },
            Route::About => "/about".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_href())
    }
}

/// Percent-encode a single query value or path segment.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode_component(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

fn parse_query(qs: &str) -> Vec<(String, String)> {
    qs.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().into_owned()
}
