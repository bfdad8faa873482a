//! Request building: path template resolution and query assembly.
//!
//! An endpoint's path shape is a template with bracketed placeholders
//! (`stock/[symbol]/balance-sheet/[last]`). Per call, the wrapper supplies
//! a [`PathParams`] map covering the template's placeholders and a
//! [`QueryParams`] list; [`resolve`] produces the relative path-and-query
//! string the executor joins with the client's base address.

use crate::{Error, Result};

/// Placeholder values for a path template, keyed by placeholder name.
///
/// Keys are unique; inserting a name twice replaces the earlier value.
/// Entries not referenced by the template are ignored, which lets similar
/// endpoints share marshalling code.
#[derive(Debug, Default)]
pub(crate) struct PathParams(Vec<(&'static str, String)>);

impl PathParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
        self
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// An ordered collection of query parameters.
///
/// Duplicate names are permitted (repeated filters); serialization order
/// is insertion order.
#[derive(Debug, Default)]
pub(crate) struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.push((name.into(), value.to_string()));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize as `?k=v&k2=v2…`, percent-encoding names and values.
    /// Empty set serializes to the empty string.
    fn to_query_string(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let mut out = String::from("?");
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&urlencoding::encode(name));
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }
}

/// Resolve a path template against its placeholder map and query set.
///
/// Each `[name]` occurrence is replaced with the percent-encoded map
/// value. A placeholder with no map entry fails fast with
/// [`Error::MissingPlaceholder`] rather than emitting a malformed URL.
/// Pure function of its inputs.
pub(crate) fn resolve(template: &str, path: &PathParams, query: &QueryParams) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find(']')
            .ok_or_else(|| Error::MissingPlaceholder {
                template: template.to_string(),
                name: after.to_string(),
            })?;
        let name = &after[..close];
        let value = path.get(name).ok_or_else(|| Error::MissingPlaceholder {
            template: template.to_string(),
            name: name.to_string(),
        })?;
        out.push_str(&urlencoding::encode(value));
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out.push_str(&query.to_query_string());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_every_placeholder() {
        let path = PathParams::new()
            .insert("symbol", "aapl")
            .insert("last", "4");
        let resolved =
            resolve("stock/[symbol]/balance-sheet/[last]", &path, &QueryParams::new()).unwrap();
        assert_eq!(resolved, "stock/aapl/balance-sheet/4");
        assert!(!resolved.contains('['));
    }

    #[test]
    fn test_missing_placeholder_fails_fast() {
        let path = PathParams::new().insert("symbol", "aapl");
        let err = resolve("stock/[symbol]/earnings/[last]", &path, &QueryParams::new())
            .unwrap_err();
        match err {
            Error::MissingPlaceholder { name, template } => {
                assert_eq!(name, "last");
                assert_eq!(template, "stock/[symbol]/earnings/[last]");
            }
            other => panic!("expected MissingPlaceholder, got {other:?}"),
        }
    }

    #[test]
    fn test_unused_entries_are_tolerated() {
        let path = PathParams::new()
            .insert("symbol", "aapl")
            .insert("field", "unused");
        let resolved = resolve("stock/[symbol]/company", &path, &QueryParams::new()).unwrap();
        assert_eq!(resolved, "stock/aapl/company");
    }

    #[test]
    fn test_path_values_are_percent_encoded() {
        let path = PathParams::new().insert("symbol", "brk.a/b");
        let resolved = resolve("stock/[symbol]/quote", &path, &QueryParams::new()).unwrap();
        assert_eq!(resolved, "stock/brk.a%2Fb/quote");
    }

    #[test]
    fn test_query_order_is_preserved() {
        let mut query = QueryParams::new();
        query.push("a", 1);
        query.push("b", 2);
        let resolved = resolve("tops", &PathParams::new(), &query).unwrap();
        assert_eq!(resolved, "tops?a=1&b=2");
    }

    #[test]
    fn test_duplicate_query_names_are_kept_in_order() {
        let mut query = QueryParams::new();
        query.push("filter", "open");
        query.push("filter", "close");
        let resolved = resolve("tops", &PathParams::new(), &query).unwrap();
        assert_eq!(resolved, "tops?filter=open&filter=close");
    }

    #[test]
    fn test_empty_query_appends_nothing() {
        let resolved = resolve("market", &PathParams::new(), &QueryParams::new()).unwrap();
        assert_eq!(resolved, "market");
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let mut query = QueryParams::new();
        query.push("range", "5y 2x");
        let resolved = resolve("stock/market/batch", &PathParams::new(), &query).unwrap();
        assert_eq!(resolved, "stock/market/batch?range=5y%202x");
    }

    #[test]
    fn test_repeated_placeholder_substituted_everywhere() {
        let path = PathParams::new().insert("symbol", "msft");
        let resolved = resolve("stock/[symbol]/relevant/[symbol]", &path, &QueryParams::new())
            .unwrap();
        assert_eq!(resolved, "stock/msft/relevant/msft");
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let path = PathParams::new()
            .insert("symbol", "aapl")
            .insert("symbol", "msft");
        let resolved = resolve("stock/[symbol]/quote", &path, &QueryParams::new()).unwrap();
        assert_eq!(resolved, "stock/msft/quote");
    }
}
