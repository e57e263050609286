//! Query string decoding.
//!
//! A key may repeat (`?name=a&name=b`); its values are joined with `,`
//! in request order, so the handler sees the single value `a,b`.

use serde::Deserialize;

/// All key/value pairs of a query string, in request order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct QueryParams(Vec<(String, String)>);

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl QueryParams {
    /// The value of `name`, with repeated occurrences joined by `,`.
    ///
    /// `None` only when the key is absent; `?name=` yields `Some("")`.
    pub fn get(&self, name: &str) -> Option<String> {
        let mut values = self
            .0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .peekable();
        values.peek()?;
        Some(values.collect::<Vec<_>>().join(","))
    }
}
