//! Decoding of the `{ "data": [...] }` response envelope.

use crate::FetchError;
use grocer_core::catalog::Product;
use serde_json::Value;

/// Extract the product list from a response body.
///
/// A body that is not JSON at all is a parse failure. A JSON body whose
/// `data` member is missing, null, not an array, or holds entries that do
/// not decode as products yields an empty list.
pub fn products_from_body(body: &[u8]) -> Result<Vec<Product>, FetchError> {
    let mut value: Value =
        serde_json::from_slice(body).map_err(|e| FetchError::ParseError(e.to_string()))?;

    let data = match value.get_mut("data") {
        Some(data @ Value::Array(_)) => data.take(),
        Some(Value::Null) | None => {
            tracing::warn!("response envelope has no data member");
            return Ok(Vec::new());
        }
        Some(other) => {
            tracing::warn!(kind = json_kind(other), "response data is not an array");
            return Ok(Vec::new());
        }
    };

    match serde_json::from_value::<Vec<Product>>(data) {
        Ok(products) => Ok(products),
        Err(e) => {
            tracing::warn!(error = %e, "response data did not decode as products");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
