//! Mapping of lookup results onto client-facing responses.
//!
//! Success payloads pass through untouched. Any other status is answered
//! with a uniform `{"detail": ...}` envelope, whatever error shape the
//! upstream used.

use serde_json::{Map, Value};

use crate::lookup::{LookupResult, Payload};

/// Detail used when the payload carries neither `"detail"` nor `"message"`.
pub const DEFAULT_DETAIL: &str = "Error";

/// Status code that passes the payload through unchanged.
const OK: u16 = 200;

/// Response produced by [`map_lookup_result`].
#[derive(Debug, Clone, PartialEq)]
pub struct MappedResponse {
    /// HTTP status code, copied from the lookup.
    pub status: u16,
    /// JSON body.
    pub body: Value,
}

impl MappedResponse {
    /// Whether this is a pass-through success response.
    pub fn is_success(&self) -> bool {
        self.status == OK
    }
}

impl From<LookupResult> for MappedResponse {
    fn from(result: LookupResult) -> Self {
        map_lookup_result(result.payload, result.status)
    }
}

/// Map a lookup payload and status onto the response returned to the caller.
///
/// - `200`: the payload is the body, unchanged.
/// - anything else: the body is `{"detail": d}` where `d` is the payload's
///   non-null `"detail"`, else its non-null `"message"`, else `"Error"`.
///
/// # Example
///
/// ```
/// use lightbox::mapper::map_lookup_result;
/// use serde_json::json;
///
/// let payload = json!({"message": "Expired LightBox key"});
/// let mapped = map_lookup_result(payload.as_object().cloned().unwrap(), 401);
/// assert_eq!(mapped.status, 401);
/// assert_eq!(mapped.body, json!({"detail": "Expired LightBox key"}));
/// ```
pub fn map_lookup_result(payload: Payload, status: u16) -> MappedResponse {
    if status == OK {
        return MappedResponse {
            status,
            body: Value::Object(payload),
        };
    }

    let mut body = Map::new();
    body.insert("detail".to_string(), resolve_detail(payload));

    MappedResponse {
        status,
        body: Value::Object(body),
    }
}

/// Pick the error detail from an upstream error payload.
///
/// A key holding `null` counts as absent.
pub fn resolve_detail(mut payload: Payload) -> Value {
    ["detail", "message"]
        .iter()
        .find_map(|key| payload.remove(*key).filter(|value| !value.is_null()))
        .unwrap_or_else(|| Value::String(DEFAULT_DETAIL.to_string()))
}
