//! The combined lookup seam.
//!
//! [`CombinedLookup`] is the boundary between the HTTP route and whatever
//! performs the actual geocode/reverse-geocode resolution. The production
//! implementation is [`CombinedClient`](crate::client::CombinedClient); tests
//! substitute their own.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::params::CombinedParams;

/// JSON object returned by a lookup.
pub type Payload = Map<String, Value>;

/// Outcome of a lookup: a JSON payload plus the HTTP status it came with.
///
/// The status is supplied entirely by the lookup and is trusted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    /// Response payload (success data or an error object).
    pub payload: Payload,
    /// HTTP status code reported for the payload.
    pub status: u16,
}

impl LookupResult {
    /// Create a lookup result from a payload and status code.
    pub fn new(payload: Payload, status: u16) -> Self {
        Self { payload, status }
    }

    /// Create an error result carrying a single `"detail"` message.
    pub fn detail(status: u16, detail: impl Into<String>) -> Self {
        let mut payload = Payload::new();
        payload.insert("detail".to_string(), Value::String(detail.into()));
        Self { payload, status }
    }
}

impl From<(Payload, u16)> for LookupResult {
    fn from((payload, status): (Payload, u16)) -> Self {
        Self::new(payload, status)
    }
}

/// Performs a combined geocode/reverse-geocode lookup.
///
/// Implementations must not fail: timeouts, transport errors and malformed
/// upstream bodies are reduced to a [`LookupResult`] before returning.
#[async_trait]
pub trait CombinedLookup: Send + Sync {
    /// Resolve the given parameters.
    async fn lookup(&self, params: &CombinedParams) -> LookupResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_result() {
        let result = LookupResult::detail(504, "Upstream request timed out");
        assert_eq!(result.status, 504);
        assert_eq!(
            Value::Object(result.payload),
            json!({"detail": "Upstream request timed out"})
        );
    }

    #[test]
    fn test_from_tuple() {
        let payload = json!({"results": []}).as_object().cloned().unwrap();
        let result = LookupResult::from((payload.clone(), 200));
        assert_eq!(result, LookupResult::new(payload, 200));
    }
}
