//! Parameters accepted by the combined geocode/reverse-geocode lookup.

use serde::{Deserialize, Serialize};

/// Parameters for a combined geocode/reverse-geocode lookup.
///
/// Every field is optional. Address fields drive forward geocoding, while
/// `lat`/`lon` drive reverse geocoding; which combination is meaningful is
/// decided by the upstream service. Unset fields are not forwarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedParams {
    /// Street line of the address (e.g., "MG Road").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City or locality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// State, province or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country code or name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Latitude in decimal degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// Search buffer around the point, in the upstream's distance unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_distance: Option<f64>,
}

impl CombinedParams {
    /// Returns true when no parameter is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"street": "MG Road", "locality": "Hyderabad"}"#;
        let params: CombinedParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.street.as_deref(), Some("MG Road"));
        assert_eq!(params.locality.as_deref(), Some("Hyderabad"));
        assert!(params.buffer_distance.is_none());
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let params = CombinedParams {
            locality: Some("Hyderabad".to_string()),
            buffer_distance: Some(25.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["locality"], "Hyderabad");
        assert_eq!(object["buffer_distance"], 25.0);
    }

    #[test]
    fn test_is_empty() {
        assert!(CombinedParams::default().is_empty());
        let params = CombinedParams {
            lat: Some(17.385),
            ..Default::default()
        };
        assert!(!params.is_empty());
    }
}
