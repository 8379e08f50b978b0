//! # LightBox - combined geocode proxy library
//!
//! Building blocks for proxying a combined geocode/reverse-geocode service:
//!
//! - [`CombinedParams`]: the parameters of a lookup
//! - [`CombinedLookup`]: the lookup seam, yielding a [`LookupResult`]
//! - [`CombinedClient`]: a `reqwest`-backed lookup against an upstream URL
//! - [`map_lookup_result`]: turns a lookup result into the response a caller sees
//!
//! ## Quick Start
//!
//! ```ignore
//! use lightbox::{map_lookup_result, CombinedClientBuilder, CombinedLookup, CombinedParams};
//!
//! let client = CombinedClientBuilder::from_env()?.build()?;
//! let params = CombinedParams {
//!     street: Some("MG Road".to_string()),
//!     locality: Some("Hyderabad".to_string()),
//!     ..Default::default()
//! };
//!
//! let result = client.lookup(&params).await;
//! let response = map_lookup_result(result.payload, result.status);
//! println!("{} {}", response.status, response.body);
//! ```
//!
//! ## Response Shapes
//!
//! - `200`: the upstream payload, unchanged (e.g. `{"results": [...]}`)
//! - anything else: `{"detail": ...}`, taken from the upstream's `"detail"`,
//!   then `"message"`, falling back to `"Error"`

pub mod client;
pub mod error;
pub mod lookup;
pub mod mapper;
pub mod params;

// Re-export main types at crate root for convenience
pub use client::{ClientConfig, CombinedClient, CombinedClientBuilder};
pub use error::{LightboxError, Result};
pub use lookup::{CombinedLookup, LookupResult, Payload};
pub use mapper::{map_lookup_result, resolve_detail, MappedResponse, DEFAULT_DETAIL};
pub use params::CombinedParams;
