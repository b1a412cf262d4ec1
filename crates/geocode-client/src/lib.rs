//! geocode-client: forward and reverse geocoding via Nominatim.
//!
//! Both lookups are best-effort calls against a rate-limited third-party
//! service: an empty candidate list or a missing reverse address is a
//! normal outcome, not an error, and there is no retry policy. A failed
//! call surfaces once and the user retries manually.
//!
//! Lookups never touch the marker store. A search result echoes the query
//! it answered ([`SearchOutcome::query`]) so callers typing ahead can
//! discard responses that no longer match the latest input; in-flight
//! requests are not cancelled.

pub mod client;
pub mod error;
pub mod place;

pub use client::*;
pub use error::*;
pub use place::*;
