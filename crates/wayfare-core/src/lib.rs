//! wayfare-core: the travel journal's data layer.
//!
//! A journal is a flat collection of [`Marker`]s, each owning an ordered
//! list of dated [`Visit`]s. The [`MarkerStore`] is the sole owner of the
//! collection: every read and write of persisted travel data passes through
//! it, and every mutation re-serializes the whole collection to its
//! [`Storage`] backend under a well-known key.
//!
//! Records written before multi-visit support carried a flat
//! `visitDate`/`notes`/`photos` trio on the marker itself; the record
//! codec accepts either shape and canonicalizes to the visits-array form,
//! so nothing above the serialization boundary branches on record age.

pub mod error;
pub mod marker;
pub mod profile;
mod record;
pub mod storage;
pub mod store;
pub mod transfer;

pub use error::*;
pub use marker::*;
pub use profile::*;
pub use storage::*;
pub use store::*;
pub use transfer::*;
