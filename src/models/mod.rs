//! Domain models for the booking server
//!
//! One module per cached domain (staff, locations, offerings, accounts),
//! each with the stored record type and the request payload used to create
//! or update it.

mod account;
mod location;
mod offering;
mod staff;

pub use account::{Account, AccountPayload};
pub use location::{Location, LocationPayload};
pub use offering::{Offering, OfferingPayload};
pub use staff::{Staff, StaffPayload};

// == Entity Trait ==
/// Common surface of a cached domain record.
///
/// `KIND` doubles as the domain's cache key prefix: the full collection
/// lives under `all_<KIND>` and a single record under `<KIND>_<id>`. The
/// cache itself never parses keys; this convention lives entirely with the
/// callers.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Domain name used for cache keys and log lines.
    const KIND: &'static str;

    /// Returns the record id.
    fn id(&self) -> u64;

    /// Replaces the record id (assigned by the repository on insert).
    fn set_id(&mut self, id: u64);
}
