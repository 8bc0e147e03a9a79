//! Service layer for the username prober.
//!
//! This module contains the business logic for:
//! - Existence probing of a single profile URL (`ExistenceProber`)
//! - Searching a username across the catalog (`ProfileSearch`)

pub(crate) mod prober;
mod search;

pub use prober::{ExistenceProber, MAX_ATTEMPTS};
pub use search::{ProfileSearch, SearchOutcome};
