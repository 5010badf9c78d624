//! Business logic of the request-level operations.
//!
//! Services borrow the shared resources they need from application state for the duration
//! of one request, validate preconditions against the data layer, perform the mutation and
//! trigger notifications.

pub mod address;
pub mod diarist;
pub mod schedule;
