//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! lives in a separate struct ([`NewLink`]) because the store, not the caller,
//! assigns the surrogate key and the creation timestamp.

pub mod link;

pub use link::{Link, NewLink};
