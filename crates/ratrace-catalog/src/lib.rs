//! Static reference data for the Ratrace life simulation.
//!
//! Every table in this crate is read-only `const` data: the rules in the
//! engine look values up here but never mutate them. Tables serialize
//! directly into the catalogue API responses.
//!
//! # Modules
//!
//! - [`clothing`] -- John Lewis stock and the look-level computation
//! - [`courses`] -- The education tree with prerequisites
//! - [`flats`] -- The six housing tiers
//! - [`food`] -- The corner-shop food range
//! - [`jobs`] -- The job market with wage-band look requirements

pub mod clothing;
pub mod courses;
pub mod flats;
pub mod food;
pub mod jobs;

// Re-export primary types at crate root for convenience.
pub use clothing::{look_level, StoreCategory, StoreItem};
pub use courses::{Course, Prerequisites};
pub use flats::Flat;
pub use food::FoodItem;
pub use jobs::{look_required, Job};
