//! Vehicle resolution
//!
//! Calls the vPIC decode service and turns its flat record list into
//! [`VehicleAttributes`].

pub mod client;
pub mod fields;
pub mod vehicle;

pub use client::VpicClient;
pub use fields::{DecodedField, DecodedFieldSet};
pub use vehicle::VehicleAttributes;
