//! Realty Database Client
//!
//! This crate provides read-only database access for the realty query
//! service: filtered property lookups plus the batched owner, image, and
//! sale-trace lookups that enrich each returned property.

pub mod error;
pub mod indexes;
pub mod normalize;
pub mod owners;
pub mod properties;
pub mod property_images;
pub mod property_traces;
