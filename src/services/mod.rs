//! Fetching, normalization, and aggregation on top of the content store.

pub mod catalog;
pub mod dashboard;
pub mod normalize;
