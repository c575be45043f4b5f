#![allow(clippy::doc_markdown)]

//! Cost and time roll-ups for a warehouse's operational hierarchy.
//!
//! Resources are costed against the nominal time of the operation that uses them.
//! Operations, processes, and warehouses sum their children in the listed order,
//! so that the totals are reproducible bit for bit.

pub mod error;
pub mod model;
pub mod prelude;
pub mod quantity;
pub mod sample;
pub mod site;
pub mod tables;
