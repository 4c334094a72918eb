//! eiq - equipment certification and maintenance intelligence.
//!
//! Plain-text equipment records (facilities, inventory, work orders,
//! contracts, extracted certifications) stored as individual YAML files,
//! with derived reporting built as pure functions over an in-memory
//! snapshot: a certification-centric equipment view, a maintenance view
//! with per-asset workload and risk classification, and a named
//! dimension/measure catalog on top of both.

pub mod cli;
pub mod core;
pub mod entities;
pub mod metrics;
pub mod schema;
pub mod views;
pub mod yaml;
