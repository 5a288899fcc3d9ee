//! gradepoint core - pure domain logic with no external dependencies
//!
//! This crate contains the course list model, the grade scale, and the CGPA
//! aggregation. It has no dependencies on UI frameworks, configuration, or
//! the filesystem - those live in the `gradepoint` application crate.

pub mod app;
pub mod domain;
pub mod error;

// Re-exports for ergonomics
pub use app::{aggregate, aggregate_totals, Cgpa, Command, Gradebook, Totals};
pub use domain::*;
pub use error::*;
