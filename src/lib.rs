//! gradepoint application library
//!
//! The terminal presentation layer over `gradepoint-core`: CLI parsing,
//! configuration, and the Model-View-Update course form.

pub mod app;
pub mod cli;
pub mod config;
pub mod tui;
