pub mod aggregate;
pub mod commands;
pub mod queries;

pub use aggregate::*;
pub use commands::*;
pub use queries::*;
