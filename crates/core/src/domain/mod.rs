pub mod course;
pub mod credits;
pub mod events;
pub mod grade;

// Re-exports for convenience
pub use course::*;
pub use credits::*;
pub use events::*;
pub use grade::*;
