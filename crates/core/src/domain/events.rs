use super::course::{CourseField, CourseId};

/// Outcome of applying a command to the gradebook
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A blank course was appended
    CourseAdded { id: CourseId },

    /// A course was removed
    CourseRemoved { id: CourseId },

    /// Removal refused because the course is the only one left
    RemovalRejected { id: CourseId },

    /// One field of a course changed
    CourseUpdated { id: CourseId, field: CourseField },

    /// The command named a course that is not in the list
    CourseNotFound { id: CourseId },
}
