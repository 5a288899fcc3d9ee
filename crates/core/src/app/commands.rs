use crate::domain::{CourseEdit, CourseId};

/// Commands that can be sent to the gradebook
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a blank course
    AddCourse,

    /// Remove a course (refused for the last one)
    RemoveCourse { id: CourseId },

    /// Replace one field of a course
    UpdateCourse { id: CourseId, edit: CourseEdit },
}
