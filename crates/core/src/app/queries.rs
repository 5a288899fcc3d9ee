use super::aggregate::{aggregate_totals, Cgpa, Totals};
use super::commands::Command;
use crate::domain::{Course, CourseDraft, CourseEdit, CourseId, CourseList, Event};

/// Read projection of the course form: the course list plus its CGPA.
///
/// Every mutation goes through [`Gradebook::execute`], which recomputes the
/// totals before returning, so the CGPA is never stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradebook {
    courses: CourseList,
    totals: Totals,
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Gradebook {
    pub fn new() -> Self {
        Self::from_courses(CourseList::new())
    }

    pub fn from_drafts<I>(drafts: I) -> Self
    where
        I: IntoIterator<Item = CourseDraft>,
    {
        Self::from_courses(CourseList::from_drafts(drafts))
    }

    pub fn from_courses(courses: CourseList) -> Self {
        let totals = aggregate_totals(&courses);
        Self { courses, totals }
    }

    /// Apply a command and recompute the CGPA
    pub fn execute(&mut self, command: Command) -> Event {
        let event = match command {
            Command::AddCourse => Event::CourseAdded { id: self.courses.add() },
            Command::RemoveCourse { id } => self.remove(id),
            Command::UpdateCourse { id, edit } => self.update(id, edit),
        };

        self.totals = aggregate_totals(&self.courses);
        event
    }

    fn remove(&mut self, id: CourseId) -> Event {
        if self.courses.get(id).is_none() {
            Event::CourseNotFound { id }
        } else if self.courses.remove(id) {
            Event::CourseRemoved { id }
        } else {
            Event::RemovalRejected { id }
        }
    }

    fn update(&mut self, id: CourseId, edit: CourseEdit) -> Event {
        let field = edit.field();
        if self.courses.update(id, edit) {
            Event::CourseUpdated { id, field }
        } else {
            Event::CourseNotFound { id }
        }
    }

    pub fn courses(&self) -> &[Course] {
        self.courses.courses()
    }

    pub fn course_list(&self) -> &CourseList {
        &self.courses
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Course at a display position
    pub fn course_at(&self, index: usize) -> Option<&Course> {
        self.courses.courses().get(index)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn cgpa(&self) -> Cgpa {
        self.totals.cgpa()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }
}
