use std::str::FromStr;

use super::credits::parse_credit_hours;
use super::grade::GradeSymbol;
use crate::error::CoreError;

/// Unique identifier for a course within a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(pub u64);

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One row of the course form
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Raw text as typed; see [`Course::credits`]
    pub credit_hours: String,
    pub grade: GradeSymbol,
}

impl Course {
    pub fn new(id: CourseId) -> Self {
        Self {
            id,
            name: String::new(),
            credit_hours: String::new(),
            grade: GradeSymbol::default(),
        }
    }

    /// Parsed credit hours, or `None` if the text is blank or not a number
    pub fn credits(&self) -> Option<f64> {
        if self.credit_hours.trim().is_empty() {
            return None;
        }
        parse_credit_hours(&self.credit_hours)
    }

    fn apply(&mut self, edit: CourseEdit) {
        match edit {
            CourseEdit::Name(name) => self.name = name,
            CourseEdit::CreditHours(text) => self.credit_hours = text,
            CourseEdit::Grade(grade) => self.grade = grade,
        }
    }
}

/// The editable fields of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseField {
    #[default]
    Name,
    CreditHours,
    Grade,
}

impl CourseField {
    pub const ALL: [CourseField; 3] = [CourseField::Name, CourseField::CreditHours, CourseField::Grade];

    pub fn next(self) -> Self {
        match self {
            CourseField::Name => CourseField::CreditHours,
            CourseField::CreditHours => CourseField::Grade,
            CourseField::Grade => CourseField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CourseField::Name => CourseField::Grade,
            CourseField::CreditHours => CourseField::Name,
            CourseField::Grade => CourseField::CreditHours,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CourseField::Name => "Course Name",
            CourseField::CreditHours => "Credit Hours",
            CourseField::Grade => "Grade",
        }
    }
}

/// A new value for exactly one field of a course
#[derive(Debug, Clone, PartialEq)]
pub enum CourseEdit {
    Name(String),
    CreditHours(String),
    Grade(GradeSymbol),
}

impl CourseEdit {
    pub fn field(&self) -> CourseField {
        match self {
            CourseEdit::Name(_) => CourseField::Name,
            CourseEdit::CreditHours(_) => CourseField::CreditHours,
            CourseEdit::Grade(_) => CourseField::Grade,
        }
    }
}

/// Field values for a course that has not been given an id yet.
///
/// Parses from `CREDITS:GRADE[:NAME]`, e.g. `3:A+:Compilers`. The name may
/// itself contain colons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseDraft {
    pub name: String,
    pub credit_hours: String,
    pub grade: GradeSymbol,
}

impl FromStr for CourseDraft {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let credit_hours = parts.next().unwrap_or_default().trim();
        let grade = parts.next().ok_or_else(|| CoreError::InvalidCourseArg {
            input: s.to_string(),
            reason: "expected CREDITS:GRADE[:NAME]".to_string(),
        })?;
        let name = parts.next().unwrap_or_default().trim();

        let grade = GradeSymbol::parse(grade)?;

        Ok(Self {
            name: name.to_string(),
            credit_hours: credit_hours.to_string(),
            grade,
        })
    }
}

/// Ordered, never-empty list of courses.
///
/// Ids are handed out from a counter and never reused, so a course keeps its
/// identity even after rows before it are removed.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseList {
    courses: Vec<Course>,
    next_id: u64,
}

impl Default for CourseList {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseList {
    /// A list holding a single blank course
    pub fn new() -> Self {
        let mut list = Self {
            courses: Vec::new(),
            next_id: 1,
        };
        list.add();
        list
    }

    /// Build a list from drafts, falling back to a single blank course when
    /// there are none
    pub fn from_drafts<I>(drafts: I) -> Self
    where
        I: IntoIterator<Item = CourseDraft>,
    {
        let mut list = Self {
            courses: Vec::new(),
            next_id: 1,
        };

        for draft in drafts {
            let id = list.add();
            list.update(id, CourseEdit::Name(draft.name));
            list.update(id, CourseEdit::CreditHours(draft.credit_hours));
            list.update(id, CourseEdit::Grade(draft.grade));
        }

        if list.courses.is_empty() {
            list.add();
        }
        list
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Display position of a course (0-based)
    pub fn position(&self, id: CourseId) -> Option<usize> {
        self.courses.iter().position(|c| c.id == id)
    }

    /// Append a blank course and return its id
    pub fn add(&mut self) -> CourseId {
        let id = CourseId(self.next_id);
        self.next_id += 1;
        self.courses.push(Course::new(id));
        id
    }

    /// Remove a course. The last remaining course is never removed.
    ///
    /// Returns `true` if a course was removed.
    pub fn remove(&mut self, id: CourseId) -> bool {
        if self.courses.len() <= 1 {
            return false;
        }
        match self.position(id) {
            Some(index) => {
                self.courses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace one field of a course. Returns `false` if no course has `id`.
    pub fn update(&mut self, id: CourseId, edit: CourseEdit) -> bool {
        match self.courses.iter_mut().find(|c| c.id == id) {
            Some(course) => {
                course.apply(edit);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a CourseList {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &CourseList) -> Vec<CourseId> {
        list.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_new_list_has_one_blank_course() {
        let list = CourseList::new();
        assert_eq!(list.len(), 1);

        let course = &list.courses()[0];
        assert_eq!(course.id, CourseId(1));
        assert!(course.name.is_empty());
        assert!(course.credit_hours.is_empty());
        assert_eq!(course.grade, GradeSymbol::O);
    }

    #[test]
    fn test_add_appends_with_fresh_ids() {
        let mut list = CourseList::new();
        let second = list.add();
        let third = list.add();

        assert_eq!(ids(&list), vec![CourseId(1), second, third]);
        assert_ne!(second, third);
        assert_eq!(list.position(third), Some(2));
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut list = CourseList::new();
        let second = list.add();
        assert!(list.remove(second));

        let third = list.add();
        assert_ne!(third, second);
        assert_eq!(ids(&list), vec![CourseId(1), third]);
    }

    #[test]
    fn test_remove_last_course_is_noop() {
        let mut list = CourseList::new();
        list.update(CourseId(1), CourseEdit::CreditHours("3".to_string()));
        let before = list.clone();

        assert!(!list.remove(CourseId(1)));
        assert_eq!(list, before);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order_of_others() {
        let mut list = CourseList::new();
        let b = list.add();
        let c = list.add();

        assert!(list.remove(b));
        assert_eq!(ids(&list), vec![CourseId(1), c]);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut list = CourseList::new();
        list.add();
        assert!(!list.remove(CourseId(99)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_update_touches_only_one_field() {
        let mut list = CourseList::new();
        let first = CourseId(1);
        let second = list.add();
        list.update(first, CourseEdit::Name("Algorithms".to_string()));
        list.update(first, CourseEdit::CreditHours("4".to_string()));
        let other_before = list.get(second).cloned();

        assert!(list.update(first, CourseEdit::Grade(GradeSymbol::BPlus)));

        let course = list.get(first).unwrap();
        assert_eq!(course.name, "Algorithms");
        assert_eq!(course.credit_hours, "4");
        assert_eq!(course.grade, GradeSymbol::BPlus);
        assert_eq!(list.get(second).cloned(), other_before);
        assert_eq!(ids(&list), vec![first, second]);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut list = CourseList::new();
        assert!(!list.update(CourseId(7), CourseEdit::Name("x".to_string())));
    }

    #[test]
    fn test_credits_blank_vs_unparsable() {
        let mut course = Course::new(CourseId(1));
        assert_eq!(course.credits(), None);

        course.credit_hours = "  ".to_string();
        assert_eq!(course.credits(), None);

        course.credit_hours = "abc".to_string();
        assert_eq!(course.credits(), None);

        course.credit_hours = "0".to_string();
        assert_eq!(course.credits(), Some(0.0));

        course.credit_hours = "3".to_string();
        assert_eq!(course.credits(), Some(3.0));
    }

    #[test]
    fn test_field_cycle() {
        for field in CourseField::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert_eq!(CourseField::Grade.next(), CourseField::Name);
        assert_eq!(CourseEdit::Grade(GradeSymbol::A).field(), CourseField::Grade);
    }

    #[test]
    fn test_draft_parsing() {
        let draft: CourseDraft = "3:A+:Compilers: Theory".parse().unwrap();
        assert_eq!(draft.credit_hours, "3");
        assert_eq!(draft.grade, GradeSymbol::APlus);
        assert_eq!(draft.name, "Compilers: Theory");

        let draft: CourseDraft = "4:RA".parse().unwrap();
        assert_eq!(draft.name, "");
        assert_eq!(draft.grade, GradeSymbol::Ra);
    }

    #[test]
    fn test_draft_parsing_errors() {
        assert!(matches!(
            "3".parse::<CourseDraft>(),
            Err(CoreError::InvalidCourseArg { .. })
        ));
        assert!(matches!(
            "3:Z".parse::<CourseDraft>(),
            Err(CoreError::UnknownGrade { .. })
        ));
    }

    #[test]
    fn test_from_drafts() {
        let list = CourseList::from_drafts(vec![
            "3:O:Maths".parse::<CourseDraft>().unwrap(),
            "4:B".parse::<CourseDraft>().unwrap(),
        ]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.courses()[0].name, "Maths");
        assert_eq!(list.courses()[1].grade, GradeSymbol::B);

        let empty = CourseList::from_drafts(Vec::new());
        assert_eq!(empty, CourseList::new());
    }
}
