//! CGPA aggregation over a course list.
//!
//! Rows with blank or non-numeric credit hours are left out rather than
//! reported, so a half-filled form still shows a partial average.

use crate::domain::Course;

/// A cumulative grade-point average, rounded to two decimal places.
///
/// Always a number; zero when no credits were counted. `Display` renders
/// exactly two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Cgpa(f64);

impl Cgpa {
    pub const ZERO: Cgpa = Cgpa(0.0);

    /// Round `value` half away from zero to two decimals
    pub fn rounded(value: f64) -> Self {
        Self((value * 100.0).round() / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl std::fmt::Display for Cgpa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Running sums behind a CGPA
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub total_points: f64,
    pub total_credits: f64,
    /// Number of rows that contributed
    pub counted: usize,
}

impl Totals {
    pub fn cgpa(&self) -> Cgpa {
        if self.total_credits > 0.0 {
            Cgpa::rounded(self.total_points / self.total_credits)
        } else {
            Cgpa::ZERO
        }
    }
}

/// Sum credit-weighted grade points over every countable course.
///
/// `RA` rows add their credits with zero points, which pulls the average down.
pub fn aggregate_totals<'a, I>(courses: I) -> Totals
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .filter_map(|course| course.credits().map(|credits| (credits, course.grade.points())))
        .fold(Totals::default(), |mut totals, (credits, points)| {
            totals.total_points += credits * f64::from(points);
            totals.total_credits += credits;
            totals.counted += 1;
            totals
        })
}

/// Compute the CGPA of a course list
pub fn aggregate<'a, I>(courses: I) -> Cgpa
where
    I: IntoIterator<Item = &'a Course>,
{
    aggregate_totals(courses).cgpa()
}
