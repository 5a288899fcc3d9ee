use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

use crate::error::{CoreError, Result};

/// Letter grade awarded for a course.
///
/// The set is closed: the grade picker only ever offers these symbols, so the
/// point lookup is an exhaustive `match` rather than a keyed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum GradeSymbol {
    #[default]
    #[strum(serialize = "O")]
    #[serde(rename = "O")]
    O,
    #[strum(serialize = "A+")]
    #[serde(rename = "A+")]
    APlus,
    #[strum(serialize = "A")]
    #[serde(rename = "A")]
    A,
    #[strum(serialize = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    #[strum(serialize = "B")]
    #[serde(rename = "B")]
    B,
    /// Reappear. Worth no points, but its credits still count.
    #[strum(serialize = "RA")]
    #[serde(rename = "RA")]
    Ra,
}

impl GradeSymbol {
    /// Every grade, highest first.
    pub const ALL: [GradeSymbol; 6] = [
        GradeSymbol::O,
        GradeSymbol::APlus,
        GradeSymbol::A,
        GradeSymbol::BPlus,
        GradeSymbol::B,
        GradeSymbol::Ra,
    ];

    /// Grade points on the ten-point scale
    pub fn points(self) -> u8 {
        match self {
            GradeSymbol::O => 10,
            GradeSymbol::APlus => 9,
            GradeSymbol::A => 8,
            GradeSymbol::BPlus => 7,
            GradeSymbol::B => 6,
            GradeSymbol::Ra => 0,
        }
    }

    pub fn is_failing(self) -> bool {
        matches!(self, GradeSymbol::Ra)
    }

    /// Parse a grade symbol, reporting unknown symbols as a domain error
    pub fn parse(symbol: &str) -> Result<Self> {
        GradeSymbol::from_str(symbol.trim()).map_err(|_| CoreError::UnknownGrade {
            symbol: symbol.to_string(),
        })
    }
}
