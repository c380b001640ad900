//! Grade bands for a finished quiz.

use serde::Serialize;
use std::fmt;

/// Outcome tier derived from the result percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Map a 0-100 result percentage onto a band
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::E,
        }
    }

    /// Feedback shown next to the grade on the result view
    pub fn message(&self) -> &'static str {
        match self {
            Grade::A => "Excellent! You have mastered the material very well!",
            Grade::B => "Great job! Your understanding is already very good!",
            Grade::C => "Fairly good! Keep improving your understanding.",
            Grade::D => "You need to study harder.",
            Grade::E => "Don't give up! Try studying the material again.",
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// `round(100 * part / whole)` with halves rounded up, in integers
pub fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((100 * part + whole / 2) / whole) as u32
}
