//! Vote value object
//! Direction of a ranking adjustment

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// Amount added to a series ranking
    pub const fn delta(&self) -> i64 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vote::Up => write!(f, "upvote"),
            Vote::Down => write!(f, "downvote"),
        }
    }
}
