//! Yes/no outcome of a wall feasibility check

use std::fmt;

use crate::io::configuration::{VERDICT_NO, VERDICT_YES};

/// Outcome of a feasibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every cell that needs a brick was covered
    Yes,
    /// At least one cell was left uncovered
    No,
}

impl Verdict {
    /// True for [`Verdict::Yes`]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Word printed for this verdict
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => VERDICT_YES,
            Self::No => VERDICT_NO,
        }
    }
}

impl From<bool> for Verdict {
    fn from(feasible: bool) -> Self {
        if feasible { Self::Yes } else { Self::No }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
