//! Identifiers for the static "consts" texts served under `/api/v1/consts`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the read-only text resources shown in the reading app's footer
/// dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstKind {
    Company,
    Contact,
    Overview,
    Question,
    Term,
}

impl ConstKind {
    /// Every const, in the order the routes are registered.
    pub const ALL: [ConstKind; 5] = [
        ConstKind::Company,
        ConstKind::Contact,
        ConstKind::Overview,
        ConstKind::Question,
        ConstKind::Term,
    ];

    /// The path segment used for this const (`/api/v1/consts/{id}`).
    pub fn as_str(self) -> &'static str {
        match self {
            ConstKind::Company => "company",
            ConstKind::Contact => "contact",
            ConstKind::Overview => "overview",
            ConstKind::Question => "question",
            ConstKind::Term => "term",
        }
    }
}

impl fmt::Display for ConstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known const.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown const id: {0}")]
pub struct UnknownConst(pub String);

impl FromStr for ConstKind {
    type Err = UnknownConst;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownConst(s.to_string()))
    }
}
