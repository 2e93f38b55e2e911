use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a relation a goal literal can assert.
///
/// Every relation except [`Relation::Holding`] is binary and spatial;
/// `holding` is the unary "the arm holds this" relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// In a column strictly to the left.
    LeftOf,
    /// In a column strictly to the right.
    RightOf,
    /// Directly atop an open box.
    Inside,
    /// Has an object directly inside itself.
    Containing,
    /// Directly supported by a non-box object, or resting on the floor.
    OnTop,
    /// Directly supporting another object.
    Under,
    /// Somewhere higher in the same column.
    Above,
    /// Somewhere lower in the same column.
    Below,
    /// In an adjacent column.
    Beside,
    /// Held by the arm.
    Holding,
}

impl Relation {
    /// The same relation seen from the other argument's side.
    ///
    /// Involutive: `r.reverse().reverse() == r` for every relation. The
    /// symmetric `beside` and the unary `holding` are their own reverse.
    pub fn reverse(self) -> Self {
        match self {
            Self::LeftOf => Self::RightOf,
            Self::RightOf => Self::LeftOf,
            Self::Inside => Self::Containing,
            Self::Containing => Self::Inside,
            Self::OnTop => Self::Under,
            Self::Under => Self::OnTop,
            Self::Above => Self::Below,
            Self::Below => Self::Above,
            Self::Beside | Self::Holding => self,
        }
    }

    /// Number of object arguments a literal with this relation takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Holding => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftOf => "leftof",
            Self::RightOf => "rightof",
            Self::Inside => "inside",
            Self::Containing => "containing",
            Self::OnTop => "ontop",
            Self::Under => "under",
            Self::Above => "above",
            Self::Below => "below",
            Self::Beside => "beside",
            Self::Holding => "holding",
        };
        write!(f, "{name}")
    }
}
