//! Command interpretation for Klotzwelt.
//!
//! Turns an already-parsed command plus a scene snapshot into a goal in
//! disjunctive normal form: an OR of AND-groups of relation literals, any
//! one group of which satisfies the command. Resolution handles nested
//! relative descriptions ("the box on the table on the floor") and
//! distributes the three quantifiers — definite, existential, universal —
//! over the matched referents.
//!
//! The scene and the parsed command are read-only inputs; interpretation
//! is deterministic and keeps no state between calls.

/// The referential-ambiguity gate for definite references.
pub mod ambiguity;
/// Recursive construction of relative-location literal sets.
pub mod builder;
/// Error types for interpretation.
pub mod error;
/// Literals, conjuncts, and DNF goals.
pub mod goal;
/// Top-level command interpretation.
pub mod interpreter;
/// Resolution of object descriptions to scene referents.
pub mod matcher;

pub use error::{InterpretError, InterpretResult};
pub use goal::{Conjunct, Goal, Literal};
pub use interpreter::{Interpretation, interpret, interpret_command};
