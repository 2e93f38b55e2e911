//! Error types for interpretation.

use thiserror::Error;

/// Result type for interpretation.
pub type InterpretResult<T> = Result<T, InterpretError>;

/// Errors that can end an interpretation call.
///
/// All of them are terminal for the call: nothing is retried internally,
/// and a failure raised while resolving one parse candidate propagates out
/// of the whole batch (see DESIGN.md).
#[derive(Debug, Error)]
pub enum InterpretError {
    /// Every parse candidate yielded an empty goal.
    #[error("found no interpretation")]
    NoInterpretation,

    /// A definite reference resolved to zero or several scene objects.
    #[error("ambiguous reference: \"the {description}\" matches {count} objects")]
    AmbiguousReference {
        /// The description as spoken, without the article.
        description: String,
        /// How many scene objects matched it.
        count: usize,
    },

    /// The command names no object and the arm holds nothing.
    #[error("no object named and nothing is held")]
    ImplicitReferent,
}
