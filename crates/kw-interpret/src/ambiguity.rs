//! The referential-ambiguity gate.
//!
//! Policy seam for definite references: "the ball" must pin down exactly
//! one scene object. The interpreter runs this gate on every resolved
//! referent set before using it — for the top-level target and for every
//! nested location entity. Existential and universal references pass
//! unchecked; disambiguation dialogue is the caller's business.

use kw_core::{Entity, ObjectId, Quantifier};

use crate::error::{InterpretError, InterpretResult};

/// Fail iff `entity` demands a unique referent and `matches` does not hold
/// exactly one id.
pub fn check(entity: &Entity, matches: &[ObjectId]) -> InterpretResult<()> {
    if entity.quantifier == Quantifier::The && matches.len() != 1 {
        return Err(InterpretError::AmbiguousReference {
            description: entity.object.base().to_string(),
            count: matches.len(),
        });
    }
    Ok(())
}
