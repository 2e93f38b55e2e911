//! Recursive construction of relative-location literal sets.

use kw_core::{Location, ObjectDesc, ObjectId, Quantifier, WorldState};

use crate::ambiguity;
use crate::error::InterpretResult;
use crate::goal::{Conjunct, Goal, Literal};
use crate::matcher;

/// Every way `id` can satisfy `location`, as a DNF goal.
///
/// The location entity's referents are resolved by description; a chained
/// location ("inside the box on the table") recurses through the nested
/// location instead of filtering, so each referent's own positional
/// sub-goals are built and prefixed with the literal relating `id` to that
/// referent. The chain "ball in box on floor" thus becomes the single
/// conjunct `{inside(ball,box), ontop(box,floor)}`.
pub fn build_relative_literals(
    id: &ObjectId,
    location: &Location,
    world: &WorldState,
) -> InterpretResult<Goal> {
    let referents = matcher::resolve_by_description(location.entity.object.base(), world);
    ambiguity::check(&location.entity, &referents)?;

    match &location.entity.object {
        ObjectDesc::Relative { location: nested, .. } => {
            let mut goal = Goal::empty();
            for referent in &referents {
                let sub = build_relative_literals(referent, nested, world)?;
                for conjunct in sub.conjuncts() {
                    let mut literals = vec![Literal::relates(
                        id.clone(),
                        location.relation,
                        referent.clone(),
                    )];
                    literals.extend(conjunct.literals().iter().cloned());
                    goal.push(Conjunct::new(literals));
                }
            }
            Ok(goal)
        }
        ObjectDesc::Flat(_) => {
            if location.entity.quantifier == Quantifier::All {
                // One conjunct relating `id` to every referent at once; an
                // empty referent set leaves it vacuously satisfiable.
                let literals = referents
                    .iter()
                    .map(|referent| {
                        Literal::relates(id.clone(), location.relation, referent.clone())
                    })
                    .collect();
                Ok(Goal::singleton(Conjunct::new(literals)))
            } else {
                let mut goal = Goal::empty();
                for referent in referents {
                    goal.push(Conjunct::singleton(Literal::relates(
                        id.clone(),
                        location.relation,
                        referent,
                    )));
                }
                Ok(goal)
            }
        }
    }
}
