//! Top-level command interpretation.

use kw_core::{Command, Entity, Location, ParseCandidate, Quantifier, WorldState};

use crate::ambiguity;
use crate::builder;
use crate::error::{InterpretError, InterpretResult};
use crate::goal::{Conjunct, Goal, Literal};
use crate::matcher;

/// One parse candidate together with the goal it resolved to.
#[derive(Debug, Clone)]
pub struct Interpretation {
    /// The parse this goal was derived from.
    pub parse: ParseCandidate,
    /// The resolved goal, in DNF.
    pub goal: Goal,
}

/// Interpret every parse candidate against the scene.
///
/// Candidates whose goal comes back empty are dropped; if none survive,
/// the call fails with [`InterpretError::NoInterpretation`]. A failure
/// raised while resolving any one candidate (referential ambiguity, a
/// missing implicit referent) aborts the whole batch rather than dropping
/// that candidate — see DESIGN.md for this decision.
pub fn interpret(
    candidates: &[ParseCandidate],
    world: &WorldState,
) -> InterpretResult<Vec<Interpretation>> {
    let mut interpretations = Vec::new();
    for candidate in candidates {
        let goal = interpret_command(&candidate.command, world)?;
        if !goal.is_empty() {
            interpretations.push(Interpretation {
                parse: candidate.clone(),
                goal,
            });
        }
    }
    if interpretations.is_empty() {
        return Err(InterpretError::NoInterpretation);
    }
    Ok(interpretations)
}

/// Interpret a single command against the scene.
///
/// An empty goal means this command admits no satisfiable reading of the
/// current world.
pub fn interpret_command(cmd: &Command, world: &WorldState) -> InterpretResult<Goal> {
    let matches = match &cmd.target {
        Some(target) => {
            let matches = matcher::resolve(&target.object, world)?;
            ambiguity::check(target, &matches)?;
            matches
        }
        // "put it down": the implicit referent is whatever the arm holds.
        None => match world.holding() {
            Some(held) => vec![held.clone()],
            None => return Err(InterpretError::ImplicitReferent),
        },
    };

    let Some(location) = &cmd.location else {
        // No location: the command just wants a matched object in the arm.
        let mut goal = Goal::empty();
        for id in matches {
            goal.push(Conjunct::singleton(Literal::holding(id)));
        }
        return Ok(goal);
    };

    if let Some(swapped) = swap_any_all(cmd, location) {
        return interpret_command(&swapped, world);
    }

    let universal = cmd
        .target
        .as_ref()
        .is_some_and(|target| target.quantifier == Quantifier::All);
    if universal {
        // Every matched object must hold one of its own alternatives at
        // the same time: iterated cross product, in match order. One
        // impossible object empties the whole product, and no matches at
        // all leave the goal empty.
        let mut product: Option<Goal> = None;
        for id in &matches {
            let per_match = builder::build_relative_literals(id, location, world)?;
            product = Some(match product {
                None => per_match,
                Some(acc) => acc.cross_product(&per_match),
            });
        }
        Ok(product.unwrap_or_default())
    } else {
        // Definite or existential: any matched object satisfying any of
        // its alternatives is an acceptable reading.
        let mut goal = Goal::empty();
        for id in &matches {
            goal = goal.union(&builder::build_relative_literals(id, location, world)?);
        }
        Ok(goal)
    }
}

/// The any/all rewrite: "a ball in all boxes" reads as "all boxes
/// containing a ball".
///
/// Universal distribution is only implemented for the target side, so a
/// universal location entity is relocated there: descriptions and
/// quantifiers swap between target and location entity, and the relation
/// is replaced by its reverse. The input command is left untouched — a
/// fresh command value is returned, because the parse may be shared across
/// interpretation attempts.
fn swap_any_all(cmd: &Command, location: &Location) -> Option<Command> {
    let target = cmd.target.as_ref()?;
    if target.quantifier != Quantifier::Any || location.entity.quantifier != Quantifier::All {
        return None;
    }
    Some(Command {
        target: Some(Entity::new(Quantifier::All, location.entity.object.clone())),
        location: Some(Location {
            relation: location.relation.reverse(),
            entity: Entity::new(Quantifier::Any, target.object.clone()),
        }),
    })
}
