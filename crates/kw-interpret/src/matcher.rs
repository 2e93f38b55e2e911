//! Resolution of object descriptions to scene referents.

use kw_core::{Descriptor, Form, Location, ObjectDesc, ObjectId, ObjectSpec, Quantifier, WorldState};

use crate::ambiguity;
use crate::error::InterpretResult;

/// Resolve a description to every matching scene object, in scan order.
pub fn resolve(desc: &ObjectDesc, world: &WorldState) -> InterpretResult<Vec<ObjectId>> {
    match desc {
        ObjectDesc::Flat(descriptor) => Ok(resolve_by_description(descriptor, world)),
        ObjectDesc::Relative { base, location } => resolve_by_location(base, location, world),
    }
}

/// Resolve a bare attribute filter.
///
/// The held object is scanned first, then every stack left to right,
/// bottom to top; the result keeps that scan order. A descriptor asking
/// for the floor resolves to the synthetic floor alone. No deduplication
/// is needed — the scene places each object exactly once.
pub fn resolve_by_description(desc: &Descriptor, world: &WorldState) -> Vec<ObjectId> {
    if desc.form == Some(Form::Floor) {
        return vec![ObjectId::floor()];
    }

    let mut matches = Vec::new();
    if let Some(held) = world.holding()
        && world
            .spec(held)
            .is_some_and(|spec| matches_descriptor(desc, spec))
    {
        matches.push(held.clone());
    }
    for stack in world.stacks() {
        for id in stack {
            if world
                .spec(id)
                .is_some_and(|spec| matches_descriptor(desc, spec))
            {
                matches.push(id.clone());
            }
        }
    }
    matches
}

/// Resolve a location-qualified description: keep the base matches whose
/// current position satisfies the location.
pub fn resolve_by_location(
    base: &Descriptor,
    location: &Location,
    world: &WorldState,
) -> InterpretResult<Vec<ObjectId>> {
    let mut matches = Vec::new();
    for id in resolve_by_description(base, world) {
        if location_matches(&id, location, world)? {
            matches.push(id);
        }
    }
    Ok(matches)
}

/// Whether `id`'s current position satisfies `location`.
///
/// A universal location entity requires `id` to relate to every referent,
/// vacuously true when nothing matches; otherwise relating to one referent
/// is enough. The ambiguity gate runs on the location entity before its
/// referent set is used.
pub fn location_matches(
    id: &ObjectId,
    location: &Location,
    world: &WorldState,
) -> InterpretResult<bool> {
    let referents = resolve(&location.entity.object, world)?;
    ambiguity::check(&location.entity, &referents)?;

    let relates = |referent: &ObjectId| world.relates(id, location.relation, referent);
    Ok(match location.entity.quantifier {
        Quantifier::All => referents.iter().all(relates),
        Quantifier::The | Quantifier::Any => referents.iter().any(relates),
    })
}

fn matches_descriptor(desc: &Descriptor, spec: &ObjectSpec) -> bool {
    desc.form.is_none_or(|form| form == spec.form)
        && desc.size.is_none_or(|size| size == spec.size)
        && desc.color.is_none_or(|color| color == spec.color)
}
