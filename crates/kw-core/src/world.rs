use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::object::{Form, ObjectId, ObjectSpec};
use crate::relation::Relation;

/// A read-only snapshot of the blocks-world scene.
///
/// Stacks are ordered left to right and hold object ids bottom to top; at
/// most one object is held by the arm, and a held object has no stack
/// position. Construction validates the placement invariant: every defined
/// id is placed exactly once (in a stack or in the arm), every placed id is
/// defined, and the reserved `floor` id appears nowhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawWorldState")]
pub struct WorldState {
    stacks: Vec<Vec<ObjectId>>,
    objects: HashMap<ObjectId, ObjectSpec>,
    holding: Option<ObjectId>,
}

/// Unvalidated wire shape of a scene file.
#[derive(Debug, Deserialize)]
struct RawWorldState {
    #[serde(default)]
    stacks: Vec<Vec<ObjectId>>,
    #[serde(default)]
    objects: HashMap<ObjectId, ObjectSpec>,
    #[serde(default)]
    holding: Option<ObjectId>,
}

impl TryFrom<RawWorldState> for WorldState {
    type Error = CoreError;

    fn try_from(raw: RawWorldState) -> CoreResult<Self> {
        Self::new(raw.stacks, raw.objects, raw.holding)
    }
}

impl WorldState {
    /// Build a validated scene snapshot.
    pub fn new(
        stacks: Vec<Vec<ObjectId>>,
        objects: HashMap<ObjectId, ObjectSpec>,
        holding: Option<ObjectId>,
    ) -> CoreResult<Self> {
        let mut placed: HashSet<&ObjectId> = HashSet::new();
        for id in stacks.iter().flatten().chain(&holding) {
            if id.is_floor() {
                return Err(CoreError::ReservedFloorId);
            }
            if !objects.contains_key(id) {
                return Err(CoreError::UndefinedObject(id.clone()));
            }
            if !placed.insert(id) {
                return Err(CoreError::DuplicatePlacement(id.clone()));
            }
        }
        for id in objects.keys() {
            if id.is_floor() {
                return Err(CoreError::ReservedFloorId);
            }
            if !placed.contains(id) {
                return Err(CoreError::UnplacedObject(id.clone()));
            }
        }
        Ok(Self {
            stacks,
            objects,
            holding,
        })
    }

    /// Stacks left to right; each stack lists ids bottom to top.
    pub fn stacks(&self) -> &[Vec<ObjectId>] {
        &self.stacks
    }

    /// The id currently held by the arm, if any.
    pub fn holding(&self) -> Option<&ObjectId> {
        self.holding.as_ref()
    }

    /// Static definition of a scene object. The synthetic floor has none.
    pub fn spec(&self, id: &ObjectId) -> Option<&ObjectSpec> {
        self.objects.get(id)
    }

    /// Number of scene objects, the held one included.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Geometric truth of `relation(a, b)` in this scene.
    ///
    /// `ontop` is direct support by a non-box (or resting on the floor),
    /// `inside` is direct support by a box, `above`/`below` reach any
    /// distance within a column, and everything placed is `above` the
    /// floor. A held object satisfies no spatial relation; `holding` is
    /// true exactly for the held object.
    pub fn relates(&self, a: &ObjectId, relation: Relation, b: &ObjectId) -> bool {
        match relation {
            Relation::Holding => self.holding.as_ref() == Some(a),
            Relation::OnTop => {
                if b.is_floor() {
                    matches!(self.position(a), Some((_, 0)))
                } else {
                    self.directly_atop(a, b) && !self.is_box(b)
                }
            }
            Relation::Inside => self.directly_atop(a, b) && self.is_box(b),
            Relation::Under => self.relates(b, Relation::OnTop, a),
            Relation::Containing => self.relates(b, Relation::Inside, a),
            Relation::Above => {
                if b.is_floor() {
                    self.position(a).is_some()
                } else {
                    match (self.position(a), self.position(b)) {
                        (Some((col_a, height_a)), Some((col_b, height_b))) => {
                            col_a == col_b && height_a > height_b
                        }
                        _ => false,
                    }
                }
            }
            Relation::Below => self.relates(b, Relation::Above, a),
            Relation::LeftOf => match (self.column(a), self.column(b)) {
                (Some(col_a), Some(col_b)) => col_a < col_b,
                _ => false,
            },
            Relation::RightOf => self.relates(b, Relation::LeftOf, a),
            Relation::Beside => match (self.column(a), self.column(b)) {
                (Some(col_a), Some(col_b)) => col_a.abs_diff(col_b) == 1,
                _ => false,
            },
        }
    }

    /// Column and height of a placed object. Held objects and the floor
    /// have no position.
    fn position(&self, id: &ObjectId) -> Option<(usize, usize)> {
        self.stacks.iter().enumerate().find_map(|(col, stack)| {
            stack
                .iter()
                .position(|placed| placed == id)
                .map(|height| (col, height))
        })
    }

    fn column(&self, id: &ObjectId) -> Option<usize> {
        self.position(id).map(|(col, _)| col)
    }

    fn directly_atop(&self, a: &ObjectId, b: &ObjectId) -> bool {
        match (self.position(a), self.position(b)) {
            (Some((col_a, height_a)), Some((col_b, height_b))) => {
                col_a == col_b && height_a == height_b + 1
            }
            _ => false,
        }
    }

    fn is_box(&self, id: &ObjectId) -> bool {
        self.spec(id).is_some_and(|spec| spec.form == Form::Box)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Color, Size};

    fn id(name: &str) -> ObjectId {
        ObjectId::new(name)
    }

    /// table1 on the floor, box1 on table1, ball1 inside box1; brick1
    /// alone one column to the right; ball2 held by the arm.
    fn test_world() -> WorldState {
        let objects = HashMap::from([
            (id("table1"), ObjectSpec::new(Form::Table, Size::Large, Color::Red)),
            (id("box1"), ObjectSpec::new(Form::Box, Size::Large, Color::Yellow)),
            (id("ball1"), ObjectSpec::new(Form::Ball, Size::Small, Color::White)),
            (id("brick1"), ObjectSpec::new(Form::Brick, Size::Large, Color::Green)),
            (id("ball2"), ObjectSpec::new(Form::Ball, Size::Large, Color::Black)),
        ]);
        WorldState::new(
            vec![vec![id("table1"), id("box1"), id("ball1")], vec![id("brick1")]],
            objects,
            Some(id("ball2")),
        )
        .unwrap()
    }

    #[test]
    fn ontop_is_direct_non_box_support() {
        let world = test_world();
        assert!(world.relates(&id("box1"), Relation::OnTop, &id("table1")));
        assert!(!world.relates(&id("ball1"), Relation::OnTop, &id("box1")));
        assert!(!world.relates(&id("ball1"), Relation::OnTop, &id("table1")));
    }

    #[test]
    fn ontop_floor_means_bottom_of_stack() {
        let world = test_world();
        assert!(world.relates(&id("table1"), Relation::OnTop, &ObjectId::floor()));
        assert!(world.relates(&id("brick1"), Relation::OnTop, &ObjectId::floor()));
        assert!(!world.relates(&id("box1"), Relation::OnTop, &ObjectId::floor()));
    }

    #[test]
    fn inside_requires_a_box() {
        let world = test_world();
        assert!(world.relates(&id("ball1"), Relation::Inside, &id("box1")));
        assert!(!world.relates(&id("box1"), Relation::Inside, &id("table1")));
    }

    #[test]
    fn under_and_containing_are_reversals() {
        let world = test_world();
        assert!(world.relates(&id("table1"), Relation::Under, &id("box1")));
        assert!(world.relates(&id("box1"), Relation::Containing, &id("ball1")));
    }

    #[test]
    fn above_reaches_any_distance_in_the_column() {
        let world = test_world();
        assert!(world.relates(&id("ball1"), Relation::Above, &id("table1")));
        assert!(world.relates(&id("ball1"), Relation::Above, &ObjectId::floor()));
        assert!(world.relates(&id("table1"), Relation::Below, &id("ball1")));
        assert!(!world.relates(&id("brick1"), Relation::Above, &id("table1")));
    }

    #[test]
    fn horizontal_relations_compare_columns() {
        let world = test_world();
        assert!(world.relates(&id("table1"), Relation::LeftOf, &id("brick1")));
        assert!(world.relates(&id("brick1"), Relation::RightOf, &id("ball1")));
        assert!(world.relates(&id("brick1"), Relation::Beside, &id("box1")));
        assert!(!world.relates(&id("table1"), Relation::Beside, &id("box1")));
    }

    #[test]
    fn held_object_satisfies_no_spatial_relation() {
        let world = test_world();
        assert!(world.relates(&id("ball2"), Relation::Holding, &id("ball2")));
        assert!(!world.relates(&id("ball2"), Relation::Above, &ObjectId::floor()));
        assert!(!world.relates(&id("ball2"), Relation::Beside, &id("brick1")));
    }

    #[test]
    fn duplicate_placement_is_rejected() {
        let objects = HashMap::from([(
            id("ball1"),
            ObjectSpec::new(Form::Ball, Size::Small, Color::White),
        )]);
        let result = WorldState::new(vec![vec![id("ball1")], vec![id("ball1")]], objects, None);
        assert!(matches!(result, Err(CoreError::DuplicatePlacement(_))));
    }

    #[test]
    fn placed_objects_must_be_defined_and_defined_objects_placed() {
        let undefined = WorldState::new(vec![vec![id("ghost")]], HashMap::new(), None);
        assert!(matches!(undefined, Err(CoreError::UndefinedObject(_))));

        let objects = HashMap::from([(
            id("ball1"),
            ObjectSpec::new(Form::Ball, Size::Small, Color::White),
        )]);
        let unplaced = WorldState::new(vec![], objects, None);
        assert!(matches!(unplaced, Err(CoreError::UnplacedObject(_))));
    }

    #[test]
    fn floor_id_is_reserved() {
        let objects = HashMap::from([(
            id("floor"),
            ObjectSpec::new(Form::Table, Size::Large, Color::Red),
        )]);
        let result = WorldState::new(vec![vec![id("floor")]], objects, None);
        assert!(matches!(result, Err(CoreError::ReservedFloorId)));
    }

    #[test]
    fn scene_deserialization_validates() {
        let valid = r#"{
            "stacks": [["a"]],
            "objects": {"a": {"form": "brick", "size": "large", "color": "green"}}
        }"#;
        let world: WorldState = serde_json::from_str(valid).unwrap();
        assert_eq!(world.object_count(), 1);
        assert!(world.holding().is_none());

        let invalid = r#"{
            "stacks": [["a"], ["a"]],
            "objects": {"a": {"form": "brick", "size": "large", "color": "green"}}
        }"#;
        assert!(serde_json::from_str::<WorldState>(invalid).is_err());
    }
}
