//! The parse AST handed over by the grammar frontend.
//!
//! One spoken sentence can parse several ways; each way arrives as a
//! [`ParseCandidate`]. The interpreter treats these values as read-only —
//! rewrites such as the any/all swap construct new commands, because the
//! same parse may be shared across interpretation attempts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::object::{Color, Form, Size};
use crate::relation::Relation;

/// How strongly an entity's description binds to referents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    /// "the" — exactly one referent.
    The,
    /// "a"/"any" — one referent, whichever.
    Any,
    /// "all" — every referent simultaneously.
    All,
}

/// Attribute filter over scene objects.
///
/// Unset fields match anything; an unset form is the grammar's "anyform"
/// wildcard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Required form, if the sentence names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<Form>,
    /// Required size, if the sentence names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Required color, if the sentence names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Descriptor {
    /// A filter constraining the form alone.
    pub fn form(form: Form) -> Self {
        Self {
            form: Some(form),
            ..Self::default()
        }
    }
}

impl fmt::Display for Descriptor {
    /// Renders the description the way it was spoken: "large red box",
    /// with unset attributes omitted and a missing form read as "object".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(size) = self.size {
            parts.push(size.to_string());
        }
        if let Some(color) = self.color {
            parts.push(color.to_string());
        }
        match self.form {
            Some(form) => parts.push(form.to_string()),
            None => parts.push("object".to_string()),
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// An object description: a bare attribute filter, or one qualified by its
/// own location ("a box that is on the table").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectDesc {
    /// A description qualified by a relation to another entity.
    Relative {
        /// The attribute filter for the object itself.
        base: Descriptor,
        /// Where the object must be.
        location: Box<Location>,
    },
    /// A bare attribute filter.
    Flat(Descriptor),
}

impl ObjectDesc {
    /// The attribute filter, ignoring any location qualifier.
    pub fn base(&self) -> &Descriptor {
        match self {
            Self::Flat(descriptor) => descriptor,
            Self::Relative { base, .. } => base,
        }
    }
}

/// A quantified object description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The binding strength.
    pub quantifier: Quantifier,
    /// What is described.
    pub object: ObjectDesc,
}

impl Entity {
    /// Convenience constructor.
    pub fn new(quantifier: Quantifier, object: ObjectDesc) -> Self {
        Self { quantifier, object }
    }
}

/// A relation anchored to a described entity ("inside a red box").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The spatial relation.
    pub relation: Relation,
    /// The reference entity the relation is anchored to.
    pub entity: Entity,
}

/// One parsed command: what to manipulate and where to put it.
///
/// A missing target means "whatever the arm is holding"; a missing
/// location means "pick the target up".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// The target entity, if the sentence names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Entity>,
    /// The goal location, if the sentence names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// One way the grammar parsed the input sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseCandidate {
    /// The sentence as typed.
    pub source: String,
    /// The parsed command.
    pub command: Command,
}
