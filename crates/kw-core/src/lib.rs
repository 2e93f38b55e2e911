//! Core types for Klotzwelt: scene objects, spatial relations, the world
//! state, and the parse AST consumed by the interpreter.
//!
//! This crate defines the data model shared between the grammar frontend
//! and the interpreter. It is independent of both — you can construct a
//! [`WorldState`] programmatically or deserialize one from JSON.

/// Error types used throughout the crate.
pub mod error;
/// Object identifiers, attribute enums, and static object definitions.
pub mod object;
/// Parse AST: commands, entities, descriptors, and locations.
pub mod parse;
/// Spatial relation names and their reversal algebra.
pub mod relation;
/// The blocks-world scene snapshot and its geometric predicate.
pub mod world;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export object types.
pub use object::{Color, Form, ObjectId, ObjectSpec, Size};
/// Re-export parse AST types.
pub use parse::{Command, Descriptor, Entity, Location, ObjectDesc, ParseCandidate, Quantifier};
/// Re-export the relation algebra.
pub use relation::Relation;
/// Re-export the world model.
pub use world::WorldState;
