use crate::object::ObjectId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building a [`crate::WorldState`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An id occupies two stack positions, or a stack position and the arm.
    #[error("object placed twice: {0}")]
    DuplicatePlacement(ObjectId),

    /// An id is placed in the scene but has no definition.
    #[error("object has no definition: {0}")]
    UndefinedObject(ObjectId),

    /// An id is defined but neither stacked nor held.
    #[error("object defined but not placed: {0}")]
    UnplacedObject(ObjectId),

    /// The reserved floor id was used as an ordinary scene object.
    #[error("\"floor\" is reserved for the synthetic floor object")]
    ReservedFloorId,
}
