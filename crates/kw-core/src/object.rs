use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a scene object.
///
/// Scene files assign short names ("e", "ball1"). The name `floor` is
/// reserved for the synthetic floor, which exists in every world without a
/// stack position or an [`ObjectSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Create an identifier from a scene-assigned name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The synthetic floor object.
    pub fn floor() -> Self {
        Self("floor".into())
    }

    /// Returns `true` for the reserved floor identifier.
    pub fn is_floor(&self) -> bool {
        self.0 == "floor"
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Physical form of a scene object.
///
/// `Floor` only ever appears in descriptors ("put the ball on the floor");
/// the floor itself is synthetic and has no [`ObjectSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    /// A solid rectangular block.
    Brick,
    /// A flat board.
    Plank,
    /// A ball; supports nothing.
    Ball,
    /// A pyramid; supports nothing.
    Pyramid,
    /// An open box; objects go inside it.
    Box,
    /// A table.
    Table,
    /// The floor of the scene.
    Floor,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Brick => "brick",
            Self::Plank => "plank",
            Self::Ball => "ball",
            Self::Pyramid => "pyramid",
            Self::Box => "box",
            Self::Table => "table",
            Self::Floor => "floor",
        };
        write!(f, "{name}")
    }
}

/// Size of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Small.
    Small,
    /// Large.
    Large,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Large => write!(f, "large"),
        }
    }
}

/// Color of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Red.
    Red,
    /// Black.
    Black,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// White.
    White,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::White => "white",
        };
        write!(f, "{name}")
    }
}

/// Static definition of one scene object: what it is, not where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSpec {
    /// The object's form.
    pub form: Form,
    /// The object's size.
    pub size: Size,
    /// The object's color.
    pub color: Color,
}

impl ObjectSpec {
    /// Create a definition.
    pub fn new(form: Form, size: Size, color: Color) -> Self {
        Self { form, size, color }
    }
}
