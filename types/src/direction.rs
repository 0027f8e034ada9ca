//! Layout direction
//!
//! A totem grows from its start cap in one of four directions. Positions in
//! generated layouts are expressed along two axes: *inline* (the direction of
//! growth) and *block* (perpendicular to it).

use serde::{Deserialize, Serialize};

/// Index into a `[x, y]` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "r")]
    Right,
    #[serde(rename = "d")]
    Down,
    #[serde(rename = "l")]
    Left,
    #[serde(rename = "u")]
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Single-letter code used in share links
    pub fn code(&self) -> &'static str {
        match self {
            Self::Right => "r",
            Self::Down => "d",
            Self::Left => "l",
            Self::Up => "u",
        }
    }

    /// Parse a share-link code. Unknown codes yield `None`.
    ///
    /// ```
    /// use totem_types::Direction;
    /// assert_eq!(Direction::from_code("l"), Some(Direction::Left));
    /// assert_eq!(Direction::from_code("x"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Capitalized name, as used by icon lists in the overlay schema
    pub fn label(&self) -> &'static str {
        match self {
            Self::Right => "Right",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Up => "Up",
        }
    }

    /// Lowercase name, used as the icon asset folder
    pub fn asset_dir(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
            Self::Up => "up",
        }
    }

    pub fn inline_axis(&self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::X,
            Self::Down | Self::Up => Axis::Y,
        }
    }

    pub fn block_axis(&self) -> Axis {
        match self.inline_axis() {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Sign applied to inline offsets: `-1` for the reversed directions
    pub fn flip(&self) -> i32 {
        match self {
            Self::Left | Self::Up => -1,
            Self::Right | Self::Down => 1,
        }
    }

    /// Build an `[x, y]` pair from inline/block components, applying `flip`
    /// to the inline component.
    ///
    /// ```
    /// use totem_types::Direction;
    /// assert_eq!(Direction::Right.place(10, 0), [10, 0]);
    /// assert_eq!(Direction::Up.place(10, 0), [0, -10]);
    /// ```
    pub fn place(&self, inline: i32, block: i32) -> [i32; 2] {
        self.extent(inline * self.flip(), block)
    }

    /// Build an `[x, y]` pair from unsigned inline/block extents (sizes)
    pub fn extent(&self, inline: i32, block: i32) -> [i32; 2] {
        let mut out = [0; 2];
        out[self.inline_axis().index()] = inline;
        out[self.block_axis().index()] = block;
        out
    }
}
