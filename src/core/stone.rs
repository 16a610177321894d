//! Cell contents and side to move.
//!
//! ## Stone
//!
//! A cell is `Empty`, `Black` or `White`. The same type names the player to
//! move; only `Black` and `White` are valid there.
//!
//! ## Integer encoding
//!
//! The boundary format uses `0` for empty, `1` for black and `-1` for white.
//! Serde goes through that encoding too, so snapshots and JSON carry plain
//! integers.

use serde::{Deserialize, Serialize};

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// The opposing color. `Empty` maps to itself.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for `Black` and `White`.
    #[inline]
    #[must_use]
    pub const fn is_stone(self) -> bool {
        !matches!(self, Stone::Empty)
    }

    /// Boundary encoding: `0`, `1` or `-1`.
    #[inline]
    #[must_use]
    pub const fn to_i8(self) -> i8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => -1,
        }
    }

    /// Decode the boundary encoding.
    #[inline]
    #[must_use]
    pub const fn from_i8(value: i8) -> Option<Stone> {
        match value {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    /// Single-character glyph used by `Board`'s `Display`.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

impl From<Stone> for i8 {
    fn from(stone: Stone) -> i8 {
        stone.to_i8()
    }
}

impl TryFrom<i8> for Stone {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Stone::from_i8(value).ok_or_else(|| format!("invalid stone value {value}"))
    }
}

impl Ord for Stone {
    /// Orders by the integer encoding: white < empty < black.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_i8().cmp(&other.to_i8())
    }
}

impl PartialOrd for Stone {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::Empty => write!(f, "Empty"),
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

impl std::str::FromStr for Stone {
    type Err = String;

    /// Accepts color names or the integer encoding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "1" => Ok(Stone::Black),
            "white" | "w" | "-1" => Ok(Stone::White),
            "empty" | "0" => Ok(Stone::Empty),
            other => Err(format!("unknown stone {other:?}")),
        }
    }
}
