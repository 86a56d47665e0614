use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One seat location in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatPosition {
    pub x: f64,
    pub y: f64,
}

impl SeatPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position-stable party identifier (index in the loaded party list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(pub usize);

impl PartyId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Government,
    Opposition,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Opposition => "opposition",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "government" => Some(Self::Government),
            "opposition" => Some(Self::Opposition),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Arch,
    Westminster,
}

impl LayoutKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arch => "arch",
            Self::Westminster => "westminster",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "arch" => Some(Self::Arch),
            "westminster" => Some(Self::Westminster),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub color: String,
    pub seats: u32,
    /// Present iff the chart uses the Westminster layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

impl Party {
    #[must_use]
    pub fn new(id: usize, name: impl Into<String>, color: impl Into<String>, seats: u32) -> Self {
        Self {
            id: PartyId(id),
            name: name.into(),
            color: color.into(),
            seats,
            side: None,
        }
    }

    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats as usize
    }
}

/// Validated chart input: layout kind plus the ordered party list.
///
/// Party order is the seat-assignment order for both layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub layout: LayoutKind,
    pub parties: Vec<Party>,
}

impl ChartSpec {
    #[must_use]
    pub fn new(layout: LayoutKind, parties: Vec<Party>) -> Self {
        Self { layout, parties }
    }

    #[must_use]
    pub fn total_seats(&self) -> usize {
        self.parties.iter().map(Party::seat_count).sum()
    }

    #[must_use]
    pub fn party(&self, id: PartyId) -> Option<&Party> {
        self.parties.iter().find(|party| party.id == id)
    }
}
