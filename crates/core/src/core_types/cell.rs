//! Per-cell state: land-cover type plus fire status.
//!
//! A cell is a `(LandType, FireStatus)` pair. The legacy flat encoding
//! `land * 3 + status` is kept as an explicit conversion for hosts that
//! store the grid as raw integers.

use serde::{Deserialize, Serialize};

/// Number of fire statuses per land type in the flat encoding
const STATUSES_PER_TYPE: u8 = 3;

/// Static terrain category determining burn parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandType {
    /// Canyon scrubland - ignites easily, burns out fast
    Scrubland,
    /// Chaparral - moderate ignition, burns for days
    Chaparral,
    /// Dense forest - hard to ignite, burns for a week or more
    DenseForest,
    /// Lake - inert, never ignites
    Lake,
    /// Town - built-up target terrain
    Town,
}

impl LandType {
    /// All land types in flat-encoding order
    pub const ALL: [LandType; 5] = [
        LandType::Scrubland,
        LandType::Chaparral,
        LandType::DenseForest,
        LandType::Lake,
        LandType::Town,
    ];

    /// Position of this type in the flat encoding
    pub fn index(self) -> u8 {
        match self {
            LandType::Scrubland => 0,
            LandType::Chaparral => 1,
            LandType::DenseForest => 2,
            LandType::Lake => 3,
            LandType::Town => 4,
        }
    }

    /// Look up a land type by its encoding index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            LandType::Scrubland => "Scrubland",
            LandType::Chaparral => "Chaparral",
            LandType::DenseForest => "Dense Forest",
            LandType::Lake => "Lake",
            LandType::Town => "Town",
        }
    }
}

/// Fire status of a cell, ordered by progression
///
/// The only legal transitions are Alive -> Burning -> Burnt; Burnt is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FireStatus {
    /// Unburnt vegetation
    Alive = 0,
    /// Actively on fire
    Burning = 1,
    /// Consumed, terminal
    Burnt = 2,
}

impl FireStatus {
    /// Status code within a land type's encoding block
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a status code (0..3)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(FireStatus::Alive),
            1 => Some(FireStatus::Burning),
            2 => Some(FireStatus::Burnt),
            _ => None,
        }
    }
}

/// One grid location: land-cover type and fire status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellState {
    pub land: LandType,
    pub status: FireStatus,
}

impl CellState {
    /// A fresh, unburnt cell of the given land type
    pub fn alive(land: LandType) -> Self {
        CellState {
            land,
            status: FireStatus::Alive,
        }
    }

    /// Flat integer encoding: `land * 3 + status`
    pub fn encode(self) -> u8 {
        self.land.index() * STATUSES_PER_TYPE + self.status.code()
    }

    /// Decode a flat state code
    ///
    /// Panics on codes outside the catalog's encoded range; an out-of-range
    /// code indicates an upstream encoding bug, not a recoverable condition.
    pub fn decode(code: u8) -> Self {
        let land = LandType::from_index(code / STATUSES_PER_TYPE);
        let status = FireStatus::from_code(code % STATUSES_PER_TYPE);
        let (Some(land), Some(status)) = (land, status) else {
            panic!("state code {code} outside encoded range");
        };
        CellState { land, status }
    }

    pub fn is_alive(self) -> bool {
        self.status == FireStatus::Alive
    }

    pub fn is_burning(self) -> bool {
        self.status == FireStatus::Burning
    }

    pub fn is_burnt(self) -> bool {
        self.status == FireStatus::Burnt
    }
}
