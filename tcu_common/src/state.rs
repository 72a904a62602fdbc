//! Shared transmission state enums.
//!
//! All enums use `#[repr(i8)]` so the discriminant doubles as the cockpit
//! rank: Reverse sits below zero, Neutral at zero, and the drive gears
//! count upward from one.

use serde::{Deserialize, Serialize};

// ─── Gear ───────────────────────────────────────────────────────────

/// Mechanical gear ratio currently engaged.
///
/// Reverse and Neutral are special positions: stepping up or down never
/// enters or leaves them, only explicit mode changes do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Gear {
    Reverse = -1,
    Neutral = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Gear {
    /// Highest drivable gear.
    pub const TOP: Gear = Gear::Five;

    /// Integer rank (Reverse = -1, Neutral = 0, One..Five ascending).
    #[inline]
    pub const fn rank(self) -> i8 {
        self as i8
    }

    /// Convert from a rank. Returns `None` for values outside the box.
    #[inline]
    pub const fn from_rank(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::Reverse),
            0 => Some(Self::Neutral),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            _ => None,
        }
    }

    /// Next gear up. `None` at the top gear and in the special positions.
    #[inline]
    pub const fn step_up(self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Two),
            Self::Two => Some(Self::Three),
            Self::Three => Some(Self::Four),
            Self::Four => Some(Self::Five),
            _ => None,
        }
    }

    /// Next gear down. `None` at first gear and in the special positions.
    #[inline]
    pub const fn step_down(self) -> Option<Self> {
        match self {
            Self::Two => Some(Self::One),
            Self::Three => Some(Self::Two),
            Self::Four => Some(Self::Three),
            Self::Five => Some(Self::Four),
            _ => None,
        }
    }
}

impl Default for Gear {
    fn default() -> Self {
        Self::Neutral
    }
}

// ─── Mode ───────────────────────────────────────────────────────────

/// Transmission operating mode selected by the driver.
///
/// The rank is display-only; transition legality is governed by the
/// gearbox guards, not by rank ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Mode {
    Reverse = -1,
    Neutral = 0,
    Park = 1,
    Drive = 2,
    Manual = 3,
}

impl Mode {
    /// Integer rank for display.
    #[inline]
    pub const fn rank(self) -> i8 {
        self as i8
    }

    /// Convert from a rank. Returns `None` for invalid values.
    #[inline]
    pub const fn from_rank(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::Reverse),
            0 => Some(Self::Neutral),
            1 => Some(Self::Park),
            2 => Some(Self::Drive),
            3 => Some(Self::Manual),
            _ => None,
        }
    }

    /// Single-letter cockpit abbreviation: P, R, N, D or M.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Self::Reverse => 'R',
            Self::Neutral => 'N',
            Self::Park => 'P',
            Self::Drive => 'D',
            Self::Manual => 'M',
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Park
    }
}

// ─── Action ─────────────────────────────────────────────────────────

/// Intent fed into the gearbox, issued by the driver or the auto-shifter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Engage Reverse.
    Reverse,
    /// Engage Neutral.
    Neutral,
    /// Engage Park.
    Park,
    /// Engage Drive.
    Drive,
    /// Engage Manual.
    Manual,
    /// Shift one gear up.
    Up,
    /// Shift one gear down.
    Down,
}

impl Action {
    /// Every action, in guard-table order.
    pub const ALL: [Action; 7] = [
        Action::Reverse,
        Action::Neutral,
        Action::Park,
        Action::Drive,
        Action::Manual,
        Action::Up,
        Action::Down,
    ];
}

// ─── Tests ──────────────────────────────────────────────────────────
