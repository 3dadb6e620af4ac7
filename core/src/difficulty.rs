use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Full travel of a difficulty slider.
pub const SLIDER_MAX: u16 = 2000;

const MIN_WIDTH: u32 = 8;
const MAX_WIDTH: u32 = 40;
const MIN_HEIGHT: u32 = 8;
const MAX_HEIGHT: u32 = 30;

/// Named preset for the mine density.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MineTier {
    Beginner,
    Easy,
    Medium,
    Hard,
    Extreme,
}

/// Named preset for one board dimension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Tiny,
    Small,
    Medium,
    Large,
    Extreme,
}

impl MineTier {
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Extreme,
    ];

    pub const fn name(self) -> &'static str {
        use MineTier::*;
        match self {
            Beginner => "beginner",
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
            Extreme => "extreme",
        }
    }

    /// Mine sliders start at 7% and move 16% of the travel across the five tiers.
    pub const fn slider(self) -> u16 {
        140 + 80 * (self as u16)
    }
}

impl SizeTier {
    pub const ALL: [Self; 5] = [
        Self::Tiny,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Extreme,
    ];

    pub const fn name(self) -> &'static str {
        use SizeTier::*;
        match self {
            Tiny => "tiny",
            Small => "small",
            Medium => "medium",
            Large => "large",
            Extreme => "extreme",
        }
    }

    pub const fn slider(self) -> u16 {
        500 * (self as u16)
    }
}

impl fmt::Display for MineTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MineTier {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownTier)
    }
}

impl FromStr for SizeTier {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownTier)
    }
}

/// One difficulty axis, either a named preset or a raw slider position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis<T> {
    Tier(T),
    Custom(u16),
}

impl<T> Axis<T> {
    pub const fn tier(&self) -> Option<&T> {
        match self {
            Self::Tier(tier) => Some(tier),
            Self::Custom(_) => None,
        }
    }
}

impl Axis<MineTier> {
    pub const fn slider(&self) -> u16 {
        match *self {
            Self::Tier(tier) => tier.slider(),
            Self::Custom(value) => clamp_slider(value),
        }
    }
}

impl Axis<SizeTier> {
    pub const fn slider(&self) -> u16 {
        match *self {
            Self::Tier(tier) => tier.slider(),
            Self::Custom(value) => clamp_slider(value),
        }
    }
}

const fn clamp_slider(value: u16) -> u16 {
    if value > SLIDER_MAX { SLIDER_MAX } else { value }
}

/// Maps a slider position onto `min..=max`, rounding down.
const fn scale(slider: u16, min: u32, max: u32) -> u32 {
    min + (slider as u32) * (max - min) / (SLIDER_MAX as u32)
}

/// The player's difficulty choice on all three axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub mines: Axis<MineTier>,
    pub width: Axis<SizeTier>,
    pub height: Axis<SizeTier>,
}

impl DifficultySettings {
    pub const fn tiers(mines: MineTier, width: SizeTier, height: SizeTier) -> Self {
        Self {
            mines: Axis::Tier(mines),
            width: Axis::Tier(width),
            height: Axis::Tier(height),
        }
    }

    pub const fn width(&self) -> Coord {
        scale(self.width.slider(), MIN_WIDTH, MAX_WIDTH) as Coord
    }

    pub const fn height(&self) -> Coord {
        scale(self.height.slider(), MIN_HEIGHT, MAX_HEIGHT) as Coord
    }

    pub const fn mine_count(&self) -> CellCount {
        let cells = mult(self.height(), self.width()) as u32;
        scale(self.mines.slider(), 1, cells) as CellCount
    }

    /// Board for these settings. A mine slider pushed all the way fills every cell and is rejected.
    pub fn game_config(&self) -> Result<GameConfig> {
        GameConfig::new((self.height(), self.width()), self.mine_count())
    }

    /// Only all-preset difficulties keep a best time.
    pub fn best_time_key(&self) -> Option<BestTimeKey> {
        Some(BestTimeKey {
            mines: *self.mines.tier()?,
            width: *self.width.tier()?,
            height: *self.height.tier()?,
        })
    }
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self::tiers(MineTier::Medium, SizeTier::Medium, SizeTier::Medium)
    }
}

impl StorageKey for DifficultySettings {
    const KEY: &'static str = "sweeper:difficulty";
}
