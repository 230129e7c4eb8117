use anyhow::Error;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Degrees one circle needs to cross the orbit once: half of a full cycle.
pub const MOVE_DISTANCE_DEGREE: f32 = 180.0;

pub const DEFAULT_CIRCLE_RADIUS: f32 = 22.0;
pub const DEFAULT_MOVE_DISTANCE: f32 = 36.0;
pub const DEFAULT_WEIGHT_ADJUSTMENT: f32 = 5.0;

/// Shape of the orbit. Only constructed through [`OrbitConfig::new`], so a
/// value of this type always satisfies `weight_adjustment > 1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrbitConfigData", into = "OrbitConfigData")]
pub struct OrbitConfig {
    circle_radius: f32,
    move_distance: f32,
    weight_adjustment: f32,
}

impl OrbitConfig {
    pub fn new(circle_radius: f32, move_distance: f32, weight_adjustment: f32) -> Result<Self, Error> {
        if !circle_radius.is_finite() || circle_radius <= 0.0 {
            bail!("circle radius must be a positive number, got {}", circle_radius);
        }
        if !move_distance.is_finite() || move_distance < 0.0 {
            bail!("move distance must not be negative, got {}", move_distance);
        }
        if !weight_adjustment.is_finite() || weight_adjustment <= 1.0 {
            bail!(
                "weight adjustment must be greater than 1, got {}",
                weight_adjustment
            );
        }

        Ok(Self {
            circle_radius,
            move_distance,
            weight_adjustment,
        })
    }

    pub fn circle_radius(&self) -> f32 {
        self.circle_radius
    }

    pub fn move_distance(&self) -> f32 {
        self.move_distance
    }

    pub fn move_distance_degree(&self) -> f32 {
        MOVE_DISTANCE_DEGREE
    }

    /// Larger values make the radius pulse subtler.
    pub fn weight_adjustment(&self) -> f32 {
        self.weight_adjustment
    }

    pub fn offset(&self) -> f32 {
        self.move_distance / 2.0
    }

    pub fn per_degree_distance(&self) -> f32 {
        self.move_distance / MOVE_DISTANCE_DEGREE
    }

    /// Both circles sit on the horizontal line through the middle of the widget.
    pub fn center_y(&self) -> f32 {
        self.circle_radius
    }

    /// Maps a sine-range value in [-1, 1] onto a radius in (0, circle_radius].
    pub fn normalize_radius(&self, x: f32) -> f32 {
        (x + self.weight_adjustment) / (self.weight_adjustment + 1.0) * self.circle_radius
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            move_distance: DEFAULT_MOVE_DISTANCE,
            weight_adjustment: DEFAULT_WEIGHT_ADJUSTMENT,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfigData {
    pub circle_radius: f32,
    pub move_distance: f32,
    pub weight_adjustment: f32,
}

impl Default for OrbitConfigData {
    fn default() -> Self {
        OrbitConfig::default().into()
    }
}

impl TryFrom<OrbitConfigData> for OrbitConfig {
    type Error = Error;

    fn try_from(data: OrbitConfigData) -> Result<Self, Self::Error> {
        OrbitConfig::new(data.circle_radius, data.move_distance, data.weight_adjustment)
    }
}

impl From<OrbitConfig> for OrbitConfigData {
    fn from(config: OrbitConfig) -> Self {
        OrbitConfigData {
            circle_radius: config.circle_radius,
            move_distance: config.move_distance,
            weight_adjustment: config.weight_adjustment,
        }
    }
}
