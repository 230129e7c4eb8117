use anyhow::{Context, Error};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::animation::Easing;
use crate::orbit::OrbitConfig;
use crate::scene::palette::Palette;
use crate::scene::Spinner;

pub const DEFAULT_CYCLE_DURATION_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinnerSettings {
    pub orbit: OrbitConfig,
    pub palette: Palette,
    pub cycle_duration_ms: u64,
    pub easing: Easing,
    /// Ignore ticks that land exactly on 0, 180 or 360 degrees.
    pub skip_boundary_frames: bool,
}

impl SpinnerSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("could not open settings {}", path.display()))?;

        let settings: SpinnerSettings = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("could not parse settings {}", path.display()))?;

        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.cycle_duration_ms == 0 {
            bail!("cycle duration must be at least one millisecond");
        }
        Ok(())
    }

    pub fn cycle_duration(&self) -> Duration {
        Duration::from_millis(self.cycle_duration_ms)
    }

    pub fn spinner(&self) -> Spinner {
        Spinner::new(self.orbit, self.palette)
    }
}

impl Default for SpinnerSettings {
    fn default() -> Self {
        SpinnerSettings {
            orbit: OrbitConfig::default(),
            palette: Palette::default(),
            cycle_duration_ms: DEFAULT_CYCLE_DURATION_MS,
            easing: Easing::Linear,
            skip_boundary_frames: true,
        }
    }
}
