use anyhow::Error;
use std::time::Duration;

use crate::animation::{Animation, DynFactorGenerator, Easing, Frame, Keyframe, LoopRepeat};
use crate::orbit::frame::FULL_CYCLE_DEGREES;
use crate::orbit::{wrap_progress, Phase};

/// Snapshot the driver hands to the spinner once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub progress_degrees: f32,
    pub cycle_duration_ms: u64,
}

impl AnimationState {
    pub fn phase(&self) -> Phase {
        Phase::of(self.progress_degrees)
    }

    /// Whether the progress sits exactly on a half turn, where the folded
    /// geometry jumps between representations of the same picture. Progress
    /// is already wrapped, so a full turn shows up as 0.
    pub fn is_boundary(&self) -> bool {
        self.progress_degrees == 0.0 || self.progress_degrees == FULL_CYCLE_DEGREES / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DriverState {
    Stopped,
    Running { started: Frame },
}

/// Sweeps the progress angle from 0 to 360 once per cycle, forever, while
/// running.
pub struct ProgressDriver {
    animation: Animation<f32, LoopRepeat, DynFactorGenerator>,
    cycle: Duration,
    fps: f32,
    state: DriverState,
}

impl ProgressDriver {
    pub fn new(cycle: Duration, easing: Easing, fps: f32) -> Result<Self, Error> {
        if cycle == Duration::from_secs(0) {
            bail!("an animation cycle must last longer than zero");
        }
        if !fps.is_finite() || fps <= 0.0 {
            bail!("frame rate must be positive, got {}", fps);
        }

        let cycle_frames = Frame::from_duration(&cycle, fps).frame();

        let animation = Animation::with_times(
            vec![
                Keyframe::new(Frame::new(0.0), 0.0),
                Keyframe::new(Frame::new(cycle_frames), FULL_CYCLE_DEGREES),
            ],
            LoopRepeat::new(cycle_frames),
            DynFactorGenerator::eased(easing),
        );

        Ok(Self {
            animation,
            cycle,
            fps,
            state: DriverState::Stopped,
        })
    }

    pub fn cycle(&self) -> Duration {
        self.cycle
    }

    pub fn cycle_duration_ms(&self) -> u64 {
        self.cycle.as_millis() as u64
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Starts a fresh cycle at `at`. Restarting a running driver rewinds it.
    pub fn start(&mut self, at: Frame) {
        self.state = DriverState::Running { started: at };
    }

    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    pub fn sample(&self, now: Frame) -> Option<AnimationState> {
        match self.state {
            DriverState::Stopped => None,
            DriverState::Running { started } => Some(self.state_at_frame(now.since(&started))),
        }
    }

    pub fn state_at(&self, elapsed: Duration) -> AnimationState {
        self.state_at_frame(Frame::from_duration(&elapsed, self.fps))
    }

    fn state_at_frame(&self, elapsed: Frame) -> AnimationState {
        AnimationState {
            progress_degrees: wrap_progress(self.animation.interpolate(elapsed)),
            cycle_duration_ms: self.cycle_duration_ms(),
        }
    }
}
