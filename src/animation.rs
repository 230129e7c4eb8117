use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame(f32);

impl Frame {
    pub fn new(frame: f32) -> Self {
        Self(frame)
    }

    pub fn from_duration(duration: &Duration, fps: f32) -> Self {
        Self(duration.as_secs_f32() * fps)
    }

    pub fn frame(&self) -> f32 {
        self.0
    }

    pub fn duration(&self, fps: f32) -> Duration {
        Duration::from_secs_f32(self.0.max(0.0) / fps)
    }

    pub fn since(&self, start: &Frame) -> Frame {
        Frame(self.0 - start.0)
    }
}

/// A value keyframes can hold: something that can travel part of the way
/// towards another value of the same kind.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, fact: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, fact: f32) -> Self {
        self + (to - self) * fact
    }
}

pub struct Keyframe<T: Lerp> {
    frame: Frame,
    state: T,
}

impl<T: Lerp> Keyframe<T> {
    pub fn new(frame: Frame, state: T) -> Self {
        Keyframe { frame, state }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn state(&self) -> &T {
        &self.state
    }
}

pub struct Animation<T: Lerp, L, F> {
    keyframes: Vec<Keyframe<T>>,
    looping: L,
    factors: F,
}

impl<T: Lerp, L: LoopingFunction, F: ApplyFactor<T>> Animation<T, L, F> {
    /// Keyframes must be sorted by frame and non-empty.
    pub fn with_times(keyframes: Vec<Keyframe<T>>, looping: L, factors: F) -> Self {
        Self {
            keyframes,
            looping,
            factors,
        }
    }

    pub fn interpolate(&self, frame: Frame) -> T {
        self.factors
            .apply_factors(self.looping.loop_value(frame), &self.keyframes)
    }
}

/// Shapes the fraction travelled between two keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    Accelerate,
    Decelerate,
    AccelerateDecelerate,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.max(0.0).min(1.0);

        match self {
            Easing::Linear => t,
            Easing::Accelerate => t * t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

pub trait ApplyFactor<T: Lerp> {
    fn apply_factors(&self, frame: Frame, keyframes: &[Keyframe<T>]) -> T;
}

fn surrounding<T: Lerp>(
    frame: &Frame,
    keyframes: &[Keyframe<T>],
) -> (Option<(usize, f32)>, Option<(usize, f32)>) {
    let last = keyframes
        .iter()
        .enumerate()
        .find(|(_, keyframe)| keyframe.frame().frame() >= frame.frame())
        .map(|(index, keyframe)| (index, keyframe.frame().frame()));
    let first = keyframes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, keyframe)| keyframe.frame().frame() <= frame.frame())
        .map(|(index, keyframe)| (index, keyframe.frame().frame()));

    (first, last)
}

fn blend<T: Lerp>(
    frame: Frame,
    keyframes: &[Keyframe<T>],
    shape: impl Fn(f32) -> f32,
) -> T {
    match surrounding(&frame, keyframes) {
        (None, None) => unreachable!("an animation always has at least one keyframe"),
        (Some((first_index, _)), None) => *keyframes[first_index].state(),
        (None, Some((last_index, _))) => *keyframes[last_index].state(),
        (Some((first_index, first_frame)), Some((last_index, last_frame))) => {
            let fact = if first_frame != last_frame {
                shape((frame.frame() - first_frame) / (last_frame - first_frame))
            } else {
                0.0
            };

            keyframes[first_index]
                .state()
                .lerp(*keyframes[last_index].state(), fact)
        }
    }
}

pub struct LerpFactorGenerator;

impl<T: Lerp> ApplyFactor<T> for LerpFactorGenerator {
    fn apply_factors(&self, frame: Frame, keyframes: &[Keyframe<T>]) -> T {
        blend(frame, keyframes, |fact| fact)
    }
}

pub struct EasedFactorGenerator(pub Easing);

impl<T: Lerp> ApplyFactor<T> for EasedFactorGenerator {
    fn apply_factors(&self, frame: Frame, keyframes: &[Keyframe<T>]) -> T {
        let easing = self.0;
        blend(frame, keyframes, move |fact| easing.apply(fact))
    }
}

pub enum DynFactorGenerator {
    Lerp(LerpFactorGenerator),
    Eased(EasedFactorGenerator),
}

impl DynFactorGenerator {
    pub fn lerp() -> DynFactorGenerator {
        DynFactorGenerator::Lerp(LerpFactorGenerator)
    }

    pub fn eased(easing: Easing) -> DynFactorGenerator {
        match easing {
            Easing::Linear => DynFactorGenerator::lerp(),
            easing => DynFactorGenerator::Eased(EasedFactorGenerator(easing)),
        }
    }
}

impl<T: Lerp> ApplyFactor<T> for DynFactorGenerator {
    fn apply_factors(&self, frame: Frame, keyframes: &[Keyframe<T>]) -> T {
        match self {
            DynFactorGenerator::Lerp(fact_gen) => fact_gen.apply_factors(frame, keyframes),
            DynFactorGenerator::Eased(fact_gen) => fact_gen.apply_factors(frame, keyframes),
        }
    }
}

pub trait LoopingFunction {
    fn loop_value(&self, value: Frame) -> Frame;
}

pub struct LoopRepeat {
    len: f32,
}

impl LoopRepeat {
    pub fn new(len: f32) -> Self {
        LoopRepeat { len }
    }
}

impl LoopingFunction for LoopRepeat {
    fn loop_value(&self, value: Frame) -> Frame {
        // rem_euclid can round up to len for tiny negative inputs
        let looped = value.frame().rem_euclid(self.len);
        Frame::new(if looped >= self.len { 0.0 } else { looped })
    }
}
