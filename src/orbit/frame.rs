use crate::orbit::config::{OrbitConfig, MOVE_DISTANCE_DEGREE};
use nalgebra_glm::{vec2, Vec2};

pub const FULL_CYCLE_DEGREES: f32 = 2.0 * MOVE_DISTANCE_DEGREE;

/// Half of the cycle the progress angle is in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// `[0, 180)`: circle A travels forward and is painted on top.
    Ascending,
    /// `[180, 360)`: circle A travels back and circle B is painted on top.
    Descending,
}

impl Phase {
    pub fn of(progress_degrees: f32) -> Self {
        if wrap_progress(progress_degrees) < MOVE_DISTANCE_DEGREE {
            Phase::Ascending
        } else {
            Phase::Descending
        }
    }

    pub fn is_odd_rotation(self) -> bool {
        self == Phase::Descending
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Circle {
    A,
    B,
}

/// Geometry of a single tick. Positions are horizontal centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub move_degree: f32,
    pub position_a: f32,
    pub position_b: f32,
    pub radius_a: f32,
    pub radius_b: f32,
    pub front_is_a: bool,
    center_y: f32,
}

impl FrameOutput {
    pub fn phase(&self) -> Phase {
        if self.front_is_a {
            Phase::Ascending
        } else {
            Phase::Descending
        }
    }

    pub fn is_odd_rotation(&self) -> bool {
        !self.front_is_a
    }

    pub fn center_a(&self) -> Vec2 {
        vec2(self.position_a, self.center_y)
    }

    pub fn center_b(&self) -> Vec2 {
        vec2(self.position_b, self.center_y)
    }

    /// Circles in paint order; the second one covers the first where they overlap.
    pub fn draw_order(&self) -> [Circle; 2] {
        if self.front_is_a {
            [Circle::B, Circle::A]
        } else {
            [Circle::A, Circle::B]
        }
    }

    pub fn circle(&self, circle: Circle) -> (Vec2, f32) {
        match circle {
            Circle::A => (self.center_a(), self.radius_a),
            Circle::B => (self.center_b(), self.radius_b),
        }
    }
}

/// Brings any progress angle into `[0, 360)`. Non-finite input maps to 0.
pub fn wrap_progress(progress_degrees: f32) -> f32 {
    if !progress_degrees.is_finite() {
        return 0.0;
    }

    let wrapped = progress_degrees.rem_euclid(FULL_CYCLE_DEGREES);
    if wrapped >= FULL_CYCLE_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Folds the progress angle into a 0 -> 180 -> 0 triangle wave.
pub fn move_degree(progress_degrees: f32) -> f32 {
    let progress = wrap_progress(progress_degrees);

    if progress < MOVE_DISTANCE_DEGREE {
        progress % MOVE_DISTANCE_DEGREE
    } else {
        MOVE_DISTANCE_DEGREE - progress % MOVE_DISTANCE_DEGREE
    }
}

pub fn compute_frame(progress_degrees: f32, config: &OrbitConfig) -> FrameOutput {
    let progress = wrap_progress(progress_degrees);
    let move_degree = move_degree(progress);

    let offset = config.offset();
    let per_degree_distance = config.per_degree_distance();

    let radians = progress.to_radians();

    FrameOutput {
        move_degree,
        position_a: offset + per_degree_distance * move_degree,
        position_b: offset + config.move_distance() - per_degree_distance * move_degree,
        radius_a: config.normalize_radius(radians.sin()),
        radius_b: config.normalize_radius((radians + std::f32::consts::FRAC_PI_2).cos()),
        front_is_a: !Phase::of(progress).is_odd_rotation(),
        center_y: config.center_y(),
    }
}
