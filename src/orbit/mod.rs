//! Two-circle orbit geometry.
//!
//! A progress angle in `[0, 360)` drives two circles across a shared track. Their
//! horizontal centers mirror each other, their radii pulse a quarter turn apart
//! and the paint order flips every half turn, which together read as one circle
//! orbiting behind the other.

pub mod config;
pub mod frame;

pub use config::OrbitConfig;
pub use frame::{compute_frame, move_degree, wrap_progress, Circle, FrameOutput, Phase};
