use crate::animation::Frame;
use std::time::Instant;

/// Wall clock measured in frames since construction.
pub struct Time {
    start_time: Instant,
    fps: f32,
}

impl Time {
    pub fn new(fps: f32) -> Self {
        Self {
            start_time: Instant::now(),
            fps,
        }
    }

    pub fn start_time(&self) -> &Instant {
        &self.start_time
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn current_frame(&self) -> Frame {
        Frame::from_duration(&self.start_time.elapsed(), self.fps)
    }
}

/// Manually stepped clock for capturing and tests.
pub struct HeadlessTime {
    current_frame: Frame,
    fps: f32,
}

impl HeadlessTime {
    pub fn new(current_frame: Frame, fps: f32) -> Self {
        Self { current_frame, fps }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn current_frame(&self) -> Frame {
        self.current_frame
    }

    pub fn set(&mut self, current_frame: Frame) {
        self.current_frame = current_frame
    }

    pub fn advance(&mut self, frames: f32) {
        self.current_frame = Frame::new(self.current_frame.frame() + frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_time_steps_by_hand() {
        let mut time = HeadlessTime::new(Frame::new(0.0), 60.0);
        time.advance(1.5);
        time.advance(1.5);

        assert_approx_eq!(time.current_frame().frame(), 3.0);

        time.set(Frame::new(10.0));
        assert_approx_eq!(time.current_frame().frame(), 10.0);
    }

    #[test]
    fn wall_clock_starts_near_zero() {
        let time = Time::new(60.0);

        assert!(time.current_frame().frame() >= 0.0);
        assert!(time.start_time().elapsed().as_secs() < 5);
    }
}
