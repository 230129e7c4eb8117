use anyhow::Error;

use crate::animation::Frame;
use crate::event::{Invalidation, Revision};
use crate::orbit::FrameOutput;
use crate::scene::{Canvas, Spinner, SpinnerSettings};
use crate::world::driver::{AnimationState, ProgressDriver};

/// A spinner bound to its driver. The host attaches it when it becomes
/// visible, ticks it every frame and paints whenever it reports a change.
pub struct SpinnerView {
    spinner: Spinner,
    driver: ProgressDriver,
    frame: FrameOutput,
    invalidation: Invalidation,
    skip_boundary_frames: bool,
}

impl SpinnerView {
    pub fn new(spinner: Spinner, driver: ProgressDriver, skip_boundary_frames: bool) -> Self {
        let frame = spinner.frame(0.0);

        Self {
            spinner,
            driver,
            frame,
            invalidation: Invalidation::new(),
            skip_boundary_frames,
        }
    }

    pub fn from_settings(settings: &SpinnerSettings, fps: f32) -> Result<Self, Error> {
        settings.validate()?;
        let driver = ProgressDriver::new(settings.cycle_duration(), settings.easing, fps)?;

        Ok(Self::new(
            settings.spinner(),
            driver,
            settings.skip_boundary_frames,
        ))
    }

    pub fn get_spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn get_frame(&self) -> &FrameOutput {
        &self.frame
    }

    pub fn is_attached(&self) -> bool {
        self.driver.is_running()
    }

    pub fn attach(&mut self, now: Frame) {
        log::debug!("spinner attached at frame {:.2}", now.frame());
        self.driver.start(now);
    }

    pub fn detach(&mut self) {
        log::debug!("spinner detached");
        self.driver.stop();
    }

    /// Advances to `now`. Returns whether the drawn picture became stale.
    pub fn tick(&mut self, now: Frame) -> bool {
        let state = match self.driver.sample(now) {
            Some(state) => state,
            None => return false,
        };

        self.apply(state)
    }

    fn apply(&mut self, state: AnimationState) -> bool {
        if self.skip_boundary_frames && state.is_boundary() {
            log::trace!("skipping boundary tick at {} degrees", state.progress_degrees);
            return false;
        }

        self.frame = self.spinner.frame(state.progress_degrees);
        log::trace!("tick {:.2} degrees -> {:?}", state.progress_degrees, self.frame);
        self.invalidation.invalidate();
        true
    }

    pub fn register(&self) -> Revision {
        self.invalidation.register()
    }

    pub fn needs_redraw(&self, seen: &mut Revision) -> bool {
        self.invalidation.needs_redraw(seen)
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        self.spinner.draw(canvas, &self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::tests::RecordingCanvas;
    use crate::world::time::HeadlessTime;

    fn view(skip_boundary_frames: bool) -> SpinnerView {
        let settings = SpinnerSettings {
            skip_boundary_frames,
            ..SpinnerSettings::default()
        };
        SpinnerView::from_settings(&settings, 60.0).unwrap()
    }

    #[test]
    fn detached_views_never_invalidate() {
        let mut view = view(false);
        let mut seen = view.register();

        assert!(!view.tick(Frame::new(15.0)));
        assert!(!view.needs_redraw(&mut seen));
    }

    #[test]
    fn ticks_follow_the_clock_while_attached() {
        let mut view = view(false);
        let mut time = HeadlessTime::new(Frame::new(100.0), 60.0);
        let mut seen = view.register();

        view.attach(time.current_frame());
        time.advance(15.0);

        assert!(view.tick(time.current_frame()));
        assert!(view.needs_redraw(&mut seen));
        assert!(!view.needs_redraw(&mut seen));
        assert_approx_eq!(view.get_frame().move_degree, 90.0, 1e-3);

        view.detach();
        time.advance(15.0);
        assert!(!view.tick(time.current_frame()));
        assert_approx_eq!(view.get_frame().move_degree, 90.0, 1e-3);
    }

    #[test]
    fn boundary_ticks_are_skipped_when_asked() {
        let mut skipping = view(true);
        let mut drawing = view(false);

        skipping.attach(Frame::new(0.0));
        drawing.attach(Frame::new(0.0));

        assert!(!skipping.tick(Frame::new(0.0)));
        assert!(!skipping.tick(Frame::new(30.0)));
        assert!(skipping.tick(Frame::new(31.0)));
        assert!(drawing.tick(Frame::new(30.0)));
    }

    #[test]
    fn the_half_turn_tick_keeps_the_previous_picture() {
        let mut view = view(true);
        let mut seen = view.register();
        view.attach(Frame::new(0.0));

        assert!(view.tick(Frame::new(29.0)));
        assert!(view.needs_redraw(&mut seen));
        let before = *view.get_frame();

        assert!(!view.tick(Frame::new(30.0)));
        assert!(!view.needs_redraw(&mut seen));
        assert_eq!(*view.get_frame(), before);
        assert!(!view.get_frame().is_odd_rotation());

        assert!(!view.tick(Frame::new(90.0)));
        assert!(view.tick(Frame::new(91.0)));
        assert!(view.needs_redraw(&mut seen));
    }

    #[test]
    fn draws_the_current_frame() {
        let mut view = view(false);
        view.attach(Frame::new(0.0));
        view.tick(Frame::new(45.0));

        let mut canvas = RecordingCanvas::default();
        view.draw(&mut canvas);

        let palette = view.get_spinner().get_palette();
        assert_eq!(canvas.calls.len(), 2);
        assert_eq!(canvas.calls[1].color, palette.secondary);
        assert!(view.get_frame().is_odd_rotation());
    }
}
