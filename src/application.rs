use anyhow::Error;
use std::thread;
use std::time::Duration;

use crate::animation::Frame;
use crate::capture::CaptureAction;
use crate::scene::{Canvas, Color, ImageCanvas, SpinnerSettings};
use crate::world::{HeadlessTime, ProgressDriver, SpinnerView, Time};

/// Renders `frames` evenly spaced ticks of one animation cycle and hands each
/// image to `action`.
pub fn capture_cycle<A: CaptureAction<u8>>(
    settings: &SpinnerSettings,
    frames: u64,
    scale: f32,
    action: &mut A,
) -> Result<(), Error> {
    if frames == 0 {
        bail!("capturing needs at least one frame");
    }
    if !scale.is_finite() || scale <= 0.0 {
        bail!("scale must be positive, got {}", scale);
    }
    settings.validate()?;

    let fps = frames as f32 / settings.cycle_duration().as_secs_f32();
    let mut driver = ProgressDriver::new(settings.cycle_duration(), settings.easing, fps)?;
    let mut time = HeadlessTime::new(Frame::new(0.0), fps);

    let spinner = settings.spinner();
    let size = spinner.measure();

    driver.start(time.current_frame());

    for frame in 0..frames {
        let state = driver
            .sample(time.current_frame())
            .ok_or(anyhow!("the capture driver stopped unexpectedly"))?;

        let mut canvas = ImageCanvas::for_size(size.width, size.height, scale);
        let output = spinner.render(&mut canvas, state.progress_degrees);

        log::debug!(
            "frame {} ({:?}) at {:.2} degrees: {:?}",
            frame,
            time.current_frame().duration(fps),
            state.progress_degrees,
            output
        );

        action.exec(canvas.as_raw(), frame)?;
        time.advance(1.0);
    }

    driver.stop();

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveReport {
    pub ticks: u64,
    pub redraws: u64,
}

/// Drives a spinner from the wall clock for `duration`, painting into an
/// offscreen canvas whenever the view reports a change.
pub fn run_live(
    settings: &SpinnerSettings,
    duration: Duration,
    scale: f32,
    fps: f32,
) -> Result<(LiveReport, ImageCanvas), Error> {
    let mut view = SpinnerView::from_settings(settings, fps)?;
    let size = view.get_spinner().measure();
    let mut canvas = ImageCanvas::for_size(size.width, size.height, scale);

    let time = Time::new(fps);
    let frame_time = Duration::from_secs_f32(1.0 / time.fps());
    let mut fps_counter = fps_counter::FPSCounter::new();
    let mut seen = view.register();
    let mut report = LiveReport {
        ticks: 0,
        redraws: 0,
    };

    view.attach(time.current_frame());

    while time.start_time().elapsed() < duration {
        report.ticks += 1;

        if view.tick(time.current_frame()) && view.needs_redraw(&mut seen) {
            canvas.clear(Color::transparent());
            view.draw(&mut canvas);
            report.redraws += 1;

            let current_fps = fps_counter.tick();
            if report.redraws % time.fps().max(1.0) as u64 == 0 {
                log::info!("FPS: {}", current_fps);
            }
        }

        thread::sleep(frame_time);
    }

    view.detach();

    Ok((report, canvas))
}

/// Paints a single frame, handy for previews outside of an animation loop.
pub fn render_still<C: Canvas>(settings: &SpinnerSettings, progress_degrees: f32, canvas: &mut C) {
    settings.spinner().render(canvas, progress_degrees);
}
