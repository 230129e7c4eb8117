use crate::orbit::{compute_frame, FrameOutput, OrbitConfig};

pub mod canvas;
pub mod palette;
pub mod settings;

pub use canvas::{Canvas, ImageCanvas};
pub use palette::{Color, Palette};
pub use settings::SpinnerSettings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

pub struct Spinner {
    config: OrbitConfig,
    palette: Palette,
}

impl Spinner {
    pub fn new(config: OrbitConfig, palette: Palette) -> Self {
        Spinner { config, palette }
    }

    pub fn get_config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn get_palette(&self) -> &Palette {
        &self.palette
    }

    /// Space the host layout has to reserve for the spinner.
    pub fn measure(&self) -> Size {
        Size {
            width: self.config.move_distance() * 2.0,
            height: self.config.circle_radius() * 2.0,
        }
    }

    pub fn frame(&self, progress_degrees: f32) -> FrameOutput {
        compute_frame(progress_degrees, &self.config)
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, frame: &FrameOutput) {
        for circle in frame.draw_order().iter().copied() {
            let (center, radius) = frame.circle(circle);
            canvas.draw_filled_circle(center.x, center.y, radius, self.palette.color(circle));
        }
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C, progress_degrees: f32) -> FrameOutput {
        let frame = self.frame(progress_degrees);
        self.draw(canvas, &frame);
        frame
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Spinner::new(OrbitConfig::default(), Palette::default())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    pub struct DrawCall {
        pub center_x: f32,
        pub center_y: f32,
        pub radius: f32,
        pub color: Color,
    }

    #[derive(Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_filled_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
            self.calls.push(DrawCall {
                center_x,
                center_y,
                radius,
                color,
            });
        }
    }

    fn spinner() -> Spinner {
        Spinner::new(OrbitConfig::new(20.0, 40.0, 5.0).unwrap(), Palette::default())
    }

    #[test]
    fn measures_two_move_distances_by_one_diameter() {
        assert_eq!(
            Spinner::default().measure(),
            Size {
                width: 72.0,
                height: 44.0
            }
        );
    }

    #[test]
    fn first_half_paints_the_primary_circle_on_top() {
        let spinner = spinner();
        let mut canvas = RecordingCanvas::default();
        spinner.render(&mut canvas, 45.0);

        assert_eq!(canvas.calls.len(), 2);
        assert_eq!(canvas.calls[0].color, spinner.get_palette().secondary);
        assert_eq!(canvas.calls[1].color, spinner.get_palette().primary);
    }

    #[test]
    fn second_half_paints_the_secondary_circle_on_top() {
        let spinner = spinner();
        let mut canvas = RecordingCanvas::default();
        let frame = spinner.render(&mut canvas, 270.0);

        assert_eq!(canvas.calls[0].color, spinner.get_palette().primary);
        assert_eq!(canvas.calls[1].color, spinner.get_palette().secondary);
        assert_approx_eq!(canvas.calls[0].center_x, frame.position_a);
        assert_approx_eq!(canvas.calls[1].radius, frame.radius_b);
    }

    #[test]
    fn circles_share_the_middle_line() {
        let spinner = spinner();
        let mut canvas = RecordingCanvas::default();
        spinner.render(&mut canvas, 10.0);

        for call in &canvas.calls {
            assert_approx_eq!(call.center_y, 20.0);
        }
    }

    #[test]
    fn overlap_shows_the_front_color_on_an_image() {
        let spinner = spinner();
        let size = spinner.measure();
        let mut canvas = ImageCanvas::for_size(size.width, size.height, 1.0);
        spinner.render(&mut canvas, 90.0);

        let expected = spinner.get_palette().primary.to_rgba8();
        assert_eq!(canvas.pixel(40, 20), expected);
    }
}
