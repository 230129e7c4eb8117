use image::{Rgba, RgbaImage};

use crate::scene::palette::Color;

/// A surface the spinner can paint on. Coordinates are logical widget units.
pub trait Canvas {
    fn draw_filled_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color);
}

/// Software raster target backed by an RGBA8 image.
///
/// `scale` converts logical units to pixels, so a 72x44 spinner rendered at
/// scale 4 fills a 288x176 image.
pub struct ImageCanvas {
    image: RgbaImage,
    scale: f32,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32, scale: f32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            scale,
        }
    }

    pub fn for_size(width: f32, height: f32, scale: f32) -> Self {
        Self::new(
            (width * scale).ceil().max(1.0) as u32,
            (height * scale).ceil().max(1.0) as u32,
            scale,
        )
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn clear(&mut self, color: Color) {
        let pixel = Rgba(color.to_rgba8());
        for target in self.image.pixels_mut() {
            *target = pixel;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend(&mut self, x: u32, y: u32, color: &Color, coverage: f32) {
        let [r, g, b, a] = <[f32; 4]>::from(*color);
        let src_alpha = a * coverage;
        if src_alpha <= 0.0 {
            return;
        }

        let target = self.image.get_pixel_mut(x, y);
        let dst = target.0;
        let dst_alpha = dst[3] as f32 / 255.0;
        let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

        let channel = |src: f32, dst: u8| {
            let dst = dst as f32 / 255.0;
            let value = (src * src_alpha + dst * dst_alpha * (1.0 - src_alpha)) / out_alpha;
            (value.max(0.0).min(1.0) * 255.0).round() as u8
        };

        *target = Rgba([
            channel(r, dst[0]),
            channel(g, dst[1]),
            channel(b, dst[2]),
            (out_alpha.min(1.0) * 255.0).round() as u8,
        ]);
    }
}

impl Canvas for ImageCanvas {
    fn draw_filled_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        if radius <= 0.0 || self.image.width() == 0 || self.image.height() == 0 {
            return;
        }

        let cx = center_x * self.scale;
        let cy = center_y * self.scale;
        let r = radius * self.scale;

        let max_x = (self.image.width() - 1) as f32;
        let max_y = (self.image.height() - 1) as f32;
        let min_px = (cx - r - 1.0).floor().max(0.0);
        let max_px = (cx + r + 1.0).ceil().min(max_x);
        let min_py = (cy - r - 1.0).floor().max(0.0);
        let max_py = (cy + r + 1.0).ceil().min(max_y);
        if min_px > max_px || min_py > max_py {
            return;
        }

        for y in min_py as u32..=max_py as u32 {
            for x in min_px as u32..=max_px as u32 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let distance = (dx * dx + dy * dy).sqrt();
                let coverage = (r - distance + 0.5).max(0.0).min(1.0);
                if coverage > 0.0 {
                    self.blend(x, y, &color, coverage);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    #[test]
    fn fills_the_inside_and_leaves_the_outside() {
        let mut canvas = ImageCanvas::new(20, 20, 1.0);
        canvas.draw_filled_circle(10.0, 10.0, 5.0, Color::new(1.0, 0.0, 0.0, 1.0));

        assert_eq!(canvas.pixel(10, 10), RED);
        assert_eq!(canvas.pixel(10, 6), RED);
        assert_eq!(canvas.pixel(1, 1), [0, 0, 0, 0]);
        assert_eq!(canvas.pixel(10, 17), [0, 0, 0, 0]);
    }

    #[test]
    fn edges_are_partially_covered() {
        let mut canvas = ImageCanvas::new(20, 20, 1.0);
        canvas.draw_filled_circle(10.0, 10.0, 5.0, Color::new(1.0, 0.0, 0.0, 1.0));

        let edge = canvas.pixel(14, 12)[3];
        assert!(edge > 0 && edge < 255, "edge alpha {}", edge);
    }

    #[test]
    fn later_circles_cover_earlier_ones() {
        let mut canvas = ImageCanvas::new(20, 20, 1.0);
        canvas.draw_filled_circle(8.0, 10.0, 5.0, Color::new(1.0, 0.0, 0.0, 1.0));
        canvas.draw_filled_circle(12.0, 10.0, 5.0, Color::new(0.0, 0.0, 1.0, 1.0));

        assert_eq!(canvas.pixel(10, 10), BLUE);
        assert_eq!(canvas.pixel(4, 10), RED);
    }

    #[test]
    fn scale_maps_logical_units_to_pixels() {
        let mut canvas = ImageCanvas::for_size(10.0, 10.0, 2.0);
        canvas.draw_filled_circle(5.0, 5.0, 2.0, Color::new(0.0, 0.0, 1.0, 1.0));

        assert_eq!((canvas.width(), canvas.height()), (20, 20));
        assert_eq!(canvas.pixel(10, 12), BLUE);
        assert_eq!(canvas.pixel(10, 16), [0, 0, 0, 0]);
    }

    #[test]
    fn circles_off_the_canvas_are_clipped() {
        let mut canvas = ImageCanvas::new(10, 10, 1.0);
        canvas.clear(Color::new(1.0, 1.0, 1.0, 1.0));
        canvas.draw_filled_circle(-20.0, -20.0, 3.0, Color::new(1.0, 0.0, 0.0, 1.0));
        canvas.draw_filled_circle(0.0, 0.0, 3.0, Color::new(1.0, 0.0, 0.0, 1.0));

        assert_eq!(canvas.pixel(0, 0), RED);
        assert_eq!(canvas.pixel(9, 9), [255, 255, 255, 255]);
    }
}
