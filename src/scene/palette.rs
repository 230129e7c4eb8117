use nalgebra_glm::{vec4, Vec4};
use serde::{Deserialize, Serialize};

use crate::orbit::Circle;

/// Straight-alpha RGBA with components in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color(Vec4);

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color(vec4(r, g, b, a))
    }

    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
        Color::new(channel(16), channel(8), channel(0), channel(24))
    }

    pub fn transparent() -> Self {
        Color::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn rgba(&self) -> &Vec4 {
        &self.0
    }

    pub fn alpha(&self) -> f32 {
        self.0.w
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |value: f32| (value.max(0.0).min(1.0) * 255.0).round() as u8;
        [
            quantize(self.0.x),
            quantize(self.0.y),
            quantize(self.0.z),
            quantize(self.0.w),
        ]
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Color::new(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        [color.0.x, color.0.y, color.0.z, color.0.w]
    }
}

/// The two spinner colors: `primary` paints circle A, `secondary` circle B.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
}

impl Palette {
    pub fn new(primary: Color, secondary: Color) -> Self {
        Palette { primary, secondary }
    }

    pub fn color(&self, circle: Circle) -> Color {
        match circle {
            Circle::A => self.primary,
            Circle::B => self.secondary,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        // holo_red_light / holo_blue_bright
        Palette::new(Color::from_argb(0xffff_4444), Color::from_argb(0xff00_ddff))
    }
}
