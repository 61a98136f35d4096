//! Screen metrics to table geometry
//!
//! The table uses meters with the origin at the center and y pointing up.
//! The screen uses pixels with the origin at the top-left and y pointing down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::METERS_PER_INCH;

/// Physical description of the surface the table is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
    /// Horizontal pixel density (dots per inch)
    pub xdpi: f32,
    /// Vertical pixel density (dots per inch)
    pub ydpi: f32,
}

impl Viewport {
    pub fn new(width_px: u32, height_px: u32, xdpi: f32, ydpi: f32) -> Self {
        Self {
            width_px,
            height_px,
            xdpi,
            ydpi,
        }
    }

    /// Pixels per meter on each axis
    #[inline]
    pub fn meters_to_pixels(&self) -> Vec2 {
        Vec2::new(self.xdpi, self.ydpi) / METERS_PER_INCH
    }

    /// Screen size in pixels
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width_px as f32, self.height_px as f32)
    }

    /// Largest |x|, |y| a ball center can reach while the ball stays on screen
    pub fn bounds(&self, diameter: f32) -> Vec2 {
        (self.size() / self.meters_to_pixels() - Vec2::splat(diameter)) * 0.5
    }

    /// Ball sprite size in whole pixels (rounded to nearest)
    pub fn sprite_size(&self, diameter: f32) -> (u32, u32) {
        let px = diameter * self.meters_to_pixels() + Vec2::splat(0.5);
        (px.x as u32, px.y as u32)
    }

    /// Pixel position of the sprite's top-left corner for a ball at the table origin
    pub fn origin(&self, diameter: f32) -> Vec2 {
        let (w, h) = self.sprite_size(diameter);
        (self.size() - Vec2::new(w as f32, h as f32)) * 0.5
    }

    /// Map a table position to the sprite's top-left pixel
    pub fn to_pixels(&self, pos: Vec2, diameter: f32) -> Vec2 {
        let origin = self.origin(diameter);
        let scale = self.meters_to_pixels();
        Vec2::new(origin.x + pos.x * scale.x, origin.y - pos.y * scale.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 254 dpi is exactly 10000 px per meter
    fn viewport() -> Viewport {
        Viewport::new(1080, 1920, 254.0, 254.0)
    }

    #[test]
    fn test_sprite_size() {
        // 0.008 m * 10000 px/m = 80 px
        assert_eq!(viewport().sprite_size(0.008), (80, 80));
    }

    #[test]
    fn test_origin_centers_sprite() {
        let origin = viewport().origin(0.008);
        assert!((origin.x - 500.0).abs() < 1e-3);
        assert!((origin.y - 920.0).abs() < 1e-3);
    }

    #[test]
    fn test_to_pixels_flips_y() {
        let vp = viewport();
        let up = vp.to_pixels(Vec2::new(0.0, 0.01), 0.008);
        let down = vp.to_pixels(Vec2::new(0.0, -0.01), 0.008);
        assert!(up.y < down.y);
        let right = vp.to_pixels(Vec2::new(0.01, 0.0), 0.008);
        assert!((right.x - 600.0).abs() < 1e-2);
    }

    #[test]
    fn test_bounds_keep_ball_on_screen() {
        let vp = viewport();
        let bounds = vp.bounds(0.008);
        let corner = vp.to_pixels(bounds, 0.008);
        // Right edge of the sprite touches the screen edge
        assert!((corner.x + 80.0 - 1080.0).abs() < 0.5);
        // Top edge of the sprite touches the screen top
        assert!(corner.y.abs() < 0.5);
    }
}
