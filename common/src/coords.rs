//! Conversion between the learner's math plane and canvas pixels.

use crate::GridPoint;

/// A position on the canvas, in CSS pixels from the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Pixel) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::ops::Sub for Pixel {
    type Output = Pixel;

    fn sub(self, rhs: Pixel) -> Pixel {
        Pixel::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A continuous position in math coordinates (y grows upward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MathPos {
    pub x: f64,
    pub y: f64,
}

impl MathPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<GridPoint> for MathPos {
    fn from(point: GridPoint) -> Self {
        Self::new(f64::from(point.x()), f64::from(point.y()))
    }
}

/// Linear map between a square canvas and the math plane centered on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    size: f64,
    scale: f64,
}

impl CoordinateMapper {
    pub const CANVAS_SIZE: f64 = 400.0;
    pub const PIXELS_PER_UNIT: f64 = 20.0;

    pub fn new(size: f64, scale: f64) -> Self {
        Self { size, scale }
    }

    /// Edge length of the canvas in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn to_screen(&self, pos: MathPos) -> Pixel {
        let half = self.size / 2.0;
        Pixel::new(half + pos.x * self.scale, half - pos.y * self.scale)
    }

    pub fn to_math(&self, px: Pixel) -> MathPos {
        let half = self.size / 2.0;
        MathPos::new((px.x - half) / self.scale, (half - px.y) / self.scale)
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(Self::CANVAS_SIZE, Self::PIXELS_PER_UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GRID_MAX, GRID_MIN};

    #[test]
    fn origin_is_canvas_center() {
        let mapper = CoordinateMapper::default();
        assert_eq!(mapper.to_screen(MathPos::new(0.0, 0.0)), Pixel::new(200.0, 200.0));
        assert_eq!(mapper.to_math(Pixel::new(200.0, 200.0)), MathPos::new(0.0, 0.0));
    }

    #[test]
    fn screen_y_points_down() {
        let mapper = CoordinateMapper::default();
        assert_eq!(mapper.to_screen(MathPos::new(4.0, 3.0)), Pixel::new(280.0, 140.0));
        assert_eq!(mapper.to_screen(MathPos::new(-10.0, -10.0)), Pixel::new(0.0, 400.0));
    }

    #[test]
    fn round_trips_every_grid_point() {
        let mapper = CoordinateMapper::default();
        for x in GRID_MIN..=GRID_MAX {
            for y in GRID_MIN..=GRID_MAX {
                let Some(point) = GridPoint::new(x, y) else {
                    continue;
                };
                let back = mapper.to_math(mapper.to_screen(point.into()));
                assert!((back.x - f64::from(x)).abs() < 1e-9, "x for {point:?}");
                assert!((back.y - f64::from(y)).abs() < 1e-9, "y for {point:?}");
            }
        }
    }

    #[test]
    fn round_trips_fractional_positions() {
        let mapper = CoordinateMapper::new(300.0, 13.0);
        let pos = MathPos::new(-2.37, 8.125);
        let back = mapper.to_math(mapper.to_screen(pos));
        assert!((back.x - pos.x).abs() < 1e-9);
        assert!((back.y - pos.y).abs() < 1e-9);
    }
}
