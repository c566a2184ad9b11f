//! Draw list for one frame of the graph.
//!
//! A [`Scene`] is rebuilt from scratch for every frame and the canvas is
//! cleared before it is painted, so painting the same point twice gives the
//! same picture.

use crate::coords::{CoordinateMapper, MathPos, Pixel};
use crate::{GridPoint, GRID_MAX, GRID_MIN};

pub const GRID_COLOR: &str = "#ddd";
pub const AXIS_COLOR: &str = "#333";
pub const ORIGIN_COLOR: &str = "black";
pub const POINT_COLOR: &str = "blue";
pub const LINE_COLOR: &str = "red";

pub const ORIGIN_RADIUS: f64 = 5.0;
pub const POINT_RADIUS: f64 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Segment {
        from: Pixel,
        to: Pixel,
        color: &'static str,
    },
    Disc {
        center: Pixel,
        radius: f64,
        color: &'static str,
    },
}

/// Shapes in paint order, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub size: f64,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn build(mapper: &CoordinateMapper, point: GridPoint) -> Self {
        let size = mapper.size();
        let mut shapes = Vec::new();

        for i in GRID_MIN..=GRID_MAX {
            let at = mapper.to_screen(MathPos::new(f64::from(i), f64::from(i)));
            shapes.push(Shape::Segment {
                from: Pixel::new(at.x, 0.0),
                to: Pixel::new(at.x, size),
                color: GRID_COLOR,
            });
            shapes.push(Shape::Segment {
                from: Pixel::new(0.0, at.y),
                to: Pixel::new(size, at.y),
                color: GRID_COLOR,
            });
        }

        let origin = mapper.to_screen(MathPos::default());
        shapes.push(Shape::Segment {
            from: Pixel::new(0.0, origin.y),
            to: Pixel::new(size, origin.y),
            color: AXIS_COLOR,
        });
        shapes.push(Shape::Segment {
            from: Pixel::new(origin.x, 0.0),
            to: Pixel::new(origin.x, size),
            color: AXIS_COLOR,
        });

        let target = mapper.to_screen(point.into());
        shapes.push(Shape::Disc {
            center: origin,
            radius: ORIGIN_RADIUS,
            color: ORIGIN_COLOR,
        });
        shapes.push(Shape::Disc {
            center: target,
            radius: POINT_RADIUS,
            color: POINT_COLOR,
        });
        shapes.push(Shape::Segment {
            from: origin,
            to: target,
            color: LINE_COLOR,
        });

        Self { size, shapes }
    }
}
