//! Pointer drag state machine for the learner's point.
//!
//! ```text
//! Idle     -> Dragging   (pointer down within HIT_RADIUS of the point)
//! Dragging -> Dragging   (pointer move; snaps, clamps, refuses the origin)
//! Dragging -> Idle       (pointer up or pointer leaves the canvas)
//! ```

use crate::coords::{CoordinateMapper, Pixel};
use crate::{GridPoint, GRID_MAX, GRID_MIN};

/// Pointer-down must land strictly closer than this to grab the point.
pub const HIT_RADIUS: f64 = 12.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position minus the point's center at grab time.
        offset: Pixel,
    },
}

/// What a pointer move did to the point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragUpdate {
    /// No drag in progress.
    Idle,
    /// The snapped target was the origin; the point stays where it was.
    Rejected,
    Moved(GridPoint),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Starts a drag if `pointer` hits `point`. Returns whether it did.
    pub fn press(&mut self, pointer: Pixel, point: GridPoint, mapper: &CoordinateMapper) -> bool {
        let center = mapper.to_screen(point.into());
        if pointer.distance(center) < HIT_RADIUS {
            self.state = DragState::Dragging {
                offset: pointer - center,
            };
            true
        } else {
            false
        }
    }

    /// Computes where the point should go for a pointer move.
    pub fn drag(&self, pointer: Pixel, mapper: &CoordinateMapper) -> DragUpdate {
        let DragState::Dragging { offset } = self.state else {
            return DragUpdate::Idle;
        };
        let target = mapper.to_math(pointer - offset);
        match GridPoint::new(snap(target.x), snap(target.y)) {
            Some(point) => DragUpdate::Moved(point),
            None => DragUpdate::Rejected,
        }
    }

    /// Ends any drag; used for both pointer-up and pointer-leave.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Rounds to the nearest integer (halves toward +∞) and clamps to the grid.
fn snap(value: f64) -> i32 {
    (value + 0.5)
        .floor()
        .clamp(f64::from(GRID_MIN), f64::from(GRID_MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::MathPos;

    fn grab(point: GridPoint, nudge: Pixel) -> (DragController, CoordinateMapper) {
        let mapper = CoordinateMapper::default();
        let mut drag = DragController::default();
        let center = mapper.to_screen(point.into());
        assert!(drag.press(Pixel::new(center.x + nudge.x, center.y + nudge.y), point, &mapper));
        (drag, mapper)
    }

    #[test]
    fn press_outside_hit_radius_stays_idle() {
        let mapper = CoordinateMapper::default();
        let mut drag = DragController::default();
        // (4, 3) sits at (280, 140); 12px away is already outside.
        assert!(!drag.press(Pixel::new(292.0, 140.0), GridPoint::START, &mapper));
        assert_eq!(drag.state(), DragState::Idle);
        assert!(drag.press(Pixel::new(291.0, 140.0), GridPoint::START, &mapper));
        assert!(drag.is_dragging());
    }

    #[test]
    fn press_captures_offset() {
        let (drag, _) = grab(GridPoint::START, Pixel::new(3.0, -4.0));
        assert_eq!(
            drag.state(),
            DragState::Dragging {
                offset: Pixel::new(3.0, -4.0)
            }
        );
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let drag = DragController::default();
        let update = drag.drag(Pixel::new(10.0, 10.0), &CoordinateMapper::default());
        assert_eq!(update, DragUpdate::Idle);
    }

    #[test]
    fn move_subtracts_offset_and_snaps() {
        let (drag, mapper) = grab(GridPoint::START, Pixel::new(5.0, 5.0));
        // Pointer at math (-2.3, 6.6) plus the grab offset.
        let at = mapper.to_screen(MathPos::new(-2.3, 6.6));
        let update = drag.drag(Pixel::new(at.x + 5.0, at.y + 5.0), &mapper);
        assert_eq!(update, DragUpdate::Moved(GridPoint::new(-2, 7).unwrap()));
    }

    #[test]
    fn move_clamps_to_grid() {
        let (drag, _) = grab(GridPoint::START, Pixel::default());
        let mapper = CoordinateMapper::default();
        let update = drag.drag(Pixel::new(-500.0, -900.0), &mapper);
        assert_eq!(update, DragUpdate::Moved(GridPoint::new(-10, 10).unwrap()));
    }

    #[test]
    fn move_onto_origin_is_rejected() {
        let (drag, mapper) = grab(GridPoint::START, Pixel::default());
        assert_eq!(drag.drag(Pixel::new(203.0, 198.0), &mapper), DragUpdate::Rejected);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(snap(2.5), 3);
        assert_eq!(snap(-2.5), -2);
        assert_eq!(snap(-0.49), 0);
        assert_eq!(snap(10.4), 10);
        assert_eq!(snap(-37.0), -10);
    }

    #[test]
    fn release_returns_to_idle() {
        let (mut drag, mapper) = grab(GridPoint::START, Pixel::default());
        drag.release();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.drag(Pixel::new(0.0, 0.0), &mapper), DragUpdate::Idle);
    }
}
