use rand::Rng;

use crate::answer::{AnswerForm, Feedback};
use crate::coords::{CoordinateMapper, Pixel};
use crate::drag::{DragController, DragUpdate};
use crate::problem;
use crate::render::Scene;
use crate::{GridPoint, Slope};

/// All state behind one problem: the current point, the drag in progress,
/// the pixel mapping and the learner's answer form. Event handlers take it
/// by `&mut`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineWidget {
    point: GridPoint,
    drag: DragController,
    mapper: CoordinateMapper,
    form: AnswerForm,
}

impl LineWidget {
    pub fn new(point: GridPoint, mapper: CoordinateMapper) -> Self {
        Self {
            point,
            drag: DragController::default(),
            mapper,
            form: AnswerForm::default(),
        }
    }

    pub fn point(&self) -> GridPoint {
        self.point
    }

    pub fn slope(&self) -> Slope {
        self.point.slope()
    }

    pub fn form(&self) -> &AnswerForm {
        &self.form
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn pointer_down(&mut self, pointer: Pixel) -> bool {
        self.drag.press(pointer, self.point, &self.mapper)
    }

    pub fn pointer_move(&mut self, pointer: Pixel) -> DragUpdate {
        let update = self.drag.drag(pointer, &self.mapper);
        if let DragUpdate::Moved(point) = update {
            self.point = point;
        }
        update
    }

    pub fn pointer_up(&mut self) {
        self.drag.release();
    }

    pub fn pointer_leave(&mut self) {
        self.drag.release();
    }

    pub fn set_equation(&mut self, text: impl Into<String>) {
        self.form.set_equation(text);
    }

    pub fn set_intercept(&mut self, text: impl Into<String>) {
        self.form.set_intercept(text);
    }

    /// Checks the typed answer against the current point.
    pub fn check(&mut self) -> &Feedback {
        self.form.submit(self.point)
    }

    /// Moves to a fresh random point, drops any drag in progress and empties
    /// the answer form.
    pub fn new_problem<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GridPoint {
        self.point = problem::random_point(rng);
        self.drag.release();
        self.form.clear();
        self.point
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.mapper, self.point)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn point(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y).unwrap()
    }

    fn answer(widget: &mut LineWidget, equation: &str, intercept: &str) -> bool {
        widget.set_equation(equation);
        widget.set_intercept(intercept);
        widget.check().is_correct()
    }

    #[test]
    fn starts_at_four_three() {
        let widget = LineWidget::default();
        assert_eq!(widget.point(), point(4, 3));
        assert_eq!(widget.slope().value(), 0.75);
        assert!(!widget.is_dragging());
        assert_eq!(widget.form(), &AnswerForm::default());
    }

    #[test]
    fn drag_moves_point_until_release() {
        let mut widget = LineWidget::default();
        assert!(widget.pointer_down(Pixel::new(282.0, 139.0)));
        assert_eq!(
            widget.pointer_move(Pixel::new(122.0, 79.0)),
            DragUpdate::Moved(point(-4, 6))
        );
        assert_eq!(widget.point(), point(-4, 6));

        widget.pointer_up();
        assert_eq!(widget.pointer_move(Pixel::new(382.0, 379.0)), DragUpdate::Idle);
        assert_eq!(widget.point(), point(-4, 6));
    }

    #[test]
    fn drag_to_origin_keeps_previous_point() {
        let mut widget = LineWidget::default();
        assert!(widget.pointer_down(Pixel::new(280.0, 140.0)));
        widget.pointer_move(Pixel::new(220.0, 180.0));
        assert_eq!(widget.point(), point(1, 1));

        assert_eq!(widget.pointer_move(Pixel::new(201.0, 199.0)), DragUpdate::Rejected);
        assert_eq!(widget.point(), point(1, 1));
        assert!(widget.is_dragging());
    }

    #[test]
    fn leaving_the_canvas_ends_the_drag() {
        let mut widget = LineWidget::default();
        widget.pointer_down(Pixel::new(280.0, 140.0));
        widget.pointer_leave();
        assert!(!widget.is_dragging());
    }

    #[test]
    fn missed_press_does_not_drag() {
        let mut widget = LineWidget::default();
        assert!(!widget.pointer_down(Pixel::new(10.0, 10.0)));
        assert_eq!(widget.pointer_move(Pixel::new(100.0, 100.0)), DragUpdate::Idle);
        assert_eq!(widget.point(), GridPoint::START);
    }

    #[test]
    fn check_uses_current_point() {
        let mut widget = LineWidget::default();
        assert!(answer(&mut widget, "y = 0.75x + 0", "0"));

        widget.pointer_down(Pixel::new(280.0, 140.0));
        widget.pointer_move(Pixel::new(120.0, 80.0));
        assert!(answer(&mut widget, "y=-1.5x", "0"));
        assert!(!answer(&mut widget, "y = 0.75x + 0", "0"));
        assert_eq!(widget.form().feedback().map(Feedback::is_correct), Some(false));
    }

    #[test]
    fn new_problem_clears_fields_and_feedback() {
        let mut widget = LineWidget::default();
        assert!(answer(&mut widget, "y = 0.75x", "0"));
        assert!(widget.form().feedback().is_some());

        widget.new_problem(&mut StdRng::seed_from_u64(3));
        assert_eq!(widget.form().equation(), "");
        assert_eq!(widget.form().intercept(), "");
        assert_eq!(widget.form().feedback(), None);
    }

    #[test]
    fn new_problem_clears_a_wrong_answer_too() {
        let mut widget = LineWidget::default();
        assert!(!answer(&mut widget, "y = 2x + 5", "5"));

        widget.new_problem(&mut StdRng::seed_from_u64(5));
        assert_eq!(widget.form(), &AnswerForm::default());
    }

    #[test]
    fn new_problem_replaces_point_and_cancels_drag() {
        let mut widget = LineWidget::default();
        widget.pointer_down(Pixel::new(280.0, 140.0));
        let mut rng = StdRng::seed_from_u64(11);
        let next = widget.new_problem(&mut rng);
        assert_eq!(widget.point(), next);
        assert_ne!((next.x(), next.y()), (0, 0));
        assert!(!widget.is_dragging());
    }

    #[test]
    fn scene_tracks_point() {
        let widget = LineWidget::new(point(2, -5), CoordinateMapper::default());
        assert_eq!(
            widget.scene(),
            Scene::build(&CoordinateMapper::default(), point(2, -5))
        );
    }
}
