pub mod answer;
pub mod coords;
pub mod drag;
pub mod point;
pub mod problem;
pub mod render;
pub mod widget;

pub use answer::{AnswerForm, Feedback, Verdict};
pub use coords::{CoordinateMapper, MathPos, Pixel};
pub use drag::{DragController, DragUpdate};
pub use point::{GridPoint, Slope};
pub use render::Scene;
pub use widget::LineWidget;

/// Smallest coordinate a point may take on either axis.
pub const GRID_MIN: i32 = -10;
/// Largest coordinate a point may take on either axis.
pub const GRID_MAX: i32 = 10;
