use crate::{GRID_MAX, GRID_MIN};

/// A lattice point on the learner's grid.
///
/// Both axes stay within [`GRID_MIN`, `GRID_MAX`] and the point is never the
/// origin; [`GridPoint::new`] is the only checked constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    pub const START: GridPoint = GridPoint { x: 4, y: 3 };

    /// Returns `None` for the origin or anything off the grid.
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let on_grid = (GRID_MIN..=GRID_MAX).contains(&x) && (GRID_MIN..=GRID_MAX).contains(&y);
        if on_grid && (x, y) != (0, 0) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Exact slope of the line through the origin and this point.
    ///
    /// A point on the y-axis has no defined ratio; the widget treats its
    /// slope as 0.
    pub fn slope(&self) -> Slope {
        if self.x == 0 {
            Slope::ZERO
        } else {
            Slope::ratio(self.y, self.x)
        }
    }
}

impl Default for GridPoint {
    fn default() -> Self {
        Self::START
    }
}

/// A reduced fraction `num / den` with `den > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slope {
    num: i32,
    den: i32,
}

impl Slope {
    pub const ZERO: Slope = Slope { num: 0, den: 1 };

    fn ratio(num: i32, den: i32) -> Self {
        let g = gcd(num.abs(), den.abs()).max(1);
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    pub fn numerator(&self) -> i32 {
        self.num
    }

    pub fn denominator(&self) -> i32 {
        self.den
    }

    pub fn value(&self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Whether the value has a finite decimal expansion.
    fn terminates(&self) -> bool {
        let mut den = self.den;
        for factor in [2, 5] {
            while den % factor == 0 {
                den /= factor;
            }
        }
        den == 1
    }
}

impl std::fmt::Display for Slope {
    /// Integers print bare, terminating decimals print as decimals and
    /// everything else prints as `n/d`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else if self.terminates() {
            write!(f, "{}", self.value())
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

fn gcd(a: i32, b: i32) -> i32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
