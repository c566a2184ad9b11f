//! Checking the learner's typed equation and intercept.
//!
//! Answers are compared numerically, not textually: the equation is parsed
//! into a slope and an intercept and both are compared against the line
//! through the origin and the current point.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, verify},
    sequence::{pair, preceded, tuple},
    IResult,
};
use thiserror::Error;

use crate::GridPoint;

/// Absolute tolerance used when comparing parsed numbers to the answer.
pub const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum EquationError {
    #[error("answer is empty")]
    Empty,
    #[error("could not read `{0}` as an equation of the form y = mx + b")]
    Malformed(String),
}

/// Slope and intercept read from a typed equation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEquation {
    pub slope: f64,
    pub intercept: f64,
}

impl LineEquation {
    /// Parses `y = mx + b` and its variations. All whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, EquationError> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(EquationError::Empty);
        }
        let parsed = all_consuming(equation)(compact.as_str())
            .map(|(_, eq)| eq)
            .map_err(|_| EquationError::Malformed(compact.clone()));
        parsed
    }
}

/// Parses a lone number such as `0`, `-0.0` or `0/4`. Whitespace around it
/// is ignored.
pub fn parse_number(text: &str) -> Result<f64, EquationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EquationError::Empty);
    }
    all_consuming(signed_number)(trimmed)
        .map(|(_, value)| value)
        .map_err(|_| EquationError::Malformed(trimmed.to_string()))
}

fn equation(input: &str) -> IResult<&str, LineEquation> {
    preceded(
        pair(tag_no_case("y"), char('=')),
        alt((slope_intercept, constant)),
    )(input)
}

/// `mx`, `mx + b` or `mx - b`.
fn slope_intercept(input: &str) -> IResult<&str, LineEquation> {
    map(
        pair(slope_term, opt(pair(sign, number))),
        |(slope, intercept)| LineEquation {
            slope,
            intercept: intercept.map_or(0.0, |(s, b)| s * b),
        },
    )(input)
}

/// A horizontal line, `y = b`.
fn constant(input: &str) -> IResult<&str, LineEquation> {
    map(signed_number, |intercept| LineEquation {
        slope: 0.0,
        intercept,
    })(input)
}

/// `x`, `-x`, `0.75x`, `-3/4x`.
fn slope_term(input: &str) -> IResult<&str, f64> {
    map(
        tuple((opt(sign), opt(number), tag_no_case("x"))),
        |(s, coefficient, _)| s.unwrap_or(1.0) * coefficient.unwrap_or(1.0),
    )(input)
}

fn signed_number(input: &str) -> IResult<&str, f64> {
    map(pair(opt(sign), number), |(s, n)| s.unwrap_or(1.0) * n)(input)
}

fn sign(input: &str) -> IResult<&str, f64> {
    map(one_of("+-"), |c| if c == '-' { -1.0 } else { 1.0 })(input)
}

/// A decimal, optionally over a non-zero decimal denominator.
fn number(input: &str) -> IResult<&str, f64> {
    map(
        pair(decimal, opt(preceded(char('/'), verify(decimal, |d: &f64| *d != 0.0)))),
        |(n, d)| n / d.unwrap_or(1.0),
    )(input)
}

/// `3`, `3.`, `3.25` or `.25`.
fn decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        str::parse::<f64>,
    )(input)
}

/// Whether the learner's answer was right; doubles as the CSS class name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn class(&self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Incorrect => "incorrect",
        }
    }
}

/// The message shown under the form after a check.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub lines: Vec<String>,
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

/// Judges an answer for the line through the origin and `point`.
///
/// Unreadable input is never an error here, only a wrong answer. A blank
/// intercept counts as 0.
pub fn check(point: GridPoint, equation: &str, intercept: &str) -> Feedback {
    let slope = point.slope();
    let expected = slope.value();

    let equation_ok = LineEquation::parse(equation)
        .map(|eq| (eq.slope - expected).abs() < TOLERANCE && eq.intercept.abs() < TOLERANCE)
        .unwrap_or(false);
    let intercept_ok = match parse_number(intercept) {
        Ok(b) => b.abs() < TOLERANCE,
        Err(EquationError::Empty) => true,
        Err(EquationError::Malformed(_)) => false,
    };

    let (x, y) = (point.x(), point.y());
    if equation_ok && intercept_ok {
        Feedback {
            verdict: Verdict::Correct,
            lines: vec![
                "Correct!".to_string(),
                format!("The slope m = (y2-y1)/(x2-x1) = ({y}-0)/({x}-0) = {slope}."),
                "Since the line passes through the origin, b = 0.".to_string(),
                format!("The equation is y = {slope}x + 0."),
                "Try a new problem!".to_string(),
            ],
        }
    } else {
        Feedback {
            verdict: Verdict::Incorrect,
            lines: vec![
                "Try again!".to_string(),
                format!("The line goes through (0,0) and ({x},{y})."),
                format!("Slope m = ({y}-0)/({x}-0) = {slope}."),
                "b = 0 since it crosses the y-axis at the origin.".to_string(),
            ],
        }
    }
}

/// What the learner has typed, plus the feedback from the last check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnswerForm {
    equation: String,
    intercept: String,
    feedback: Option<Feedback>,
}

impl AnswerForm {
    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn intercept(&self) -> &str {
        &self.intercept
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn set_equation(&mut self, text: impl Into<String>) {
        self.equation = text.into();
    }

    pub fn set_intercept(&mut self, text: impl Into<String>) {
        self.intercept = text.into();
    }

    /// Checks the typed answer against `point` and keeps the feedback.
    pub fn submit(&mut self, point: GridPoint) -> &Feedback {
        let feedback = check(point, &self.equation, &self.intercept);
        self.feedback.insert(feedback)
    }

    /// Empties both fields and the feedback.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
