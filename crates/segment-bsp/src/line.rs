//! Line segment representation for BSP trees.

use std::fmt;

use nalgebra::Point2;

use crate::compare::{approx_compare, Comparison};
use crate::{BspError, DegenerateKind};

/// A point in the plane.
pub type Point = Point2<f64>;

/// Which side of a splitting line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Point is above the line (greater y than the line predicts)
    Ahead,
    /// Point is below the line
    Behind,
    /// Point lies on the line (within epsilon tolerance)
    OnLine,
}

impl Side {
    /// Weight used when combining the sides of two endpoints.
    ///
    /// The weights are asymmetric so that every pair of sides sums to a
    /// distinct class: both ahead or ahead/on is positive, one ahead and one
    /// behind is exactly `-1`, anything with a behind and no ahead is `<= -2`.
    #[inline]
    pub fn weight(self) -> i8 {
        match self {
            Side::Ahead => 1,
            Side::Behind => -2,
            Side::OnLine => 0,
        }
    }
}

/// Slope-intercept form `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Equation {
    slope: f64,
    intercept: f64,
}

/// A directed line segment from `p1` to `p2`.
///
/// The slope-intercept form of the infinite line through both endpoints is
/// computed once at construction. Vertical segments have no such form.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p1: Point,
    p2: Point,
    equation: Option<Equation>,
}

impl Line {
    /// Creates a new segment between two points.
    pub fn new(p1: Point, p2: Point) -> Self {
        let dx = p2.x - p1.x;
        let equation = if dx == 0.0 {
            None
        } else {
            let slope = (p2.y - p1.y) / dx;
            Some(Equation {
                slope,
                intercept: p1.y - slope * p1.x,
            })
        };
        Self { p1, p2, equation }
    }

    /// Creates a segment from raw coordinates.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Returns the start point.
    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// Returns the end point.
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Returns true if both endpoints share the same x-coordinate exactly.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.equation.is_none()
    }

    /// Returns the slope, or `None` for a vertical segment.
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        self.equation.map(|e| e.slope)
    }

    /// Returns the y-intercept, or `None` for a vertical segment.
    #[inline]
    pub fn intercept(&self) -> Option<f64> {
        self.equation.map(|e| e.intercept)
    }

    /// Evaluates the line equation at `x`.
    ///
    /// Returns `None` for a vertical segment.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        self.equation.map(|e| e.slope * x + e.intercept)
    }

    /// Classifies which side of this line a point lies on.
    ///
    /// # Errors
    /// Returns [`DegenerateKind::VerticalSplitter`] if this line is vertical.
    pub fn classify_point(&self, point: Point, epsilon: f64) -> Result<Side, BspError> {
        let predicted = self
            .y_at(point.x)
            .ok_or(BspError::DegenerateGeometry(DegenerateKind::VerticalSplitter))?;

        let side = if approx_compare(Comparison::Greater, point.y, predicted, epsilon) {
            Side::Ahead
        } else if approx_compare(Comparison::Less, point.y, predicted, epsilon) {
            Side::Behind
        } else {
            Side::OnLine
        };
        Ok(side)
    }

    /// Computes where the infinite lines through `self` and `other` meet.
    ///
    /// # Errors
    /// - [`DegenerateKind::VerticalSplitter`] if `self` is vertical
    /// - [`DegenerateKind::VerticalSegment`] if `other` is vertical
    /// - [`DegenerateKind::Parallel`] if both have the same slope
    pub fn intersection(&self, other: &Line) -> Result<Point, BspError> {
        let this = self
            .equation
            .ok_or(BspError::DegenerateGeometry(DegenerateKind::VerticalSplitter))?;
        let that = other
            .equation
            .ok_or(BspError::DegenerateGeometry(DegenerateKind::VerticalSegment))?;

        let denom = this.slope - that.slope;
        if denom == 0.0 {
            return Err(BspError::DegenerateGeometry(DegenerateKind::Parallel));
        }

        let x = (that.intercept - this.intercept) / denom;
        let y = this.slope * x + this.intercept;
        Ok(Point::new(x, y))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line: {{{{{}, {}}}, {{{}, {}}}}}",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_EPSILON;

    #[test]
    fn derived_equation() {
        let line = Line::from_coords(2.0, 5.0, 4.0, 2.0);
        assert!(!line.is_vertical());
        assert_eq!(line.slope(), Some(-1.5));
        assert_eq!(line.intercept(), Some(8.0));
        assert_eq!(line.y_at(0.0), Some(8.0));
    }

    #[test]
    fn vertical_has_no_equation() {
        let line = Line::from_coords(3.0, 0.0, 3.0, 5.0);
        assert!(line.is_vertical());
        assert_eq!(line.slope(), None);
        assert_eq!(line.intercept(), None);
        assert_eq!(line.y_at(3.0), None);
    }

    #[test]
    fn nearly_vertical_is_not_vertical() {
        let line = Line::from_coords(3.0, 0.0, 3.0 + 1e-12, 5.0);
        assert!(!line.is_vertical());
    }

    #[test]
    fn classify_point_sides() {
        let line = Line::from_coords(1.0, 1.0, 2.0, 2.0);
        let eps = DEFAULT_EPSILON;
        assert_eq!(line.classify_point(Point::new(0.0, 10.0), eps), Ok(Side::Ahead));
        assert_eq!(line.classify_point(Point::new(7.0, 4.0), eps), Ok(Side::Behind));
        assert_eq!(line.classify_point(Point::new(4.0, 4.0), eps), Ok(Side::OnLine));
        assert_eq!(
            line.classify_point(Point::new(4.0, 4.0000049), eps),
            Ok(Side::OnLine)
        );
    }

    #[test]
    fn classify_point_vertical_splitter_fails() {
        let line = Line::from_coords(0.0, 0.0, 0.0, 1.0);
        assert_eq!(
            line.classify_point(Point::new(1.0, 1.0), DEFAULT_EPSILON),
            Err(BspError::DegenerateGeometry(DegenerateKind::VerticalSplitter))
        );
    }

    #[test]
    fn intersection_of_crossing_lines() {
        let a = Line::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = Line::from_coords(0.0, 2.0, 2.0, 0.0);
        let p = a.intersection(&b).unwrap();
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn intersection_parallel_fails() {
        let a = Line::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = Line::from_coords(0.0, 1.0, 1.0, 2.0);
        assert_eq!(
            a.intersection(&b),
            Err(BspError::DegenerateGeometry(DegenerateKind::Parallel))
        );
    }

    #[test]
    fn display_format() {
        let line = Line::from_coords(1.0, 1.0, 2.0, 2.5);
        assert_eq!(line.to_string(), "Line: {{1, 1}, {2, 2.5}}");
    }
}
