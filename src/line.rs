//! Integer line rasterization.
//!
//! Every segment is sorted into one of five regimes by the sign and
//! magnitude of its deltas. Each regime has its own stepping routine with
//! an integer decision variable, so no division or floating point is
//! involved and the result does not depend on endpoint order.

use std::cmp;

use nalgebra::Point2;
use num::{One, Zero};

use crate::error::DrawError;
use crate::grid::Grid;

pub type Point = Point2<i32>;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LineSegment {
    pub a: Point,
    pub b: Point,
}

impl LineSegment {
    pub fn new(a: Point, b: Point) -> LineSegment {
        LineSegment { a, b }
    }

    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> LineSegment {
        LineSegment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn reversed(&self) -> LineSegment {
        LineSegment::new(self.b, self.a)
    }

    /// Returns `(dx, dy)` from `a` to `b`, widened so that segments
    /// spanning the whole `i32` range do not overflow.
    pub fn delta(&self) -> (i64, i64) {
        (
            i64::from(self.b.x) - i64::from(self.a.x),
            i64::from(self.b.y) - i64::from(self.a.y),
        )
    }

    /// Number of cells the rasterized segment covers, both endpoints
    /// included.
    pub fn cell_count(&self) -> usize {
        let (dx, dy) = self.delta();
        cmp::max(dx.abs(), dy.abs()) as usize + 1
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Regime {
    /// `dx == 0`.
    Vertical,
    /// `dy > dx >= 0`, slope greater than 1.
    SteepPositive,
    /// `0 <= dy <= dx`, slope in `[0, 1]`.
    ShallowPositive,
    /// `0 < -dy <= dx`, slope in `[-1, 0)`.
    ShallowNegative,
    /// `-dy > dx`, slope below -1.
    SteepNegative,
}

impl Regime {
    /// Classifies a segment by its deltas.
    ///
    /// A negative `dx` describes the same line as the segment with its
    /// endpoints swapped, so only the relative sign of the deltas decides
    /// the slope direction. Defined for every `(dx, dy)`.
    pub fn classify(dx: i64, dy: i64) -> Regime {
        if dx == 0 {
            return Regime::Vertical;
        }
        let rising = dy == 0 || (dx > 0) == (dy > 0);
        let steep = dy.unsigned_abs() > dx.unsigned_abs();
        match (rising, steep) {
            (true, true) => Regime::SteepPositive,
            (true, false) => Regime::ShallowPositive,
            (false, false) => Regime::ShallowNegative,
            (false, true) => Regime::SteepNegative,
        }
    }

    pub fn of(segment: &LineSegment) -> Regime {
        let (dx, dy) = segment.delta();
        Regime::classify(dx, dy)
    }

    /// The axis that advances by one cell on every step.
    pub fn major_axis(self) -> Axis {
        match self {
            Regime::Vertical
            | Regime::SteepPositive
            | Regime::SteepNegative => Axis::Y,
            Regime::ShallowPositive | Regime::ShallowNegative => Axis::X,
        }
    }
}

/// Walks the cells of `segment`, calling `plot` for each one in stepping
/// order.
///
/// Non-vertical segments are always walked from the endpoint with the
/// smaller x, so the order may be the reverse of `a` to `b`.
pub fn trace<F>(segment: &LineSegment, mut plot: F)
where
    F: FnMut(Point),
{
    let regime = Regime::of(segment);
    let (a, b) = if segment.a.x > segment.b.x {
        (segment.b, segment.a)
    } else {
        (segment.a, segment.b)
    };
    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);
    log::debug!(
        "{:?} from [{} {}] dx={} dy={}",
        regime,
        a.x,
        a.y,
        dx,
        dy
    );

    match regime {
        Regime::Vertical => vertical(a.x, a.y, b.y, &mut plot),
        Regime::SteepPositive => steep_positive(a, b, dx, dy, &mut plot),
        Regime::ShallowPositive => shallow_positive(a, b, dx, dy, &mut plot),
        Regime::ShallowNegative => shallow_negative(a, b, dx, dy, &mut plot),
        Regime::SteepNegative => steep_negative(a, b, dx, dy, &mut plot),
    }
}

/// Collects the cells of `segment` in stepping order.
///
/// Allocates one `Point` per cell up front.
pub fn cells(segment: &LineSegment) -> Vec<Point> {
    let mut points = Vec::with_capacity(segment.cell_count());
    trace(segment, |point| points.push(point));
    points
}

/// Marks every cell of `segment` in `grid`.
///
/// Both endpoints are checked before anything is written. A segment with
/// an endpoint outside the grid leaves the grid untouched.
pub fn draw<T>(
    segment: &LineSegment,
    grid: &mut Grid<T>,
) -> Result<(), DrawError>
where
    T: Copy + Zero + One,
{
    check_bounds(segment.a, grid)?;
    check_bounds(segment.b, grid)?;

    // All cells lie in the bounding box of the endpoints.
    trace(segment, |point| {
        let inside = grid.mark(point);
        debug_assert!(inside);
    });
    Ok(())
}

/// Draws the open polyline through `points`.
///
/// Every vertex is checked before the first cell is written.
pub fn draw_path<T>(
    points: &[Point],
    grid: &mut Grid<T>,
) -> Result<(), DrawError>
where
    T: Copy + Zero + One,
{
    for &point in points {
        check_bounds(point, grid)?;
    }

    if points.len() == 1 {
        grid.mark(points[0]);
        return Ok(());
    }
    for pair in points.windows(2) {
        trace(&LineSegment::new(pair[0], pair[1]), |point| {
            grid.mark(point);
        });
    }
    Ok(())
}

fn check_bounds<T>(point: Point, grid: &Grid<T>) -> Result<(), DrawError>
where
    T: Copy + Zero + One,
{
    if grid.contains(point) {
        Ok(())
    } else {
        Err(DrawError::OutOfBounds {
            x: point.x,
            y: point.y,
            width: grid.width(),
            height: grid.height(),
        })
    }
}

// Each routine stops right after plotting `b`, so the minor coordinate is
// never stepped past the last cell.

fn vertical<F>(x: i32, y1: i32, y2: i32, plot: &mut F)
where
    F: FnMut(Point),
{
    for y in cmp::min(y1, y2)..=cmp::max(y1, y2) {
        plot(Point::new(x, y));
    }
}

fn steep_positive<F>(a: Point, b: Point, dx: i64, dy: i64, plot: &mut F)
where
    F: FnMut(Point),
{
    let mut x = a.x;
    let mut p = 2 * dx - dy;
    for y in a.y..=b.y {
        plot(Point::new(x, y));
        if y == b.y {
            break;
        }
        if p >= 0 {
            x += 1;
            p += 2 * dx - 2 * dy;
        } else {
            p += 2 * dx;
        }
    }
}

fn shallow_positive<F>(a: Point, b: Point, dx: i64, dy: i64, plot: &mut F)
where
    F: FnMut(Point),
{
    let mut y = a.y;
    let mut p = 2 * dy - dx;
    for x in a.x..=b.x {
        plot(Point::new(x, y));
        if x == b.x {
            break;
        }
        if p >= 0 {
            y += 1;
            p += 2 * dy - 2 * dx;
        } else {
            p += 2 * dy;
        }
    }
}

// dy < 0 here, so -2 * dy is the doubled height.
fn shallow_negative<F>(a: Point, b: Point, dx: i64, dy: i64, plot: &mut F)
where
    F: FnMut(Point),
{
    let mut y = a.y;
    let mut p = -2 * dy - dx;
    for x in a.x..=b.x {
        plot(Point::new(x, y));
        if x == b.x {
            break;
        }
        if p >= 0 {
            y -= 1;
            p -= 2 * dy + 2 * dx;
        } else {
            p -= 2 * dy;
        }
    }
}

// Walks y downwards from a.y to b.y. The decision variable is kept with
// the same sign convention as the other routines: x advances when p >= 0.
fn steep_negative<F>(a: Point, b: Point, dx: i64, dy: i64, plot: &mut F)
where
    F: FnMut(Point),
{
    let mut x = a.x;
    let mut p = 2 * dx + dy;
    for y in (b.y..=a.y).rev() {
        plot(Point::new(x, y));
        if y == b.y {
            break;
        }
        if p >= 0 {
            x += 1;
            p += 2 * dx + 2 * dy;
        } else {
            p += 2 * dx;
        }
    }
}
