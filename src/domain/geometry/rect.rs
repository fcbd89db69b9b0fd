// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/rect.rs
//
// Rectangle primitives: points, sizes and two-corner rectangles.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::orientation::Orientation;

/// A 2D point or displacement in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero, negative or not a number.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Width/height swapped.
    #[must_use]
    pub fn transposed(&self) -> Size {
        Size::new(self.height, self.width)
    }

    /// Largest size of the given width/height ratio that fits inside `self`.
    ///
    /// Tries the width-first fit and falls back to the height-first fit when
    /// the resulting height would overflow.
    #[must_use]
    pub fn fit_ratio(&self, ratio: f64) -> Size {
        let height = self.width / ratio;
        if height <= self.height {
            Size::new(self.width, height)
        } else {
            Size::new(self.height * ratio, self.height)
        }
    }
}

/// Rectangle given by its top-left `(x1, y1)` and bottom-right `(x2, y2)` corners.
///
/// Every constructor except [`Rect::extents`] yields a non-reversed rectangle
/// (`x2 >= x1`, `y2 >= y1`). All operations return new values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_points(top_left: Point, bottom_right: Point) -> Self {
        Self::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    /// Rectangle of the given size centered on `center`.
    pub fn centered(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            center.x + size.width / 2.0,
            center.y + size.height / 2.0,
        )
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x1 && point.x <= self.x2 && point.y >= self.y1 && point.y <= self.y2
    }

    /// Returns true if `other` lies entirely inside `self`, allowing `tolerance` of slack.
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.x1 >= self.x1 - tolerance
            && other.y1 >= self.y1 - tolerance
            && other.x2 <= self.x2 + tolerance
            && other.y2 <= self.y2 + tolerance
    }

    /// How far `self` may translate before its edges reach `outer`'s edges.
    ///
    /// The result is a range rectangle: `(x1, y1)` is the most negative
    /// permissible displacement, `(x2, y2)` the most positive. It is reversed
    /// when `self` is larger than `outer` on some axis.
    #[must_use]
    pub fn extents(&self, outer: &Rect) -> Rect {
        Rect::from_points(
            outer.top_left() - self.top_left(),
            outer.bottom_right() - self.bottom_right(),
        )
    }

    /// Clamps a displacement into this range rectangle.
    ///
    /// A reversed axis collapses to its upper limit.
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            point.x.max(self.x1).min(self.x2),
            point.y.max(self.y1).min(self.y2),
        )
    }

    /// Multiplies every coordinate by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Rect {
        Rect::new(
            self.x1 * factor,
            self.y1 * factor,
            self.x2 * factor,
            self.y2 * factor,
        )
    }

    #[must_use]
    pub fn translated(&self, delta: Point) -> Rect {
        Rect::from_points(self.top_left() + delta, self.bottom_right() + delta)
    }

    /// Swaps width and height around the center for quarter turns.
    #[must_use]
    pub fn reoriented(&self, orientation: Orientation) -> Rect {
        if orientation.is_quarter_turn() {
            Rect::centered(self.center(), self.size().transposed())
        } else {
            *self
        }
    }

    /// Per-axis ordered copy: `(x2, y2)` is never smaller than `(x1, y1)`.
    #[must_use]
    pub fn normalized(&self) -> Rect {
        Rect::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }
}
