// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/anchor.rs
//
// Resize anchors: movement matrices, fixed points and max-rect tightening.

use std::fmt;
use std::str::FromStr;

use crate::domain::geometry::{Point, Rect, Size};

/// One of the eight compass handles on the crop region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Column index of a region edge inside a [`MovementMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

/// Maps a pointer delta to edge deltas.
///
/// Row 0 is the effect of horizontal pointer movement, row 1 of vertical
/// movement. Columns follow [`Edge`]: top, right, bottom, left.
pub type MovementMatrix = [[f64; 4]; 2];

/// Per-anchor behavior, one entry per handle in [`ANCHORS`].
pub struct AnchorSpec {
    pub anchor: Anchor,
    /// Edge driven by horizontal pointer movement.
    pub horizontal: Option<Edge>,
    /// Edge driven by vertical pointer movement.
    pub vertical: Option<Edge>,
    /// Position of the fixed point inside the region, as fractions of its size.
    pub fixed_align: (f64, f64),
    /// Movement matrix for a free (`None`) or fixed (`Some(ratio)`) policy.
    pub matrix: fn(Option<f64>) -> MovementMatrix,
    /// Largest rectangle the region may grow into while the fixed point holds.
    pub available: fn(&Rect, Size) -> Rect,
}

pub static ANCHORS: [AnchorSpec; 8] = [
    AnchorSpec {
        anchor: Anchor::N,
        horizontal: None,
        vertical: Some(Edge::Top),
        fixed_align: (0.5, 1.0),
        matrix: matrix_n,
        available: available_n,
    },
    AnchorSpec {
        anchor: Anchor::NE,
        horizontal: Some(Edge::Right),
        vertical: Some(Edge::Top),
        fixed_align: (0.0, 1.0),
        matrix: matrix_ne,
        available: available_ne,
    },
    AnchorSpec {
        anchor: Anchor::E,
        horizontal: Some(Edge::Right),
        vertical: None,
        fixed_align: (0.0, 0.5),
        matrix: matrix_e,
        available: available_e,
    },
    AnchorSpec {
        anchor: Anchor::SE,
        horizontal: Some(Edge::Right),
        vertical: Some(Edge::Bottom),
        fixed_align: (0.0, 0.0),
        matrix: matrix_se,
        available: available_se,
    },
    AnchorSpec {
        anchor: Anchor::S,
        horizontal: None,
        vertical: Some(Edge::Bottom),
        fixed_align: (0.5, 0.0),
        matrix: matrix_s,
        available: available_s,
    },
    AnchorSpec {
        anchor: Anchor::SW,
        horizontal: Some(Edge::Left),
        vertical: Some(Edge::Bottom),
        fixed_align: (1.0, 0.0),
        matrix: matrix_sw,
        available: available_sw,
    },
    AnchorSpec {
        anchor: Anchor::W,
        horizontal: Some(Edge::Left),
        vertical: None,
        fixed_align: (1.0, 0.5),
        matrix: matrix_w,
        available: available_w,
    },
    AnchorSpec {
        anchor: Anchor::NW,
        horizontal: Some(Edge::Left),
        vertical: Some(Edge::Top),
        fixed_align: (1.0, 1.0),
        matrix: matrix_nw,
        available: available_nw,
    },
];

impl Anchor {
    pub const ALL: [Anchor; 8] = [
        Anchor::N,
        Anchor::NE,
        Anchor::E,
        Anchor::SE,
        Anchor::S,
        Anchor::SW,
        Anchor::W,
        Anchor::NW,
    ];

    pub fn spec(self) -> &'static AnchorSpec {
        &ANCHORS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Anchor::N => "n",
            Anchor::NE => "ne",
            Anchor::E => "e",
            Anchor::SE => "se",
            Anchor::S => "s",
            Anchor::SW => "sw",
            Anchor::W => "w",
            Anchor::NW => "nw",
        }
    }

    /// Handle position on the given region (the point the user grabs).
    pub fn handle_point(self, region: &Rect) -> Point {
        let (ax, ay) = self.spec().fixed_align;
        Point::new(
            region.x1 + (1.0 - ax) * region.width(),
            region.y1 + (1.0 - ay) * region.height(),
        )
    }

    /// Returns true for the four corner handles.
    pub fn is_corner(self) -> bool {
        matches!(self, Anchor::NE | Anchor::SE | Anchor::SW | Anchor::NW)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Anchor::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown anchor '{s}': expected one of n, ne, e, se, s, sw, w, nw"))
    }
}

impl AnchorSpec {
    /// The point that stays stationary while this handle is dragged.
    pub fn fixed_point(&self, region: &Rect) -> Point {
        let (ax, ay) = self.fixed_align;
        Point::new(
            region.x1 + ax * region.width(),
            region.y1 + ay * region.height(),
        )
    }

    /// Rectangle of `size` placed so its fixed point coincides with `region`'s.
    pub fn anchored(&self, region: &Rect, size: Size) -> Rect {
        let fixed = self.fixed_point(region);
        let (ax, ay) = self.fixed_align;
        Rect::from_origin_size(
            Point::new(fixed.x - ax * size.width, fixed.y - ay * size.height),
            size,
        )
    }

    /// Maximum rectangle for a resize starting from `region` inside `bounds`.
    ///
    /// With a fixed ratio the available rectangle is tightened to the largest
    /// rectangle of that ratio that keeps the fixed point in place.
    pub fn max_rect(&self, region: &Rect, bounds: Size, ratio: Option<f64>) -> Rect {
        let available = (self.available)(region, bounds);
        match ratio {
            Some(ratio) => self.anchored(region, available.size().fit_ratio(ratio)),
            None => available,
        }
    }

    /// Minimum rectangle for a resize starting from `region`.
    pub fn min_rect(&self, region: &Rect, ratio: Option<f64>, min_size: f64) -> Rect {
        let size = match ratio {
            Some(ratio) => {
                let width = min_size * ratio.max(1.0);
                Size::new(width, width / ratio)
            }
            None => Size::new(min_size, min_size),
        };
        self.anchored(region, size)
    }

    /// Permissible pointer displacement range for a resize of `region`.
    ///
    /// `(x1, y1)` is the most negative and `(x2, y2)` the most positive
    /// displacement. Both ranges always contain zero.
    pub fn extents(&self, region: &Rect, bounds: Size, ratio: Option<f64>, min_size: f64) -> Rect {
        let max = self.max_rect(region, bounds, ratio);
        let min = self.min_rect(region, ratio, min_size);

        let (x_lo, x_hi) = match self.horizontal {
            Some(Edge::Right) => (min.x2 - region.x2, max.x2 - region.x2),
            Some(Edge::Left) => (max.x1 - region.x1, min.x1 - region.x1),
            _ => (0.0, 0.0),
        };
        let (y_lo, y_hi) = match self.vertical {
            Some(Edge::Bottom) => (min.y2 - region.y2, max.y2 - region.y2),
            Some(Edge::Top) => (max.y1 - region.y1, min.y1 - region.y1),
            _ => (0.0, 0.0),
        };

        Rect::new(x_lo.min(0.0), y_lo.min(0.0), x_hi.max(0.0), y_hi.max(0.0))
    }
}

/// Applies `matrix` to a pointer delta and returns the resized region.
pub fn apply_matrix(matrix: &MovementMatrix, region: &Rect, delta: Point) -> Rect {
    let edge = |e: Edge| matrix[0][e as usize] * delta.x + matrix[1][e as usize] * delta.y;
    Rect::new(
        region.x1 + edge(Edge::Left),
        region.y1 + edge(Edge::Top),
        region.x2 + edge(Edge::Right),
        region.y2 + edge(Edge::Bottom),
    )
}

// =============================================================================
// Movement matrices
// =============================================================================

fn matrix_n(ratio: Option<f64>) -> MovementMatrix {
    match ratio {
        Some(r) => [[0.0; 4], [1.0, -r / 2.0, 0.0, r / 2.0]],
        None => [[0.0; 4], [1.0, 0.0, 0.0, 0.0]],
    }
}

fn matrix_s(ratio: Option<f64>) -> MovementMatrix {
    match ratio {
        Some(r) => [[0.0; 4], [0.0, r / 2.0, 1.0, -r / 2.0]],
        None => [[0.0; 4], [0.0, 0.0, 1.0, 0.0]],
    }
}

fn matrix_e(ratio: Option<f64>) -> MovementMatrix {
    match ratio {
        Some(r) => [[-1.0 / (2.0 * r), 1.0, 1.0 / (2.0 * r), 0.0], [0.0; 4]],
        None => [[0.0, 1.0, 0.0, 0.0], [0.0; 4]],
    }
}

fn matrix_w(ratio: Option<f64>) -> MovementMatrix {
    match ratio {
        Some(r) => [[1.0 / (2.0 * r), 0.0, -1.0 / (2.0 * r), 1.0], [0.0; 4]],
        None => [[0.0, 0.0, 0.0, 1.0], [0.0; 4]],
    }
}

// Diagonal handles with a fixed ratio project the pointer delta onto the
// region's diagonal, so width and height change in exactly ratio r.

fn matrix_se(ratio: Option<f64>) -> MovementMatrix {
    match ratio {
        Some(r) => {
            let k = 1.0 / (r * r + 1.0);
            [[0.0, r * r * k, r * k, 0.0], [0.0, r * k, k, 0.0]]
        }
        None => [[0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]],
    }
}

fn matrix_ne(ratio: Option<f64>) -> MovementMatrix {
    match ratio {
        Some(r) => {
            let k = 1.0 / (r * r + 1.0);
            [[-r * k, r * r * k, 0.0, 0.0], [k, -r * k, 0.0, 0.0]]
        }
        None => [[0.0, 1.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0]],
    }
}

fn matrix_sw(ratio: Option<f64>) -> MovementMatrix {
    match ratio {
        Some(r) => {
            let k = 1.0 / (r * r + 1.0);
            [[0.0, 0.0, -r * k, r * r * k], [0.0, 0.0, k, -r * k]]
        }
        None => [[0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.0]],
    }
}

fn matrix_nw(ratio: Option<f64>) -> MovementMatrix {
    match ratio {
        Some(r) => {
            let k = 1.0 / (r * r + 1.0);
            [[r * k, 0.0, 0.0, r * r * k], [k, 0.0, 0.0, r * k]]
        }
        None => [[0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0, 0.0]],
    }
}

// =============================================================================
// Available rectangles
// =============================================================================

// Edge handles keep the perpendicular center, so the usable span on that
// axis is twice the distance to the nearest bound.

fn available_n(region: &Rect, bounds: Size) -> Rect {
    let cx = region.center().x;
    let half = cx.min(bounds.width - cx).max(0.0);
    Rect::new(cx - half, 0.0, cx + half, region.y2)
}

fn available_s(region: &Rect, bounds: Size) -> Rect {
    let cx = region.center().x;
    let half = cx.min(bounds.width - cx).max(0.0);
    Rect::new(cx - half, region.y1, cx + half, bounds.height)
}

fn available_e(region: &Rect, bounds: Size) -> Rect {
    let cy = region.center().y;
    let half = cy.min(bounds.height - cy).max(0.0);
    Rect::new(region.x1, cy - half, bounds.width, cy + half)
}

fn available_w(region: &Rect, bounds: Size) -> Rect {
    let cy = region.center().y;
    let half = cy.min(bounds.height - cy).max(0.0);
    Rect::new(0.0, cy - half, region.x2, cy + half)
}

// Corner handles hold the two edges opposite the handle.

fn available_ne(region: &Rect, bounds: Size) -> Rect {
    Rect::new(region.x1, 0.0, bounds.width, region.y2)
}

fn available_se(region: &Rect, bounds: Size) -> Rect {
    Rect::new(region.x1, region.y1, bounds.width, bounds.height)
}

fn available_sw(region: &Rect, bounds: Size) -> Rect {
    Rect::new(0.0, region.y1, region.x2, bounds.height)
}

fn available_nw(region: &Rect, _bounds: Size) -> Rect {
    Rect::new(0.0, 0.0, region.x2, region.y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size::new(400.0, 300.0);

    fn region() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 150.0)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn table_is_indexed_by_anchor() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.spec().anchor, anchor);
        }
    }

    #[test]
    fn fixed_point_is_opposite_the_handle() {
        let r = region();
        assert_eq!(Anchor::SE.spec().fixed_point(&r), Point::new(100.0, 100.0));
        assert_eq!(Anchor::NW.spec().fixed_point(&r), Point::new(200.0, 150.0));
        assert_eq!(Anchor::N.spec().fixed_point(&r), Point::new(150.0, 150.0));
        assert_eq!(Anchor::W.spec().fixed_point(&r), Point::new(200.0, 125.0));
        assert_eq!(Anchor::NE.handle_point(&r), Point::new(200.0, 100.0));
    }

    #[test]
    fn free_east_moves_right_edge_only() {
        let m = (Anchor::E.spec().matrix)(None);
        let moved = apply_matrix(&m, &region(), Point::new(30.0, 40.0));
        assert_eq!(moved, Rect::new(100.0, 100.0, 230.0, 150.0));
    }

    #[test]
    fn free_extents_reach_bounds() {
        let spec = Anchor::SE.spec();
        let extents = spec.extents(&region(), BOUNDS, None, 1.0);
        assert_eq!(extents, Rect::new(-99.0, -49.0, 200.0, 150.0));

        let spec = Anchor::N.spec();
        let extents = spec.extents(&region(), BOUNDS, None, 1.0);
        assert_eq!(extents, Rect::new(0.0, -100.0, 0.0, 49.0));
    }

    #[test]
    fn fixed_matrices_preserve_ratio() {
        let ratio = 2.0;
        let r = region();
        for anchor in Anchor::ALL {
            let m = (anchor.spec().matrix)(Some(ratio));
            let moved = apply_matrix(&m, &r, Point::new(13.0, -7.0));
            assert!(
                close(moved.width() / moved.height(), ratio),
                "{anchor}: {moved:?}"
            );
            let fixed = anchor.spec().fixed_point(&r);
            let (ax, ay) = anchor.spec().fixed_align;
            let moved_fixed = Point::new(
                moved.x1 + ax * moved.width(),
                moved.y1 + ay * moved.height(),
            );
            assert!(close(moved_fixed.x, fixed.x) && close(moved_fixed.y, fixed.y), "{anchor}");
        }
    }

    #[test]
    fn north_tightening_is_symmetric_about_center() {
        // Center x = 150: nearest side edge is 150 away, so width <= 300.
        let max = Anchor::N.spec().max_rect(&region(), BOUNDS, Some(2.0));
        assert_eq!(max, Rect::new(0.0, 0.0, 300.0, 150.0));
    }

    #[test]
    fn east_tightening_holds_vertical_center() {
        // Center y = 125: vertical span <= 250, width available = 300.
        let max = Anchor::E.spec().max_rect(&region(), BOUNDS, Some(2.0));
        assert_eq!(max, Rect::new(100.0, 50.0, 400.0, 200.0));
    }

    #[test]
    fn corner_tightening_holds_opposite_corner() {
        let r = region();
        let nw = Anchor::NW.spec().max_rect(&r, BOUNDS, Some(2.0));
        assert_eq!(nw, Rect::new(0.0, 50.0, 200.0, 150.0));
        let se = Anchor::SE.spec().max_rect(&r, BOUNDS, Some(2.0));
        assert_eq!(se, Rect::new(100.0, 100.0, 400.0, 250.0));
        let sw = Anchor::SW.spec().max_rect(&r, BOUNDS, Some(2.0));
        assert_eq!(sw, Rect::new(0.0, 100.0, 200.0, 200.0));
        let ne = Anchor::NE.spec().max_rect(&r, BOUNDS, Some(2.0));
        assert_eq!(ne, Rect::new(100.0, 0.0, 400.0, 150.0));
    }

    #[test]
    fn parses_anchor_names() {
        assert_eq!("SE".parse::<Anchor>().unwrap(), Anchor::SE);
        assert!("x".parse::<Anchor>().is_err());
    }
}
