// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Crop overlay geometry: handle hit testing and cursors.

use crate::domain::crop::Anchor;
use crate::domain::geometry::{Point, Rect};

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// One of the eight resize handles.
    Handle(Anchor),
    /// The region's body (starts a move).
    Body,
    Outside,
}

/// Hit-tests `point` against `region`, both in host coordinates.
///
/// Corner handles win over edge handles, handles win over the body.
pub fn hit_test(region: &Rect, point: Point, hit_size: f64) -> HitTarget {
    let corners = Anchor::ALL.into_iter().filter(|a| a.is_corner());
    let edges = Anchor::ALL.into_iter().filter(|a| !a.is_corner());

    for anchor in corners.chain(edges) {
        if point_in_handle(point, anchor.handle_point(region), hit_size) {
            return HitTarget::Handle(anchor);
        }
    }

    if region.contains(point) {
        return HitTarget::Body;
    }

    HitTarget::Outside
}

fn point_in_handle(point: Point, handle_center: Point, hit_size: f64) -> bool {
    let half = hit_size / 2.0;
    point.x >= handle_center.x - half
        && point.x <= handle_center.x + half
        && point.y >= handle_center.y - half
        && point.y <= handle_center.y + half
}

/// CSS cursor name for a hit target.
pub fn cursor_for(target: HitTarget) -> &'static str {
    match target {
        HitTarget::Outside => "default",
        HitTarget::Body => "move",
        HitTarget::Handle(Anchor::N) => "n-resize",
        HitTarget::Handle(Anchor::NE) => "ne-resize",
        HitTarget::Handle(Anchor::E) => "e-resize",
        HitTarget::Handle(Anchor::SE) => "se-resize",
        HitTarget::Handle(Anchor::S) => "s-resize",
        HitTarget::Handle(Anchor::SW) => "sw-resize",
        HitTarget::Handle(Anchor::W) => "w-resize",
        HitTarget::Handle(Anchor::NW) => "nw-resize",
    }
}
