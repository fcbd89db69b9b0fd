// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/resize.rs
//
// Resize controller: scales the region from one of eight anchors.

use crate::config::PointerSpace;
use crate::domain::crop::anchor::apply_matrix;
use crate::domain::crop::{Anchor, CropRegion, MovementMatrix};
use crate::domain::geometry::{Point, Rect};

use super::pointer::pointer_delta;

/// State captured when a resize gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub anchor: Anchor,
    /// Pointer position at gesture start.
    pub origin: Point,
    /// Range of permissible pointer displacement.
    pub extents: Rect,
    /// Region at gesture start.
    pub start_region: Rect,
    pub matrix: MovementMatrix,
}

#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

impl ResizeController {
    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a resize from `anchor` at `origin`.
    ///
    /// The extents keep the region inside the bounds, no smaller than
    /// `min_size`, and with a fixed ratio inside the largest rectangle of
    /// that ratio around the anchor's fixed point.
    pub fn begin(&mut self, crop: &CropRegion, anchor: Anchor, origin: Point, min_size: f64) {
        let spec = anchor.spec();
        let ratio = crop.policy().ratio();
        let start_region = crop.region();
        let extents = spec.extents(&start_region, crop.bounds().size(), ratio, min_size);
        log::debug!("Resize start from {anchor} at {origin:?}, extents {extents:?}");

        self.session = Some(ResizeSession {
            anchor,
            origin,
            extents,
            start_region,
            matrix: (spec.matrix)(ratio),
        });
    }

    /// Resizes the start snapshot by the clamped pointer displacement.
    ///
    /// Returns false when no gesture is active.
    pub fn update(&self, crop: &mut CropRegion, position: Point, space: PointerSpace) -> bool {
        let Some(session) = self.session else {
            return false;
        };

        let raw = pointer_delta(session.origin, position, crop.orientation(), space);
        let delta = session.extents.clamp_point(raw);
        log::trace!("Resize {} delta {raw:?} -> {delta:?}", session.anchor);
        crop.set_region(apply_matrix(&session.matrix, &session.start_region, delta));
        true
    }

    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("Resize end ({})", session.anchor);
        }
    }
}
