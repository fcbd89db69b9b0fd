// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/drag.rs
//
// Drag controller: translates the region within its bounds.

use crate::config::PointerSpace;
use crate::domain::crop::CropRegion;
use crate::domain::geometry::{Point, Rect};

use super::pointer::pointer_delta;

/// State captured when a move gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at gesture start.
    pub origin: Point,
    /// Range of permissible displacement from the start position.
    pub extents: Rect,
    /// Region at gesture start.
    pub start_region: Rect,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a move gesture at `origin`.
    pub fn begin(&mut self, crop: &CropRegion, origin: Point) {
        let start_region = crop.region();
        let extents = start_region.extents(&crop.local_bounds());
        log::debug!("Drag start at {origin:?}, extents {extents:?}");
        self.session = Some(DragSession {
            origin,
            extents,
            start_region,
        });
    }

    /// Moves the region by the clamped pointer displacement.
    ///
    /// Every move is relative to the start snapshot, not the previous move.
    /// Returns false when no gesture is active.
    pub fn update(&self, crop: &mut CropRegion, position: Point, space: PointerSpace) -> bool {
        let Some(session) = self.session else {
            return false;
        };

        let raw = pointer_delta(session.origin, position, crop.orientation(), space);
        let delta = session.extents.clamp_point(raw);
        log::trace!("Drag delta {raw:?} -> {delta:?}");
        crop.set_region(session.start_region.translated(delta));
        true
    }

    pub fn end(&mut self) {
        if self.session.take().is_some() {
            log::debug!("Drag end");
        }
    }
}
