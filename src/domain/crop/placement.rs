// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/placement.rs
//
// Background-image placement derived from the crop region.

use crate::domain::geometry::{Orientation, Point, Rect, Size};

/// Where the unrotated image must be painted so that the crop box shows the
/// selected part of it.
///
/// A host paints a box of `image_region`'s size, rotated by `orientation`,
/// with the image as background scaled to `background_size` and offset by
/// `background_position`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub orientation: Orientation,
    /// Region in image-local pixels at display scale.
    pub image_region: Rect,
    /// Displayed image size in image-local axes.
    pub background_size: Size,
    /// Offset of the background relative to the crop box.
    pub background_position: Point,
}

impl Placement {
    /// Derives the placement for a region inside bounds of `bounds_size`.
    pub fn compute(bounds_size: Size, region: &Rect, orientation: Orientation) -> Self {
        let image_region = orientation.rect_to_image_space(*region, bounds_size);
        Self {
            orientation,
            image_region,
            background_size: orientation.image_size(bounds_size),
            background_position: -image_region.top_left(),
        }
    }
}
