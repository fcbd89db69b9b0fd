// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Crop operation domain model.

use serde::{Deserialize, Serialize};

use crate::constant::FRACTION_EPSILON;
use crate::domain::geometry::Rect;

/// Crop box as fractions (0-1) of the image it applies to.
///
/// This is the persisted shape of an `image.crop` transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropBox {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl CropBox {
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            top: rect.y1,
            left: rect.x1,
            bottom: rect.y2,
            right: rect.x2,
        }
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    /// Checks that all values lie in [0, 1] and the box is not reversed.
    pub fn validate(&self) -> anyhow::Result<()> {
        let in_range = |v: f64| (-FRACTION_EPSILON..=1.0 + FRACTION_EPSILON).contains(&v);
        anyhow::ensure!(
            [self.top, self.left, self.bottom, self.right]
                .into_iter()
                .all(in_range),
            "crop fractions must lie within [0, 1]: {self:?}"
        );
        anyhow::ensure!(
            self.top < self.bottom && self.left < self.right,
            "crop box is empty or reversed: {self:?}"
        );
        Ok(())
    }

    /// Converts the box to whole pixels of an image of `width` x `height`.
    ///
    /// Edges are widened outwards to whole pixels and clamped to the image.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_pixels(&self, width: u32, height: u32) -> PixelRect {
        let (w, h) = (f64::from(width), f64::from(height));
        let x1 = (self.left * w).floor().clamp(0.0, w) as u32;
        let y1 = (self.top * h).floor().clamp(0.0, h) as u32;
        let x2 = (self.right * w).ceil().clamp(0.0, w) as u32;
        let y2 = (self.bottom * h).ceil().clamp(0.0, h) as u32;
        PixelRect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }
}

/// Crop region in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
