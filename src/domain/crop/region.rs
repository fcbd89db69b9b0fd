// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/region.rs
//
// Crop region model: bounds, region, orientation and aspect-ratio policy.

use crate::constant::{DEFAULT_ASPECT_RATIO, GEOMETRY_EPSILON};
use crate::domain::geometry::{Orientation, Point, Rect, Size};

use super::placement::Placement;

/// Whether resizing keeps the width/height ratio locked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AspectRatioPolicy {
    Free,
    Fixed(f64),
}

impl AspectRatioPolicy {
    /// Builds the policy from the editor's construction inputs.
    ///
    /// A fixed policy without a ratio locks to the default 1:1.
    pub fn from_config(aspect_ratio: Option<f64>, fixed: bool) -> anyhow::Result<Self> {
        if let Some(ratio) = aspect_ratio {
            anyhow::ensure!(
                ratio.is_finite() && ratio > 0.0,
                "aspect ratio must be a positive number, got {ratio}"
            );
        }
        Ok(if fixed {
            Self::Fixed(aspect_ratio.unwrap_or(DEFAULT_ASPECT_RATIO))
        } else {
            Self::Free
        })
    }

    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::Free => None,
            Self::Fixed(ratio) => Some(*ratio),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

/// The user's crop selection inside the displayed image.
///
/// `bounds` is in host coordinates (it carries the image's offset inside the
/// viewport). `region` is relative to the bounds' top-left corner and is kept
/// inside `[0, width] x [0, height]` by [`CropRegion::set_region`], the single
/// mutation path every gesture goes through.
#[derive(Debug, Clone)]
pub struct CropRegion {
    bounds: Rect,
    region: Rect,
    orientation: Orientation,
    policy: AspectRatioPolicy,
    initial_ratio: f64,
    placement: Placement,
}

impl CropRegion {
    pub fn new(aspect_ratio: Option<f64>, fixed: bool) -> anyhow::Result<Self> {
        let policy = AspectRatioPolicy::from_config(aspect_ratio, fixed)?;
        Ok(Self {
            bounds: Rect::default(),
            region: Rect::default(),
            orientation: Orientation::Deg0,
            policy,
            initial_ratio: aspect_ratio.unwrap_or(DEFAULT_ASPECT_RATIO),
            placement: Placement::default(),
        })
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Bounds relative to their own origin: `[0, 0]` to `[width, height]`.
    pub fn local_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.bounds.size())
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn policy(&self) -> AspectRatioPolicy {
        self.policy
    }

    /// Ratio used by [`CropRegion::reset`].
    pub fn initial_ratio(&self) -> f64 {
        self.initial_ratio
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Current region, relative to the bounds origin.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Current region in host coordinates.
    pub fn absolute_region(&self) -> Rect {
        self.region.translated(self.bounds.top_left())
    }

    /// Replaces the bounds and rescales the region by the change in width.
    ///
    /// Empty bounds are ignored and the previous state is kept. The first
    /// valid bounds trigger a [`CropRegion::reset`].
    pub fn set_bounds(&mut self, bounds: Rect) {
        let bounds = bounds.normalized();
        if bounds.is_empty() {
            log::warn!("Ignoring empty crop bounds {bounds:?}");
            return;
        }

        let previous = self.bounds;
        self.bounds = bounds;

        if previous.is_empty() {
            log::debug!("Initial crop bounds {bounds:?}");
            self.reset();
            return;
        }

        let factor = bounds.width() / previous.width();
        log::debug!("Crop bounds {previous:?} -> {bounds:?} (scale {factor})");
        self.set_region(self.region.scaled(factor));
    }

    /// Stores the orientation and re-derives the placement. The region's
    /// coordinates are left untouched.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.update_placement();
    }

    /// Clamps `candidate` into the bounds, fixes reversed corners and stores it.
    ///
    /// A candidate with a non-finite coordinate is ignored.
    pub fn set_region(&mut self, candidate: Rect) {
        if ![candidate.x1, candidate.y1, candidate.x2, candidate.y2]
            .into_iter()
            .all(f64::is_finite)
        {
            log::warn!("Ignoring non-finite crop region {candidate:?}");
            return;
        }

        let Size { width, height } = self.bounds.size();
        let x1 = candidate.x1.clamp(0.0, width);
        let y1 = candidate.y1.clamp(0.0, height);
        let x2 = candidate.x2.clamp(0.0, width).max(x1);
        let y2 = candidate.y2.clamp(0.0, height).max(y1);

        let region = Rect::new(x1, y1, x2, y2);
        if region != candidate {
            log::trace!("Clamped crop region {candidate:?} -> {region:?}");
        }
        self.region = region;
        self.update_placement();
    }

    /// Centers the largest rectangle of the initial ratio inside the bounds.
    pub fn reset(&mut self) {
        let local = self.local_bounds();
        let size = local.size().fit_ratio(self.initial_ratio);
        self.set_region(Rect::centered(local.center(), size));
    }

    /// Restores a crop given as fractions of the bounds, or resets when `None`.
    pub fn set(&mut self, orientation: Orientation, fractions: Option<Rect>) {
        self.orientation = orientation;
        match fractions {
            Some(fractions) => {
                let Size { width, height } = self.bounds.size();
                self.set_region(Rect::new(
                    fractions.x1 * width,
                    fractions.y1 * height,
                    fractions.x2 * width,
                    fractions.y2 * height,
                ));
            }
            None => self.reset(),
        }
    }

    /// Region as fractions of the bounds, the resolution-independent form
    /// used for persistence. Empty bounds yield an empty rectangle.
    pub fn crop_fraction(&self) -> Rect {
        let Size { width, height } = self.bounds.size();
        if width <= GEOMETRY_EPSILON || height <= GEOMETRY_EPSILON {
            return Rect::default();
        }
        Rect::new(
            self.region.x1 / width,
            self.region.y1 / height,
            self.region.x2 / width,
            self.region.y2 / height,
        )
    }

    fn update_placement(&mut self) {
        self.placement = Placement::compute(self.bounds.size(), &self.region, self.orientation);
    }
}
