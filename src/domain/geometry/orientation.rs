// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/orientation.rs
//
// Display orientation in quarter turns and the screen <-> image-local mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rect::{Point, Rect, Size};
use crate::constant::{FULL_ROTATION, ROTATION_STEP};

/// Clockwise display rotation of the image.
///
/// Screen space is the frame the rotated image is shown in; image-local space
/// is the frame of the unrotated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Returns true for 90 and 270, where width and height trade places.
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// One step counter-clockwise: 0 -> 270 -> 180 -> 90 -> 0.
    #[must_use]
    pub fn rotated_ccw(self) -> Self {
        Self::normalize(self.degrees() - ROTATION_STEP)
    }

    /// One step clockwise: 0 -> 90 -> 180 -> 270 -> 0.
    #[must_use]
    pub fn rotated_cw(self) -> Self {
        Self::normalize(self.degrees() + ROTATION_STEP)
    }

    /// Orientation that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::normalize(-self.degrees())
    }

    /// Sum of two rotations.
    #[must_use]
    pub fn then(self, other: Orientation) -> Self {
        Self::normalize(self.degrees() + other.degrees())
    }

    fn normalize(degrees: i32) -> Self {
        match degrees.rem_euclid(FULL_ROTATION) {
            90 => Self::Deg90,
            180 => Self::Deg180,
            270 => Self::Deg270,
            _ => Self::Deg0,
        }
    }

    /// Size of the image as shown on screen, given its image-local size.
    pub fn screen_size(self, image_size: Size) -> Size {
        if self.is_quarter_turn() {
            image_size.transposed()
        } else {
            image_size
        }
    }

    /// Size of the unrotated image, given its on-screen size.
    pub fn image_size(self, screen_size: Size) -> Size {
        // A quarter turn is its own transpose.
        self.screen_size(screen_size)
    }

    /// Maps a screen-space displacement into image-local axes.
    pub fn to_image_space(self, delta: Point) -> Point {
        self.inverse().to_screen_space(delta)
    }

    /// Maps an image-local displacement onto screen axes.
    pub fn to_screen_space(self, delta: Point) -> Point {
        match self {
            Self::Deg0 => delta,
            Self::Deg90 => Point::new(-delta.y, delta.x),
            Self::Deg180 => Point::new(-delta.x, -delta.y),
            Self::Deg270 => Point::new(delta.y, -delta.x),
        }
    }

    /// Maps an image-local position to the screen, for an image of `image_size`.
    pub fn point_to_screen_space(self, point: Point, image_size: Size) -> Point {
        let (w, h) = (image_size.width, image_size.height);
        match self {
            Self::Deg0 => point,
            Self::Deg90 => Point::new(h - point.y, point.x),
            Self::Deg180 => Point::new(w - point.x, h - point.y),
            Self::Deg270 => Point::new(point.y, w - point.x),
        }
    }

    /// Maps a screen position back into the unrotated image, for a screen of `screen_size`.
    pub fn point_to_image_space(self, point: Point, screen_size: Size) -> Point {
        self.inverse().point_to_screen_space(point, screen_size)
    }

    /// Maps an image-local rectangle to the screen.
    pub fn rect_to_screen_space(self, rect: Rect, image_size: Size) -> Rect {
        Rect::from_points(
            self.point_to_screen_space(rect.top_left(), image_size),
            self.point_to_screen_space(rect.bottom_right(), image_size),
        )
        .normalized()
    }

    /// Maps a screen rectangle into the unrotated image.
    pub fn rect_to_image_space(self, rect: Rect, screen_size: Size) -> Rect {
        Rect::from_points(
            self.point_to_image_space(rect.top_left(), screen_size),
            self.point_to_image_space(rect.bottom_right(), screen_size),
        )
        .normalized()
    }
}

impl TryFrom<i32> for Orientation {
    type Error = anyhow::Error;

    fn try_from(degrees: i32) -> anyhow::Result<Self> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => anyhow::bail!("invalid orientation {other}: expected 0, 90, 180 or 270"),
        }
    }
}

impl From<Orientation> for i32 {
    fn from(orientation: Orientation) -> i32 {
        orientation.degrees()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
