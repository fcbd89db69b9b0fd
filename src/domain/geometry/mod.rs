// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/mod.rs
//
// Geometric primitives shared by the crop model and the gesture controllers.

pub mod orientation;
pub mod rect;

pub use orientation::Orientation;
pub use rect::{Point, Rect, Size};
