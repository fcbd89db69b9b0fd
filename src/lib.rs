// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Crop-region engine for image upload fields.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;

pub use app::{EditorMessage, ImageEditor, UpdateResult, ViewMode, update};
pub use config::{EditorConfig, PointerSpace};
pub use domain::crop::{Anchor, AspectRatioPolicy, CropRegion, VersionSet};
pub use domain::document::Transform;
pub use domain::geometry::{Orientation, Point, Rect, Size};
