// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Persisted image transforms and their application to raster files.

pub mod operations;
#[cfg(feature = "image")]
pub mod types;

pub use operations::crop::{CropBox, PixelRect};
pub use operations::transform::{RotateParams, Transform};
