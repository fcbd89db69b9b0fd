// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Crop region model, resize anchors and derived placement.

pub mod anchor;
pub mod placement;
pub mod region;
pub mod versions;

pub use anchor::{Anchor, AnchorSpec, Edge, MovementMatrix};
pub use placement::Placement;
pub use region::{AspectRatioPolicy, CropRegion};
pub use versions::VersionSet;
