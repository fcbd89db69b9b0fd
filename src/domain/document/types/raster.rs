// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/types/raster.rs
//
// Raster images (PNG, JPEG, WebP, ...) with persisted transforms applied.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, GenericImageView, ImageReader};

use crate::domain::document::operations::transform::Transform;
use crate::domain::geometry::Orientation;

/// Represents a decoded raster image.
pub struct RasterDocument {
    /// The decoded image document.
    document: DynamicImage,
}

impl RasterDocument {
    /// Load a raster document from disk.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let document = ImageReader::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        Ok(Self { document })
    }

    pub fn from_image(document: DynamicImage) -> Self {
        Self { document }
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.document
    }

    /// Save the current document to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        self.document
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Apply transforms in list order.
    pub fn apply(&mut self, transforms: &[Transform]) -> anyhow::Result<()> {
        for transform in transforms {
            log::trace!("Applying {}", transform.name());
            match transform {
                Transform::Crop(crop) => {
                    crop.validate()?;
                    let (w, h) = self.dimensions();
                    let rect = crop.to_pixels(w, h);
                    anyhow::ensure!(rect.is_valid(), "crop {crop:?} is empty on a {w}x{h} image");
                    log::debug!("Cropping {w}x{h} image to {:?}", rect.as_tuple());
                    self.document = self.document.crop_imm(rect.x, rect.y, rect.width, rect.height);
                }
                Transform::Rotate(params) => {
                    log::debug!("Rotating image by {}", params.angle);
                    self.rotate(params.angle);
                }
            }
        }
        Ok(())
    }

    /// Rotate clockwise by the given orientation.
    pub fn rotate(&mut self, orientation: Orientation) {
        self.document = match orientation {
            Orientation::Deg0 => return,
            Orientation::Deg90 => self.document.rotate90(),
            Orientation::Deg180 => self.document.rotate180(),
            Orientation::Deg270 => self.document.rotate270(),
        };
    }
}

/// Reads the EXIF orientation tag and maps it to the display rotation.
///
/// Mirrored orientations have no rotation-only equivalent and yield `None`,
/// as do files without EXIF data.
pub fn exif_orientation(path: &Path) -> Option<Orientation> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;

    match field.value.get_uint(0)? {
        1 => Some(Orientation::Deg0),
        3 => Some(Orientation::Deg180),
        6 => Some(Orientation::Deg90),
        8 => Some(Orientation::Deg270),
        other => {
            log::warn!("Ignoring mirrored EXIF orientation {other} in {}", path.display());
            None
        }
    }
}
