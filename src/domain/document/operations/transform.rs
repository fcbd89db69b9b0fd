// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/transform.rs
//
// Ordered list of named image transforms, as persisted alongside an upload.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{TRANSFORM_CROP, TRANSFORM_ROTATE};
use crate::domain::geometry::{Orientation, Rect, Size};

use super::crop::CropBox;

/// Parameters of an `image.rotate` transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotateParams {
    /// Clockwise rotation in degrees.
    pub angle: Orientation,
}

/// One named transform, applied in list order to the source image.
///
/// Serialized as `{"name": "image.crop", "params": {...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "params")]
pub enum Transform {
    #[serde(rename = "image.crop")]
    Crop(CropBox),
    #[serde(rename = "image.rotate")]
    Rotate(RotateParams),
}

impl Transform {
    /// Persisted name, e.g. `image.crop`.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Crop(_) => TRANSFORM_CROP,
            Transform::Rotate(_) => TRANSFORM_ROTATE,
        }
    }
}

const UNIT: Size = Size::new(1.0, 1.0);

/// Encodes an editor state as `[image.crop, image.rotate]`.
///
/// `screen_fractions` is the crop as fractions of the displayed (rotated)
/// image; it is stored in the unrotated image's frame so that cropping first
/// and rotating second reproduces the display. The rotate entry is omitted
/// for an upright image. A crop that [`decode`] would reject (empty, e.g.
/// before the editor has bounds) is omitted too, which reads back as a reset.
pub fn encode(orientation: Orientation, screen_fractions: Rect) -> Vec<Transform> {
    let image_fractions = orientation.rect_to_image_space(screen_fractions, UNIT);
    let crop = CropBox::from_rect(&image_fractions);

    let mut transforms = Vec::with_capacity(2);
    match crop.validate() {
        Ok(()) => transforms.push(Transform::Crop(crop)),
        Err(err) => log::debug!("Omitting crop from transform list: {err}"),
    }
    if orientation != Orientation::Deg0 {
        transforms.push(Transform::Rotate(RotateParams { angle: orientation }));
    }
    transforms
}

/// Decodes a transform list into the final orientation and the crop as
/// fractions of the displayed image.
///
/// Rotations accumulate. A crop is interpreted in the frame produced by the
/// rotations listed before it. At most one crop is accepted.
pub fn decode(transforms: &[Transform]) -> anyhow::Result<(Orientation, Option<Rect>)> {
    let mut orientation = Orientation::Deg0;
    let mut crop: Option<(Rect, Orientation)> = None;

    for transform in transforms {
        match transform {
            Transform::Rotate(params) => {
                orientation = orientation.then(params.angle);
            }
            Transform::Crop(params) => {
                anyhow::ensure!(
                    crop.is_none(),
                    "transform list contains more than one {TRANSFORM_CROP}"
                );
                params.validate()?;
                crop = Some((params.to_rect(), orientation));
            }
        }
    }

    let screen_crop = crop.map(|(rect, frame)| {
        let image_fractions = frame.rect_to_image_space(rect, UNIT);
        orientation.rect_to_screen_space(image_fractions, UNIT)
    });

    Ok((orientation, screen_crop))
}

pub fn to_json(transforms: &[Transform]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(transforms).context("Failed to serialize transforms")
}

pub fn from_json(json: &str) -> anyhow::Result<Vec<Transform>> {
    serde_json::from_str(json).context("Failed to parse transform list")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rect_close(a: Rect, b: Rect) {
        for (x, y) in [(a.x1, b.x1), (a.y1, b.y1), (a.x2, b.x2), (a.y2, b.y2)] {
            assert!((x - y).abs() < 1e-12, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn wire_format_uses_named_transforms() {
        let transforms = encode(Orientation::Deg90, Rect::new(0.0, 0.0, 0.5, 1.0));
        let json = serde_json::to_value(&transforms).unwrap();
        assert_eq!(json[0]["name"], transforms[0].name());
        assert_eq!(json[1]["name"], "image.rotate");
        assert_eq!(json[1]["params"]["angle"], 90);
        // Left half of the turned image is the bottom half of the source.
        assert_eq!(json[0]["params"]["top"], 0.5);
        assert_eq!(json[0]["params"]["bottom"], 1.0);
        assert_eq!(json[0]["params"]["left"], 0.0);
        assert_eq!(json[0]["params"]["right"], 1.0);
    }

    #[test]
    fn upright_state_has_no_rotate_entry() {
        let transforms = encode(Orientation::Deg0, Rect::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(transforms.len(), 1);
    }

    #[test]
    fn empty_crop_is_left_out() {
        let transforms = encode(Orientation::Deg90, Rect::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(
            transforms,
            [Transform::Rotate(RotateParams {
                angle: Orientation::Deg90
            })]
        );
        assert!(encode(Orientation::Deg0, Rect::default()).is_empty());

        let (o, crop) = decode(&transforms).unwrap();
        assert_eq!(o, Orientation::Deg90);
        assert!(crop.is_none());
    }

    #[test]
    fn encode_then_decode_restores_state() {
        let fractions = Rect::new(0.1, 0.2, 0.6, 0.9);
        for orientation in [
            Orientation::Deg0,
            Orientation::Deg90,
            Orientation::Deg180,
            Orientation::Deg270,
        ] {
            let (o, crop) = decode(&encode(orientation, fractions)).unwrap();
            assert_eq!(o, orientation);
            assert_rect_close(crop.unwrap(), fractions);
        }
    }

    #[test]
    fn crop_after_rotate_is_in_display_frame() {
        let list = [
            Transform::Rotate(RotateParams {
                angle: Orientation::Deg90,
            }),
            Transform::Crop(CropBox::from_rect(&Rect::new(0.0, 0.0, 0.5, 1.0))),
        ];
        let (o, crop) = decode(&list).unwrap();
        assert_eq!(o, Orientation::Deg90);
        assert_rect_close(crop.unwrap(), Rect::new(0.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn rejects_invalid_lists() {
        let crop = Transform::Crop(CropBox::from_rect(&Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert!(decode(&[crop, crop]).is_err());
        assert!(from_json(r#"[{"name":"image.rotate","params":{"angle":45}}]"#).is_err());
        assert!(from_json(r#"[{"name":"image.blur","params":{}}]"#).is_err());
    }

    #[test]
    fn parses_persisted_json() {
        let json = r#"[
            {"name": "image.crop", "params": {"top": 0.1, "left": 0.2, "bottom": 0.9, "right": 0.8}},
            {"name": "image.rotate", "params": {"angle": 180}}
        ]"#;
        let transforms = from_json(json).unwrap();
        let (o, crop) = decode(&transforms).unwrap();
        assert_eq!(o, Orientation::Deg180);
        assert_rect_close(crop.unwrap(), Rect::new(0.2, 0.1, 0.8, 0.9));
    }
}
