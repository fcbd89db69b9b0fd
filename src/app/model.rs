// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Image editor state: the host around one crop region.

use crate::app::view::canvas;
use crate::app::view::crop::{
    CropInteraction, GestureState, HitTarget, PointerEvent, PointerSource, cursor_for,
};
use crate::config::EditorConfig;
use crate::constant::GEOMETRY_EPSILON;
use crate::domain::crop::{CropRegion, Placement};
use crate::domain::document::operations::transform::{self, Transform};
use crate::domain::geometry::{Orientation, Point, Rect, Size};

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewMode {
    /// Scale down to the viewport, never enlarge.
    #[default]
    Fit,
    ActualSize,
    Custom(f64),
}

impl ViewMode {
    pub fn zoom_factor(&self) -> Option<f64> {
        match self {
            ViewMode::Fit => None,
            ViewMode::ActualSize => Some(1.0),
            ViewMode::Custom(z) => Some(*z),
        }
    }
}

// =============================================================================
// Model
// =============================================================================

/// Editor for one image: owns the crop region and the gesture state.
pub struct ImageEditor<S: PointerSource> {
    // Image.
    image_url: String,
    image_size: Size,

    // View.
    view_mode: ViewMode,
    viewport: Size,

    // Crop.
    config: EditorConfig,
    crop: CropRegion,
    interaction: CropInteraction<S>,

    // Lifecycle.
    initialized: bool,
    destroyed: bool,
}

impl<S: PointerSource> ImageEditor<S> {
    pub fn new(
        image_url: impl Into<String>,
        image_size: Size,
        config: EditorConfig,
        source: S,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        anyhow::ensure!(
            !image_size.is_empty(),
            "image size must be positive, got {}x{}",
            image_size.width,
            image_size.height
        );

        let crop = CropRegion::new(config.aspect_ratio, config.fixed_aspect_ratio)?;
        let interaction = CropInteraction::new(source, &config);

        Ok(Self {
            image_url: image_url.into(),
            image_size,
            view_mode: ViewMode::Fit,
            viewport: Size::default(),
            config,
            crop,
            interaction,
            initialized: false,
            destroyed: false,
        })
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn crop(&self) -> &CropRegion {
        &self.crop
    }

    pub fn interaction(&self) -> &CropInteraction<S> {
        &self.interaction
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Fits the image into the viewport and computes the initial crop.
    pub fn init(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.initialized = true;
        self.refit();
        self.crop.reset();
        log::debug!("Editor for {} initialized in {viewport:?}", self.image_url);
    }

    /// Re-fits after the viewport changed size.
    ///
    /// Like every bounds change, this ends a running gesture: its snapshot
    /// and extents are in the old pixel scale.
    pub fn resize_viewport(&mut self, viewport: Size) {
        self.interaction.cancel();
        self.viewport = viewport;
        self.refit();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.interaction.cancel();
        self.view_mode = view_mode;
        self.refit();
    }

    /// Applies bounds measured by the host.
    pub fn set_bounds(&mut self, offset: Point, size: Size) {
        self.interaction.cancel();
        self.crop.set_bounds(Rect::from_origin_size(offset, size));
    }

    pub fn reset(&mut self) {
        self.interaction.cancel();
        self.crop.reset();
    }

    /// Restores orientation and crop fractions; `None` resets the crop.
    pub fn set(&mut self, orientation: Orientation, fractions: Option<Rect>) {
        self.interaction.cancel();
        if orientation != self.crop.orientation() {
            self.crop.set_orientation(orientation);
            self.refit();
        }
        self.crop.set(orientation, fractions);
    }

    /// Turns the image a quarter counter-clockwise.
    ///
    /// The crop is reset unless `preserve_crop_on_rotate` is set and the
    /// selection's shape can survive the turn (free or square ratio).
    pub fn rotate(&mut self) {
        self.interaction.cancel();

        let previous = self.crop.orientation();
        let fractions = self.crop.crop_fraction();
        let next = previous.rotated_ccw();

        self.crop.set_orientation(next);
        self.refit();

        let square = self
            .crop
            .policy()
            .ratio()
            .is_none_or(|ratio| (ratio - 1.0).abs() < GEOMETRY_EPSILON);

        if self.config.preserve_crop_on_rotate && square {
            let unit = Size::new(1.0, 1.0);
            let image = previous.rect_to_image_space(fractions, unit);
            let remapped = next.rect_to_screen_space(image, unit);
            self.crop.set(next, Some(remapped));
        } else {
            if self.config.preserve_crop_on_rotate {
                log::debug!("Fixed aspect ratio cannot survive rotation, resetting crop");
            }
            self.crop.reset();
        }
        log::debug!("Rotated {previous} -> {next}");
    }

    /// Ends any gesture and marks the editor closed.
    pub fn destroy(&mut self) {
        self.interaction.cancel();
        self.destroyed = true;
        log::debug!("Editor for {} destroyed", self.image_url);
    }

    /// Feeds a pointer event. Returns true if the region may have changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.interaction.handle(&mut self.crop, event)
    }

    /// CSS cursor for a host position.
    pub fn cursor_at(&self, position: Point) -> &'static str {
        match self.interaction.state() {
            GestureState::Idle => {
                cursor_for(self.interaction.hit_test(&self.crop, position))
            }
            _ => match self.interaction.resize().session() {
                Some(session) => cursor_for(HitTarget::Handle(session.anchor)),
                None => cursor_for(HitTarget::Body),
            },
        }
    }

    pub fn region(&self) -> Rect {
        self.crop.region()
    }

    pub fn crop_fraction(&self) -> Rect {
        self.crop.crop_fraction()
    }

    pub fn orientation(&self) -> Orientation {
        self.crop.orientation()
    }

    pub fn placement(&self) -> &Placement {
        self.crop.placement()
    }

    /// Current state in the persisted transform form.
    pub fn transforms(&self) -> Vec<Transform> {
        transform::encode(self.crop.orientation(), self.crop.crop_fraction())
    }

    /// Restores a persisted transform list.
    pub fn restore(&mut self, transforms: &[Transform]) -> anyhow::Result<()> {
        let (orientation, fractions) = transform::decode(transforms)?;
        self.set(orientation, fractions);
        Ok(())
    }

    fn refit(&mut self) {
        if !self.initialized {
            return;
        }
        let bounds = canvas::layout(
            self.image_size,
            self.viewport,
            self.crop.orientation(),
            self.view_mode,
        );
        self.crop.set_bounds(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::crop::{NullSource, PointerKind};

    fn editor(config: EditorConfig) -> ImageEditor<NullSource> {
        let mut editor =
            ImageEditor::new("photo.jpg", Size::new(800.0, 400.0), config, NullSource).unwrap();
        editor.init(Size::new(400.0, 400.0));
        editor
    }

    #[test]
    fn init_fits_and_resets() {
        let editor = editor(EditorConfig::default());
        assert_eq!(editor.crop().bounds(), Rect::new(0.0, 100.0, 400.0, 300.0));
        assert_eq!(editor.region(), Rect::new(100.0, 0.0, 300.0, 200.0));
    }

    #[test]
    fn rejects_empty_image() {
        let result = ImageEditor::new("x", Size::new(0.0, 10.0), EditorConfig::default(), NullSource);
        assert!(result.is_err());
    }

    #[test]
    fn rotate_refits_and_resets_by_default() {
        let mut editor = editor(EditorConfig::default());
        editor.crop.set_region(Rect::new(0.0, 0.0, 50.0, 50.0));
        editor.rotate();
        assert_eq!(editor.orientation(), Orientation::Deg270);
        assert_eq!(editor.crop().bounds(), Rect::new(100.0, 0.0, 300.0, 400.0));
        assert_eq!(editor.region(), Rect::new(0.0, 100.0, 200.0, 300.0));
    }

    #[test]
    fn four_rotations_restore_orientation() {
        let mut editor = editor(EditorConfig::default());
        for _ in 0..4 {
            editor.rotate();
        }
        assert_eq!(editor.orientation(), Orientation::Deg0);
        assert_eq!(editor.crop().bounds(), Rect::new(0.0, 100.0, 400.0, 300.0));
    }

    #[test]
    fn rotate_can_preserve_free_crop() {
        let config = EditorConfig {
            preserve_crop_on_rotate: true,
            ..EditorConfig::default()
        };
        let mut editor = editor(config);
        // Left quarter of the upright image.
        editor.set(Orientation::Deg0, Some(Rect::new(0.0, 0.0, 0.25, 1.0)));
        editor.rotate();
        // Turned counter-clockwise, the left edge becomes the bottom edge.
        let fractions = editor.crop_fraction();
        for (a, b) in [
            (fractions.x1, 0.0),
            (fractions.y1, 0.75),
            (fractions.x2, 1.0),
            (fractions.y2, 1.0),
        ] {
            assert!((a - b).abs() < 1e-9, "{fractions:?}");
        }
    }

    #[test]
    fn transforms_round_trip_through_restore() {
        let mut editor = editor(EditorConfig::default());
        editor.rotate();
        editor.set(Orientation::Deg270, Some(Rect::new(0.1, 0.2, 0.5, 0.6)));
        let saved = editor.transforms();

        let mut other = self::editor(EditorConfig::default());
        other.restore(&saved).unwrap();
        assert_eq!(other.orientation(), Orientation::Deg270);
        let fractions = other.crop_fraction();
        assert!((fractions.x1 - 0.1).abs() < 1e-9);
        assert!((fractions.y2 - 0.6).abs() < 1e-9);
    }

    #[test]
    fn reversed_crop_saves_and_reloads() {
        let mut editor = editor(EditorConfig::default());
        editor.set(Orientation::Deg0, Some(Rect::new(0.5, 0.5, 0.2, 0.2)));
        assert!(editor.region().is_empty());

        let saved = editor.transforms();
        assert!(saved.is_empty());

        let mut other = self::editor(EditorConfig::default());
        other.set(Orientation::Deg0, Some(Rect::new(0.0, 0.0, 0.1, 0.1)));
        other.restore(&saved).unwrap();
        // No crop entry reads back as a fresh reset.
        assert_eq!(other.region(), Rect::new(100.0, 0.0, 300.0, 200.0));
    }

    #[test]
    fn transforms_before_init_reload() {
        let editor =
            ImageEditor::new("photo.jpg", Size::new(800.0, 400.0), EditorConfig::default(), NullSource)
                .unwrap();
        let saved = editor.transforms();
        let mut other = self::editor(EditorConfig::default());
        other.restore(&saved).unwrap();
        assert_eq!(other.orientation(), Orientation::Deg0);
    }

    #[test]
    fn viewport_change_ends_resize_gesture() {
        let config = EditorConfig {
            aspect_ratio: Some(2.0),
            fixed_aspect_ratio: true,
            ..EditorConfig::default()
        };
        let mut editor = editor(config);
        editor.crop.set_region(Rect::new(0.0, 0.0, 200.0, 100.0));
        // Bounds start at (0,100); the se handle is at (200,200).
        editor.handle_pointer(PointerEvent::Down {
            position: Point::new(200.0, 200.0),
            kind: PointerKind::Mouse(0),
        });
        assert!(editor.interaction().is_active());

        editor.resize_viewport(Size::new(200.0, 200.0));
        assert!(!editor.interaction().is_active());
        let rescaled = editor.region();
        assert_eq!(rescaled, Rect::new(0.0, 0.0, 100.0, 50.0));

        assert!(!editor.handle_pointer(PointerEvent::Move {
            position: Point::new(300.0, 300.0),
        }));
        assert_eq!(editor.region(), rescaled);
    }

    #[test]
    fn bounds_and_reset_end_drag_gesture() {
        let mut editor = editor(EditorConfig::default());
        let press = PointerEvent::Down {
            position: Point::new(200.0, 200.0),
            kind: PointerKind::Mouse(0),
        };

        editor.handle_pointer(press);
        assert!(editor.interaction().is_active());
        editor.set_bounds(Point::new(0.0, 100.0), Size::new(200.0, 100.0));
        assert!(!editor.interaction().is_active());

        let center = PointerEvent::Down {
            position: editor.crop().absolute_region().center(),
            kind: PointerKind::Mouse(0),
        };
        editor.handle_pointer(center);
        assert!(editor.interaction().is_active());
        editor.reset();
        assert!(!editor.interaction().is_active());

        editor.handle_pointer(center);
        assert!(editor.interaction().is_active());
        editor.set_view_mode(ViewMode::ActualSize);
        assert!(!editor.interaction().is_active());
    }

    #[test]
    fn cursor_reflects_hit_target() {
        let editor = editor(EditorConfig::default());
        // Region (100,0)-(300,200) local, bounds offset (0,100).
        assert_eq!(editor.cursor_at(Point::new(200.0, 200.0)), "move");
        assert_eq!(editor.cursor_at(Point::new(300.0, 300.0)), "se-resize");
        assert_eq!(editor.cursor_at(Point::new(5.0, 5.0)), "default");
    }
}
