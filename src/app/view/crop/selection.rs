// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Crop interaction: routes pointer events to the drag and resize controllers.

use crate::config::{EditorConfig, PointerSpace};
use crate::domain::crop::CropRegion;
use crate::domain::geometry::Point;

use super::drag::DragController;
use super::overlay::{HitTarget, hit_test};
use super::pointer::{PointerEvent, PointerSource};
use super::resize::ResizeController;

/// Which gesture, if any, is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

/// Gesture state machine for one editor.
///
/// At most one controller holds a session at a time. The pointer source is
/// attached for the lifetime of a session only.
pub struct CropInteraction<S: PointerSource> {
    source: S,
    drag: DragController,
    resize: ResizeController,
    pointer_space: PointerSpace,
    min_region_size: f64,
    handle_hit_size: f64,
}

impl<S: PointerSource> CropInteraction<S> {
    pub fn new(source: S, config: &EditorConfig) -> Self {
        Self {
            source,
            drag: DragController::default(),
            resize: ResizeController::default(),
            pointer_space: config.pointer_space,
            min_region_size: config.min_region_size,
            handle_hit_size: config.handle_hit_size,
        }
    }

    pub fn state(&self) -> GestureState {
        if self.drag.is_active() {
            GestureState::Dragging
        } else if self.resize.is_active() {
            GestureState::Resizing
        } else {
            GestureState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() != GestureState::Idle
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn resize(&self) -> &ResizeController {
        &self.resize
    }

    /// Hit-tests a host position against the current region.
    pub fn hit_test(&self, crop: &CropRegion, position: Point) -> HitTarget {
        hit_test(&crop.absolute_region(), position, self.handle_hit_size)
    }

    /// Feeds one pointer event. Returns true if the region may have changed.
    pub fn handle(&mut self, crop: &mut CropRegion, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position, kind } => {
                if self.is_active() || !kind.is_primary() {
                    return false;
                }
                match self.hit_test(crop, position) {
                    HitTarget::Body => {
                        self.drag.begin(crop, position);
                        self.source.attach();
                    }
                    HitTarget::Handle(anchor) => {
                        self.resize
                            .begin(crop, anchor, position, self.min_region_size);
                        self.source.attach();
                    }
                    HitTarget::Outside => {}
                }
                false
            }
            PointerEvent::Move { position } => match self.state() {
                GestureState::Dragging => self.drag.update(crop, position, self.pointer_space),
                GestureState::Resizing => self.resize.update(crop, position, self.pointer_space),
                GestureState::Idle => false,
            },
            event if event.ends_gesture() => {
                self.cancel();
                false
            }
            // Mouse-out onto a child element.
            _ => false,
        }
    }

    /// Abandons any running gesture and detaches the source.
    pub fn cancel(&mut self) {
        if self.is_active() {
            self.drag.end();
            self.resize.end();
            self.source.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::crop::pointer::PointerKind;
    use crate::domain::crop::Anchor;
    use crate::domain::geometry::Rect;

    #[derive(Default)]
    struct CountingSource {
        attached: usize,
        detached: usize,
    }

    impl PointerSource for CountingSource {
        fn attach(&mut self) {
            self.attached += 1;
        }

        fn detach(&mut self) {
            self.detached += 1;
        }
    }

    fn setup() -> (CropInteraction<CountingSource>, CropRegion) {
        let mut crop = CropRegion::new(None, false).unwrap();
        crop.set_bounds(Rect::new(10.0, 10.0, 410.0, 410.0));
        crop.set_region(Rect::new(50.0, 50.0, 150.0, 150.0));
        let interaction = CropInteraction::new(CountingSource::default(), &EditorConfig::default());
        (interaction, crop)
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            kind: PointerKind::Mouse(0),
        }
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn body_press_starts_drag_and_attaches() {
        let (mut interaction, mut crop) = setup();
        interaction.handle(&mut crop, down(110.0, 110.0));
        assert_eq!(interaction.state(), GestureState::Dragging);
        assert_eq!(interaction.source().attached, 1);

        assert!(interaction.handle(&mut crop, moved(130.0, 100.0)));
        assert_eq!(crop.region(), Rect::new(70.0, 40.0, 170.0, 140.0));

        interaction.handle(&mut crop, PointerEvent::Up);
        assert_eq!(interaction.state(), GestureState::Idle);
        assert_eq!(interaction.source().detached, 1);
    }

    #[test]
    fn handle_press_starts_resize() {
        let (mut interaction, mut crop) = setup();
        // SE handle sits at the region's bottom-right in host coordinates.
        interaction.handle(&mut crop, down(160.0, 160.0));
        assert_eq!(interaction.state(), GestureState::Resizing);
        assert_eq!(interaction.resize().session().unwrap().anchor, Anchor::SE);

        interaction.handle(&mut crop, moved(200.0, 170.0));
        assert_eq!(crop.region(), Rect::new(50.0, 50.0, 190.0, 160.0));
    }

    #[test]
    fn secondary_button_and_outside_press_are_ignored() {
        let (mut interaction, mut crop) = setup();
        interaction.handle(
            &mut crop,
            PointerEvent::Down {
                position: Point::new(110.0, 110.0),
                kind: PointerKind::Mouse(2),
            },
        );
        interaction.handle(&mut crop, down(400.0, 400.0));
        assert_eq!(interaction.state(), GestureState::Idle);
        assert_eq!(interaction.source().attached, 0);
        assert!(!interaction.handle(&mut crop, moved(300.0, 300.0)));
    }

    #[test]
    fn leave_onto_child_keeps_gesture() {
        let (mut interaction, mut crop) = setup();
        interaction.handle(&mut crop, down(110.0, 110.0));
        interaction.handle(&mut crop, PointerEvent::Leave { related: true });
        assert_eq!(interaction.state(), GestureState::Dragging);
        interaction.handle(&mut crop, PointerEvent::Leave { related: false });
        assert_eq!(interaction.state(), GestureState::Idle);
    }

    #[test]
    fn second_press_during_gesture_is_ignored() {
        let (mut interaction, mut crop) = setup();
        interaction.handle(&mut crop, down(110.0, 110.0));
        interaction.handle(&mut crop, down(160.0, 160.0));
        assert_eq!(interaction.state(), GestureState::Dragging);
        assert_eq!(interaction.source().attached, 1);
    }

    #[test]
    fn touch_end_finishes_touch_gesture() {
        let (mut interaction, mut crop) = setup();
        interaction.handle(
            &mut crop,
            PointerEvent::Down {
                position: Point::new(110.0, 110.0),
                kind: PointerKind::Touch,
            },
        );
        assert!(interaction.is_active());
        interaction.handle(&mut crop, PointerEvent::TouchEnd);
        assert!(!interaction.is_active());
        assert_eq!(interaction.source().detached, 1);
    }
}
