// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/pointer.rs
//
// Pointer events and the per-editor event source abstraction.

use crate::config::PointerSpace;
use crate::domain::geometry::{Orientation, Point};

/// Which device produced a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse with the pressed button index (0 = primary).
    Mouse(u8),
    Touch,
}

impl PointerKind {
    /// Primary mouse button or any touch.
    pub fn is_primary(self) -> bool {
        matches!(self, PointerKind::Mouse(0) | PointerKind::Touch)
    }
}

/// Pointer input as reported by the host, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point, kind: PointerKind },
    Move { position: Point },
    Up,
    TouchEnd,
    /// Mouse-out. `related` is set when the pointer moved onto another
    /// element rather than leaving the window.
    Leave { related: bool },
}

impl PointerEvent {
    /// Returns true for events that end an active gesture.
    pub fn ends_gesture(&self) -> bool {
        matches!(
            self,
            PointerEvent::Up | PointerEvent::TouchEnd | PointerEvent::Leave { related: false }
        )
    }
}

/// Source of move/up events for one editor instance.
///
/// The interaction attaches when a gesture starts and detaches when it
/// ends, so the host only routes window-wide moves while a gesture runs.
pub trait PointerSource {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Source for hosts that route every event unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSource;

impl PointerSource for NullSource {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}

/// Displacement from `origin` to `position`, mapped onto screen axes.
pub fn pointer_delta(
    origin: Point,
    position: Point,
    orientation: Orientation,
    space: PointerSpace,
) -> Point {
    let delta = position - origin;
    match space {
        PointerSpace::Screen => delta,
        PointerSpace::Image => orientation.to_screen_space(delta),
    }
}
