// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop interaction module: pointer events, hit testing and gesture controllers.

pub mod drag;
pub mod overlay;
pub mod pointer;
pub mod resize;
mod selection;

pub use drag::{DragController, DragSession};
pub use overlay::{HitTarget, cursor_for, hit_test};
pub use pointer::{NullSource, PointerEvent, PointerKind, PointerSource};
pub use resize::{ResizeController, ResizeSession};
pub use selection::{CropInteraction, GestureState};
