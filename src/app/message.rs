// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Editor messages: host events and user actions.

use crate::app::model::ViewMode;
use crate::app::view::crop::PointerEvent;
use crate::domain::document::Transform;
use crate::domain::geometry::{Point, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMessage {
    // Lifecycle.
    Init { viewport: Size },
    Destroy,

    // Layout.
    ViewportResized(Size),
    BoundsMeasured { offset: Point, size: Size },
    SetViewMode(ViewMode),

    // Pointer input.
    Pointer(PointerEvent),

    // Crop operations.
    RotateCCW,
    Reset,
    Restore(Vec<Transform>),
}
