// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling for the image editor.

use super::message::EditorMessage;
use super::model::ImageEditor;
use crate::app::view::crop::PointerSource;

/// What the host has to do after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    None,
    /// The region, bounds or orientation changed.
    Repaint,
}

pub fn update<S: PointerSource>(
    editor: &mut ImageEditor<S>,
    message: EditorMessage,
) -> anyhow::Result<UpdateResult> {
    if editor.is_destroyed() {
        log::warn!("Ignoring {message:?} after destroy");
        return Ok(UpdateResult::None);
    }

    match message {
        EditorMessage::Init { viewport } => {
            editor.init(viewport);
        }
        EditorMessage::Destroy => {
            editor.destroy();
            return Ok(UpdateResult::None);
        }
        EditorMessage::ViewportResized(viewport) => {
            editor.resize_viewport(viewport);
        }
        EditorMessage::BoundsMeasured { offset, size } => {
            editor.set_bounds(offset, size);
        }
        EditorMessage::SetViewMode(view_mode) => {
            editor.set_view_mode(view_mode);
        }
        EditorMessage::Pointer(event) => {
            if !editor.handle_pointer(event) {
                return Ok(UpdateResult::None);
            }
        }
        EditorMessage::RotateCCW => {
            editor.rotate();
        }
        EditorMessage::Reset => {
            editor.reset();
        }
        EditorMessage::Restore(transforms) => {
            editor.restore(&transforms)?;
        }
    }

    Ok(UpdateResult::Repaint)
}
