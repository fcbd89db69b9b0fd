// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Editor host: state, messages and the update loop.

pub mod message;
pub mod model;
pub mod update;
pub mod view;

pub use message::EditorMessage;
pub use model::{ImageEditor, ViewMode};
pub use update::{UpdateResult, update};
