// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View layer: image layout and crop interaction.

pub mod canvas;
pub mod crop;
