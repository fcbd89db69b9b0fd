// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: geometry, crop model and persisted transforms. No UI concerns.

pub mod crop;
pub mod document;
pub mod geometry;
