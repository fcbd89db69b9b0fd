// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/mod.rs
//
// Transform operations on documents.

pub mod crop;
pub mod transform;
