// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Engine constants that should not be changed by the user.

/// Rotation step in degrees (90 = quarter turn).
pub const ROTATION_STEP: i32 = 90;

/// Full rotation in degrees (for modulo calculation in angle normalization).
pub const FULL_ROTATION: i32 = 360;

/// Aspect ratio used by `reset()` when none is configured.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

/// Tolerance for geometric comparisons (float precision in ratio checks).
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Tolerance for persisted crop fractions slightly outside [0, 1].
pub const FRACTION_EPSILON: f64 = 1e-3;

/// Default smallest edge length a resize may produce, in pixels.
pub const MIN_REGION_SIZE: f64 = 1.0;

/// Default square hit area around each resize handle, in pixels.
pub const HANDLE_HIT_SIZE: f64 = 24.0;

/// Config directory name below the platform config dir.
pub const CONFIG_DIR: &str = "cropset";

/// Config file name inside `CONFIG_DIR`.
pub const CONFIG_FILE: &str = "config.toml";

/// Persisted transform name for crops.
pub const TRANSFORM_CROP: &str = "image.crop";

/// Persisted transform name for rotations.
pub const TRANSFORM_ROTATE: &str = "image.rotate";
