// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orbit mode state machine and its click filtering.

use kurbo::Point;

use crate::camera::OrbitCamera;

/// Clicks are ignored for this long after entering orbit mode or switching
/// shapes, so the click that triggered the switch never opens a detail view.
pub const CLICK_SUPPRESSION_MS: f64 = 1500.0;

/// A click this soon after the previous one is a candidate duplicate.
pub const CLICK_DEDUP_MS: f64 = 100.0;

/// A candidate duplicate is dropped unless the pointer moved past this.
pub const CLICK_DEDUP_PX: f64 = 5.0;

/// Starting orbit distance for compact shapes (sphere, star).
pub const NEAR_SHAPE_DISTANCE: f64 = 5000.0;

/// Starting orbit distance for everything else.
pub const FAR_SHAPE_DISTANCE: f64 = 10_000.0;

/// Starting orbit distance for a shape, by name.
///
/// Compact shapes fill a smaller bounding volume and read better from up
/// close.
#[must_use]
pub fn initial_distance_for(shape: &str) -> f64 {
    match shape {
        "sphere" | "star" => NEAR_SHAPE_DISTANCE,
        _ => FAR_SHAPE_DISTANCE,
    }
}

/// Whether the 3D orbit view is active, and for which shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum OrbitMode {
    /// The flat board is shown; orbit input is ignored.
    #[default]
    Disabled,
    /// The orbit view is active.
    Enabled {
        /// Name of the shape the billboards are arranged into.
        shape: String,
        /// Timestamp of mode entry, anchoring the click-suppression window.
        entered_at_ms: f64,
    },
}

/// Owns the orbit camera, the mode flag, and the click filter.
///
/// Entering orbit mode (or switching shapes while in it) resets the camera
/// to face the shape head-on at the shape's starting distance and arms the
/// suppression window. The duplicate filter additionally drops clicks that
/// land within [`CLICK_DEDUP_MS`] of the previous accepted click without the
/// pointer moving more than [`CLICK_DEDUP_PX`] on either axis; hosts see
/// those when a synthetic event echoes a real one.
#[derive(Clone, Debug)]
pub struct OrbitController {
    mode: OrbitMode,
    camera: OrbitCamera,
    last_click_ms: f64,
    last_click_pos: Point,
}

impl OrbitController {
    /// Creates a disabled controller.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: OrbitMode::Disabled,
            camera: OrbitCamera::new(FAR_SHAPE_DISTANCE),
            last_click_ms: f64::NEG_INFINITY,
            last_click_pos: Point::new(-9999.0, -9999.0),
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> &OrbitMode {
        &self.mode
    }

    /// Returns `true` while the orbit view is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self.mode, OrbitMode::Enabled { .. })
    }

    /// Name of the active shape, if any.
    #[must_use]
    pub fn shape(&self) -> Option<&str> {
        match &self.mode {
            OrbitMode::Disabled => None,
            OrbitMode::Enabled { shape, .. } => Some(shape),
        }
    }

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// The orbit camera, mutably; drag and wheel handlers steer it here.
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Enters orbit mode for `shape`, resetting the camera and re-arming the
    /// click-suppression window. Switching shapes while enabled re-enters.
    pub fn enter(&mut self, shape: impl Into<String>, now_ms: f64) {
        let shape = shape.into();
        self.camera = OrbitCamera::new(initial_distance_for(&shape));
        self.mode = OrbitMode::Enabled {
            shape,
            entered_at_ms: now_ms,
        };
        self.last_click_ms = f64::NEG_INFINITY;
        self.last_click_pos = Point::new(-9999.0, -9999.0);
    }

    /// Leaves orbit mode. A no-op when already disabled.
    pub fn exit(&mut self) {
        self.mode = OrbitMode::Disabled;
    }

    /// Runs a click through the suppression and duplicate filters.
    ///
    /// Returns `true` when the click should be forwarded to picking; in that
    /// case it becomes the new dedup anchor.
    pub fn accept_click(&mut self, pos: Point, now_ms: f64) -> bool {
        let OrbitMode::Enabled { entered_at_ms, .. } = self.mode else {
            return false;
        };
        if now_ms - entered_at_ms < CLICK_SUPPRESSION_MS {
            return false;
        }
        let moved = (pos.x - self.last_click_pos.x).abs() > CLICK_DEDUP_PX
            || (pos.y - self.last_click_pos.y).abs() > CLICK_DEDUP_PX;
        if now_ms - self.last_click_ms < CLICK_DEDUP_MS && !moved {
            return false;
        }
        self.last_click_ms = now_ms;
        self.last_click_pos = pos;
        true
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}
