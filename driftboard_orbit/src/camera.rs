// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spherical orbit camera.

use std::f64::consts::FRAC_PI_2;

use kurbo::Vec2;

use crate::vec3::Vec3;

/// Closest the camera may come to the shape center.
pub const MIN_DISTANCE: f64 = 2000.0;

/// Farthest the camera may retreat from the shape center.
pub const MAX_DISTANCE: f64 = 20_000.0;

/// Radians of rotation per pixel of drag.
pub const ROTATE_GAIN: f64 = 0.01;

/// Per-notch distance multiplier when zooming out.
pub const ZOOM_OUT_STEP: f64 = 1.1;

/// Per-notch distance multiplier when zooming in.
pub const ZOOM_IN_STEP: f64 = 0.9;

/// A camera orbiting the origin on a sphere, always looking at the center.
///
/// Yaw is unbounded; pitch is clamped to ±π/2 so the camera never flips over
/// the poles, and distance is clamped into
/// [`MIN_DISTANCE`, `MAX_DISTANCE`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    yaw: f64,
    pitch: f64,
    distance: f64,
}

impl OrbitCamera {
    /// Creates a camera at the given distance, looking along -z.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
        }
    }

    /// Horizontal orbit angle in radians.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Vertical orbit angle in radians, within ±π/2.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Distance from the shape center.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Applies a drag delta in pixels: x turns yaw, y tilts pitch.
    pub fn rotate_by(&mut self, delta_px: Vec2) {
        self.yaw += delta_px.x * ROTATE_GAIN;
        self.pitch = (self.pitch + delta_px.y * ROTATE_GAIN).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Multiplies the orbit distance by `factor`, clamped into range.
    ///
    /// Wheel handlers pass [`ZOOM_OUT_STEP`] or [`ZOOM_IN_STEP`] per notch.
    /// Non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// World position of the camera on its orbit sphere.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.yaw.sin() * self.pitch.cos(),
            self.distance * self.pitch.sin(),
            self.distance * self.yaw.cos() * self.pitch.cos(),
        )
    }
}
