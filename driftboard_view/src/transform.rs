// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan/zoom camera over the infinite board.

use kurbo::{Point, Rect, Size, Vec2};

/// Smallest permitted zoom factor.
pub const MIN_SCALE: f64 = 0.1;

/// Largest permitted zoom factor.
pub const MAX_SCALE: f64 = 3.0;

/// Pan offset plus uniform scale mapping board (world) space into the view.
///
/// A world point `w` appears at view point `w * scale + pan`. The scale is
/// clamped into `[MIN_SCALE, MAX_SCALE]` by every mutation, so conversions
/// never divide by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardTransform {
    pan: Vec2,
    scale: f64,
}

impl BoardTransform {
    /// Identity transform: no pan, scale 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Current pan offset in view units.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Current uniform zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Moves the view by a delta in view units.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Restores the identity transform.
    pub fn reset(&mut self) {
        self.pan = Vec2::ZERO;
        self.scale = 1.0;
    }

    /// Multiplies the zoom by `factor`, keeping the world point under
    /// `anchor_view` fixed on screen.
    ///
    /// Non-positive factors are ignored; the resulting scale is clamped into
    /// the permitted range.
    pub fn zoom_about(&mut self, anchor_view: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return;
        }
        let world = self.view_to_world(anchor_view);
        self.scale = new_scale;
        self.pan = anchor_view.to_vec2() - world.to_vec2() * self.scale;
    }

    /// Converts a world point into view coordinates.
    #[must_use]
    pub fn world_to_view(&self, world: Point) -> Point {
        (world.to_vec2() * self.scale + self.pan).to_point()
    }

    /// Converts a view point into world coordinates.
    #[must_use]
    pub fn view_to_world(&self, view: Point) -> Point {
        ((view.to_vec2() - self.pan) / self.scale).to_point()
    }

    /// World-space rectangle visible through a view of the given size.
    #[must_use]
    pub fn visible_world_rect(&self, viewport: Size) -> Rect {
        let origin = self.view_to_world(Point::ZERO);
        let corner = self.view_to_world(Point::new(viewport.width, viewport.height));
        Rect::new(origin.x, origin.y, corner.x, corner.y)
    }
}

impl Default for BoardTransform {
    fn default() -> Self {
        Self::new()
    }
}
