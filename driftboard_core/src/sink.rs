// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the engine and the host's presentation layer.

use kurbo::Point;

use crate::icon::Icon;

/// One frame's worth of visual state for a single icon.
///
/// Produced by the animation driver and consumed by [`PresentationSink`]
/// implementations. `z_index` is `None` when the stacking order did not move
/// far enough from the last applied value to be worth re-applying.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameVisual {
    /// Board-space position of the tile's top-left corner.
    pub position: Point,
    /// Depth-derived uniform scale factor.
    pub scale: f64,
    /// Tile edge length after depth scaling.
    pub size: f64,
    /// New stacking order, when it changed significantly.
    pub z_index: Option<i32>,
}

/// Host-implemented sink for visual handle lifecycle and per-frame updates.
///
/// Icons are addressed by their dense store index. The engine guarantees it
/// only calls [`show`](Self::show), [`hide`](Self::hide),
/// [`destroy`](Self::destroy), and [`apply`](Self::apply) for indices it
/// previously passed to [`create`](Self::create), and that `destroy` is only
/// issued for handles that have been hidden for a bounded delay.
///
/// Implementations own the actual visual objects (DOM nodes, sprites,
/// textures). All calls happen synchronously on the host's UI thread.
pub trait PresentationSink {
    /// Creates a visual handle for the icon. Called at most once per icon
    /// while the previous handle (if any) is destroyed.
    fn create(&mut self, index: usize, icon: &Icon);

    /// Makes an existing handle visible.
    fn show(&mut self, index: usize);

    /// Hides an existing handle without destroying it.
    fn hide(&mut self, index: usize);

    /// Destroys a handle after it stayed hidden past the cleanup delay.
    fn destroy(&mut self, index: usize);

    /// Applies one frame's position/scale/stacking update to a handle.
    fn apply(&mut self, index: usize, visual: &FrameVisual);
}
