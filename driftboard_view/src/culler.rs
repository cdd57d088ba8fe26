// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttled visibility passes over the icon store.

use driftboard_core::IconStore;
use hashbrown::{HashMap, HashSet};
use kurbo::Size;
use smallvec::SmallVec;

use crate::transform::BoardTransform;

/// Newly shown icons whose media is loaded eagerly, ahead of the lazy queue.
pub const EAGER_LOAD_LIMIT: usize = 20;

/// Visible-region margin, as a multiple of the icon edge length.
const MARGIN_FACTOR: f64 = 1.5;

/// Minimum interval between visibility passes outside of drags.
const CULL_INTERVAL_MS: f64 = 150.0;

/// How long a handle may stay hidden before it is reaped.
const REAP_DELAY_MS: f64 = 10_000.0;

/// Result of one visibility pass.
#[derive(Clone, Debug, Default)]
pub struct CullPass {
    /// Icons that entered the visible region this pass, in index order.
    pub shown: Vec<usize>,
    /// Icons that left the visible region this pass.
    pub hidden: Vec<usize>,
    /// Prefix of `shown` (renderable icons only) to load at full priority.
    pub eager_load: SmallVec<[usize; EAGER_LOAD_LIMIT]>,
    /// Remaining renderable entries of `shown`, queued for lazy loading.
    pub deferred_load: Vec<usize>,
}

/// Decides which icons are on screen and owns their handle lifecycle timing.
///
/// The culler keeps its own throttle clock and hidden-handle bookkeeping as
/// explicit fields, so independent instances (one per board, or per test)
/// never interfere. Time is supplied by the caller in milliseconds on an
/// arbitrary monotonic scale.
#[derive(Clone, Debug)]
pub struct ViewportCuller {
    interval_ms: f64,
    reap_delay_ms: f64,
    last_update_ms: f64,
    visible: HashSet<usize>,
    hidden_at: HashMap<usize, f64>,
}

impl ViewportCuller {
    /// Creates a culler with the default throttle interval and reap delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_intervals(CULL_INTERVAL_MS, REAP_DELAY_MS)
    }

    /// Creates a culler with explicit throttle and reap intervals.
    #[must_use]
    pub fn with_intervals(interval_ms: f64, reap_delay_ms: f64) -> Self {
        Self {
            interval_ms,
            reap_delay_ms,
            last_update_ms: f64::NEG_INFINITY,
            visible: HashSet::new(),
            hidden_at: HashMap::new(),
        }
    }

    /// Indices currently considered visible.
    #[must_use]
    pub fn visible(&self) -> &HashSet<usize> {
        &self.visible
    }

    /// Forces the next [`ViewportCuller::compute_visible`] call to run
    /// regardless of the throttle interval.
    pub fn force(&mut self) {
        self.last_update_ms = f64::NEG_INFINITY;
    }

    /// Runs a visibility pass, unless one ran within the throttle interval.
    ///
    /// An icon is visible iff its axis-aligned bounding box (position to
    /// position + `icon_size`) intersects the camera-mapped world rectangle
    /// inflated by `1.5 * icon_size` on every side. During an active drag
    /// (`dragging`) the throttle is bypassed; panning needs immediate
    /// feedback.
    ///
    /// The pass updates each icon's `VISIBLE` flag and returns the
    /// transitions. Icons without media are tracked as visible but never
    /// appear in the load lists — they cannot render.
    pub fn compute_visible(
        &mut self,
        store: &mut IconStore,
        transform: &BoardTransform,
        viewport: Size,
        icon_size: f64,
        now_ms: f64,
        dragging: bool,
    ) -> Option<CullPass> {
        if now_ms - self.last_update_ms < self.interval_ms && !dragging {
            return None;
        }
        self.last_update_ms = now_ms;

        let margin = icon_size * MARGIN_FACTOR;
        let region = transform
            .visible_world_rect(viewport)
            .inflate(margin, margin);

        let mut pass = CullPass::default();
        for (index, icon) in store.iter_mut().enumerate() {
            let in_region = icon.position.x + icon_size >= region.x0
                && icon.position.x <= region.x1
                && icon.position.y + icon_size >= region.y0
                && icon.position.y <= region.y1;

            if in_region {
                if self.visible.insert(index) {
                    pass.shown.push(index);
                    icon.set_visible(true);
                }
                self.hidden_at.remove(&index);
            } else if self.visible.remove(&index) {
                pass.hidden.push(index);
                icon.set_visible(false);
                if icon.has_handle() {
                    self.hidden_at.insert(index, now_ms);
                }
            }
        }

        for &index in &pass.shown {
            let renderable = store.get(index).is_some_and(driftboard_core::Icon::can_render);
            if !renderable {
                continue;
            }
            if pass.eager_load.len() < EAGER_LOAD_LIMIT {
                pass.eager_load.push(index);
            } else {
                pass.deferred_load.push(index);
            }
        }

        Some(pass)
    }

    /// Destroys handles that stayed hidden past the reap delay.
    ///
    /// Returns the affected indices after clearing their handle flags;
    /// callers forward them to the presentation sink's `destroy`.
    pub fn reap_hidden(&mut self, store: &mut IconStore, now_ms: f64) -> Vec<usize> {
        let delay = self.reap_delay_ms;
        let mut reaped: Vec<usize> = Vec::new();
        self.hidden_at.retain(|&index, &mut hidden_at| {
            if now_ms - hidden_at < delay {
                return true;
            }
            reaped.push(index);
            false
        });
        reaped.sort_unstable();
        for &index in &reaped {
            if let Some(icon) = store.get_mut(index) {
                icon.set_handle(false);
            }
        }
        reaped
    }
}

impl Default for ViewportCuller {
    fn default() -> Self {
        Self::new()
    }
}
