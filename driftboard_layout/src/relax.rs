// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Iterative overlap resolution between placed points.

use kurbo::{Point, Vec2};

/// Iteration cap for [`relax_overlaps`].
pub const MAX_RELAX_PASSES: usize = 10;

/// Pushes pairs of points apart until no pair is closer than `min_distance`
/// or `max_passes` full passes have run.
///
/// Each pass scans all ordered pairs; whenever the scanned point is closer
/// than `min_distance` to another, it is moved to exactly `min_distance`
/// away along the angle connecting the two. Coincident points are pushed
/// along the positive x axis. A pass that finds no violation ends the loop
/// early.
///
/// This is an iterative repulsion with no convergence guarantee: a fix for
/// one pair can create a new violation elsewhere, and residual overlap may
/// remain once the cap is exhausted. That residual is accepted layout
/// output, not an error — raising the cap would change observable layouts.
///
/// Returns `true` if the final pass was violation-free.
pub fn relax_overlaps(points: &mut [Point], min_distance: f64, max_passes: usize) -> bool {
    for _ in 0..max_passes {
        let mut any_overlap = false;
        for i in 0..points.len() {
            for j in 0..points.len() {
                if i == j {
                    continue;
                }
                let delta = points[i] - points[j];
                if delta.hypot() < min_distance {
                    any_overlap = true;
                    let angle = delta.y.atan2(delta.x);
                    points[i] =
                        points[j] + Vec2::new(angle.cos(), angle.sin()) * min_distance;
                }
            }
        }
        if !any_overlap {
            return true;
        }
    }
    false
}
