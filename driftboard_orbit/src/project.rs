// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perspective projection and click picking in orbit space.

use driftboard_core::IconId;
use kurbo::{Point, Size};

use crate::billboard::Billboard;
use crate::camera::OrbitCamera;
use crate::vec3::Vec3;

/// Vertical field of view of the orbit projection.
pub const FOV: f64 = std::f64::consts::FRAC_PI_3;

/// Minimum click radius around a billboard, in pixels.
pub const MIN_PICK_RADIUS: f64 = 150.0;

/// Points closer than this to the camera plane are not projectable.
const MIN_PLANE_DISTANCE: f64 = 0.1;

/// Projection of one point, with the distances picking needs.
struct Projected {
    /// Screen position, centered on the viewport, with y negated from
    /// world y.
    screen: Point,
    /// Distance along the camera's look direction.
    plane_distance: f64,
    /// Straight-line distance from the camera to the point.
    camera_distance: f64,
}

fn project_inner(world: Vec3, camera: &OrbitCamera, viewport: Size) -> Option<Projected> {
    let cam = camera.position();
    let to_point = world - cam;
    let camera_distance = to_point.length();
    if camera_distance == 0.0 {
        return None;
    }
    // The camera always looks at the origin.
    let look = (-cam).normalize()?;

    let along = to_point.dot(look);
    let plane_distance = along.abs();
    if plane_distance < MIN_PLANE_DISTANCE {
        return None;
    }
    let lateral = to_point - look * along;

    let scale = (FOV / 2.0).tan() * plane_distance;
    Some(Projected {
        screen: Point::new(
            lateral.x / scale * (viewport.width / 2.0),
            -(lateral.y / scale) * (viewport.height / 2.0),
        ),
        plane_distance,
        camera_distance,
    })
}

/// Projects an orbit-space point onto the viewport.
///
/// The result is centered on the viewport with the y axis negated from
/// world y; a positive world y offset (down, in the shape convention)
/// projects to a negative screen y. [`pick_nearest`] recenters clicks with
/// the same negation, so the two stay aligned. Returns `None` for points on
/// (or nearly on) the camera plane, and for a camera sitting exactly at the
/// origin.
#[must_use]
pub fn project(world: Vec3, camera: &OrbitCamera, viewport: Size) -> Option<Point> {
    project_inner(world, camera, viewport).map(|p| p.screen)
}

/// Finds the billboard a click lands on, if any.
///
/// `click` is in ordinary view coordinates (origin top-left, y down); it is
/// recentered internally. Every billboard gets a pick radius of half its
/// on-screen size, floored at [`MIN_PICK_RADIUS`] so small distant quads stay
/// clickable. Among the billboards within their radius, the one with the
/// smallest depth-weighted screen distance wins, biasing ties toward quads
/// nearer the camera.
#[must_use]
pub fn pick_nearest(
    click: Point,
    billboards: &[Billboard],
    camera: &OrbitCamera,
    viewport: Size,
) -> Option<IconId> {
    let mouse = Point::new(
        click.x - viewport.width / 2.0,
        -(click.y - viewport.height / 2.0),
    );

    let mut best: Option<(f64, IconId)> = None;
    for billboard in billboards {
        let Some(projected) = project_inner(billboard.world, camera, viewport) else {
            continue;
        };
        let screen_distance = mouse.distance(projected.screen);

        let on_screen_size = billboard.size / projected.plane_distance
            * (FOV / 2.0).tan()
            * viewport.width.min(viewport.height);
        let threshold = (on_screen_size / 2.0).max(MIN_PICK_RADIUS);
        if screen_distance >= threshold {
            continue;
        }

        let depth_factor = 1.0 + projected.camera_distance / camera.distance() * 0.5;
        let adjusted = screen_distance * depth_factor;
        if best.is_none_or(|(current, _)| adjusted < current) {
            best = Some((adjusted, billboard.icon));
        }
    }
    best.map(|(_, icon)| icon)
}
