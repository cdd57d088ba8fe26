// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Orbit: the 3D shape view.
//!
//! When the host switches a collection into a shape (a sphere, a star, a
//! spiral), every icon becomes a camera-facing [`Billboard`] positioned by a
//! precomputed coordinate set, and an [`OrbitCamera`] circles the arrangement
//! under drag and wheel control. All rendering belongs to the host; this
//! crate owns the geometry — building billboard positions, projecting them
//! through the perspective camera, and resolving clicks back to item ids.
//!
//! [`OrbitController`] wraps the camera with the mode state machine and the
//! click filters: a suppression window right after entering the mode, and a
//! duplicate filter for synthetic event echoes.
//!
//! ## Minimal example
//!
//! ```rust
//! use driftboard_orbit::{OrbitCamera, Vec3, project};
//! use kurbo::Size;
//!
//! let camera = OrbitCamera::new(10_000.0);
//! let screen = project(Vec3::ZERO, &camera, Size::new(800.0, 600.0)).unwrap();
//! assert_eq!(screen, kurbo::Point::ZERO);
//! ```

mod billboard;
mod camera;
mod mode;
mod project;
mod vec3;

pub use billboard::{Billboard, ShapeCoord3, build_billboards};
pub use camera::{
    MAX_DISTANCE, MIN_DISTANCE, OrbitCamera, ROTATE_GAIN, ZOOM_IN_STEP, ZOOM_OUT_STEP,
};
pub use mode::{
    CLICK_DEDUP_MS, CLICK_DEDUP_PX, CLICK_SUPPRESSION_MS, FAR_SHAPE_DISTANCE, NEAR_SHAPE_DISTANCE,
    OrbitController, OrbitMode, initial_distance_for,
};
pub use project::{FOV, MIN_PICK_RADIUS, pick_nearest, project};
pub use vec3::Vec3;
