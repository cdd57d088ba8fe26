// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard View: the pan/zoom board camera and viewport culling.
//!
//! The board is an infinite 2D plane the user pans and zooms over.
//! [`BoardTransform`] is the camera: a pan offset plus a uniform scale,
//! mutated by drag and wheel gestures and read by every visibility pass.
//! [`DragState`] turns raw pointer positions into pan deltas.
//!
//! [`ViewportCuller`] decides which icons get a live visual handle. It maps
//! the view rect into world space, inflates it by a margin, and intersects
//! every icon's bounding box with the result. Passes are rate-limited by an
//! explicit interval field so panning at full frame rate doesn't recompute
//! visibility every frame — except during an active drag, where immediate
//! feedback matters more than the saved work.
//!
//! Handles for icons that scroll out of view are hidden, not destroyed;
//! [`ViewportCuller::reap_hidden`] destroys them only after they stay
//! hidden past a bounded delay, amortizing allocation cost while bounding
//! resident handles.
//!
//! ## Minimal example
//!
//! ```rust
//! use driftboard_view::{BoardTransform, ViewportCuller};
//! use kurbo::{Point, Size, Vec2};
//!
//! let mut transform = BoardTransform::new();
//! transform.pan_by(Vec2::new(-120.0, 0.0));
//!
//! let world = transform.view_to_world(Point::new(0.0, 0.0));
//! assert_eq!(world, Point::new(120.0, 0.0));
//!
//! let culler = ViewportCuller::new();
//! assert_eq!(culler.visible().len(), 0);
//! ```

mod culler;
mod drag;
mod transform;

pub use culler::{CullPass, EAGER_LOAD_LIMIT, ViewportCuller};
pub use drag::DragState;
pub use transform::{BoardTransform, MAX_SCALE, MIN_SCALE};
