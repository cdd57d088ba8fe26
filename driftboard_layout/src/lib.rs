// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Layout: target assignment for board icons.
//!
//! Layout passes never move icons directly; they assign the *targets* the
//! animation driver steers toward. Two modes exist (see [`LayoutMode`]):
//!
//! - [`scatter_random`]: every icon gets a uniformly random target inside a
//!   square board region plus a fresh free-float velocity.
//! - [`cluster_around_anchor`]: icons matching a tag are packed onto
//!   concentric rings around an anchor point while everything else is pushed
//!   out to a fixed distance; both groups then run [`relax_overlaps`], an
//!   iterative repulsion pass with a fixed iteration cap.
//!
//! Every pass fully overwrites the targets it is responsible for — switching
//! modes never leaves stale targets from the previous mode behind.
//!
//! Randomness is always supplied by the caller, so layouts are reproducible:
//!
//! ```rust
//! use driftboard_core::{IconId, IconStore, ItemRecord};
//! use driftboard_layout::scatter_random;
//! use kurbo::Size;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let records = (0..10).map(|i| ItemRecord::new(IconId(i)));
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut store = IconStore::from_records(records, Size::new(800.0, 600.0), &mut rng);
//!
//! scatter_random(&mut store, 1000.0, &mut rng);
//! for icon in store.iter() {
//!     assert!(icon.target.x.abs() <= 2000.0);
//!     assert!(icon.target.y.abs() <= 2000.0);
//! }
//! ```

mod cluster;
mod mode;
mod relax;
mod scatter;
mod shapes;

pub use cluster::{
    ClusterOutcome, ClusterParams, MATCH_DEPTH, MIN_ICON_DISTANCE, NON_MATCH_DEPTH, PUSH_DISTANCE,
    RING_CAPACITY, cluster_around_anchor,
};
pub use mode::LayoutMode;
pub use relax::{MAX_RELAX_PASSES, relax_overlaps};
pub use scatter::{FLOAT_DRIFT, scatter_random};
pub use shapes::{ShapeCoord, apply_shape_coords};
