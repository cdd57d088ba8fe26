// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Session: the long-lived object that ties the engine together.
//!
//! A [`Session`] owns the icon store and every component around it — board
//! camera, layout mode, viewport culler, animation driver, orbit view, and
//! media load tracker — and exposes the handful of entry points a host
//! wires its events into: tag selection, pointer drags, wheel zoom, the
//! per-frame tick, and orbit mode entry/exit/clicks.
//!
//! The session stays host-agnostic the same way the component crates do: it
//! never fetches, renders, or reads a clock. Hosts pass timestamps in, apply
//! visual changes through their [`PresentationSink`], and start the media
//! loads the session hands back.
//!
//! [`PresentationSink`]: driftboard_core::PresentationSink
//!
//! ## Minimal example
//!
//! ```rust
//! use driftboard_core::{IconId, IconStore, ItemRecord, Media};
//! use driftboard_session::Session;
//! use kurbo::Size;
//!
//! # fn rng() -> impl rand::Rng {
//! #     <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(7)
//! # }
//! let records = [ItemRecord::new(IconId(0)).with_media(Media::image("a.png"))];
//! let viewport = Size::new(800.0, 600.0);
//! let store = IconStore::from_records(records, viewport, &mut rng());
//!
//! let session: Session<Vec<u8>> = Session::new(store, viewport, 120.0);
//! assert!(!session.is_dragging());
//! ```

mod session;

pub use session::Session;
