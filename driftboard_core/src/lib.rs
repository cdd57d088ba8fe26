// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Core: item records, icon state, and the presentation seam.
//!
//! This crate owns the data model shared by the rest of the Driftboard
//! workspace: the validated ingestion schema for portfolio items
//! ([`ItemRecord`], [`Media`]), the per-icon spatial and animation state
//! ([`Icon`]), and the collection that owns all of it ([`IconStore`]).
//!
//! The crate deliberately does **not** know about layouts, cameras, or any
//! particular rendering stack. Host frameworks are responsible for:
//!
//! - Fetching and decoding the raw item list (typically static JSON) and
//!   handing it to [`IconStore::from_records`].
//! - Owning the actual visual tiles. The store only tracks whether an icon
//!   currently *has* a live visual handle; creating, showing, hiding, and
//!   destroying those handles happens behind the [`PresentationSink`] trait.
//!
//! Records without a media descriptor are tolerated at ingestion and simply
//! never produce a visual handle ([`Icon::can_render`] returns `false`).
//!
//! ## Minimal example
//!
//! ```rust
//! use driftboard_core::{IconId, IconStore, ItemRecord, Media, MediaKind};
//! use kurbo::Size;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let records = vec![
//!     ItemRecord::new(IconId(1)).with_media(Media::image("icons/1.png")),
//!     // No media: kept in the store, never rendered.
//!     ItemRecord::new(IconId(2)),
//! ];
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let store = IconStore::from_records(records, Size::new(1920.0, 1080.0), &mut rng);
//! assert_eq!(store.len(), 2);
//! assert!(store.get(0).unwrap().can_render());
//! assert!(!store.get(1).unwrap().can_render());
//! ```

mod icon;
mod record;
mod sink;
mod store;

pub use icon::{Icon, IconFlags};
pub use record::{IconId, ItemRecord, Media, MediaKind, normalize_tag};
pub use sink::{FrameVisual, PresentationSink};
pub use store::IconStore;
