// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Media: load-once tracking for icon media.
//!
//! The host owns the actual fetching and decoding; [`MediaLoader`] owns the
//! bookkeeping — which paths are in flight, loaded, or failed — so each
//! resource is requested at most once no matter how often icons scroll in and
//! out of view. Icons culled into view past the eager-load budget go through
//! the deferred queue instead and are drained one per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use driftboard_media::{MediaLoader, RequestOutcome};
//!
//! let mut loader: MediaLoader<Vec<u8>> = MediaLoader::new();
//! assert_eq!(loader.request("pots/teapot.jpg"), RequestOutcome::Started);
//! assert_eq!(loader.request("pots/teapot.jpg"), RequestOutcome::InFlight);
//!
//! loader.complete("pots/teapot.jpg", Ok(vec![0xFF, 0xD8]));
//! assert_eq!(loader.request("pots/teapot.jpg"), RequestOutcome::Cached);
//! ```

mod loader;

pub use loader::{LoadError, MediaLoader, MediaState, RequestOutcome};
