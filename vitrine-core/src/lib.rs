//! # Vitrine Core
//!
//! State engine behind the Vitrine storefront page. It owns every piece of
//! page state that changes over time and leaves drawing to the renderer.
//!
//! ## Architecture
//!
//! - [`carousel`]: the generic [`CarouselController`] with paging, wrap-around
//!   navigation, hover pause and its owned autoplay timer
//! - [`responsive`]: viewport-driven group sizing through an injected
//!   [`ViewportProbe`]
//! - [`reveal`]: one-shot reveal-on-scroll latches
//! - [`image`]: single-shot image fallback slots
//! - [`menu`]: the collapsible navigation menu
//! - [`runtime`]: tokio actors that drive carousels in real time
//! - [`storefront`]: the composed page, driven by [`StorefrontEvent`]s
//!
//! ## Examples
//!
//! ```
//! use std::time::Duration;
//! use vitrine_core::{CarouselController, CarouselKey};
//!
//! let mut hero = CarouselController::try_new(
//!     CarouselKey::Hero,
//!     vec!["a", "b", "c"],
//!     1,
//!     5_000,
//! )
//! .expect("valid settings");
//!
//! hero.advance(Duration::from_millis(5_000));
//! assert_eq!(hero.current_index(), 1);
//! assert_eq!(hero.current_page(), &["b"]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Carousel controller, paging and autoplay timing
pub mod carousel;
/// Error types shared by the core crate
pub mod error;
/// Image fallback handling
pub mod image;
/// Navigation menu state
pub mod menu;
/// Responsive group sizing
pub mod responsive;
/// Reveal-on-scroll latches
pub mod reveal;
/// Real-time carousel actors
pub mod runtime;
/// Validated settings for every stateful component
pub mod settings;
/// The composed storefront page
pub mod storefront;

pub use carousel::{
    AdvanceReason, AutoplayInterval, AutoplayTimer, CarouselController,
    CarouselKey, CarouselSnapshot, Dot, GroupSize, PageChange, PageLayout,
};
pub use error::{CarouselError, Result};
pub use image::{FallbackImage, ImageSlot, ImageTarget};
pub use menu::NavMenu;
pub use responsive::{
    FixedViewport, GroupingPolicy, ResponsiveGrouping, SharedViewport,
    ViewportProbe,
};
pub use reveal::{Bounds, RevealLatch, RevealOptions, Section};
pub use runtime::{
    CarouselCommand, CarouselCommander, CarouselHandle, CarouselRuntime,
    StorefrontRuntime,
};
pub use settings::{CarouselSettings, StorefrontSettings};
pub use storefront::{
    CarouselView, Storefront, StorefrontEvent, StorefrontOutcome,
    StorefrontView,
};
pub use vitrine_model as model;
