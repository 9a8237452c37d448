//! Carousel paging and autoplay
//!
//! One [`CarouselController`] per carousel on the page. The controller keeps
//! the active page index inside `0..page_count`, wraps navigation at both
//! ends, and owns the autoplay timer that advances it. Hosts with their own
//! frame loop feed elapsed time through [`CarouselController::advance`];
//! everything else goes through [`crate::runtime`].

pub mod autoplay;
pub mod controller;
pub mod grouping;
pub mod types;

pub use autoplay::{AutoplayInterval, AutoplayTimer};
pub use controller::CarouselController;
pub use grouping::{GroupSize, PageLayout};
pub use types::*;
