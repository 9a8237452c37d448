use std::time::Duration;

use crate::carousel::{AutoplayInterval, GroupSize};
use crate::error::Result;
use crate::image::FallbackImage;
use crate::responsive::GroupingPolicy;
use crate::reveal::RevealOptions;

/// Hero banner rotation period
pub const HERO_AUTOPLAY: Duration = Duration::from_millis(5_000);

/// Deals rotation period. A single timer drives this carousel.
pub const DEALS_AUTOPLAY: Duration = Duration::from_millis(5_000);

/// Testimonial rotation period
pub const TESTIMONIALS_AUTOPLAY: Duration = Duration::from_millis(6_000);

/// Validated construction parameters for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselSettings {
    pub group_size: GroupSize,
    pub autoplay_interval: AutoplayInterval,
}

impl CarouselSettings {
    pub const fn new(
        group_size: GroupSize,
        autoplay_interval: AutoplayInterval,
    ) -> Self {
        Self {
            group_size,
            autoplay_interval,
        }
    }

    /// Validate raw values: `group_size >= 1`, `autoplay_interval_ms >= 0`.
    pub fn from_raw(
        group_size: usize,
        autoplay_interval_ms: i64,
    ) -> Result<Self> {
        Ok(Self {
            group_size: GroupSize::new(group_size)?,
            autoplay_interval: AutoplayInterval::from_millis(
                autoplay_interval_ms,
            )?,
        })
    }

    pub const fn autoplay(period: Duration) -> Self {
        Self {
            group_size: GroupSize::ONE,
            autoplay_interval: AutoplayInterval::from_duration(period),
        }
    }
}

/// Settings for every stateful component of the storefront page.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontSettings {
    pub hero: CarouselSettings,
    pub deals: CarouselSettings,
    pub testimonials: CarouselSettings,
    pub responsive: GroupingPolicy,
    pub reveal: RevealOptions,
    pub images: FallbackImage,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            hero: CarouselSettings::autoplay(HERO_AUTOPLAY),
            deals: CarouselSettings::autoplay(DEALS_AUTOPLAY),
            testimonials: CarouselSettings::autoplay(TESTIMONIALS_AUTOPLAY),
            responsive: GroupingPolicy::default(),
            reveal: RevealOptions::default(),
            images: FallbackImage::default(),
        }
    }
}
