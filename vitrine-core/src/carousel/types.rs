//! Shared types for the carousel module

use std::fmt;

/// Unique key for identifying carousels throughout the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CarouselKey {
    Hero,
    Deals,
    Testimonials,
    Custom(&'static str),
}

impl CarouselKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarouselKey::Hero => "hero",
            CarouselKey::Deals => "deals",
            CarouselKey::Testimonials => "testimonials",
            CarouselKey::Custom(name) => name,
        }
    }

    /// Accessible label for the dot that jumps to `page` (zero-based).
    pub fn dot_label(&self, page: usize) -> String {
        let n = page + 1;
        match self {
            CarouselKey::Hero => format!("Go to slide {n}"),
            CarouselKey::Deals => format!("Go to deal slide {n}"),
            CarouselKey::Testimonials => format!("Go to testimonial slide {n}"),
            CarouselKey::Custom(name) => format!("Go to {name} slide {n}"),
        }
    }
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What moved the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceReason {
    Autoplay,
    ManualNext,
    ManualPrev,
    Jump,
    /// Index clamped after the page count shrank
    Regroup,
}

/// Emitted whenever the active page index actually changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub key: CarouselKey,
    pub from: usize,
    pub to: usize,
    pub reason: AdvanceReason,
}

/// Pagination dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

/// Owned copy of a carousel's observable state, published by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSnapshot<T> {
    pub key: CarouselKey,
    pub current_index: usize,
    pub page_count: usize,
    pub group_size: usize,
    pub hover_paused: bool,
    pub autoplay_enabled: bool,
    pub page: Vec<T>,
}

impl<T> CarouselSnapshot<T> {
    pub fn can_navigate(&self) -> bool {
        self.page_count > 1
    }
}
