//! One-shot reveal-on-scroll latches
//!
//! Each revealable section starts hidden. The first time enough of it
//! intersects the viewport it becomes visible for good and stops observing.

use std::fmt;

use tracing::debug;

use crate::error::{CarouselError, Result};

/// Page sections that fade in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    Categories,
    Featured,
    Deals,
    Testimonials,
    Footer,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Categories,
        Section::Featured,
        Section::Deals,
        Section::Testimonials,
        Section::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Categories => "categories",
            Section::Featured => "featured",
            Section::Deals => "deals",
            Section::Testimonials => "testimonials",
            Section::Footer => "footer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned rectangle in viewport coordinates (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Viewport rectangle anchored at the origin.
    pub const fn viewport(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn right(&self) -> f64 {
        self.x + self.width.max(0.0)
    }

    fn bottom(&self) -> f64 {
        self.y + self.height.max(0.0)
    }

    fn contains_edges(&self, other: &Bounds) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    fn intersection_area(&self, other: &Bounds) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }
}

/// Intersection rule for reveal latches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    bottom_margin_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: -50.0,
        }
    }
}

impl RevealOptions {
    /// `threshold` is the visible fraction of the target's area and must lie
    /// in `(0, 1]`. A negative bottom margin shrinks the viewport from below.
    pub fn new(threshold: f64, bottom_margin_px: f64) -> Result<Self> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(CarouselError::InvalidConfiguration(format!(
                "reveal threshold must be in (0, 1], got {threshold}"
            )));
        }
        if !bottom_margin_px.is_finite() {
            return Err(CarouselError::InvalidConfiguration(
                "reveal bottom margin must be finite".into(),
            ));
        }
        Ok(Self {
            threshold,
            bottom_margin_px,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn bottom_margin_px(&self) -> f64 {
        self.bottom_margin_px
    }

    /// Fraction of `target` inside the margin-adjusted `viewport`.
    ///
    /// Zero-area targets count as fully visible while inside the root.
    pub fn intersection_ratio(&self, target: Bounds, viewport: Bounds) -> f64 {
        let root = Bounds {
            height: (viewport.height + self.bottom_margin_px).max(0.0),
            ..viewport
        };
        let area = target.area();
        if area == 0.0 {
            return if root.contains_edges(&target) { 1.0 } else { 0.0 };
        }
        root.intersection_area(&target) / area
    }
}

/// Boolean that flips to visible once and never back.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealLatch {
    options: RevealOptions,
    visible: bool,
    attached: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

impl RevealLatch {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            visible: false,
            attached: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether intersection callbacks are still being processed.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Feed one intersection callback. Returns `true` only on the
    /// observation that flips the latch.
    pub fn observe(&mut self, target: Bounds, viewport: Bounds) -> bool {
        if !self.attached {
            return false;
        }
        let ratio = self.options.intersection_ratio(target, viewport);
        if ratio < self.options.threshold {
            return false;
        }
        debug!(ratio, "reveal latch tripped");
        self.visible = true;
        self.attached = false;
        true
    }

    /// Stop observing without revealing.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}
