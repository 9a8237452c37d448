//! Image slots with a single-shot load-failure fallback

use std::fmt;

use tracing::warn;

/// 1x1 transparent GIF shown in place of images that fail to load.
pub const FALLBACK_IMAGE_SRC: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACw=";

/// Appended to the alt text of a failed image.
pub const UNAVAILABLE_SUFFIX: &str = " (image not available)";

const DEFAULT_ALT: &str = "Product";

/// Replacement applied when an image fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
    pub src: String,
    pub unavailable_suffix: String,
}

impl Default for FallbackImage {
    fn default() -> Self {
        Self {
            src: FALLBACK_IMAGE_SRC.to_string(),
            unavailable_suffix: UNAVAILABLE_SUFFIX.to_string(),
        }
    }
}

/// Which rendered image failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageTarget {
    Hero(usize),
    Deal(usize),
    Product(usize),
    Category(usize),
}

impl fmt::Display for ImageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageTarget::Hero(i) => write!(f, "hero[{i}]"),
            ImageTarget::Deal(i) => write!(f, "deal[{i}]"),
            ImageTarget::Product(i) => write!(f, "product[{i}]"),
            ImageTarget::Category(i) => write!(f, "category[{i}]"),
        }
    }
}

/// Rendered image element state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    src: String,
    alt: String,
    fallback_applied: bool,
}

impl ImageSlot {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            fallback_applied: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Set once the fallback has replaced the original source. Renderers
    /// show a pulsing placeholder background while this is true.
    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }

    /// Swap in the fallback. Only the first failure is acted on, so a
    /// broken fallback cannot loop. Returns whether anything changed.
    pub fn on_load_error(&mut self, fallback: &FallbackImage) -> bool {
        if self.fallback_applied {
            return false;
        }
        warn!(src = %self.src, "image failed to load, using fallback");
        self.fallback_applied = true;
        self.src.clone_from(&fallback.src);
        if self.alt.is_empty() {
            self.alt.push_str(DEFAULT_ALT);
        }
        self.alt.push_str(&fallback.unavailable_suffix);
        true
    }
}
