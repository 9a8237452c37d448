use crate::ids::SlideId;

/// Hero banner slide
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroSlide {
    pub id: SlideId,
    pub image: String,
    pub heading: String,
    pub sub: String,
}

/// Exclusive-deals image slide
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealSlide {
    pub id: SlideId,
    pub image: String,
    pub title: String,
    pub subtitle: String,
}

/// How eagerly a renderer should fetch a slide image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LoadingHint {
    Eager,
    Lazy,
}

impl LoadingHint {
    /// The first slide is on screen at mount; the rest can wait.
    pub fn for_position(index: usize) -> Self {
        if index == 0 {
            LoadingHint::Eager
        } else {
            LoadingHint::Lazy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingHint::Eager => "eager",
            LoadingHint::Lazy => "lazy",
        }
    }
}
