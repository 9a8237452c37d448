use crate::ids::SlideId;
use crate::numbers::{STAR_COUNT, star_fill};

/// Customer quote shown in the testimonial carousel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Testimonial {
    pub id: SlideId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<String>,
    pub text: String,
    pub rating: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub verified: bool,
}

impl Testimonial {
    /// First letter of each word, at most two (`"Aarohi M."` -> `"AM"`).
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }

    pub fn star_fill(&self) -> [bool; STAR_COUNT] {
        star_fill(usize::from(self.rating).min(STAR_COUNT))
    }

    pub fn rating_label(&self) -> String {
        format!("{} star rating", self.rating)
    }
}
