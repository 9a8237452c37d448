/// Number of stars drawn by every rating widget.
pub const STAR_COUNT: usize = 5;

/// Format a rupee amount the way price tags show it (`Rs. 566.00`).
pub fn format_inr(value: f64) -> String {
    format!("Rs. {value:.2}")
}

/// Whole-rupee price
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rupees(u32);

impl Rupees {
    pub const fn new(amount: u32) -> Self {
        Rupees(amount)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Rupees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_inr(f64::from(self.0)))
    }
}

impl From<u32> for Rupees {
    fn from(amount: u32) -> Self {
        Rupees(amount)
    }
}

/// Average star rating on a 0..=5 scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rating(f32);

impl Rating {
    pub const fn new(value: f32) -> Self {
        Rating(value)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=5.0).contains(&self.0)
    }

    /// Stars filled after rounding to the nearest whole star.
    pub fn filled_stars(&self) -> usize {
        (self.0.round().max(0.0) as usize).min(STAR_COUNT)
    }

    /// One flag per star, filled stars first.
    pub fn star_fill(&self) -> [bool; STAR_COUNT] {
        star_fill(self.filled_stars())
    }

    /// Rating with one decimal, e.g. `4.9` or `5.0`.
    pub fn label(&self) -> String {
        format!("{:.1}", self.0)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

pub(crate) fn star_fill(filled: usize) -> [bool; STAR_COUNT] {
    std::array::from_fn(|i| i < filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inr_formatting_uses_two_decimals() {
        assert_eq!(format_inr(566.0), "Rs. 566.00");
        assert_eq!(format_inr(12.5), "Rs. 12.50");
        assert_eq!(Rupees::new(250).to_string(), "Rs. 250.00");
    }

    #[test]
    fn rating_rounds_to_nearest_star() {
        assert_eq!(Rating::new(4.6).filled_stars(), 5);
        assert_eq!(Rating::new(4.4).filled_stars(), 4);
        assert_eq!(Rating::new(4.5).filled_stars(), 5);
        assert_eq!(
            Rating::new(3.2).star_fill(),
            [true, true, true, false, false]
        );
    }

    #[test]
    fn rating_label_keeps_one_decimal() {
        assert_eq!(Rating::new(5.0).label(), "5.0");
        assert_eq!(Rating::new(4.9).label(), "4.9");
    }

    #[test]
    fn rating_validity_bounds() {
        assert!(Rating::new(0.0).is_valid());
        assert!(Rating::new(5.0).is_valid());
        assert!(!Rating::new(5.1).is_valid());
        assert!(!Rating::new(-1.0).is_valid());
    }
}
