use crate::ids::ProductId;
use crate::numbers::{Rating, Rupees, STAR_COUNT};

/// Featured product card
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Rupees,
    #[cfg_attr(feature = "serde", serde(default))]
    pub compare_at: Option<Rupees>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sale: bool,
    pub image: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tag: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<Rating>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reviews: Option<u32>,
}

/// Corner badge shown on a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    /// Percentage off the compare-at price
    Sale(u32),
    /// Free-form merchandising tag ("New")
    Tag(String),
}

impl Badge {
    pub fn label(&self) -> String {
        match self {
            Badge::Sale(percent) => format!("-{percent}%"),
            Badge::Tag(tag) => tag.clone(),
        }
    }
}

impl Product {
    /// Rounded percentage saved against `compare_at`, if one is set.
    pub fn discount_percent(&self) -> Option<u32> {
        let compare_at = f64::from(self.compare_at?.value());
        if compare_at <= 0.0 {
            return None;
        }
        let price = f64::from(self.price.value());
        let percent = ((compare_at - price) / compare_at * 100.0).round();
        Some(percent.max(0.0) as u32)
    }

    /// Sale badges win over tags; a tag is hidden while the item is on sale.
    pub fn badge(&self) -> Option<Badge> {
        if self.sale {
            return self
                .discount_percent()
                .filter(|percent| *percent > 0)
                .map(Badge::Sale);
        }
        self.tag
            .as_ref()
            .filter(|tag| !tag.is_empty())
            .map(|tag| Badge::Tag(tag.clone()))
    }

    pub fn price_label(&self) -> String {
        self.price.to_string()
    }

    pub fn compare_at_label(&self) -> Option<String> {
        self.compare_at.map(|price| price.to_string())
    }

    pub fn star_fill(&self) -> [bool; STAR_COUNT] {
        self.rating
            .map(|rating| rating.star_fill())
            .unwrap_or([false; STAR_COUNT])
    }

    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|rating| rating.label())
    }

    /// `None` when there are no reviews to mention.
    pub fn review_label(&self) -> Option<String> {
        match self.reviews {
            None | Some(0) => None,
            Some(1) => Some("1 review".to_string()),
            Some(count) => Some(format!("{count} reviews")),
        }
    }

    pub fn add_to_cart_label(&self) -> String {
        format!("Add {} to cart", self.name)
    }

    pub fn details_label(&self) -> String {
        format!("View details of {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle() -> Product {
        Product {
            id: ProductId(2),
            name: "Sleep & Destress Aromatherapy Scented Candle".into(),
            price: Rupees::new(250),
            compare_at: Some(Rupees::new(350)),
            sale: true,
            image: "candle.jpg".into(),
            tag: None,
            rating: Some(Rating::new(4.7)),
            reviews: Some(54),
        }
    }

    #[test]
    fn discount_rounds_to_whole_percent() {
        assert_eq!(candle().discount_percent(), Some(29));
    }

    #[test]
    fn sale_badge_shows_discount() {
        assert_eq!(candle().badge(), Some(Badge::Sale(29)));
        assert_eq!(candle().badge().map(|b| b.label()), Some("-29%".into()));
    }

    #[test]
    fn tag_hidden_while_on_sale() {
        let mut product = candle();
        product.tag = Some("New".into());
        assert_eq!(product.badge(), Some(Badge::Sale(29)));

        product.sale = false;
        assert_eq!(product.badge(), Some(Badge::Tag("New".into())));
    }

    #[test]
    fn sale_without_discount_has_no_badge() {
        let mut product = candle();
        product.compare_at = Some(Rupees::new(250));
        assert_eq!(product.badge(), None);

        product.compare_at = None;
        assert_eq!(product.badge(), None);
    }

    #[test]
    fn review_label_pluralizes() {
        let mut product = candle();
        assert_eq!(product.review_label().as_deref(), Some("54 reviews"));
        product.reviews = Some(1);
        assert_eq!(product.review_label().as_deref(), Some("1 review"));
        product.reviews = Some(0);
        assert_eq!(product.review_label(), None);
    }

    #[test]
    fn price_labels_use_rupee_format() {
        let product = candle();
        assert_eq!(product.price_label(), "Rs. 250.00");
        assert_eq!(product.compare_at_label().as_deref(), Some("Rs. 350.00"));

        let mut full_price = candle();
        full_price.compare_at = None;
        assert_eq!(full_price.compare_at_label(), None);
    }

    #[test]
    fn action_labels_name_the_product() {
        let product = candle();
        assert_eq!(
            product.add_to_cart_label(),
            "Add Sleep & Destress Aromatherapy Scented Candle to cart"
        );
        assert_eq!(
            product.details_label(),
            "View details of Sleep & Destress Aromatherapy Scented Candle"
        );
    }

    #[test]
    fn unrated_product_has_empty_stars() {
        let mut product = candle();
        product.rating = None;
        assert_eq!(product.star_fill(), [false; STAR_COUNT]);
        assert_eq!(product.rating_label(), None);
    }
}
