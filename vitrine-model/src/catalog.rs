//! Built-in storefront catalog.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::category::Category;
use crate::error::{ModelError, Result};
use crate::ids::{CategoryId, ProductId, SlideId};
use crate::nav::NavLink;
use crate::numbers::{Rating, Rupees};
use crate::product::Product;
use crate::slides::{DealSlide, HeroSlide};
use crate::testimonial::Testimonial;

/// Every collection rendered on the storefront page.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub nav_links: Vec<NavLink>,
    pub hero_slides: Vec<HeroSlide>,
    pub featured_products: Vec<Product>,
    pub deals: Vec<DealSlide>,
    pub categories: Vec<Category>,
    pub testimonials: Vec<Testimonial>,
    /// Footer social profiles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub social_links: Vec<NavLink>,
}

impl Catalog {
    /// The hardcoded catalog the storefront ships with.
    pub fn storefront() -> Self {
        Self {
            nav_links: nav_links(),
            hero_slides: hero_slides(),
            featured_products: featured_products(),
            deals: deals(),
            categories: categories(),
            testimonials: testimonials(),
            social_links: social_links(),
        }
    }

    /// Check ids are unique per collection and display fields are usable.
    pub fn validate(&self) -> Result<()> {
        unique_ids("hero_slides", self.hero_slides.iter().map(|s| &s.id))?;
        unique_ids("deals", self.deals.iter().map(|s| &s.id))?;
        unique_ids(
            "featured_products",
            self.featured_products.iter().map(|p| &p.id),
        )?;
        unique_ids("categories", self.categories.iter().map(|c| &c.id))?;
        unique_ids("testimonials", self.testimonials.iter().map(|t| &t.id))?;

        for slide in &self.hero_slides {
            non_empty("hero_slides", &slide.id, "heading", &slide.heading)?;
        }
        for slide in &self.deals {
            non_empty("deals", &slide.id, "title", &slide.title)?;
        }
        for category in &self.categories {
            non_empty("categories", &category.id, "name", &category.name)?;
        }
        for product in &self.featured_products {
            non_empty("featured_products", &product.id, "name", &product.name)?;
            validate_price(product)?;
            if let Some(rating) = product.rating
                && !rating.is_valid()
            {
                return Err(ModelError::InvalidRating {
                    collection: "featured_products",
                    id: product.id.to_string(),
                    rating: rating.label(),
                });
            }
        }
        for testimonial in &self.testimonials {
            non_empty(
                "testimonials",
                &testimonial.id,
                "name",
                &testimonial.name,
            )?;
            if testimonial.rating > 5 {
                return Err(ModelError::InvalidRating {
                    collection: "testimonials",
                    id: testimonial.id.to_string(),
                    rating: testimonial.rating.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn unique_ids<'a, I, T>(collection: &'static str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a T>,
    T: Eq + Hash + Display + 'a,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ModelError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn non_empty(
    collection: &'static str,
    id: &impl Display,
    field: &'static str,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::EmptyField {
            collection,
            id: id.to_string(),
            field,
        });
    }
    Ok(())
}

fn validate_price(product: &Product) -> Result<()> {
    if product.price.value() == 0 {
        return Err(ModelError::InvalidPrice {
            id: product.id.to_string(),
            reason: "price must be positive".into(),
        });
    }
    if let Some(compare_at) = product.compare_at
        && compare_at < product.price
    {
        return Err(ModelError::InvalidPrice {
            id: product.id.to_string(),
            reason: format!(
                "compare-at {compare_at} is below the price {}",
                product.price
            ),
        });
    }
    Ok(())
}

fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("ABOUT US", "#about"),
        NavLink::new("COLLECTIONS", "#collections"),
        NavLink::new("ALL PRODUCTS", "#all-products"),
        NavLink::new("BEST-SELLERS", "#best-sellers"),
        NavLink::new("DEALS", "#deals"),
        NavLink::new("CONTACT US", "#contact"),
    ]
}

fn social_links() -> Vec<NavLink> {
    vec![NavLink::new("Instagram", "https://instagram.com").external()]
}

fn hero(id: &str, image: &str, heading: &str, sub: &str) -> HeroSlide {
    HeroSlide {
        id: SlideId::from(id),
        image: image.into(),
        heading: heading.into(),
        sub: sub.into(),
    }
}

fn hero_slides() -> Vec<HeroSlide> {
    vec![
        hero(
            "h1",
            "assets/hero-section/1.jpg",
            "Festive Glow Collection",
            "Warm, radiant pieces for luminous evenings.",
        ),
        hero(
            "h2",
            "assets/hero-section/2.jpg",
            "Curated Resin Creations",
            "Unique platters and accents crafted to impress.",
        ),
        hero(
            "h3",
            "assets/hero-section/3.jpg",
            "Floral Serenity",
            "Soft botanical elements to refresh your space.",
        ),
        hero(
            "h4",
            "assets/hero-section/4.jpg",
            "Tranquil Retreat",
            "Create a peaceful ambiance with calming decor.",
        ),
    ]
}

fn featured_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(1),
            name: "Glass Lotus Flower Tea Light Candle Holder Set".into(),
            price: Rupees::new(566),
            compare_at: None,
            sale: false,
            image: "//geetaakshi.com/cdn/shop/files/8305763939.jpg?v=1755364307&width=533".into(),
            tag: Some("New".into()),
            rating: Some(Rating::new(4.9)),
            reviews: Some(27),
        },
        Product {
            id: ProductId(2),
            name: "Sleep & Destress Aromatherapy Scented Candle".into(),
            price: Rupees::new(250),
            compare_at: Some(Rupees::new(350)),
            sale: true,
            image: "//geetaakshi.com/cdn/shop/files/61IfZA8YUoL._SL1440.jpg?v=1755363062&width=533".into(),
            tag: None,
            rating: Some(Rating::new(4.7)),
            reviews: Some(54),
        },
        Product {
            id: ProductId(3),
            name: "Intricately Crafted Spiritual Decor Ganesha with Tealight Candle Holder".into(),
            price: Rupees::new(890),
            compare_at: None,
            sale: false,
            image: "//geetaakshi.com/cdn/shop/files/7620900208.jpg?v=1755364297&width=533".into(),
            tag: None,
            rating: Some(Rating::new(5.0)),
            reviews: Some(12),
        },
        Product {
            id: ProductId(4),
            name: "Relaxing Kinetic Sandscape Art Table Desk Decor".into(),
            price: Rupees::new(620),
            compare_at: None,
            sale: false,
            image: "//geetaakshi.com/cdn/shop/files/7944549039.jpg?v=1755364374&width=533".into(),
            tag: None,
            rating: Some(Rating::new(4.6)),
            reviews: Some(31),
        },
    ]
}

fn deal(id: &str, image: &str, title: &str, subtitle: &str) -> DealSlide {
    DealSlide {
        id: SlideId::from(id),
        image: image.into(),
        title: title.into(),
        subtitle: subtitle.into(),
    }
}

fn deals() -> Vec<DealSlide> {
    vec![
        deal(
            "d1",
            "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=1400&h=800&fit=crop&crop=center&auto=format",
            "Limited Time Offer",
            "Save on artisan desk decor sets.",
        ),
        deal(
            "d2",
            "https://images.unsplash.com/photo-1556912173-3bb406ef7e77?w=1400&h=800&fit=crop&crop=center&auto=format",
            "Festive Candle Glow",
            "Soothing scents for every celebration.",
        ),
        deal(
            "d3",
            "https://images.unsplash.com/photo-1524758631624-e2822e304c36?w=1400&h=800&fit=crop&crop=center&auto=format&q=80",
            "Natural Light Spaces",
            "Airy interiors with organic warmth.",
        ),
        deal(
            "d4",
            "https://images.unsplash.com/photo-1582588678413-dbf45f4823e9?w=1400&h=800&fit=crop&crop=center&auto=format",
            "Calming Decor Accents",
            "Create tranquil corners at home.",
        ),
    ]
}

fn category(
    id: u32,
    name: &str,
    slug: &str,
    tagline: &str,
    count: u32,
    image: &str,
) -> Category {
    Category {
        id: CategoryId(id),
        name: name.into(),
        slug: slug.into(),
        tagline: tagline.into(),
        count,
        image: image.into(),
    }
}

fn categories() -> Vec<Category> {
    vec![
        category(
            1,
            "Desk Decor",
            "desk-decor",
            "Elevate your workspace aesthetic",
            24,
            "//geetaakshi.com/cdn/shop/collections/81PxikOZzqL._SL1500.jpg?v=1755353302&width=1500",
        ),
        category(
            2,
            "Scented Candles",
            "scented-candles",
            "Soothing aromas & ambiance",
            18,
            "//geetaakshi.com/cdn/shop/collections/518bQQYns1L._SL1440.jpg?v=1756886870&width=1500",
        ),
        category(
            3,
            "Floral Decor",
            "floral-decor",
            "Botanical accents that refresh",
            32,
            "//geetaakshi.com/cdn/shop/collections/floral_decore.jpg?v=1756886936&width=1500",
        ),
        category(
            4,
            "Resin Platters",
            "resin-platters",
            "Artful serving & styling pieces",
            12,
            "//geetaakshi.com/cdn/shop/collections/rezen_platters.jpg?v=1756886920&width=1500",
        ),
    ]
}

fn testimonial(
    id: &str,
    name: &str,
    location: &str,
    text: &str,
    rating: u8,
) -> Testimonial {
    Testimonial {
        id: SlideId::from(id),
        name: name.into(),
        location: Some(location.into()),
        text: text.into(),
        rating,
        verified: true,
    }
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "t1",
            "Aarohi M.",
            "Mumbai",
            "Beautiful craftsmanship and fast shipping. The candle holders added instant charm to my festive decor!",
            5,
        ),
        testimonial(
            "t2",
            "Rohan K.",
            "Bengaluru",
            "Loved the aroma candle – subtle, calming and long lasting. Will definitely order again.",
            5,
        ),
        testimonial(
            "t3",
            "Simran P.",
            "Chandigarh",
            "The resin platter is stunning – looks even better in person and became the highlight of my center table.",
            5,
        ),
        testimonial(
            "t4",
            "Devansh L.",
            "Gurugram",
            "High quality and thoughtfully packed. You can tell a lot of care goes into every product.",
            4,
        ),
    ]
}
