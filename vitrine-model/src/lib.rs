//! Catalog records shared across Vitrine crates.
//!
//! Every collection the storefront renders lives here as a typed record,
//! together with the small display derivations (prices, discount badges,
//! star fills, initials) a renderer needs. The built-in catalog is exposed
//! through [`Catalog::storefront`].
#![allow(missing_docs)]

pub mod catalog;
pub mod category;
pub mod error;
pub mod ids;
pub mod nav;
pub mod numbers;
pub mod product;
pub mod slides;
pub mod testimonial;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::Catalog;
pub use category::Category;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CategoryId, ProductId, SlideId};
pub use nav::{LinkAttributes, NavLink};
pub use numbers::{Rating, Rupees, format_inr};
pub use product::{Badge, Product};
pub use slides::{DealSlide, HeroSlide, LoadingHint};
pub use testimonial::Testimonial;
