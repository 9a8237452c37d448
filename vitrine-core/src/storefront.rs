//! The composed storefront page
//!
//! [`Storefront`] wires the three carousels, the testimonial grouping
//! observer, the navigation menu, the reveal latches and the image slots
//! together. Hosts feed it [`StorefrontEvent`]s and elapsed time, and read a
//! [`StorefrontView`] back for rendering.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, info};
use vitrine_model::{
    Catalog, Category, DealSlide, HeroSlide, LoadingHint, NavLink, Product,
    Testimonial,
};

use crate::carousel::{
    CarouselController, CarouselKey, Dot, GroupSize, PageChange,
};
use crate::error::{CarouselError, Result};
use crate::image::{FallbackImage, ImageSlot, ImageTarget};
use crate::menu::NavMenu;
use crate::responsive::{ResponsiveGrouping, SharedViewport};
use crate::reveal::{Bounds, RevealLatch, Section};
use crate::settings::StorefrontSettings;

/// Everything the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorefrontEvent {
    Next(CarouselKey),
    Prev(CarouselKey),
    GoTo(CarouselKey, usize),
    PointerEnter(CarouselKey),
    PointerLeave(CarouselKey),
    /// New viewport width in logical pixels
    Resize(u32),
    Intersect {
        section: Section,
        target: Bounds,
        viewport: Bounds,
    },
    ToggleMenu,
    CloseMenu,
    ImageFailed(ImageTarget),
}

/// What handling an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorefrontOutcome {
    PageChanged(PageChange),
    Regrouped {
        group_size: GroupSize,
        page_count: usize,
        change: Option<PageChange>,
    },
    Revealed(Section),
    MenuToggled(bool),
    FallbackApplied(ImageTarget),
    Unchanged,
    /// The storefront was disposed
    Ignored,
}

impl From<Option<PageChange>> for StorefrontOutcome {
    fn from(change: Option<PageChange>) -> Self {
        change.map_or(Self::Unchanged, Self::PageChanged)
    }
}

/// Render-ready state of one carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a, T> {
    pub key: CarouselKey,
    pub current_index: usize,
    pub page_count: usize,
    pub group_size: usize,
    /// Every item, for renderers that slide a full track
    pub slides: &'a [T],
    pub page: &'a [T],
    /// Empty when the dots are hidden
    pub dots: Vec<Dot>,
    pub can_navigate: bool,
    pub track_offset_percent: usize,
    pub hover_paused: bool,
    pub autoplay_running: bool,
}

impl<'a, T> CarouselView<'a, T> {
    fn of(
        controller: &'a CarouselController<T>,
        hide_single_dot: bool,
    ) -> Self {
        let can_navigate = controller.can_navigate();
        let dots = if hide_single_dot && !can_navigate {
            Vec::new()
        } else {
            controller.dots()
        };
        Self {
            key: controller.key(),
            current_index: controller.current_index(),
            page_count: controller.page_count(),
            group_size: controller.group_size().get(),
            slides: controller.items(),
            page: controller.current_page(),
            dots,
            can_navigate,
            track_offset_percent: controller.track_offset_percent(),
            hover_paused: controller.is_hover_paused(),
            autoplay_running: controller.autoplay().is_running(),
        }
    }
}

/// Borrowed snapshot of the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontView<'a> {
    pub hero: CarouselView<'a, HeroSlide>,
    pub deals: CarouselView<'a, DealSlide>,
    /// One hint per deal slide
    pub deal_loading: Vec<LoadingHint>,
    pub testimonials: CarouselView<'a, Testimonial>,
    pub featured: &'a [Product],
    pub categories: &'a [Category],
    pub nav_links: &'a [NavLink],
    pub menu_open: bool,
    pub revealed: Vec<Section>,
    pub viewport_width: Option<u32>,
}

macro_rules! on_carousel {
    ($self:ident, $key:expr, $carousel:ident => $body:expr) => {
        match $key {
            CarouselKey::Hero => {
                let $carousel = &mut $self.hero;
                $body
            }
            CarouselKey::Deals => {
                let $carousel = &mut $self.deals;
                $body
            }
            CarouselKey::Testimonials => {
                let $carousel = &mut $self.testimonials;
                $body
            }
            CarouselKey::Custom(name) => {
                return Err(CarouselError::UnknownCarousel(name.to_string()));
            }
        }
    };
}

/// The storefront page state.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    hero: CarouselController<HeroSlide>,
    deals: CarouselController<DealSlide>,
    testimonials: CarouselController<Testimonial>,
    viewport: SharedViewport,
    grouping: ResponsiveGrouping,
    menu: NavMenu,
    reveals: BTreeMap<Section, RevealLatch>,
    images: BTreeMap<ImageTarget, ImageSlot>,
    fallback: FallbackImage,
    disposed: bool,
}

impl Storefront {
    /// Mount the page at the given viewport width. Autoplay timers are armed
    /// and testimonial grouping is evaluated immediately.
    pub fn new(
        catalog: Catalog,
        settings: &StorefrontSettings,
        width: u32,
    ) -> Self {
        let hero = CarouselController::new(
            CarouselKey::Hero,
            catalog.hero_slides.clone(),
            settings.hero,
        );
        let deals = CarouselController::new(
            CarouselKey::Deals,
            catalog.deals.clone(),
            settings.deals,
        );
        let mut testimonials = CarouselController::new(
            CarouselKey::Testimonials,
            catalog.testimonials.clone(),
            settings.testimonials,
        );

        let viewport = SharedViewport::new(width);
        let mut grouping =
            ResponsiveGrouping::new(settings.responsive, viewport.clone());
        grouping.mount(&mut testimonials);

        let reveals = Section::ALL
            .into_iter()
            .map(|section| (section, RevealLatch::new(settings.reveal)))
            .collect();

        let images = image_slots(&catalog);
        let menu = NavMenu::new(catalog.nav_links.clone());

        info!(
            width,
            hero = hero.page_count(),
            deals = deals.page_count(),
            testimonials = testimonials.page_count(),
            "storefront mounted"
        );

        Self {
            catalog,
            hero,
            deals,
            testimonials,
            viewport,
            grouping,
            menu,
            reveals,
            images,
            fallback: settings.images.clone(),
            disposed: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn hero(&self) -> &CarouselController<HeroSlide> {
        &self.hero
    }

    pub fn deals(&self) -> &CarouselController<DealSlide> {
        &self.deals
    }

    pub fn testimonials(&self) -> &CarouselController<Testimonial> {
        &self.testimonials
    }

    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    pub fn image(&self, target: ImageTarget) -> Option<&ImageSlot> {
        self.images.get(&target)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.reveals
            .get(&section)
            .is_some_and(RevealLatch::is_visible)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Apply one event. Events that arrive after [`dispose`](Self::dispose)
    /// are ignored.
    pub fn handle(
        &mut self,
        event: StorefrontEvent,
    ) -> Result<StorefrontOutcome> {
        if self.disposed {
            debug!(?event, "event after dispose ignored");
            return Ok(StorefrontOutcome::Ignored);
        }

        let outcome: StorefrontOutcome = match event {
            StorefrontEvent::Next(key) => {
                on_carousel!(self, key, carousel => carousel.next()).into()
            }
            StorefrontEvent::Prev(key) => {
                on_carousel!(self, key, carousel => carousel.prev()).into()
            }
            StorefrontEvent::GoTo(key, index) => {
                let change =
                    on_carousel!(self, key, carousel => carousel.go_to(index)?);
                change.into()
            }
            StorefrontEvent::PointerEnter(key) => {
                on_carousel!(self, key, carousel => carousel.set_hovered(true));
                StorefrontOutcome::Unchanged
            }
            StorefrontEvent::PointerLeave(key) => {
                on_carousel!(
                    self, key, carousel => carousel.set_hovered(false)
                );
                StorefrontOutcome::Unchanged
            }
            StorefrontEvent::Resize(width) => self.resize(width),
            StorefrontEvent::Intersect {
                section,
                target,
                viewport,
            } => {
                let revealed = self
                    .reveals
                    .get_mut(&section)
                    .is_some_and(|latch| latch.observe(target, viewport));
                if revealed {
                    debug!(%section, "section revealed");
                    StorefrontOutcome::Revealed(section)
                } else {
                    StorefrontOutcome::Unchanged
                }
            }
            StorefrontEvent::ToggleMenu => {
                StorefrontOutcome::MenuToggled(self.menu.toggle())
            }
            StorefrontEvent::CloseMenu => {
                if self.menu.close() {
                    StorefrontOutcome::MenuToggled(false)
                } else {
                    StorefrontOutcome::Unchanged
                }
            }
            StorefrontEvent::ImageFailed(target) => self.image_failed(target)?,
        };
        Ok(outcome)
    }

    /// Step every autoplay timer by `elapsed`. Returns the page changes in
    /// hero, deals, testimonials order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<PageChange> {
        if self.disposed {
            return Vec::new();
        }
        [
            self.hero.advance(elapsed),
            self.deals.advance(elapsed),
            self.testimonials.advance(elapsed),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn snapshot(&self) -> StorefrontView<'_> {
        StorefrontView {
            hero: CarouselView::of(&self.hero, false),
            deals: CarouselView::of(&self.deals, false),
            deal_loading: (0..self.deals.items().len())
                .map(LoadingHint::for_position)
                .collect(),
            testimonials: CarouselView::of(&self.testimonials, true),
            featured: &self.catalog.featured_products,
            categories: &self.catalog.categories,
            nav_links: self.menu.links(),
            menu_open: self.menu.is_open(),
            revealed: self
                .reveals
                .iter()
                .filter(|(_, latch)| latch.is_visible())
                .map(|(section, _)| *section)
                .collect(),
            viewport_width: self.grouping.last_width(),
        }
    }

    /// Disarm every timer and detach every observer.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.hero.dispose();
        self.deals.dispose();
        self.testimonials.dispose();
        self.grouping.detach();
        for latch in self.reveals.values_mut() {
            latch.detach();
        }
        self.disposed = true;
        info!("storefront disposed");
    }

    fn resize(&mut self, width: u32) -> StorefrontOutcome {
        self.viewport.set(width);
        let before = self.testimonials.group_size();
        let change = self.grouping.on_resize(&mut self.testimonials);
        let group_size = self.testimonials.group_size();
        if group_size == before {
            return StorefrontOutcome::Unchanged;
        }
        StorefrontOutcome::Regrouped {
            group_size,
            page_count: self.testimonials.page_count(),
            change,
        }
    }

    fn image_failed(
        &mut self,
        target: ImageTarget,
    ) -> Result<StorefrontOutcome> {
        let Some(slot) = self.images.get_mut(&target) else {
            let (index, page_count) = match target {
                ImageTarget::Hero(i) => (i, self.catalog.hero_slides.len()),
                ImageTarget::Deal(i) => (i, self.catalog.deals.len()),
                ImageTarget::Product(i) => {
                    (i, self.catalog.featured_products.len())
                }
                ImageTarget::Category(i) => (i, self.catalog.categories.len()),
            };
            return Err(CarouselError::OutOfRange { index, page_count });
        };
        if slot.on_load_error(&self.fallback) {
            Ok(StorefrontOutcome::FallbackApplied(target))
        } else {
            Ok(StorefrontOutcome::Unchanged)
        }
    }
}

fn image_slots(catalog: &Catalog) -> BTreeMap<ImageTarget, ImageSlot> {
    let hero = catalog.hero_slides.iter().enumerate().map(|(i, slide)| {
        (ImageTarget::Hero(i), ImageSlot::new(&slide.image, &slide.heading))
    });
    let deals = catalog.deals.iter().enumerate().map(|(i, slide)| {
        (ImageTarget::Deal(i), ImageSlot::new(&slide.image, &slide.title))
    });
    let products =
        catalog.featured_products.iter().enumerate().map(|(i, product)| {
            (
                ImageTarget::Product(i),
                ImageSlot::new(&product.image, &product.name),
            )
        });
    let categories = catalog.categories.iter().enumerate().map(|(i, cat)| {
        (ImageTarget::Category(i), ImageSlot::new(&cat.image, &cat.name))
    });
    hero.chain(deals).chain(products).chain(categories).collect()
}
