//! CarouselController: paging, wrap-around navigation and autoplay

use std::time::Duration;

use tracing::{debug, trace};

use super::autoplay::{AutoplayInterval, AutoplayTimer};
use super::grouping::{GroupSize, PageLayout};
use super::types::{
    AdvanceReason, CarouselKey, CarouselSnapshot, Dot, PageChange,
};
use crate::error::{CarouselError, Result};
use crate::settings::CarouselSettings;

/// State machine for one carousel.
///
/// Invariant: `current_index < page_count()` whenever there is at least one
/// page, and `current_index == 0` otherwise. Every operation either applies
/// fully or leaves the state untouched.
#[derive(Debug, Clone)]
pub struct CarouselController<T> {
    key: CarouselKey,
    items: Vec<T>,
    layout: PageLayout,
    current_index: usize,
    hover_paused: bool,
    autoplay: AutoplayTimer,
}

impl<T> CarouselController<T> {
    /// Create a controller from validated settings. The autoplay timer is
    /// armed immediately.
    pub fn new(
        key: CarouselKey,
        items: Vec<T>,
        settings: CarouselSettings,
    ) -> Self {
        let layout = PageLayout::new(items.len(), settings.group_size);
        debug!(
            carousel = %key,
            items = items.len(),
            pages = layout.page_count(),
            interval_ms = settings.autoplay_interval.as_millis() as u64,
            "carousel created"
        );
        Self {
            key,
            items,
            layout,
            current_index: 0,
            hover_paused: false,
            autoplay: AutoplayTimer::new(settings.autoplay_interval),
        }
    }

    /// Validate raw parameters and create the controller.
    pub fn try_new(
        key: CarouselKey,
        items: Vec<T>,
        group_size: usize,
        autoplay_interval_ms: i64,
    ) -> Result<Self> {
        let settings =
            CarouselSettings::from_raw(group_size, autoplay_interval_ms)?;
        Ok(Self::new(key, items, settings))
    }

    pub fn key(&self) -> CarouselKey {
        self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    pub fn group_size(&self) -> GroupSize {
        self.layout.group_size()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn is_hover_paused(&self) -> bool {
        self.hover_paused
    }

    pub fn autoplay(&self) -> &AutoplayTimer {
        &self.autoplay
    }

    /// False once [`dispose`](Self::dispose) has run.
    pub fn is_active(&self) -> bool {
        self.autoplay.is_armed()
    }

    /// Items on the active page. Empty only when there are no items.
    pub fn current_page(&self) -> &[T] {
        self.page(self.current_index)
    }

    /// Items on `page`, empty when the page does not exist.
    pub fn page(&self, page: usize) -> &[T] {
        &self.items[self.layout.page_range(page)]
    }

    pub fn pages(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.layout.pages().map(|range| &self.items[range])
    }

    /// Prev/next controls only make sense with more than one page.
    pub fn can_navigate(&self) -> bool {
        self.page_count() > 1
    }

    /// Horizontal translation of a sliding track, in percent of one page.
    pub fn track_offset_percent(&self) -> usize {
        self.current_index * 100
    }

    pub fn dots(&self) -> Vec<Dot> {
        (0..self.page_count())
            .map(|index| Dot {
                index,
                active: index == self.current_index,
                label: self.key.dot_label(index),
            })
            .collect()
    }

    /// Move forward one page, wrapping to the first. No-op without pages.
    pub fn next(&mut self) -> Option<PageChange> {
        self.step_forward(AdvanceReason::ManualNext)
    }

    /// Move back one page, wrapping to the last. No-op without pages.
    pub fn prev(&mut self) -> Option<PageChange> {
        let count = self.page_count();
        if count == 0 {
            return None;
        }
        let to = (self.current_index + count - 1) % count;
        self.move_to(to, AdvanceReason::ManualPrev)
    }

    /// Jump to `index`. Out-of-range indices are rejected and leave the
    /// state unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<Option<PageChange>> {
        let page_count = self.page_count();
        if index >= page_count {
            return Err(CarouselError::OutOfRange { index, page_count });
        }
        Ok(self.move_to(index, AdvanceReason::Jump))
    }

    /// Pause or resume autoplay. Elapsed timer phase is kept either way.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hover_paused != hovered {
            trace!(carousel = %self.key, hovered, "hover changed");
        }
        self.hover_paused = hovered;
    }

    /// Validate and apply a new group size.
    pub fn set_group_size(
        &mut self,
        size: usize,
    ) -> Result<Option<PageChange>> {
        let size = GroupSize::new(size)?;
        Ok(self.regroup(size))
    }

    /// Apply a new group size, clamping the index into the new page range.
    ///
    /// The autoplay countdown restarts when the page count changes.
    pub fn regroup(&mut self, size: GroupSize) -> Option<PageChange> {
        let previous_pages = self.page_count();
        if !self.layout.regroup(size) {
            return None;
        }
        let page_count = self.page_count();
        debug!(
            carousel = %self.key,
            group_size = size.get(),
            pages = page_count,
            "carousel regrouped"
        );
        if page_count != previous_pages {
            self.autoplay.rearm();
        }

        let clamped = self.current_index.min(page_count.saturating_sub(1));
        self.move_to(clamped, AdvanceReason::Regroup)
    }

    /// Swap the autoplay interval; the countdown restarts from zero.
    pub fn set_autoplay_interval(&mut self, interval: AutoplayInterval) {
        debug!(
            carousel = %self.key,
            interval_ms = interval.as_millis() as u64,
            "autoplay interval changed"
        );
        self.autoplay.set_interval(interval);
    }

    /// Feed elapsed time into the autoplay timer. Advances at most one page,
    /// and only when the pointer is not over the carousel.
    pub fn advance(&mut self, elapsed: Duration) -> Option<PageChange> {
        if !self.autoplay.advance(elapsed) {
            return None;
        }
        if self.hover_paused {
            trace!(carousel = %self.key, "autoplay tick skipped while hovered");
            return None;
        }
        self.step_forward(AdvanceReason::Autoplay)
    }

    /// Disarm the autoplay timer. No tick fires afterwards.
    pub fn dispose(&mut self) {
        if self.autoplay.is_armed() {
            debug!(carousel = %self.key, "carousel disposed");
        }
        self.autoplay.disarm();
    }

    pub fn snapshot(&self) -> CarouselSnapshot<T>
    where
        T: Clone,
    {
        CarouselSnapshot {
            key: self.key,
            current_index: self.current_index,
            page_count: self.page_count(),
            group_size: self.group_size().get(),
            hover_paused: self.hover_paused,
            autoplay_enabled: self.autoplay.is_running(),
            page: self.current_page().to_vec(),
        }
    }

    fn step_forward(&mut self, reason: AdvanceReason) -> Option<PageChange> {
        let count = self.page_count();
        if count == 0 {
            return None;
        }
        let to = (self.current_index + 1) % count;
        self.move_to(to, reason)
    }

    fn move_to(
        &mut self,
        to: usize,
        reason: AdvanceReason,
    ) -> Option<PageChange> {
        let from = self.current_index;
        if from == to {
            return None;
        }
        self.current_index = to;
        debug!(carousel = %self.key, from, to, ?reason, "page changed");
        Some(PageChange {
            key: self.key,
            from,
            to,
            reason,
        })
    }
}
