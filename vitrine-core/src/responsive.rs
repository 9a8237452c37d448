//! Viewport-driven group sizing
//!
//! The testimonial carousel shows one quote per page on narrow viewports and
//! two on wide ones. The width comes from an injected [`ViewportProbe`] so the
//! controller never touches the host environment directly.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::carousel::{CarouselController, GroupSize, PageChange};
use crate::error::{CarouselError, Result};

/// Width of the host viewport in logical pixels.
#[cfg_attr(test, mockall::automock)]
pub trait ViewportProbe {
    fn width(&self) -> u32;
}

/// Viewport that never resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub u32);

impl ViewportProbe for FixedViewport {
    fn width(&self) -> u32 {
        self.0
    }
}

/// Viewport width shared with whoever reports resizes.
#[derive(Debug, Clone, Default)]
pub struct SharedViewport(Arc<AtomicU32>);

impl SharedViewport {
    pub fn new(width: u32) -> Self {
        SharedViewport(Arc::new(AtomicU32::new(width)))
    }

    pub fn set(&self, width: u32) {
        self.0.store(width, Ordering::Relaxed);
    }
}

impl ViewportProbe for SharedViewport {
    fn width(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl ViewportProbe for watch::Receiver<u32> {
    fn width(&self) -> u32 {
        *self.borrow()
    }
}

/// Breakpoint rule mapping a viewport width to a group size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingPolicy {
    pub breakpoint_px: u32,
    pub narrow: GroupSize,
    pub wide: GroupSize,
}

impl Default for GroupingPolicy {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            narrow: GroupSize::ONE,
            wide: GroupSize::PAIR,
        }
    }
}

impl GroupingPolicy {
    pub fn new(breakpoint_px: u32, narrow: usize, wide: usize) -> Result<Self> {
        if breakpoint_px == 0 {
            return Err(CarouselError::InvalidConfiguration(
                "responsive breakpoint must be positive".into(),
            ));
        }
        Ok(Self {
            breakpoint_px,
            narrow: GroupSize::new(narrow)?,
            wide: GroupSize::new(wide)?,
        })
    }

    /// Widths at or above the breakpoint get the wide group size.
    pub fn group_size_for(&self, width: u32) -> GroupSize {
        if width >= self.breakpoint_px {
            self.wide
        } else {
            self.narrow
        }
    }
}

/// Observer that keeps a carousel's group size in line with the viewport.
///
/// Installs on [`mount`](Self::mount), evaluates immediately and re-evaluates
/// on every resize without debouncing. After [`detach`](Self::detach) resize
/// notifications are ignored.
pub struct ResponsiveGrouping {
    policy: GroupingPolicy,
    probe: Box<dyn ViewportProbe + Send>,
    attached: bool,
    last_width: Option<u32>,
}

impl std::fmt::Debug for ResponsiveGrouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsiveGrouping")
            .field("policy", &self.policy)
            .field("attached", &self.attached)
            .field("last_width", &self.last_width)
            .finish()
    }
}

impl ResponsiveGrouping {
    pub fn new(
        policy: GroupingPolicy,
        probe: impl ViewportProbe + Send + 'static,
    ) -> Self {
        Self {
            policy,
            probe: Box::new(probe),
            attached: false,
            last_width: None,
        }
    }

    pub fn policy(&self) -> GroupingPolicy {
        self.policy
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Width seen by the latest evaluation.
    pub fn last_width(&self) -> Option<u32> {
        self.last_width
    }

    /// Install the observer and apply the current width right away.
    pub fn mount<T>(
        &mut self,
        carousel: &mut CarouselController<T>,
    ) -> Option<PageChange> {
        let size = self.attach();
        carousel.regroup(size)
    }

    /// Re-read the viewport and regroup if the breakpoint side changed.
    pub fn on_resize<T>(
        &mut self,
        carousel: &mut CarouselController<T>,
    ) -> Option<PageChange> {
        let size = self.measure()?;
        carousel.regroup(size)
    }

    /// Install the observer and return the group size for the current
    /// width, for callers that regroup a carousel they do not own.
    pub fn attach(&mut self) -> GroupSize {
        self.attached = true;
        self.evaluate()
    }

    /// Group size for the current width, or `None` once detached.
    pub fn measure(&mut self) -> Option<GroupSize> {
        self.attached.then(|| self.evaluate())
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    fn evaluate(&mut self) -> GroupSize {
        let width = self.probe.width();
        self.last_width = Some(width);
        let size = self.policy.group_size_for(width);
        debug!(width, group_size = size.get(), "viewport evaluated");
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselKey;
    use std::sync::Mutex;

    fn quotes() -> CarouselController<u8> {
        CarouselController::try_new(
            CarouselKey::Testimonials,
            vec![1, 2, 3, 4],
            1,
            6_000,
        )
        .unwrap()
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let policy = GroupingPolicy::default();
        assert_eq!(policy.group_size_for(767).get(), 1);
        assert_eq!(policy.group_size_for(768).get(), 2);
        assert_eq!(policy.group_size_for(1440).get(), 2);
    }

    #[test]
    fn invalid_policy_is_rejected() {
        assert!(GroupingPolicy::new(0, 1, 2).is_err());
        assert!(GroupingPolicy::new(768, 0, 2).is_err());
        assert!(GroupingPolicy::new(768, 1, 0).is_err());
    }

    #[test]
    fn mount_evaluates_immediately() {
        let mut probe = MockViewportProbe::new();
        probe.expect_width().times(1).return_const(1024u32);

        let mut carousel = quotes();
        let mut grouping =
            ResponsiveGrouping::new(GroupingPolicy::default(), probe);
        grouping.mount(&mut carousel);

        assert!(grouping.is_attached());
        assert_eq!(carousel.group_size().get(), 2);
        assert_eq!(carousel.page_count(), 2);
    }

    #[test]
    fn every_resize_is_evaluated() {
        let widths = Mutex::new(vec![1280u32, 700, 1024].into_iter());
        let mut probe = MockViewportProbe::new();
        probe
            .expect_width()
            .times(3)
            .returning(move || widths.lock().unwrap().next().unwrap_or(0));

        let mut carousel = quotes();
        let mut grouping =
            ResponsiveGrouping::new(GroupingPolicy::default(), probe);
        grouping.mount(&mut carousel);
        carousel.go_to(1).unwrap();

        grouping.on_resize(&mut carousel);
        assert_eq!(carousel.group_size().get(), 1);
        assert_eq!(carousel.current_index(), 1);

        carousel.go_to(3).unwrap();
        let change = grouping.on_resize(&mut carousel).unwrap();
        assert_eq!(change.to, 1);
        assert_eq!(grouping.last_width(), Some(1024));
    }

    #[test]
    fn detached_observer_ignores_resizes() {
        let viewport = SharedViewport::new(500);
        let mut carousel = quotes();
        let mut grouping = ResponsiveGrouping::new(
            GroupingPolicy::default(),
            viewport.clone(),
        );
        grouping.mount(&mut carousel);
        grouping.detach();

        viewport.set(1200);
        assert_eq!(grouping.on_resize(&mut carousel), None);
        assert_eq!(carousel.group_size().get(), 1);
    }

    #[test]
    fn resize_before_mount_is_ignored() {
        let mut carousel = quotes();
        let mut grouping = ResponsiveGrouping::new(
            GroupingPolicy::default(),
            FixedViewport(2000),
        );
        assert_eq!(grouping.on_resize(&mut carousel), None);
        assert_eq!(carousel.group_size().get(), 1);
    }

    #[test]
    fn watch_probe_reads_latest_width() {
        let (widths, rx) = watch::channel(600u32);
        let mut grouping =
            ResponsiveGrouping::new(GroupingPolicy::default(), rx);
        assert_eq!(grouping.attach(), GroupSize::ONE);

        widths.send_replace(1280);
        assert_eq!(grouping.measure(), Some(GroupSize::PAIR));
        assert_eq!(grouping.last_width(), Some(1280));

        grouping.detach();
        widths.send_replace(400);
        assert_eq!(grouping.measure(), None);
        assert_eq!(grouping.last_width(), Some(1280));
    }
}
