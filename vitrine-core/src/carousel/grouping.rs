use std::num::NonZeroUsize;
use std::ops::Range;

use crate::error::{CarouselError, Result};

/// Number of consecutive items shown together on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupSize(NonZeroUsize);

impl GroupSize {
    pub const ONE: GroupSize = GroupSize(NonZeroUsize::MIN);
    pub const PAIR: GroupSize = GroupSize(NonZeroUsize::MIN.saturating_add(1));

    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size).map(GroupSize).ok_or_else(|| {
            CarouselError::InvalidConfiguration(
                "group size must be at least 1".into(),
            )
        })
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        GroupSize::ONE
    }
}

impl TryFrom<usize> for GroupSize {
    type Error = CarouselError;

    fn try_from(size: usize) -> Result<Self> {
        GroupSize::new(size)
    }
}

/// Cached partition of an item list into pages.
///
/// Rebuilt only when the item count or group size changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    item_count: usize,
    group_size: GroupSize,
    pages: Vec<Range<usize>>,
}

impl PageLayout {
    pub fn new(item_count: usize, group_size: GroupSize) -> Self {
        let size = group_size.get();
        let pages = (0..item_count)
            .step_by(size)
            .map(|start| start..(start + size).min(item_count))
            .collect();
        Self {
            item_count,
            group_size,
            pages,
        }
    }

    /// Rebuild for a new group size. Returns false when nothing changed.
    pub fn regroup(&mut self, group_size: GroupSize) -> bool {
        if group_size == self.group_size {
            return false;
        }
        *self = PageLayout::new(self.item_count, group_size);
        true
    }

    /// `ceil(item_count / group_size)`
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn group_size(&self) -> GroupSize {
        self.group_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Item range of `page`, empty when the page does not exist.
    pub fn page_range(&self, page: usize) -> Range<usize> {
        self.pages.get(page).cloned().unwrap_or(0..0)
    }

    pub fn pages(&self) -> impl ExactSizeIterator<Item = Range<usize>> + '_ {
        self.pages.iter().cloned()
    }
}
