//! Pure queue state: no I/O, no async.
//!
//! Invariants held by [`ComparisonQueue`]:
//! - entries keep insertion order;
//! - no two entries share a [`ProductId`];
//! - `len() <= capacity()`;
//! - `current_page()` is always in `1..=max(1, total_pages())`.

use shopcmp_core::{Product, ProductId, SpecificationGroup};

use crate::error::QueueError;

/// A comparison needs at least this many products.
pub const MIN_COMPARE_ITEMS: usize = 2;

/// A queued product together with its resolved specification groups.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    pub product: Product,
    pub specifications: Vec<SpecificationGroup>,
}

impl QueueEntry {
    #[must_use]
    pub fn new(product: Product, specifications: Vec<SpecificationGroup>) -> Self {
        Self {
            product,
            specifications,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }
}

/// 1-based page cursor over a list of `page_size`-sized pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    current_page: usize,
    page_size: usize,
}

impl PaginationWindow {
    /// A `page_size` of 0 is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`; 0 for an empty list.
    #[must_use]
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    fn last_page(&self, len: usize) -> usize {
        self.total_pages(len).max(1)
    }

    /// Pulls the current page back inside `1..=max(1, total_pages(len))`.
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.current_page.clamp(1, self.last_page(len));
    }

    pub fn next(&mut self, len: usize) {
        self.current_page = (self.current_page + 1).min(self.last_page(len));
    }

    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Index range of the current page within a list of `len` items.
    #[must_use]
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }
}

/// Bounded, deduplicated, insertion-ordered list of products to compare.
#[derive(Debug, Clone)]
pub struct ComparisonQueue {
    entries: Vec<QueueEntry>,
    capacity: usize,
    window: PaginationWindow,
}

impl ComparisonQueue {
    #[must_use]
    pub fn new(capacity: usize, page_size: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            window: PaginationWindow::new(page_size),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.window.current_page()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.window.total_pages(self.entries.len())
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.window.page_size()
    }

    /// Entries on the current page.
    #[must_use]
    pub fn visible(&self) -> &[QueueEntry] {
        &self.entries[self.window.range(self.entries.len())]
    }

    /// Whether `id` could be added right now.
    ///
    /// # Errors
    ///
    /// - [`QueueError::Duplicate`] if `id` is already queued (checked first).
    /// - [`QueueError::Full`] if the queue is at capacity.
    pub fn check_can_add(&self, id: &ProductId) -> Result<(), QueueError> {
        if self.contains(id) {
            return Err(QueueError::Duplicate { id: id.clone() });
        }
        if self.entries.len() >= self.capacity {
            return Err(QueueError::Full {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Appends `entry` after re-checking both invariants.
    ///
    /// # Errors
    ///
    /// Same as [`ComparisonQueue::check_can_add`]; the queue is unchanged on error.
    pub fn push(&mut self, entry: QueueEntry) -> Result<(), QueueError> {
        self.check_can_add(entry.id())?;
        self.entries.push(entry);
        Ok(())
    }

    /// Removes the entry with `id`. Returns `false` (and changes nothing) if
    /// it was not queued.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        let removed = self.entries.len() != before;
        if removed {
            self.window.clamp(self.entries.len());
        }
        removed
    }

    pub fn next_page(&mut self) {
        self.window.next(self.entries.len());
    }

    pub fn prev_page(&mut self) {
        self.window.prev();
    }
}

#[cfg(test)]
#[path = "queue_test.rs"]
mod tests;
