//! Async orchestration over [`ComparisonQueue`]: lazy specification fetch on
//! add, and the single-flight compare request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopcmp_client::ShopClient;
use shopcmp_core::{AppConfig, ComparisonResult, Language, Product, ProductId};

use crate::error::QueueError;
use crate::prompt::build_prompt;
use crate::queue::{ComparisonQueue, QueueEntry, MIN_COMPARE_ITEMS};

/// Owns the comparison queue and drives the compare workflow.
///
/// Methods take `&self` so the manager can be shared; the queue lock is never
/// held across a request, and invariants are re-checked when a fetched entry
/// is appended.
pub struct QueueManager {
    client: Arc<ShopClient>,
    queue: Mutex<ComparisonQueue>,
    comparing: AtomicBool,
    last_result: Mutex<Option<ComparisonResult>>,
}

impl QueueManager {
    #[must_use]
    pub fn new(client: Arc<ShopClient>, capacity: usize, page_size: usize) -> Self {
        Self {
            client,
            queue: Mutex::new(ComparisonQueue::new(capacity, page_size)),
            comparing: AtomicBool::new(false),
            last_result: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn from_app_config(client: Arc<ShopClient>, config: &AppConfig) -> Self {
        Self::new(client, config.queue_capacity, config.page_size)
    }

    fn queue(&self) -> MutexGuard<'_, ComparisonQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn stored_result(&self) -> MutexGuard<'_, Option<ComparisonResult>> {
        self.last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current queue state, for display.
    #[must_use]
    pub fn snapshot(&self) -> ComparisonQueue {
        self.queue().clone()
    }

    /// Adds a search result, fetching its specifications first.
    ///
    /// # Errors
    ///
    /// - [`QueueError::Duplicate`] / [`QueueError::Full`] before any request.
    /// - [`QueueError::Client`] if the detail fetch fails; the queue is unchanged.
    pub async fn add(&self, product: Product) -> Result<(), QueueError> {
        self.queue().check_can_add(&product.id)?;
        let detail = self.client.product_detail(&product.id).await?;
        self.append(QueueEntry::new(product, detail.specifications))
    }

    /// Adds a product known only by id; name and price come from its detail record.
    ///
    /// # Errors
    ///
    /// Same as [`QueueManager::add`].
    pub async fn add_by_id(&self, id: ProductId) -> Result<(), QueueError> {
        self.queue().check_can_add(&id)?;
        let detail = self.client.product_detail(&id).await?;
        let specifications = detail.specifications.clone();
        self.append(QueueEntry::new(detail.into_product(id), specifications))
    }

    fn append(&self, entry: QueueEntry) -> Result<(), QueueError> {
        let mut queue = self.queue();
        let id = entry.id().clone();
        queue.push(entry)?;
        tracing::debug!(product_id = %id, len = queue.len(), "added product to comparison queue");
        Ok(())
    }

    /// Removes `id` if queued. Returns whether anything was removed.
    pub fn remove(&self, id: &ProductId) -> bool {
        let mut queue = self.queue();
        let removed = queue.remove(id);
        if removed {
            tracing::debug!(
                product_id = %id,
                len = queue.len(),
                page = queue.current_page(),
                "removed product from comparison queue"
            );
        }
        removed
    }

    pub fn next_page(&self) {
        self.queue().next_page();
    }

    pub fn prev_page(&self) {
        self.queue().prev_page();
    }

    /// Whether a compare request is outstanding.
    #[must_use]
    pub fn is_comparing(&self) -> bool {
        self.comparing.load(Ordering::Acquire)
    }

    /// The most recent successful comparison, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<ComparisonResult> {
        self.stored_result().clone()
    }

    /// Builds the prompt from the queued products and submits it.
    ///
    /// At most one compare runs at a time; a call made while another is
    /// outstanding is rejected, not queued. On failure the previous result is
    /// kept.
    ///
    /// # Errors
    ///
    /// - [`QueueError::CompareInFlight`] if a compare is already running.
    /// - [`QueueError::InsufficientItems`] with fewer than two products; no request is made.
    /// - [`QueueError::Client`] if the request fails after retries.
    pub async fn compare(&self, language: Language) -> Result<ComparisonResult, QueueError> {
        let _in_flight = InFlight::acquire(&self.comparing).ok_or(QueueError::CompareInFlight)?;

        let (prompt, count) = {
            let queue = self.queue();
            if queue.len() < MIN_COMPARE_ITEMS {
                return Err(QueueError::InsufficientItems {
                    count: queue.len(),
                    required: MIN_COMPARE_ITEMS,
                });
            }
            (build_prompt(queue.entries(), language), queue.len())
        };

        tracing::info!(products = count, %language, prompt_len = prompt.len(), "submitting comparison");
        let result = self.client.compare(&prompt).await?;
        tracing::info!(result_len = result.comparison.len(), "comparison received");

        *self.stored_result() = Some(result.clone());
        Ok(result)
    }
}

/// Holds the in-flight flag; clears it on drop, including when the compare
/// future is cancelled.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
