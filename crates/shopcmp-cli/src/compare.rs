//! One-shot comparison of products given by id.

use shopcmp_core::{Language, ProductId};
use shopcmp_queue::{QueueError, QueueManager};

use crate::render;

/// Queue every id, then submit one comparison and print the markdown answer.
///
/// Repeated ids are skipped with a warning rather than aborting the run.
///
/// # Errors
///
/// Returns an error if a product cannot be fetched, the queue overflows, fewer
/// than two distinct products remain, or the compare request fails.
pub(crate) async fn run_compare(
    manager: &QueueManager,
    ids: Vec<ProductId>,
    language: Language,
) -> anyhow::Result<()> {
    for id in ids {
        match manager.add_by_id(id).await {
            Ok(()) => {}
            Err(QueueError::Duplicate { id }) => {
                tracing::warn!(%id, "skipping repeated product id");
            }
            Err(e) => return Err(e.into()),
        }
    }

    print!("{}", render::QueueView(&manager.snapshot()));
    println!("Comparing in {language}...\n");

    let result = manager.compare(language).await?;
    println!("{}", result.as_str());
    Ok(())
}
