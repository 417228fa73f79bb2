use crate::core::{Executor, Paginated};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;

/// Upper bound on pages fetched by [`collect_pages`].
pub const MAX_PAGES: usize = 1000;

/// Follows `start` offsets until the service returns an empty page.
pub async fn collect_pages<E, R, T>(executor: &E, request: R) -> Result<Vec<T>>
where
    E: Executor + ?Sized,
    R: Paginated<Response = Vec<T>> + 'static,
    T: DeserializeOwned + Send + 'static,
{
    let mut items = Vec::new();
    let mut page_request = request;

    for page in 0..MAX_PAGES {
        let page_items = executor.execute(&page_request).await?;
        if page_items.is_empty() {
            tracing::debug!("📄 Collected {} items in {} pages", items.len(), page);
            return Ok(items);
        }

        let next_start = page_request.start() + page_items.len();
        items.extend(page_items);
        page_request = page_request.with_start(next_start);
    }

    tracing::warn!(
        "📄 Stopped after {} pages with {} items; more may be available",
        MAX_PAGES,
        items.len()
    );
    Ok(items)
}
