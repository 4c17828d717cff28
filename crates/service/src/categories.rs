//! Category lookups shared by several endpoints.

use std::collections::BTreeMap;

use crate::errors::ServiceError;
use crate::store::TriviaStore;

/// Id-to-label mapping in ascending id order. Empty is fine here; callers
/// that embed the mapping in a larger payload want it regardless.
pub async fn mapping(store: &dyn TriviaStore) -> Result<BTreeMap<i32, String>, ServiceError> {
    let rows = store.list_categories().await?;
    Ok(rows.into_iter().map(|c| (c.id, c.kind)).collect())
}

/// The category listing surface. An empty table reads as NotFound.
///
/// # Examples
/// ```
/// use service::store::{mock::MemoryStore, TriviaStore};
/// let store = MemoryStore::default();
/// tokio_test::block_on(store.insert_category("Science")).unwrap();
/// let map = tokio_test::block_on(service::categories::listing(&store)).unwrap();
/// assert_eq!(map.get(&1).map(String::as_str), Some("Science"));
/// ```
pub async fn listing(store: &dyn TriviaStore) -> Result<BTreeMap<i32, String>, ServiceError> {
    let map = mapping(store).await?;
    if map.is_empty() {
        return Err(ServiceError::not_found("categories"));
    }
    Ok(map)
}
