// ============================================================================
// Order Business Rule Errors
// ============================================================================
//
// Closed set: callers branch on the kind (unavailable vs not-found) rather
// than merely propagate, so these are returned, never panicked.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Item {item_name} is not available")]
    UnavailableItem { item_name: String },

    #[error("Order {id} not found")]
    OrderNotFound { id: String },
}
