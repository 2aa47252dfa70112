//! Alternate calling conventions over [`NameService::get_name`].
//!
//! Each adapter is a mechanical conversion layer; resolution logic lives in
//! the service alone.

use crate::error::Result;
use crate::service::NameService;
use futures::Stream;
use futures::stream;
use std::sync::Arc;

impl NameService {
    /// Callback-style variant of [`get_name`](NameService::get_name).
    ///
    /// The callback receives exactly the result `get_name` would return,
    /// from a detached task.
    ///
    /// # Panics
    ///
    /// Must be called within a tokio runtime.
    pub fn get_name_with<F>(self: &Arc<Self>, callback: F)
    where
        F: FnOnce(Result<String>) + Send + 'static,
    {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            callback(service.get_name().await);
        });
    }

    /// Single-value stream variant of [`get_name`](NameService::get_name).
    ///
    /// Yields one `Result` and completes; error semantics are identical to
    /// the direct call.
    pub fn name_stream(self: &Arc<Self>) -> impl Stream<Item = Result<String>> + use<> {
        let service = Arc::clone(self);
        stream::once(async move { service.get_name().await })
    }
}
