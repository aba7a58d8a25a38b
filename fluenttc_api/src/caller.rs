//! The HTTP capability the retrievers are written against.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::Error;

/// Performs verbs against server-relative paths such as `/app/rest/builds`.
///
/// Implementations own the connection details (host, scheme, authentication)
/// and surface every failure unchanged; nothing at this layer retries.
pub trait Caller: Send + Sync {
    /// Issues a GET and returns the raw success body.
    fn get_text(&self, path: &str) -> impl Future<Output = Result<String, Error>> + Send;

    /// Issues a PUT with the given body and content type.
    fn put(
        &self,
        body: &str,
        content_type: &str,
        path: &str,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Issues a DELETE.
    fn delete(&self, path: &str) -> impl Future<Output = Result<(), Error>> + Send;

    /// Issues a GET and deserializes the JSON body into `T`.
    fn get<T>(&self, path: &str) -> impl Future<Output = Result<T, Error>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move {
            let body = self.get_text(path).await?;
            serde_json::from_str::<T>(&body).map_err(|e| {
                tracing::error!("Failed to parse response from {}: {}", path, e);
                Error::InvalidResponse
            })
        }
    }
}
