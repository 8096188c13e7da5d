use thiserror::Error;

use crate::{QueryResult, ReturnElements, StoreQuery};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Unreachable(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("store request timed out")]
    Timeout,

    #[error("internal store error: {0}")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn internal<T>(value: T) -> Self
    where
        T: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        StoreError::Internal(value.into())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::internal(value)
    }
}

/// The request/response surface of the external well data store.
///
/// Implementations own transport, authentication, timeouts and the wire
/// encoding of [`StoreQuery`]. A store-side rejection of a mutation is
/// reported through [`QueryResult::is_successful`]; anything that prevents an
/// answer is a [`StoreError`].
#[trait_variant::make(Send)]
pub trait StoreClient: Send + Sync {
    /// Returns every stored entity matching any element of the template,
    /// possibly none.
    async fn fetch(
        &self,
        query: StoreQuery,
        options: ReturnElements,
    ) -> Result<StoreQuery, StoreError>;

    async fn add(&self, query: StoreQuery) -> Result<QueryResult, StoreError>;

    async fn update(&self, query: StoreQuery) -> Result<QueryResult, StoreError>;

    async fn delete(&self, query: StoreQuery) -> Result<QueryResult, StoreError>;
}

/// Supplies the client configured for the current execution context.
pub trait StoreClientProvider: Send + Sync {
    type Client: StoreClient;

    fn client(&self) -> Self::Client;
}

/// Hands out clones of one pre-configured client.
#[derive(Debug, Clone)]
pub struct StaticProvider<C>(C);

impl<C> StaticProvider<C> {
    pub fn new(client: C) -> Self {
        Self(client)
    }

    pub fn inner(&self) -> &C {
        &self.0
    }
}

impl<C> StoreClientProvider for StaticProvider<C>
where
    C: StoreClient + Clone,
{
    type Client = C;

    fn client(&self) -> Self::Client {
        self.0.clone()
    }
}
